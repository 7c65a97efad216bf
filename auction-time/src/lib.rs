pub mod label;
pub mod status;

pub use {
    label::{
        auction_time,
        TimeField,
        TimeLabel,
    },
    status::AuctionStatus,
};
