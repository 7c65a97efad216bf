use {
    crate::label::TimeLabel,
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::ToSchema,
};

/// Auction lifecycle statuses, serialized as their single-character wire codes.
#[derive(AsRefStr, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuctionStatus {
    /// The auction is published but bidding has not opened yet.
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    NotStarted,
    /// The auction is live and accepting bids.
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    Active,
    /// The auction is concluded and no longer accepts bids.
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    Finished,
}

impl AuctionStatus {
    /// Parses a status code. Codes outside the known set are legal input with
    /// no mapping and yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(AuctionStatus::NotStarted),
            "A" => Some(AuctionStatus::Active),
            "F" => Some(AuctionStatus::Finished),
            _ => None,
        }
    }

    /// The time field and localized label the UI renders for this status.
    pub fn time_label(&self) -> TimeLabel {
        TimeLabel::from(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_code_covers_the_closed_set() {
        assert_eq!(
            AuctionStatus::from_code("N"),
            Some(AuctionStatus::NotStarted)
        );
        assert_eq!(AuctionStatus::from_code("A"), Some(AuctionStatus::Active));
        assert_eq!(AuctionStatus::from_code("F"), Some(AuctionStatus::Finished));
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(AuctionStatus::from_code(""), None);
        assert_eq!(AuctionStatus::from_code("X"), None);
        assert_eq!(AuctionStatus::from_code("n"), None);
        assert_eq!(AuctionStatus::from_code("NA"), None);
    }

    #[test]
    fn test_status_round_trips_as_wire_code() {
        for (status, code) in [
            (AuctionStatus::NotStarted, "\"N\""),
            (AuctionStatus::Active, "\"A\""),
            (AuctionStatus::Finished, "\"F\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), code);
            assert_eq!(
                serde_json::from_str::<AuctionStatus>(code).unwrap(),
                status
            );
            assert_eq!(AuctionStatus::from_code(status.as_ref()), Some(status));
        }
    }
}
