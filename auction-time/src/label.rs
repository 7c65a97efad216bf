use {
    crate::status::AuctionStatus,
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

/// The field on the auction record that a time label refers to.
#[derive(AsRefStr, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub enum TimeField {
    /// When bidding opened.
    #[strum(serialize = "actualStartTime")]
    ActualStartTime,
    /// Seconds left until the auction concludes.
    #[strum(serialize = "remainSeconds")]
    RemainSeconds,
    /// When bidding closed.
    #[strum(serialize = "actualEndTime")]
    ActualEndTime,
}

impl TimeField {
    /// The localized display label paired with this field.
    pub fn label(&self) -> &'static str {
        match self {
            TimeField::ActualStartTime => "开拍时间",
            TimeField::RemainSeconds => "倒计时",
            TimeField::ActualEndTime => "截拍时间",
        }
    }
}

/// The display label resolved for an auction status.
#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone, PartialEq, Debug)]
pub struct TimeLabel {
    /// The field on the auction record the UI should render.
    #[schema(example = "actualStartTime")]
    pub key:   TimeField,
    /// The localized display label for that field.
    #[schema(example = "开拍时间")]
    pub value: String,
}

impl From<AuctionStatus> for TimeLabel {
    fn from(status: AuctionStatus) -> Self {
        let key = match status {
            AuctionStatus::NotStarted => TimeField::ActualStartTime,
            AuctionStatus::Active => TimeField::RemainSeconds,
            AuctionStatus::Finished => TimeField::ActualEndTime,
        };
        TimeLabel {
            key,
            value: key.label().to_string(),
        }
    }
}

/// Resolves the time field and localized label for a raw auction status code.
///
/// Returns `None` when the code is outside the known set. The `_is_leave`
/// flag is accepted for caller compatibility and never consulted.
pub fn auction_time(status: &str, _is_leave: bool) -> Option<TimeLabel> {
    AuctionStatus::from_code(status).map(|status| status.time_label())
}
