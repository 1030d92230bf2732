use serde::{Deserialize, Serialize};

// Every enum here is parsed from an upstream string token with a total
// function: matching is ASCII case-insensitive, the first table entry that
// matches wins, and anything else resolves to the enum's default member.

fn match_token<T: Copy>(raw: Option<&str>, table: &[(&str, T)], default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    table
        .iter()
        .find(|(token, _)| raw.eq_ignore_ascii_case(token))
        .map(|(_, value)| *value)
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    const TOKENS: &'static [(&'static str, Self)] =
        &[("MALE", Self::Male), ("FEMALE", Self::Female)];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

/// Preferred conversation language advertised on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Bengali,
    Marathi,
}

impl Language {
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("ENGLISH", Self::English),
        ("HINDI", Self::Hindi),
        ("TAMIL", Self::Tamil),
        ("TELUGU", Self::Telugu),
        ("KANNADA", Self::Kannada),
        ("MALAYALAM", Self::Malayalam),
        ("BENGALI", Self::Bengali),
        ("MARATHI", Self::Marathi),
    ];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::English => "ENGLISH",
            Self::Hindi => "HINDI",
            Self::Tamil => "TAMIL",
            Self::Telugu => "TELUGU",
            Self::Kannada => "KANNADA",
            Self::Malayalam => "MALAYALAM",
            Self::Bengali => "BENGALI",
            Self::Marathi => "MARATHI",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallType {
    #[default]
    Audio,
    Video,
}

impl CallType {
    const TOKENS: &'static [(&'static str, Self)] =
        &[("AUDIO", Self::Audio), ("VIDEO", Self::Video)];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
        }
    }
}

/// Lifecycle state of a call as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallStatus {
    #[default]
    Pending,
    Connecting,
    Ongoing,
    Ended,
    Missed,
    Rejected,
    Cancelled,
}

impl CallStatus {
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("PENDING", Self::Pending),
        ("CONNECTING", Self::Connecting),
        ("ONGOING", Self::Ongoing),
        ("ENDED", Self::Ended),
        ("MISSED", Self::Missed),
        ("REJECTED", Self::Rejected),
        ("CANCELLED", Self::Cancelled),
    ];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Connecting => "CONNECTING",
            Self::Ongoing => "ONGOING",
            Self::Ended => "ENDED",
            Self::Missed => "MISSED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Kind of wallet movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Purchase,
    Call,
    Gift,
    Withdrawal,
    Bonus,
}

impl TransactionType {
    // The wallet ledger labels per-minute call charges CALL_SPENT.
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("PURCHASE", Self::Purchase),
        ("CALL", Self::Call),
        ("CALL_SPENT", Self::Call),
        ("GIFT", Self::Gift),
        ("WITHDRAWAL", Self::Withdrawal),
        ("BONUS", Self::Bonus),
    ];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Purchase => "PURCHASE",
            Self::Call => "CALL",
            Self::Gift => "GIFT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Bonus => "BONUS",
        }
    }

    /// Human-readable label used when a transaction arrives without a title.
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Call => "Call",
            Self::Gift => "Gift",
            Self::Withdrawal => "Withdrawal",
            Self::Bonus => "Bonus",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("PENDING", Self::Pending),
        ("SUCCESS", Self::Success),
        ("FAILED", Self::Failed),
    ];

    pub fn from_token(raw: Option<&str>) -> Self {
        match_token(raw, Self::TOKENS, Self::default())
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_tokens_resolve_to_defaults() {
        assert_eq!(Gender::from_token(None), Gender::Male);
        assert_eq!(Language::from_token(None), Language::English);
        assert_eq!(CallType::from_token(None), CallType::Audio);
        assert_eq!(CallStatus::from_token(None), CallStatus::Pending);
        assert_eq!(TransactionType::from_token(None), TransactionType::Purchase);
        assert_eq!(TransactionStatus::from_token(None), TransactionStatus::Pending);
    }

    #[test]
    fn test_unrecognized_tokens_resolve_to_defaults() {
        assert_eq!(Gender::from_token(Some("other")), Gender::Male);
        assert_eq!(Language::from_token(Some("klingon")), Language::English);
        assert_eq!(CallType::from_token(Some("hologram")), CallType::Audio);
        assert_eq!(CallStatus::from_token(Some("")), CallStatus::Pending);
        assert_eq!(TransactionType::from_token(Some("REFUND")), TransactionType::Purchase);
        assert_eq!(TransactionStatus::from_token(Some("DONE")), TransactionStatus::Pending);
    }

    #[test]
    fn test_tokens_match_case_insensitively() {
        assert_eq!(Language::from_token(Some("hindi")), Language::Hindi);
        assert_eq!(Language::from_token(Some("MaLaYaLaM")), Language::Malayalam);
        assert_eq!(Gender::from_token(Some("female")), Gender::Female);
        assert_eq!(CallType::from_token(Some("Video")), CallType::Video);
        assert_eq!(CallStatus::from_token(Some("rejected")), CallStatus::Rejected);
        assert_eq!(TransactionStatus::from_token(Some("success")), TransactionStatus::Success);
    }

    #[test]
    fn test_call_spent_is_a_call() {
        assert_eq!(
            TransactionType::from_token(Some("CALL_SPENT")),
            TransactionType::from_token(Some("CALL"))
        );
        assert_eq!(TransactionType::from_token(Some("call_spent")), TransactionType::Call);
    }

    #[test]
    fn test_surrounding_whitespace_is_not_trimmed() {
        assert_eq!(CallStatus::from_token(Some(" ENDED")), CallStatus::Pending);
    }

    #[test]
    fn test_token_round_trip_through_display() {
        for status in [
            CallStatus::Pending,
            CallStatus::Connecting,
            CallStatus::Ongoing,
            CallStatus::Ended,
            CallStatus::Missed,
            CallStatus::Rejected,
            CallStatus::Cancelled,
        ] {
            assert_eq!(CallStatus::from_token(Some(status.to_string().as_str())), status);
        }
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(TransactionType::Withdrawal.default_title(), "Withdrawal");
        assert_eq!(TransactionType::from_token(Some("call_spent")).default_title(), "Call");
    }

    #[test]
    fn test_serialized_as_upper_case_token() {
        let json = serde_json::to_string(&TransactionType::Withdrawal).unwrap();
        assert_eq!(json, "\"WITHDRAWAL\"");
    }
}
