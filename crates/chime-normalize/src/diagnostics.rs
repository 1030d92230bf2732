//! Counters that make silent degradation visible.
//!
//! Recorded through the `metrics` facade; the library installs no recorder,
//! so these are no-ops unless the host application sets one up.

use metrics::counter;

/// Timestamps replaced by the current time because they were missing or
/// could not be parsed, labelled by entity and reason.
pub const TIMESTAMP_FALLBACKS_TOTAL: &str = "chime_normalize_timestamp_fallbacks_total";

/// Records passed through the normalizer, labelled by entity.
pub const RECORDS_TOTAL: &str = "chime_normalize_records_total";

/// Entity label for timestamps parsed outside any mapper.
pub const UNATTRIBUTED: &str = "unattributed";

/// Why a timestamp was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FallbackReason {
    Missing,
    Malformed,
}

impl FallbackReason {
    fn as_label(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Malformed => "malformed",
        }
    }
}

pub(crate) fn record_timestamp_fallback(entity: &'static str, reason: FallbackReason) {
    counter!(
        TIMESTAMP_FALLBACKS_TOTAL,
        "entity" => entity,
        "reason" => reason.as_label()
    )
    .increment(1);
}

pub(crate) fn record_normalized(entity: &'static str) {
    counter!(RECORDS_TOTAL, "entity" => entity).increment(1);
}


#[cfg(test)]
mod tests {
    use super::testing::{capture_counters, labels};
    use super::*;

    #[test]
    fn test_fallback_counter_carries_entity_and_reason() {
        let counted = capture_counters(|| {
            record_timestamp_fallback("transaction", FallbackReason::Missing);
        });

        assert_eq!(
            counted,
            vec![(
                TIMESTAMP_FALLBACKS_TOTAL.to_string(),
                labels(&[("entity", "transaction"), ("reason", "missing")]),
                1
            )]
        );
    }
}
