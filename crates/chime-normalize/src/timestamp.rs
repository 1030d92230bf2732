use chrono::DateTime;
use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{self, FallbackReason, UNATTRIBUTED};

/// Parse an ISO-8601 timestamp into epoch milliseconds using the system
/// clock for the fallback.  See [`parse_timestamp_with`].
pub fn parse_timestamp(raw: &str) -> i64 {
    parse_timestamp_with(raw, &SystemClock, UNATTRIBUTED)
}

/// Parse an ISO-8601 timestamp (`...Z` or `...+HH:MM`) into epoch
/// milliseconds.
///
/// Never fails.  Unparsable input yields `clock.now_millis()`, so the result
/// is not necessarily derived from `raw`; every such fallback is logged and
/// counted against `entity`.
pub fn parse_timestamp_with<C: Clock + ?Sized>(
    raw: &str,
    clock: &C,
    entity: &'static str,
) -> i64 {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.timestamp_millis(),
        Err(e) => {
            warn!(
                entity,
                input = %raw,
                error = %e,
                "Unparsable timestamp, substituting current time"
            );
            diagnostics::record_timestamp_fallback(entity, FallbackReason::Malformed);
            clock.now_millis()
        }
    }
}
