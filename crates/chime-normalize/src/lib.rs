//! # chime-normalize
//!
//! Converts loosely-typed transfer objects received from the Chime HTTP API
//! into the strict entities defined in `chime-shared`.
//!
//! The layer is pure and total: it performs no I/O, holds no state, and
//! never returns an error.  Missing, null, or oddly-typed fields resolve to
//! documented defaults instead:
//!
//! - boolean-like fields go through [`coerce_bool`]
//! - enum fields use the total `from_token` parsers on the shared enums
//! - ISO-8601 timestamps go through [`parse_timestamp`], which falls back to
//!   the current time (logged and counted, see [`diagnostics`])
//!
//! ```ignore
//! use chime_normalize::{Normalizer, UserDto};
//!
//! let dto: UserDto = serde_json::from_str(body)?;
//! let user = Normalizer::new().normalize(&dto);
//! ```

pub mod clock;
pub mod coerce;
pub mod diagnostics;
pub mod dto;
pub mod mapper;
pub mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use coerce::{coerce_bool, FlagValue};
pub use dto::*;
pub use mapper::{Normalizer, ToDomain};
pub use timestamp::{parse_timestamp, parse_timestamp_with};
