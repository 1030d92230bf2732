/// Application name
pub const APP_NAME: &str = "Chime";

/// Default number of records requested from paged list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the backend honours
pub const MAX_PAGE_SIZE: u32 = 100;

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "chime_client=debug,chime_normalize=info,warn";

/// Directory holding recorded API responses for the replay tool
pub const DEFAULT_REPLAY_DIR: &str = "./fixtures";

/// Message reported when a failed response carries no message of its own
pub const DEFAULT_API_FAILURE_MESSAGE: &str = "request failed";
