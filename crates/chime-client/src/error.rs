use thiserror::Error;

/// Errors raised while fetching and decoding API responses.
///
/// Normalization itself cannot fail; everything here happens before a
/// transfer object exists.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport could not produce a response body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The body was not valid JSON for the expected transfer object.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with `success: false`.
    #[error("API error: {message}")]
    Api { message: String },

    /// The envelope reported success but carried no `data`.
    #[error("Response carried no data")]
    MissingData,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
