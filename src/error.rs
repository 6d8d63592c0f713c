use thiserror::Error;

/// Errors that can occur while processing an admission review
///
/// Both kinds are fatal for the invocation: no response bytes are produced
/// and the caller is expected to fail the admission request at the transport
/// layer rather than silently allow it.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or structurally incompatible input, at either the envelope
    /// or the embedded-object layer
    #[error("DecodeError: {0}")]
    Decode(#[source] serde_json::Error),

    /// Failure while serializing an already-valid in-memory structure
    #[error("EncodeError: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for webhook operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
