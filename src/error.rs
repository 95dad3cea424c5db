use thiserror::Error;

/// Error handling during template decoding and minutiae record parsing.
#[derive(Error, Debug)]
pub enum RidgelineError {
    /// An error occurred while decoding a base64 template payload.
    ///
    /// This variant is used when the textual encoding of a template cannot
    /// be turned back into raw bytes. The associated string provides
    /// additional context about the error.
    #[error("Decode error: {0}")]
    Decode(String),

    /// An error occurred while parsing a minutiae record buffer.
    ///
    /// This variant is used when the raw bytes do not form a well-formed
    /// template header. A record stream that merely ends early is NOT a
    /// parse error; it yields a truncated minutiae set instead.
    #[error("Parse error: {0}")]
    Parse(String),
}
