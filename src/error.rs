//! Error types.
//!
//! The classifier and accumulator are total and never fail; the only
//! failures in the pipeline come from the render sink (output writes)
//! and from reading the input stream. Both propagate uncaught to the
//! driver's caller.

use std::io;

use thiserror::Error;

/// A render sink failure, typically an output write error.
///
/// The core never catches, retries, or suppresses these. A flush that
/// fails still clears the pending buffer, so the accumulator stays
/// consistent for the caller to decide whether to continue the stream.
#[derive(Debug, Error)]
#[error("render sink write failed")]
pub struct RenderError(#[from] io::Error);

/// A driver-level failure while processing a stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading the input stream failed. Includes invalid UTF-8 on the
    /// input, surfaced by `read_line` as `io::ErrorKind::InvalidData`.
    #[error("failed to read input line")]
    Read(#[source] io::Error),
    /// The render sink failed while flushing a block or line.
    #[error(transparent)]
    Render(#[from] RenderError),
}
