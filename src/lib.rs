//! markpipe: streaming Markdown renderer for the terminal.
//!
//! Reads a text stream line by line and renders it incrementally:
//! normal lines (including headings) are rendered the moment they
//! arrive, while "special" blocks that only make sense as a unit
//! (fenced code, lists, tables, blockquotes, horizontal rules) are
//! buffered until they end and rendered in one piece.
//!
//! # Design Principles
//! - Line-local heuristics only: no lookahead, no backtracking
//! - One pass, strict input order, no internal concurrency
//! - Rendering is a pluggable sink; the core never touches the terminal
//!
//! # Example
//! ```
//! use markpipe::{render_stream, MemorySink, SinkEvent};
//!
//! let input = b"# Title\n\n- a\n- b\ndone\n";
//! let mut sink = MemorySink::new();
//! render_stream(&mut &input[..], &mut sink).unwrap();
//!
//! assert_eq!(sink.events()[0], SinkEvent::Block("# Title\n".into()));
//! assert_eq!(sink.events()[1], SinkEvent::BareNewline);
//! assert_eq!(sink.events()[2], SinkEvent::Block("- a\n- b\n".into()));
//! ```

pub mod accumulator;
pub mod classify;
pub mod error;
pub mod render;

// Re-export primary types
pub use accumulator::BlockAccumulator;
pub use classify::{classify, Category};
pub use error::{RenderError, StreamError};
pub use render::{make_skin, plain_skin, MemorySink, RenderSink, SinkEvent, TermSink};

use std::io::BufRead;

/// Drive a whole stream through the accumulator.
///
/// Reads lines with their terminators preserved, feeds each one to a
/// fresh [`BlockAccumulator`], and performs the final flush at
/// end-of-stream. Input read errors and sink failures both abort the
/// stream; buffered-but-unflushed content is dropped with them.
pub fn render_stream<R: BufRead, S: RenderSink>(
    reader: &mut R,
    sink: &mut S,
) -> Result<(), StreamError> {
    let mut acc = BlockAccumulator::new();
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line).map_err(StreamError::Read)?;
        if n == 0 {
            break;
        }
        acc.push_line(&line, sink)?;
    }
    acc.finish(sink)?;
    Ok(())
}
