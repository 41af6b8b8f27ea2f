//! Block accumulator.
//!
//! The accumulator owns the buffering decision: special lines pile up in
//! `pending` until a normal line, a fence boundary, or end-of-stream
//! forces a flush; normal lines go straight to the sink. Fenced code is
//! the one stateful case: between an opening and closing ``` delimiter,
//! every line is collected verbatim regardless of what it looks like.
//!
//! One accumulator serves exactly one stream. The code-fence toggle is a
//! field here, not process-wide state, so independent streams never
//! interfere.

use smallvec::SmallVec;

use crate::classify::{classify, Category};
use crate::error::RenderError;
use crate::render::RenderSink;

/// Streaming block accumulator.
///
/// States: idle (`pending` empty, outside any fence), buffering a
/// special block (`pending` non-empty), or inside an open code fence
/// (`in_code_block` true, `pending` holds the fence content including
/// the opening delimiter).
#[derive(Debug, Default)]
pub struct BlockAccumulator {
    /// Lines of the block being collected, each with its terminator.
    pending: SmallVec<[String; 8]>,
    /// True strictly between an opening and a matching closing fence.
    in_code_block: bool,
}

impl BlockAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the accumulator is currently inside an open code fence.
    #[inline]
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    /// Feed one line (with its terminator) through the state machine.
    ///
    /// Sink failures propagate unchanged; the accumulator's own state is
    /// updated before the sink is called, so it stays consistent even
    /// when a flush fails.
    pub fn push_line<S: RenderSink>(
        &mut self,
        line: &str,
        sink: &mut S,
    ) -> Result<(), RenderError> {
        let category = classify(line);

        // Fence delimiters toggle the code-block state and force block
        // boundaries on both sides.
        if category == Category::CodeFenceDelimiter {
            if self.in_code_block {
                self.pending.push(line.to_string());
                self.in_code_block = false;
                return self.flush(sink);
            }
            self.flush(sink)?;
            self.pending.push(line.to_string());
            self.in_code_block = true;
            return Ok(());
        }

        // Inside a fence, everything is content, whatever it looks like.
        if self.in_code_block {
            self.pending.push(line.to_string());
            return Ok(());
        }

        if category.is_special() {
            self.pending.push(line.to_string());
            return Ok(());
        }

        // Normal line: close out any special block first, then emit the
        // line on its own. Blank lines bypass markup rendering entirely.
        self.flush(sink)?;
        if category == Category::Blank {
            sink.render_bare_newline()
        } else {
            sink.render_block(line)
        }
    }

    /// Final flush at end-of-stream.
    ///
    /// Also covers an unterminated code fence: its collected content is
    /// flushed as a block even though no closing delimiter was seen.
    pub fn finish<S: RenderSink>(&mut self, sink: &mut S) -> Result<(), RenderError> {
        self.in_code_block = false;
        self.flush(sink)
    }

    /// Render and clear the pending buffer.
    ///
    /// The buffer is cleared before the sink call: a failed flush must
    /// not leave the lines queued for a second attempt. Blocks that are
    /// empty after trimming are dropped without a sink call.
    fn flush<S: RenderSink>(&mut self, sink: &mut S) -> Result<(), RenderError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let block: String = self.pending.concat();
        self.pending.clear();
        if block.trim().is_empty() {
            return Ok(());
        }
        sink.render_block(&block)
    }
}
