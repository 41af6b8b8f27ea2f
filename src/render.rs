//! Render sinks.
//!
//! The core hands finished text to a [`RenderSink`] and never looks at
//! the output again. [`TermSink`] is the terminal implementation, built
//! on `termimad`; [`MemorySink`] records calls for embedders that want
//! to capture output (and for tests).

use std::io::{self, Write};

use termimad::MadSkin;

use crate::error::RenderError;

/// Destination for classified output.
///
/// Implementations may perform arbitrary output side effects. Errors are
/// returned to the accumulator, which propagates them without catching.
pub trait RenderSink {
    /// Render a markup block (multi-line or a single normal line).
    fn render_block(&mut self, text: &str) -> Result<(), RenderError>;

    /// Emit exactly one line break with no markup interpretation.
    fn render_bare_newline(&mut self) -> Result<(), RenderError>;
}

/// Terminal sink: styles each block through a `termimad` skin and writes
/// it to the underlying writer, flushing per block so output appears as
/// soon as a block completes.
pub struct TermSink<W: Write> {
    out: W,
    skin: MadSkin,
    width: usize,
}

impl TermSink<io::Stdout> {
    /// A sink writing styled output to stdout at the detected terminal
    /// width.
    pub fn stdout() -> Self {
        let (cols, _) = termimad::terminal_size();
        Self::new(io::stdout(), make_skin(), cols as usize)
    }
}

impl<W: Write> TermSink<W> {
    /// Create a sink with an explicit skin and wrap width.
    pub fn new(out: W, skin: MadSkin, width: usize) -> Self {
        Self { out, skin, width }
    }
}

impl<W: Write> RenderSink for TermSink<W> {
    fn render_block(&mut self, text: &str) -> Result<(), RenderError> {
        let styled = self.skin.text(text, Some(self.width));
        write!(self.out, "{styled}").map_err(RenderError::from)?;
        self.out.flush().map_err(RenderError::from)
    }

    fn render_bare_newline(&mut self) -> Result<(), RenderError> {
        writeln!(self.out).map_err(RenderError::from)?;
        self.out.flush().map_err(RenderError::from)
    }
}

/// Build the default dark skin for terminal output.
pub fn make_skin() -> MadSkin {
    use termimad::crossterm::style::Color;

    let mut skin = MadSkin::default_dark();
    skin.headers[0].set_fg(Color::White);
    skin.headers[1].set_fg(Color::White);
    skin.bold.set_fg(Color::White);
    skin.italic.set_fg(Color::AnsiValue(248));
    skin.inline_code.set_fg(Color::Cyan);
    skin.code_block.set_fg(Color::Cyan);
    skin
}

/// Build a style-free skin for `--no-color` or non-terminal output.
pub fn plain_skin() -> MadSkin {
    MadSkin::no_style()
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A `render_block` call with the exact text it received.
    Block(String),
    /// A `render_bare_newline` call.
    BareNewline,
}

/// A sink that records every call instead of producing output.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Consume the sink, returning the recorded calls.
    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }
}

impl RenderSink for MemorySink {
    fn render_block(&mut self, text: &str) -> Result<(), RenderError> {
        self.events.push(SinkEvent::Block(text.to_string()));
        Ok(())
    }

    fn render_bare_newline(&mut self) -> Result<(), RenderError> {
        self.events.push(SinkEvent::BareNewline);
        Ok(())
    }
}
