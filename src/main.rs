//! markpipe CLI - streaming Markdown renderer for the terminal.
//!
//! Intended embedding:
//!
//! ```text
//! some-tool | markpipe
//! markpipe notes.md
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use markpipe::{make_skin, plain_skin, render_stream, TermSink};

#[derive(Parser)]
#[command(name = "markpipe", version, about = "Render streamed Markdown to the terminal")]
struct Cli {
    /// Input file; reads stdin when absent or "-".
    path: Option<PathBuf>,

    /// Wrap width; defaults to the detected terminal width.
    #[arg(long)]
    width: Option<usize>,

    /// Disable styling and colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let width = cli.width.unwrap_or_else(|| {
        let (cols, _) = termimad::terminal_size();
        cols as usize
    });
    let skin = if cli.no_color { plain_skin() } else { make_skin() };
    let mut sink = TermSink::new(io::stdout().lock(), skin, width);

    match cli.path.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut reader = BufReader::new(file);
            run(&mut reader, &mut sink)
        }
        _ => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            run(&mut reader, &mut sink)
        }
    }
}

fn run<R: BufRead>(reader: &mut R, sink: &mut TermSink<io::StdoutLock<'_>>) -> Result<()> {
    render_stream(reader, sink).context("rendering failed")
}
