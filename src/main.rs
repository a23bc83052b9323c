use clap::Parser;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textframe::{Document, FrameError, LayoutConfig, LineEnding, Render};

/// Renders JSON frame documents as fixed-width text.
#[derive(Parser, Debug)]
#[command(name = "textframe", version, about)]
struct Cli {
    /// Documents to render. Each file holds one document or an array of them.
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Write to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Terminate every line with CRLF regardless of platform.
    #[arg(long)]
    crlf: bool,
}

fn main() -> Result<(), FrameError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = LayoutConfig {
        line_ending: if cli.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Platform
        },
    };

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    for path in &cli.documents {
        log::info!("Rendering {}", path.display());
        let source = fs::read_to_string(path)?;
        for document in Document::load_all(&source)? {
            document.render()?.write_with(&mut *sink, &config)?;
        }
    }

    Ok(())
}
