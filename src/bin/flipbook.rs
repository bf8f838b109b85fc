use std::path::PathBuf;

use clap::Parser;

/// Assemble the PPM frames of a directory into one animated GIF.
#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    /// Directory to scan for frames (non-recursive).
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Output GIF path (overwritten if it exists).
    #[arg(long, default_value = "output.gif")]
    out: PathBuf,

    /// Per-frame display duration in seconds.
    #[arg(long, default_value_t = 0.2)]
    duration: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let stats = flipbook::assemble(&cli.dir, &cli.out, cli.duration)?;

    eprintln!(
        "wrote {} ({} frames, {}x{})",
        cli.out.display(),
        stats.frames,
        stats.width,
        stats.height
    );
    Ok(())
}
