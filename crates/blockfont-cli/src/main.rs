use std::path::PathBuf;

use anyhow::{anyhow, Result};
use blockfont::{render_str, FixedColumns, FontLoader, FontRegistry, SttyProbe, TerminalProbe};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::console::Console;
mod console;

#[derive(Parser)]
#[command(name = "blockfont", version, about = "Print text as block-letter banners")]
struct Cli {
    /// Text to render; a literal `\n` starts a new line
    text: String,
    /// Font name [default: the registry's default font]
    font: Option<String>,
    /// Directory containing the font files
    #[arg(long, default_value = ".")]
    font_dir: PathBuf,
    /// TOML file listing trusted fonts, replacing the built-in list
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Terminal width to check against instead of querying the terminal
    #[arg(long)]
    columns: Option<usize>,
    /// When a banner counts as too wide
    #[arg(long, value_enum, default_value_t = WidthArg::AtWidth)]
    width_policy: WidthArg,
    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum WidthArg {
    /// Reject banners as wide as the terminal or wider
    AtWidth,
    /// Reject only banners wider than the terminal
    PastWidth,
}

impl From<WidthArg> for blockfont::WidthPolicy {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::AtWidth => blockfont::WidthPolicy::AtWidth,
            WidthArg::PastWidth => blockfont::WidthPolicy::PastWidth,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.text.is_empty() {
        return Ok(());
    }

    let registry = match &cli.registry {
        Some(path) => FontRegistry::load(path)?,
        None => FontRegistry::builtin(),
    };
    let loader = FontLoader::new(&cli.font_dir, registry);
    let table = loader.load(cli.font.as_deref()).map_err(|e| {
        tracing::info!(error = %e, "font rejected");
        if e.is_font_error() {
            anyhow!("invalid font")
        } else {
            e.into()
        }
    })?;

    let banner = render_str(&table, &cli.text);
    tracing::info!(width = banner.width(), glyphs = table.len(), "rendered banner");

    let probe: Box<dyn TerminalProbe> = match cli.columns {
        Some(columns) => Box::new(FixedColumns(columns)),
        None => Box::new(SttyProbe),
    };
    Console::new(std::io::stdout().lock(), cli.width_policy.into()).emit(&*probe, &banner)
}
