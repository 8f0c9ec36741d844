use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use wrapdemo::arith::NativeWidth;
use wrapdemo::config::Config;
use wrapdemo::demo::Demo;
use wrapdemo::output::{self, Format};

#[derive(Parser)]
#[command(
    name = "wrapdemo",
    about = "Print fixed-width integer wraparound results: overflow, bit clear, underflow"
)]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Native unsigned width in bits: 32 or 64
    #[arg(long, value_parser = parse_native_width)]
    native_width: Option<NativeWidth>,

    /// Output format override
    #[arg(long, value_enum)]
    format: Option<Format>,
}

fn parse_native_width(s: &str) -> std::result::Result<NativeWidth, String> {
    let bits: u32 = s.parse().map_err(|e| format!("{s:?} is not a bit count: {e}"))?;
    NativeWidth::try_from(bits)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wrapdemo=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.native_width, cli.format);

    let demo = Demo::with_width(config.demo.native_width);
    info!(native_width = %demo.width(), format = ?config.output.format, "running demo");
    let report = demo.run();

    let stdout = std::io::stdout();
    output::write_report(&mut stdout.lock(), &report, config.output.format)?;
    Ok(())
}
