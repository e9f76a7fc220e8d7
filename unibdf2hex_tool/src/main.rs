use anyhow::*;
use clap::Parser;
use log::debug;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
    result::Result::Ok,
};
use unibdf2hex::TranscodeConfig;

/// Converts a BDF font into a Unifont .hex file.
///
/// Reads the font from standard input and writes one `CODEPOINT:HEXDATA` line per CJK, Hangul or
/// Basic Multilingual Plane glyph to standard output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reads the font from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Writes the .hex lines to a file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Loads settings from a .toml file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fails on malformed fields or glyphs cut short by the end of the input
    #[arg(long)]
    strict: bool,
    /// Overrides the descent used to place glyphs in the cell
    #[arg(long, allow_hyphen_values = true)]
    descent: Option<i64>,
    /// Overrides the cell width used when the font header has no DWIDTH
    #[arg(long)]
    width: Option<u32>,
    /// Overrides the cell height used when the font header has no FONTBOUNDINGBOX
    #[arg(long)]
    height: Option<u32>,
}
impl Cli {
    fn transcode_config(&self) -> Result<TranscodeConfig> {
        let mut config = match &self.config {
            Some(path) => TranscodeConfig::load(path)?,
            None => TranscodeConfig::default(),
        };
        if self.strict {
            config.strict = true;
        }
        if let Some(descent) = self.descent {
            config.descent = descent;
        }
        if let Some(width) = self.width {
            config.default_width = width;
        }
        if let Some(height) = self.height {
            config.default_height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = cli.transcode_config()?;
    debug!("Configuration: {config:?}");

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Could not create '{}'", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let summary = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open '{}'", path.display()))?;
            unibdf2hex::transcode(BufReader::new(file), output, &config)?
        }
        None => unibdf2hex::transcode(io::stdin().lock(), output, &config)?,
    };
    summary.print_statistics();

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
