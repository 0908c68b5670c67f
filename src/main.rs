//! dcrtc - decrout compiler CLI

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use decrout::frontend::config::ConfigAdapter;
use decrout::util::config::{load_user_config, UserConfig};
use decrout::util::logger::{self, LogLevel};
use decrout::util::span::SourceFile;
use decrout::{CompileConfig, Compiler, OutputFormat, OutputStage, NAME, VERSION};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Compile a decrout source file up to the lexing or parsing stage
#[derive(Parser, Debug)]
#[command(name = "dcrtc")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Stage to stop after: 0 = tokens, 1 = declarations
    #[arg(short, long, value_name = "STAGE", value_parser = clap::value_parser!(u8).range(0..=1))]
    stage: Option<u8>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI flags override the user config, which overrides defaults
fn resolve_config(
    args: &Args,
    user: &UserConfig,
) -> CompileConfig {
    let mut config = user.adapt();
    if let Some(stage) = args.stage.and_then(OutputStage::from_index) {
        config = config.with_stage(stage);
    }
    if let Some(format) = args.format {
        config = config.with_format(format.into());
    }
    if let Some(output) = &args.output {
        config = config.with_output(output.clone());
    }
    config
}

fn main() -> Result<()> {
    let args = Args::parse();
    let user = load_user_config().context("Failed to load user config")?;

    match (args.verbose, user.log.level) {
        (true, _) => logger::init_with_level(LogLevel::Debug),
        (false, Some(level)) => logger::init_with_level(level),
        (false, None) => logger::init(),
    }

    let config = resolve_config(&args, &user);
    tracing::debug!("{} {}: stage {}, format {}", NAME, VERSION, config.stage, config.format);

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read file: {}", args.input.display()))?;

    let output = match Compiler::with_config(config.clone()).compile(&source) {
        Ok(output) => output,
        Err(e) => {
            let file = SourceFile::new(args.input.display().to_string(), source);
            if let Some(excerpt) = file.excerpt(e.position()) {
                eprintln!("{}", excerpt);
            }
            return Err(e).with_context(|| format!("Failed to compile: {}", args.input.display()));
        }
    };

    match &config.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            output
                .write(&mut out, config.format)
                .and_then(|()| out.flush())
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
        }
        None => {
            let mut out = io::stdout().lock();
            output
                .write(&mut out, config.format)
                .context("Failed to write output")?;
        }
    }

    Ok(())
}
