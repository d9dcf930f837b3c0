use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grammarcheck::cli::{read_input, ConfigOverrides};
use grammarcheck::{
    render, CheckMode, Checker, CheckerConfig, OutputFormat, SuggestionResponse, GENERIC_FAILURE,
};

/// Check text for spelling or grammar problems and show them inline.
#[derive(Parser)]
#[command(name = "grammarcheck", version)]
struct Args {
    /// Text to check (reads --file or stdin when omitted)
    text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// spelling or grammar (defaults to the configured mode)
    #[arg(long, short)]
    mode: Option<CheckMode>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Annotate with a saved backend response instead of calling the backend
    #[arg(long)]
    suggestions: Option<PathBuf>,

    #[arg(long)]
    backend_url: Option<String>,
    #[arg(long)]
    provider: Option<String>,
    #[arg(long)]
    model: Option<String>,
    /// API key forwarded to the backend
    #[arg(long)]
    key: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<CheckerConfig> {
    let mut config = match &args.config {
        Some(path) => CheckerConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CheckerConfig::default(),
    };
    config.apply_env();

    let overrides = ConfigOverrides {
        backend_url: args.backend_url.clone(),
        provider: args.provider.clone(),
        model: args.model.clone(),
        key: args.key.clone(),
        no_color: args.no_color || !io::stdout().is_terminal(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

fn read_text(args: &Args) -> Result<String> {
    read_input(args.text.as_deref(), args.file.as_deref(), io::stdin()).with_context(|| {
        match &args.file {
            Some(path) => format!("failed to read {}", path.display()),
            None => "failed to read text from stdin".to_string(),
        }
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let mode = args.mode.unwrap_or(config.base.default_mode);
    let text = read_text(&args)?;

    let checker = Checker::new(config).context("failed to create backend client")?;

    let segments = match &args.suggestions {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let response = SuggestionResponse::from_json(&body)
                .with_context(|| format!("invalid suggestions in {}", path.display()))?;
            checker.annotate_offline(&text, &response, mode)
        }
        None => match checker.check(&text, mode) {
            Ok(segments) => segments,
            Err(e) => {
                tracing::error!("{}", e);
                anyhow::bail!(GENERIC_FAILURE);
            }
        },
    };

    // a single-shot CLI never starts a competing check
    let segments = segments.unwrap_or_else(|| checker.session().latest());

    let output = render(&segments, args.format, checker.config().color)
        .context("failed to render segments")?;
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}
