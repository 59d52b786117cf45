use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use marrow_core::{Document, Extractor, ExtractorConfig, FetchConfig, fetch_stdin, fetch_url};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for extracted content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Html,
    Text,
    Json,
    Images,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "images" => Ok(Self::Images),
            _ => Err(format!("Invalid format: {}. Valid options: html, text, json, images", s)),
        }
    }
}

/// Extract the main article body from a news page
#[derive(Parser, Debug)]
#[command(name = "marrow")]
#[command(version = VERSION)]
#[command(about = "Extract the main article body from news pages", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Base URL for resolving relative image paths (defaults to INPUT
    /// when INPUT is a URL)
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (html, text, json, images)
    #[arg(short, long, default_value = "html", value_name = "FORMAT")]
    format: OutputFormat,

    /// Minimum cleaned-content length in characters
    #[arg(long, default_value = "500", value_name = "NUM")]
    min_length: usize,

    /// Minimum density score for content candidates
    #[arg(long, default_value = "100", value_name = "NUM")]
    min_score: f64,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging and progress output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("marrow_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if args.verbose {
        echo::print_banner();
    }

    let is_url = args.input.starts_with("http://") || args.input.starts_with("https://");

    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if is_url {
        if args.verbose {
            echo::print_step(1, 3, &format!("Fetching {}", args.input.bright_white().underline()));
        }
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .clone()
                .unwrap_or_else(|| FetchConfig::default().user_agent),
        };
        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading {}", args.input.bright_white()));
        }
        fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
        echo::print_step(2, 3, "Extracting article body");
    }

    let base_url = match args.base_url.as_deref().or(if is_url { Some(args.input.as_str()) } else { None }) {
        Some(raw) => Some(Url::parse(raw).with_context(|| format!("Invalid base URL: {}", raw))?),
        None => None,
    };

    let config = ExtractorConfig::builder()
        .min_content_length(args.min_length)
        .min_candidate_score(args.min_score)
        .build();
    let extractor = Extractor::with_config(config);

    let doc = Document::parse(&html).context("Failed to parse HTML")?;
    let extraction = extractor
        .extract_from_document(&doc, base_url.as_ref())
        .context("No usable article body found")?;

    if args.verbose {
        echo::print_extraction_details(&extraction);
        echo::print_step(3, 3, "Writing output");
    }

    let output = match args.format {
        OutputFormat::Html => extraction.content.clone(),
        OutputFormat::Text => {
            let cleaned = Document::parse(&extraction.content).context("Failed to parse extracted HTML")?;
            cleaned.text_content()
        }
        OutputFormat::Json => serde_json::to_string_pretty(&extraction).context("Failed to serialize extraction")?,
        OutputFormat::Images => extraction.images.join("\n"),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
