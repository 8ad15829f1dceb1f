use analyzer::{
    DEFAULT_ANALYZER_URL, DEFAULT_GEMINI_MODEL, GeminiClient, HttpTextAnalyzer, PhraseLexicon,
    analyze,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cbd-analyze")]
#[command(about = "Check a message for cyberbullying and suggest a kinder version", long_about = None)]
#[command(version)]
struct Cli {
    /// Message to analyze
    text: String,

    #[arg(long, env = "ANALYZER_URL", default_value = DEFAULT_ANALYZER_URL)]
    analyzer_url: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    gemini_model: String,

    #[arg(long, env = "TOXIC_WORDS_PATH")]
    lexicon: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cbd_analyze={},analyzer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let lexicon = match &cli.lexicon {
        Some(path) => PhraseLexicon::load(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
        None => PhraseLexicon::empty(),
    };
    tracing::debug!("Loaded {} custom phrases", lexicon.len());

    let gemini = cli
        .gemini_api_key
        .map(|key| GeminiClient::new(key, cli.gemini_model))
        .transpose()
        .context("Failed to create Gemini client")?;

    let analyzer = HttpTextAnalyzer::new(cli.analyzer_url, gemini)
        .context("Failed to create inference client")?;

    let analysis = analyze(&analyzer, &lexicon, &cli.text)
        .await
        .context("Analysis failed")?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
