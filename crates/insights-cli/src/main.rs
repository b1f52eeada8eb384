//! promptql-insights - role-aware PromptQL usage ideas for email addresses.

use clap::Parser;
use colored::Colorize;
use insights_cli::{context, report, Cli, Result, Settings};
use insights_engine::Analyzer;
use insights_llm::OpenAiClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", format!("✗ {}", e).red());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    // Fatal before any email is processed
    let role_context = match &cli.context_file {
        Some(path) => Some(context::load_role_context(path)?),
        None => None,
    };

    let client = OpenAiClient::new(&settings.base_url, &settings.api_key, &settings.model);
    let analyzer = Analyzer::new(client);

    let records = analyzer.analyze(&cli.emails, role_context.as_ref()).await;
    let failed = records.iter().filter(|r| r.is_failure()).count();

    let path = report::write_report(&records, cli.output_format, &cli.output_file)?;

    println!(
        "{}",
        format!(
            "✓ Analyzed {} email(s), results saved to {}",
            records.len(),
            path.display()
        )
        .green()
    );
    if failed > 0 {
        // Per-email failures are recorded in the output, not fatal
        println!(
            "{}",
            format!("⚠ {} email(s) failed, see the error entries in the output", failed).yellow()
        );
    }

    Ok(())
}
