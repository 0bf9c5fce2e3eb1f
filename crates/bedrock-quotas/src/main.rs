use std::io;

use anyhow::Context as _;
use bedrock_quotas::{QuotaContext, QuotaReporter, cli::Args, report};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("{:?}", args);

    let config = args.reporter_config();
    let context = QuotaContext::load(&config)
        .await
        .context("Unable to load AWS configuration")?;
    let reporter = QuotaReporter::new(context);

    let rows = reporter.run(&args.region_selector()).await?;

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &rows, !args.no_header)?;

    Ok(())
}
