use anyhow::{Context, Result};
use blog_verify::{checks, cli::Cli, telemetry};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_json);

    let client = cli.client()?;
    info!(base_url = %client.base_url(), "verifying blog API");

    let mut stdout = std::io::stdout();
    checks::run_all(&client, &cli.checks(), &cli.query(), &mut stdout)
        .await
        .context("failed to write report")?;
    Ok(())
}
