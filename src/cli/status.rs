//! Check-job command - show the status of a landing job

use crate::cli::style::{Stream, Stylize, hyperlink_url};
use anstream::println;
use lando_cli::config::Config;
use lando_cli::error::Result;
use lando_cli::lando::{LandoApi, LandoClient};

/// Run the check-job command
pub async fn run_check_job(job_id: u64) -> Result<()> {
    let client = LandoClient::new(Config::load()?);
    let job = client.job_status(job_id).await?;

    let id = format!("#{}", job.id);
    let status = match job.status.as_str() {
        "LANDED" => job.status.success().to_string(),
        "FAILED" | "CANCELLED" => job.status.error().for_stdout().to_string(),
        _ => job.status.emphasis().to_string(),
    };
    println!("Job {} is {status}", id.accent());

    if let Some(created) = job.created_at {
        println!("  {}", format!("created {}", created.format("%Y-%m-%d %H:%M:%S UTC")).muted());
    }
    if let Some(error) = &job.error {
        println!("  {error}");
    }

    let url = format!("{}/api/job/{}", client.base_url(), job.id);
    println!("  {}", hyperlink_url(Stream::Stdout, &url));
    Ok(())
}
