use anyhow::Result;
use clap::Parser;
use colored::*;
use open_pr::github::{self, PullRequestRequest};

#[derive(Parser)]
#[command(name = "open-pr")]
#[command(about = "Open the issue #19 pull request on GitHub")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();

    // Tokens may come from a .env file; variables already set take precedence
    dotenvy::dotenv().ok();

    let client = match github::create_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            eprintln!("{}", e.hint());
            std::process::exit(e.exit_code());
        }
    };

    let request = PullRequestRequest::preset();
    let outcome = github::create_pull_request(&client, &request).await;

    // Failures are reported on stdout and still exit 0
    println!("{outcome}");

    Ok(())
}
