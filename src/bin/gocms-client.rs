//! GoCMS admin API client binary

use clap::Parser;
use gocms_client::http::cli::{Cli, handle_cli_command};

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let base_url = format!("http://{}:{}", cli.host, cli.port);
    let client = reqwest::Client::new();
    handle_cli_command(&client, &base_url, cli.command).await;
}
