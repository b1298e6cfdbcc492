//! Combined CLI interface for the GoCMS admin API client

use crate::http::{
    images::cli::{ImageCommands, handle_image_command},
    pages::cli::{PageCommands, handle_page_command},
    posts::cli::{PostCommands, handle_post_command},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gocms-client")]
#[command(about = "GoCMS Admin API Client")]
#[command(version)]
pub struct Cli {
    /// Admin API host
    #[arg(long, default_value = "localhost")]
    pub host: String,
    /// Admin API port
    #[arg(short, long, default_value = "8081")]
    pub port: u16,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    Posts(PostCommands),
    #[command(subcommand)]
    Pages(PageCommands),
    #[command(subcommand)]
    Images(ImageCommands),
}

pub async fn handle_cli_command(client: &reqwest::Client, base_url: &str, command: Commands) {
    match command {
        Commands::Posts(post_cmd) => {
            handle_post_command(client, base_url, post_cmd).await;
        }
        Commands::Pages(page_cmd) => {
            handle_page_command(client, base_url, page_cmd).await;
        }
        Commands::Images(image_cmd) => {
            handle_image_command(client, base_url, image_cmd).await;
        }
    }
}
