//! Images CLI interface implementation

use super::client::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ImageCommands {
    /// Delete an uploaded image by file name
    Delete { name: String },
}

pub async fn handle_image_command(
    client: &reqwest::Client,
    base_url: &str,
    image_cmd: ImageCommands,
) {
    match image_cmd {
        ImageCommands::Delete { name } => {
            delete_image_command(client, base_url, name).await;
        }
    }
}
