//! Pages CLI interface implementation

use super::client::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PageCommands {
    /// List pages
    List {
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Add a new page
    Add {
        title: String,
        content: String,
        link: String,
    },
    /// Update an existing page
    Update {
        id: i64,
        title: String,
        content: String,
        link: String,
    },
    /// Delete a page by link
    Delete {
        link: String,
    },
}

pub async fn handle_page_command(
    client: &reqwest::Client,
    base_url: &str,
    page_cmd: PageCommands,
) {
    match page_cmd {
        PageCommands::List { offset, limit } => {
            list_pages_command(client, base_url, offset, limit).await;
        }
        PageCommands::Add {
            title,
            content,
            link,
        } => {
            add_page_command(client, base_url, title, content, link).await;
        }
        PageCommands::Update {
            id,
            title,
            content,
            link,
        } => {
            update_page_command(client, base_url, id, title, content, link).await;
        }
        PageCommands::Delete { link } => {
            delete_page_command(client, base_url, link).await;
        }
    }
}
