//! Posts CLI interface implementation

use super::client::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PostCommands {
    /// List posts
    List {
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch a single post by id
    Get {
        id: i64,
    },
    /// Add a new post
    Add {
        title: String,
        excerpt: String,
        content: String,
    },
    /// Update an existing post
    Update {
        id: i64,
        title: String,
        excerpt: String,
        content: String,
    },
    /// Delete a post by id
    Delete {
        id: String,
    },
}

pub async fn handle_post_command(
    client: &reqwest::Client,
    base_url: &str,
    post_cmd: PostCommands,
) {
    match post_cmd {
        PostCommands::List { offset, limit } => {
            list_posts_command(client, base_url, offset, limit).await;
        }
        PostCommands::Get { id } => {
            get_post_command(client, base_url, id).await;
        }
        PostCommands::Add {
            title,
            excerpt,
            content,
        } => {
            add_post_command(client, base_url, title, excerpt, content).await;
        }
        PostCommands::Update {
            id,
            title,
            excerpt,
            content,
        } => {
            update_post_command(client, base_url, id, title, excerpt, content).await;
        }
        PostCommands::Delete { id } => {
            delete_post_command(client, base_url, id).await;
        }
    }
}
