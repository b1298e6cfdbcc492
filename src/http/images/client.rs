//! Request builders and CLI command handlers for the images endpoints

use crate::http::common::print_outcome;
use crate::http::error::connection_failure;
use log::debug;

/// Images are deleted by name in the path, with no request body.
pub async fn delete_image(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/images/{}", urlencoding::encode(name));
    debug!("DELETE {url}");
    client.delete(&url).send().await
}

pub async fn delete_image_command(client: &reqwest::Client, base_url: &str, name: String) {
    match delete_image(client, base_url, &name).await {
        Ok(response) => print_outcome(response).await,
        Err(e) => connection_failure(e),
    }
}
