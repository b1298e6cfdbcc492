//! Request builders and CLI command handlers for the pages endpoints

use crate::http::common::*;
use crate::http::error::{connection_failure, handle_error_response};
use log::debug;

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

pub async fn list_pages(
    client: &reqwest::Client,
    base_url: &str,
    offset: Option<u32>,
    limit: Option<u32>,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut url = format!("{base_url}/pages");
    let mut query_params = Vec::new();

    if let Some(o) = offset {
        query_params.push(format!("offset={o}"));
    }
    if let Some(l) = limit {
        query_params.push(format!("limit={l}"));
    }

    if !query_params.is_empty() {
        url.push_str(&format!("?{}", query_params.join("&")));
    }

    debug!("GET {url}");
    client.get(&url).send().await
}

pub async fn add_page(
    client: &reqwest::Client,
    base_url: &str,
    request: &AddPageRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/pages");
    debug!("POST {url}");
    client.post(&url).json(request).send().await
}

pub async fn update_page(
    client: &reqwest::Client,
    base_url: &str,
    request: &ChangePageRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/pages");
    debug!("PUT {url}");
    client.put(&url).json(request).send().await
}

/// Pages are addressed by link, not id. Same raw DELETE surface as posts.
pub async fn delete_page(
    client: &reqwest::Client,
    base_url: &str,
    request: &DeletePageRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/pages");
    debug!("DELETE {url}");
    client.delete(&url).json(request).send().await
}

// =============================================================================
// CLI COMMAND HANDLERS
// =============================================================================

pub async fn list_pages_command(
    client: &reqwest::Client,
    base_url: &str,
    offset: Option<u32>,
    limit: Option<u32>,
) {
    match list_pages(client, base_url, offset, limit).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<GetPagesResponse>().await {
                    Ok(pages_response) => {
                        println!("Got {} pages", pages_response.pages.len());
                        for page in pages_response.pages {
                            print_page(&page);
                        }
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, "list pages").await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn add_page_command(
    client: &reqwest::Client,
    base_url: &str,
    title: String,
    content: String,
    link: String,
) {
    let request = AddPageRequest {
        title,
        content,
        link,
    };

    match add_page(client, base_url, &request).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<PageResponse>().await {
                    Ok(page_response) => {
                        println!(
                            "Added page '{}' with id: {}",
                            page_response.link, page_response.id
                        );
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, &format!("add page '{}'", request.link)).await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn update_page_command(
    client: &reqwest::Client,
    base_url: &str,
    id: i64,
    title: String,
    content: String,
    link: String,
) {
    let request = ChangePageRequest {
        id,
        title,
        content,
        link,
    };

    match update_page(client, base_url, &request).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<PageResponse>().await {
                    Ok(page_response) => {
                        println!(
                            "Updated page '{}' with id: {}",
                            page_response.link, page_response.id
                        );
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, &format!("update page '{}'", request.link)).await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn delete_page_command(client: &reqwest::Client, base_url: &str, link: String) {
    let request = DeletePageRequest { link };

    println!("{}", serde_json::json!({ "link": &request.link }));

    match delete_page(client, base_url, &request).await {
        Ok(response) => print_outcome(response).await,
        Err(e) => connection_failure(e),
    }
}
