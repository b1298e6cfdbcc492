//! Request builders and CLI command handlers for the posts endpoints

use crate::http::common::*;
use crate::http::error::{connection_failure, handle_error_response};
use log::debug;

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

pub async fn list_posts(
    client: &reqwest::Client,
    base_url: &str,
    offset: Option<u32>,
    limit: Option<u32>,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut url = format!("{base_url}/posts");
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

pub async fn get_post(
    client: &reqwest::Client,
    base_url: &str,
    id: i64,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/posts/{id}");
    debug!("GET {url}");
    client.get(&url).send().await
}

pub async fn add_post(
    client: &reqwest::Client,
    base_url: &str,
    request: &AddPostRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/posts");
    debug!("POST {url}");
    client.post(&url).json(request).send().await
}

pub async fn update_post(
    client: &reqwest::Client,
    base_url: &str,
    request: &ChangePostRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/posts");
    debug!("PUT {url}");
    client.put(&url).json(request).send().await
}

/// One DELETE with body `{"id": "<id>"}`. No retry, no dedup: calling this
/// twice with the same id issues two independent requests.
pub async fn delete_post(
    client: &reqwest::Client,
    base_url: &str,
    request: &DeletePostRequest,
) -> Result<reqwest::Response, reqwest::Error> {
    let url = format!("{base_url}/posts");
    debug!("DELETE {url}");
    client.delete(&url).json(request).send().await
}

// =============================================================================
// CLI COMMAND HANDLERS
// =============================================================================

pub async fn list_posts_command(
    client: &reqwest::Client,
    base_url: &str,
    offset: Option<u32>,
    limit: Option<u32>,
) {
    match list_posts(client, base_url, offset, limit).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<GetPostsResponse>().await {
                    Ok(posts_response) => {
                        println!("Got {} posts", posts_response.posts.len());
                        for post in posts_response.posts {
                            print_post(&post);
                        }
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, "list posts").await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn get_post_command(client: &reqwest::Client, base_url: &str, id: i64) {
    match get_post(client, base_url, id).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<Post>().await {
                    Ok(post) => {
                        println!("[{}] {}", post.id, post.title);
                        println!("Excerpt: {}", post.excerpt);
                        println!("{}", post.content);
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, &format!("get post {id}")).await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn add_post_command(
    client: &reqwest::Client,
    base_url: &str,
    title: String,
    excerpt: String,
    content: String,
) {
    let request = AddPostRequest {
        title,
        excerpt,
        content,
    };

    match add_post(client, base_url, &request).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<PostIdResponse>().await {
                    Ok(post_response) => {
                        println!("Added post '{}' with id: {}", request.title, post_response.id);
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, &format!("add post '{}'", request.title)).await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn update_post_command(
    client: &reqwest::Client,
    base_url: &str,
    id: i64,
    title: String,
    excerpt: String,
    content: String,
) {
    let request = ChangePostRequest {
        id,
        title,
        excerpt,
        content,
    };

    match update_post(client, base_url, &request).await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<PostIdResponse>().await {
                    Ok(post_response) => println!("Updated post with id: {}", post_response.id),
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                handle_error_response(response, &format!("update post {id}")).await;
            }
        }
        Err(e) => connection_failure(e),
    }
}

pub async fn delete_post_command(client: &reqwest::Client, base_url: &str, id: String) {
    let request = DeletePostRequest { id };

    // Echo the payload exactly as it goes over the wire, then report the
    // server's answer without interpreting the status code.
    println!("{}", serde_json::json!({ "id": &request.id }));

    match delete_post(client, base_url, &request).await {
        Ok(response) => print_outcome(response).await,
        Err(e) => connection_failure(e),
    }
}
