//! Request and response types for the GoCMS admin API

use serde::{Deserialize, Serialize};

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

pub fn print_post(post: &Post) {
    println!("[{}] {}: {}", post.id, post.title, post.excerpt);
}

pub fn print_page(page: &Page) {
    println!("[{}] {} ({})", page.id, page.title, page.link);
}

/// Print the outcome of a call without interpreting the status code. Delete
/// commands surface whatever the server said, success or not.
pub async fn print_outcome(response: reqwest::Response) {
    let status = response.status();
    match response.text().await {
        Ok(body) => {
            println!("Status code: {}", status.as_u16());
            println!("Response: {body}");
        }
        Err(body_error) => crate::http::error::report_body_read_failure(status, &body_error),
    }
}

// =============================================================================
// POSTS API TYPES
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetPostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize)]
pub struct AddPostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChangePostRequest {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// The id crosses the wire as a string, passed through exactly as supplied
/// on the command line. The server decides what it means.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeletePostRequest {
    pub id: String,
}

#[derive(Serialize, Deserialize)]
pub struct PostIdResponse {
    pub id: i64,
}

// =============================================================================
// PAGES API TYPES
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub link: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetPagesResponse {
    pub pages: Vec<Page>,
}

#[derive(Serialize, Deserialize)]
pub struct AddPageRequest {
    pub title: String,
    pub content: String,
    pub link: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChangePageRequest {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeletePageRequest {
    pub link: String,
}

#[derive(Serialize, Deserialize)]
pub struct PageResponse {
    pub id: i64,
    pub link: String,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error body the admin API returns for application-level failures.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}
