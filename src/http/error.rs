//! HTTP error reporting for admin API responses

use super::common::ErrorResponse;

/// Transport failures terminate the process: there is no status or body to
/// report, and nothing to retry.
pub fn connection_failure(e: reqwest::Error) -> ! {
    eprintln!("Failed to connect to server: {e}");
    std::process::exit(1);
}

pub(crate) fn report_body_read_failure(status: reqwest::StatusCode, body_error: &reqwest::Error) {
    println!("Server error: {status} (failed to read response body: {body_error})");
}

pub async fn handle_error_response(response: reqwest::Response, operation: &str) {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error_response) => match error_response.msg {
                Some(msg) => {
                    println!("Failed to {}: {} ({})", operation, error_response.error, msg);
                }
                None => println!("Failed to {}: {}", operation, error_response.error),
            },
            Err(parse_error) => {
                println!("Server error: {status} (failed to parse error response: {parse_error})");
                if !body.is_empty() {
                    println!("   Raw response: {}", body.trim());
                }
            }
        },
        Err(body_error) => report_body_read_failure(status, &body_error),
    }
}
