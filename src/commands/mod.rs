//! Backend Request Wrappers
//!
//! Frontend bindings to the REST API, organized by resource.

mod todo;
mod status;

use serde::de::DeserializeOwned;

use crate::models::ErrorBody;

pub use todo::*;
pub use status::*;

/// Absolute URL for an API path, rooted at the page origin
fn api_url(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window available")?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| format!("Could not read page origin: {:?}", e))?;
    Ok(format!("{}{}", origin, path))
}

/// Decode a success body, or turn an error response into its message
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Request failed with status {}", status)),
    }
}
