//! User lookup over the fetch port.

use crate::ports::fetch::Fetch;

/// Fetches `{base_url}/users/{id}` and describes the outcome in one line.
///
/// Never fails: HTTP errors, transport errors and body errors all become
/// part of the returned text.
pub async fn get_user_by_id(fetch: &dyn Fetch, base_url: &str, id: &str) -> String {
    let url = format!("{}/users/{id}", base_url.trim_end_matches('/'));
    let mut response = match fetch.fetch(url.into(), None).await {
        Ok(response) => response,
        Err(err) => return format!("Error: {err}"),
    };
    if !response.ok() {
        return format!("User was not found. Status is {}", response.status());
    }
    match response.text().await {
        Ok(name) => format!("User {name}"),
        Err(err) => format!("Error: {err}"),
    }
}
