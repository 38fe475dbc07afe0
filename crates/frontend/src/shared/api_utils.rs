//! Helpers for talking to the backend over HTTP.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL of the backend: same host as the page, port 3000.
///
/// Empty string when there is no `window` (e.g. in native tests), so that
/// paths stay relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(failure_log(&text).unwrap_or_else(|| format!("HTTP {} for {}", response.status(), path)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(failure_log(&text).unwrap_or_else(|| format!("HTTP {}", response.status())));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(failure_log(&text).unwrap_or_else(|| format!("HTTP {}", response.status())));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(path: &str) -> Result<(), String> {
    let url = api_url(path);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Pull `log` out of a `{"status":"failed","log":...}` error body.
pub fn failure_log(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if value.get("status")?.as_str()? != "failed" {
        return None;
    }
    value.get("log")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_log() {
        assert_eq!(
            failure_log(r#"{"status":"failed","log":"Cannot be less than 15"}"#).as_deref(),
            Some("Cannot be less than 15")
        );
        assert_eq!(failure_log(r#"{"status":"ok"}"#), None);
        assert_eq!(failure_log("<html>"), None);
    }
}
