#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use crate::shared::types::{LoginDto, Reading, PLACEHOLDER_TOKEN};

// Whole request capped at 5s: a slower backend counts as disconnected.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client")
});

pub fn base_url() -> String {
    env::var("SENSOR_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// A `/readings` body is either a single sample or a history array; in the
/// array case the displayed sample is the last element.
pub fn normalize_readings(body: serde_json::Value) -> Reading {
    let sample = match body {
        serde_json::Value::Array(items) => items.into_iter().next_back().unwrap_or_default(),
        other => other,
    };
    serde_json::from_value(sample).unwrap_or_default()
}

pub async fn fetch_latest() -> Result<Reading> {
    let url = format!("{}/readings", base_url());
    let res = match CLIENT
        .get(&url)
        .header("Cache-Control", "no-store")
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[sensor] request error on GET {}: {}", url, e);
            if e.is_timeout() {
                eprintln!("[sensor] hint: request timed out (client timeout 5s)");
            }
            if e.is_connect() {
                eprintln!(
                    "[sensor] hint: connection failed (DNS/route/refused). Check SENSOR_URL and that the backend is up"
                );
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        eprintln!("[sensor] request failed: status={} body=\n{}", status, text);
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snip
        )
    })?;
    Ok(normalize_readings(body))
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Ask the backend for a token; fall back to the fixed placeholder when it
/// is unreachable or says no. Login never fails from the caller's side.
pub async fn login(username: &str, password: &str) -> LoginDto {
    match request_token(username, password).await {
        Ok(token) => LoginDto {
            token,
            display_name: username.to_string(),
        },
        Err(e) => {
            eprintln!("[login] backend login unavailable ({e}); issuing placeholder token");
            LoginDto {
                token: PLACEHOLDER_TOKEN.to_string(),
                display_name: username.to_string(),
            }
        }
    }
}

async fn request_token(username: &str, password: &str) -> Result<String> {
    let url = format!("{}/login", base_url());
    let body = serde_json::json!({
        "username": username,
        "password": password,
    });
    let res = CLIENT
        .post(&url)
        .json(&body)
        .send()
        .await
        .with_context(|| format!("sending POST {}", url))?;
    if !res.status().is_success() {
        return Err(anyhow!("POST {} failed with status {}", url, res.status()));
    }
    let tok: TokenResponse = res
        .json()
        .await
        .with_context(|| format!("decoding login response from {}", url))?;
    Ok(tok.token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_body_yields_the_last_element() {
        let body = json!([
            {"pm10": 10.0, "co2": 400.0},
            {"pm10": 42.0, "pm25": 10.0},
        ]);
        let r = normalize_readings(body);
        assert_eq!(r.pm10, Some(42.0));
        assert_eq!(r.pm25, Some(10.0));
        assert_eq!(r.co2, None);
    }

    #[test]
    fn object_body_is_taken_verbatim() {
        let body = json!({
            "pm10": 35.2,
            "pm25": 12.8,
            "co2": 450,
            "humidity": 65.5,
            "temperature": 24.3,
        });
        let r = normalize_readings(body);
        assert_eq!(r.pm10, Some(35.2));
        assert_eq!(r.pm25, Some(12.8));
        assert_eq!(r.co2, Some(450.0));
        assert_eq!(r.humidity, Some(65.5));
        assert_eq!(r.temperature, Some(24.3));
    }

    #[test]
    fn empty_array_yields_an_empty_reading() {
        assert_eq!(normalize_readings(json!([])), Reading::default());
    }

    #[test]
    fn unshaped_body_degrades_to_an_empty_reading() {
        assert_eq!(normalize_readings(json!("ok")), Reading::default());
        assert_eq!(normalize_readings(json!(null)), Reading::default());
    }

    #[test]
    fn sensor_url_defaults_to_the_local_backend() {
        if env::var("SENSOR_URL").is_err() {
            assert_eq!(base_url(), "http://localhost:5000");
        }
    }
}
