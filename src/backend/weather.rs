#![cfg(feature = "server")]
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use crate::shared::types::{WeatherOutcome, WeatherSnapshot};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client")
});

pub fn base_url() -> String {
    env::var("WEATHER_API_URL").unwrap_or_else(|_| "https://api.openweathermap.org".to_string())
}

// OpenWeatherMap "current weather" response, reduced to the fields shown on
// the dashboard.
#[derive(Debug, Deserialize)]
struct OwmResponse {
    #[serde(default)]
    main: Option<OwmMain>,
    #[serde(default)]
    wind: Option<OwmWind>,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    feels_like: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    #[serde(default)]
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

fn snapshot_from(raw: OwmResponse) -> WeatherSnapshot {
    let condition = raw.weather.into_iter().next();
    WeatherSnapshot {
        city: raw.name,
        temperature: raw.main.as_ref().and_then(|m| m.temp),
        feels_like: raw.main.as_ref().and_then(|m| m.feels_like),
        humidity: raw.main.as_ref().and_then(|m| m.humidity),
        wind: raw.wind.and_then(|w| w.speed),
        description: condition.as_ref().and_then(|c| c.description.clone()),
        icon: condition.and_then(|c| c.icon),
    }
}

// "City not found" only makes sense for a name lookup; a 404 on a
// coordinate lookup is just the service misbehaving.
fn classify_failure(status: u16, city_lookup: bool) -> WeatherOutcome {
    match status {
        401 => WeatherOutcome::InvalidKey,
        404 if city_lookup => WeatherOutcome::CityNotFound,
        s => WeatherOutcome::Unavailable(format!("Weather service error ({s})")),
    }
}

pub async fn by_city(city: &str, api_key: &str) -> WeatherOutcome {
    let mut outcome = fetch(&[("q", city)], api_key, true).await;
    // The service sometimes omits `name`; fall back to what was asked for.
    if let WeatherOutcome::Current(ref mut snap) = outcome {
        if snap.city.is_none() {
            snap.city = Some(city.to_string());
        }
    }
    outcome
}

pub async fn by_coords(lat: f64, lon: f64, api_key: &str) -> WeatherOutcome {
    let lat = lat.to_string();
    let lon = lon.to_string();
    fetch(&[("lat", lat.as_str()), ("lon", lon.as_str())], api_key, false).await
}

async fn fetch(params: &[(&str, &str)], api_key: &str, city_lookup: bool) -> WeatherOutcome {
    let url = format!("{}/data/2.5/weather", base_url());
    let res = match CLIENT
        .get(&url)
        .query(params)
        .query(&[("units", "metric"), ("appid", api_key)])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[weather] request error on GET {}: {}", url, e);
            return WeatherOutcome::Unavailable("Weather service unreachable".to_string());
        }
    };
    let status = res.status();
    if !status.is_success() {
        eprintln!("[weather] request failed: status={}", status);
        return classify_failure(status.as_u16(), city_lookup);
    }
    match res.json::<OwmResponse>().await {
        Ok(raw) => WeatherOutcome::Current(snapshot_from(raw)),
        Err(e) => {
            eprintln!("[weather] decoding response from GET {} failed: {}", url, e);
            WeatherOutcome::Unavailable("Weather response unreadable".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_is_its_own_outcome() {
        assert_eq!(classify_failure(401, true), WeatherOutcome::InvalidKey);
        assert_eq!(classify_failure(401, false), WeatherOutcome::InvalidKey);
    }

    #[test]
    fn not_found_only_applies_to_city_lookups() {
        assert_eq!(classify_failure(404, true), WeatherOutcome::CityNotFound);
        assert!(matches!(
            classify_failure(404, false),
            WeatherOutcome::Unavailable(_)
        ));
    }

    #[test]
    fn other_statuses_degrade_to_unavailable() {
        assert!(matches!(
            classify_failure(500, true),
            WeatherOutcome::Unavailable(_)
        ));
        assert!(matches!(
            classify_failure(429, false),
            WeatherOutcome::Unavailable(_)
        ));
    }

    #[test]
    fn snapshot_picks_the_dashboard_fields() {
        let raw: OwmResponse = serde_json::from_str(
            r#"{
                "name": "Jaipur",
                "main": {"temp": 28.4, "humidity": 65, "feels_like": 30.1, "pressure": 1006},
                "wind": {"speed": 3.6, "deg": 240},
                "weather": [{"main": "Haze", "description": "haze", "icon": "50d"}]
            }"#,
        )
        .unwrap();
        let snap = snapshot_from(raw);
        assert_eq!(snap.city.as_deref(), Some("Jaipur"));
        assert_eq!(snap.temperature, Some(28.4));
        assert_eq!(snap.feels_like, Some(30.1));
        assert_eq!(snap.humidity, Some(65.0));
        assert_eq!(snap.wind, Some(3.6));
        assert_eq!(snap.description.as_deref(), Some("haze"));
        assert_eq!(snap.icon.as_deref(), Some("50d"));
    }

    #[test]
    fn snapshot_tolerates_a_sparse_response() {
        let raw: OwmResponse = serde_json::from_str(r#"{"weather": []}"#).unwrap();
        let snap = snapshot_from(raw);
        assert_eq!(snap, WeatherSnapshot::default());
    }
}
