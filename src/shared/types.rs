use serde::{Deserialize, Serialize};

/// Token handed out when the sensor backend's `/login` is unreachable or
/// rejects the request. Login still succeeds locally with this value; it is
/// never validated anywhere.
pub const PLACEHOLDER_TOKEN: &str = "aqdash-local-session";

/// One air-quality sample as reported by the sensor backend. Every field is
/// optional; whatever the backend omits renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub pm1: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub co2: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Reading {
    pub fn has_particulates(&self) -> bool {
        self.pm10.is_some() || self.pm25.is_some()
    }
}

/// Result of one poll of the sensor backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorPoll {
    pub connected: bool,
    pub reading: Reading,
    pub fetched_at: String,
    pub error: Option<String>,
}

/// One third-party weather observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind: Option<f64>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Outcome of a weather fetch. Failures travel as values so the client can
/// pick the right degradation (re-prompt for key, inline message, keep the
/// previous snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherOutcome {
    Current(WeatherSnapshot),
    InvalidKey,
    CityNotFound,
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub token: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Connection state of the sensor backend as seen from the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BackendStatus {
    Connected,
    Disconnected,
    #[default]
    Checking,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Connected => "Backend: Connected",
            BackendStatus::Disconnected => "Backend: Disconnected",
            BackendStatus::Checking => "Checking...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_defaults_to_all_placeholders() {
        let r = Reading::default();
        assert!(r.pm1.is_none() && r.pm10.is_none() && r.pm25.is_none());
        assert!(r.co2.is_none() && r.humidity.is_none() && r.temperature.is_none());
        assert!(!r.has_particulates());
    }

    #[test]
    fn reading_tolerates_unknown_and_missing_fields() {
        let r: Reading =
            serde_json::from_str(r#"{"pm10": 35.2, "sensor_id": "esp32-7"}"#).unwrap();
        assert_eq!(r.pm10, Some(35.2));
        assert_eq!(r.co2, None);
        assert!(r.has_particulates());
    }

    #[test]
    fn status_labels_match_the_badge_strings() {
        assert_eq!(BackendStatus::Connected.label(), "Backend: Connected");
        assert_eq!(BackendStatus::Disconnected.label(), "Backend: Disconnected");
        assert_eq!(BackendStatus::Checking.label(), "Checking...");
    }
}
