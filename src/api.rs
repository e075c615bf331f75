use dioxus::prelude::*;

use crate::shared::types::{LoginDto, SensorPoll, WeatherOutcome};

#[server(LatestReading)]
pub async fn latest_reading() -> Result<SensorPoll, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use chrono::Utc;

        let fetched_at = Utc::now().to_rfc3339();
        match crate::backend::sensor::fetch_latest().await {
            Ok(reading) => Ok(SensorPoll {
                connected: true,
                reading,
                fetched_at,
                error: None,
            }),
            Err(e) => {
                eprintln!("[sensor] poll failed: {e}");
                Ok(SensorPoll {
                    connected: false,
                    reading: Default::default(),
                    fetched_at,
                    error: Some(e.to_string()),
                })
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(SensorPoll::default())
    }
}

#[server(Login)]
pub async fn login(username: String, password: String) -> Result<LoginDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::backend::sensor::login(&username, &password).await)
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = password;
        Ok(LoginDto {
            token: crate::shared::types::PLACEHOLDER_TOKEN.to_string(),
            display_name: username,
        })
    }
}

#[server(WeatherByCity)]
pub async fn weather_by_city(
    city: String,
    api_key: String,
) -> Result<WeatherOutcome, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::backend::weather::by_city(&city, &api_key).await)
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (city, api_key);
        Ok(WeatherOutcome::Unavailable(
            "Weather is only reachable through the server".to_string(),
        ))
    }
}

#[server(WeatherByCoords)]
pub async fn weather_by_coords(
    lat: f64,
    lon: f64,
    api_key: String,
) -> Result<WeatherOutcome, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::backend::weather::by_coords(lat, lon, &api_key).await)
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (lat, lon, api_key);
        Ok(WeatherOutcome::Unavailable(
            "Weather is only reachable through the server".to_string(),
        ))
    }
}
