use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::api::latest_reading;
use crate::components::{LoginControls, ProfileForm, ReadingGrid, StatusBadge, WeatherPanel};
use crate::shared::types::{BackendStatus, Reading, WeatherSnapshot};
use crate::state::session::Session;
use crate::state::theme::{Theme, ThemeMode};

pub const POLL_INTERVAL_SECS: u32 = 30;

/// One poll of the sensor backend: the whole view state is replaced by the
/// result. A failed poll clears the reading so every cell falls back to its
/// placeholder.
async fn run_poll(
    mut status: Signal<BackendStatus>,
    mut reading: Signal<Reading>,
    mut poll_error: Signal<Option<String>>,
) {
    status.set(BackendStatus::Checking);
    match latest_reading().await {
        Ok(poll) if poll.connected => {
            status.set(BackendStatus::Connected);
            reading.set(poll.reading);
            poll_error.set(None);
        }
        Ok(poll) => {
            status.set(BackendStatus::Disconnected);
            reading.set(Reading::default());
            poll_error.set(poll.error);
        }
        Err(e) => {
            status.set(BackendStatus::Disconnected);
            reading.set(Reading::default());
            poll_error.set(Some(e.to_string()));
        }
    }
}

/// The alert strip shown when the view is authenticated but key figures are
/// absent.
fn missing_data_note(reading: &Reading, weather: &WeatherSnapshot) -> Option<String> {
    let mut missing = Vec::new();
    if weather.wind.is_none() {
        missing.push("wind speed");
    }
    if !reading.has_particulates() {
        missing.push("pollutant data (PM2.5/PM10)");
    }
    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "Missing {}. Please check weather or refresh data.",
            missing.join(" and ")
        ))
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let status = use_signal(BackendStatus::default);
    let reading = use_signal(Reading::default);
    let weather = use_signal(WeatherSnapshot::default);
    let poll_error = use_signal(|| Option::<String>::None);

    let session = use_context::<Signal<Session>>();
    let mut theme = use_context::<Signal<Theme>>();

    // Poll once right away, then on a fixed cadence for the lifetime of the
    // view. The timer callback runs outside the component scope, so it only
    // bumps a tick signal; the effect below owns the actual request. No
    // overlap prevention; last response wins.
    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let mut tick: Signal<u32> = use_signal(|| 0);
        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut ticker = ticker.clone();
            move || {
                if let Some(t) = ticker.write().take() {
                    t.cancel();
                }
            }
        });

        use_effect({
            let mut ticker = ticker.clone();
            move || {
                info!("[dashboard] polling every {}s", POLL_INTERVAL_SECS);
                let handle = Interval::new(POLL_INTERVAL_SECS * 1_000, move || {
                    tick += 1;
                });
                ticker.set(Some(handle));
            }
        });

        use_effect(move || {
            let _ = *tick.read();
            spawn(run_poll(status, reading, poll_error));
        });
    }

    let refresh = move |_| {
        spawn(run_poll(status, reading, poll_error));
    };

    let palette = theme.read().palette();
    let mode_label = match theme.read().mode {
        ThemeMode::Light => "Dark Mode",
        ThemeMode::Dark => "Light Mode",
    };

    let authenticated = session.read().authenticated;
    let note = if authenticated {
        missing_data_note(&reading.read(), &weather.read())
    } else {
        None
    };

    rsx! {
        div { class: "shell",
            header { class: "topbar",
                h1 { class: "title", "Air Quality Dashboard" }
                div { class: "topbar-controls",
                    StatusBadge { status: *status.read() }
                    button {
                        class: "btn",
                        style: "background-color:{palette.accent}",
                        onclick: refresh,
                        "Refresh Data"
                    }
                    button {
                        class: "btn",
                        style: "background-color:{palette.accent}",
                        onclick: move |_| theme.write().toggle(),
                        "{mode_label}"
                    }
                    LoginControls {}
                }
            }

            if authenticated {
                ReadingGrid { reading: reading.read().clone() }
                if let Some(err) = poll_error.read().clone() {
                    p { class: "notice", style: "color:{palette.error}", "Error: {err}" }
                }
                WeatherPanel { weather }
                if let Some(text) = note {
                    div {
                        class: "alert-strip",
                        style: "background-color:{palette.primary}",
                        p { strong { "Alert: " } "{text}" }
                        button {
                            class: "btn btn-inverted",
                            style: "color:{palette.primary}",
                            onclick: refresh,
                            "Refresh Data"
                        }
                    }
                }
                ProfileForm {}
            } else {
                section {
                    class: "card signin-card",
                    style: "background-color:{palette.card_bg};border-color:{palette.border}",
                    h2 { style: "color:{palette.primary}", "Please Sign In" }
                    p { style: "color:{palette.text_secondary}",
                        "You need to sign in to view the dashboard and weather data."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_data_raises_no_alert() {
        let reading = Reading {
            pm25: Some(12.0),
            ..Default::default()
        };
        let weather = WeatherSnapshot {
            wind: Some(3.6),
            ..Default::default()
        };
        assert_eq!(missing_data_note(&reading, &weather), None);
    }

    #[test]
    fn absent_particulates_and_wind_are_both_named() {
        let note = missing_data_note(&Reading::default(), &WeatherSnapshot::default()).unwrap();
        assert!(note.contains("wind speed"));
        assert!(note.contains("pollutant data (PM2.5/PM10)"));
    }

    #[test]
    fn either_particulate_field_counts() {
        let weather = WeatherSnapshot {
            wind: Some(1.0),
            ..Default::default()
        };
        let pm10_only = Reading {
            pm10: Some(42.0),
            ..Default::default()
        };
        assert_eq!(missing_data_note(&pm10_only, &weather), None);
    }
}
