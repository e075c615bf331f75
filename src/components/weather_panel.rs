use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::api::{weather_by_city, weather_by_coords};
use crate::shared::types::{WeatherOutcome, WeatherSnapshot};
use crate::state::storage;
use crate::state::theme::Theme;
use crate::utils::format::format_unit;

// Decorative embed centered on the sensor site.
const MAP_LAT: &str = "26.8498";
const MAP_LON: &str = "75.7653";

#[allow(non_snake_case)]
#[component]
pub fn WeatherPanel(weather: Signal<WeatherSnapshot>) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();

    // Empty string means "no key provisioned" and renders the key prompt.
    let mut api_key = use_signal(String::new);
    let mut key_input = use_signal(String::new);
    let mut city_input = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);
    // Filled by the browser geolocation callback, drained by an effect.
    let pending_coords = use_signal(|| Option::<(f64, f64)>::None);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(k) = storage::get(storage::WEATHER_KEY) {
            api_key.set(k);
        }
        if let Some(c) = storage::get(storage::USER_CITY) {
            city_input.set(c);
        }
    });

    // A rejected key is dropped entirely so the prompt comes back; any
    // other failure keeps the previous snapshot on screen.
    let apply = move |outcome: WeatherOutcome| {
        let mut weather = weather;
        let mut notice = notice;
        let mut api_key = api_key;
        match outcome {
            WeatherOutcome::Current(snap) => {
                weather.set(snap);
                notice.set(None);
            }
            WeatherOutcome::InvalidKey => {
                storage::remove(storage::WEATHER_KEY);
                api_key.set(String::new());
                notice.set(Some(
                    "Weather API key rejected. Enter a new key.".to_string(),
                ));
            }
            WeatherOutcome::CityNotFound => {
                notice.set(Some("City not found.".to_string()));
            }
            WeatherOutcome::Unavailable(msg) => {
                notice.set(Some(msg));
            }
        }
    };

    let check_city = move |_| {
        let city = city_input.read().trim().to_string();
        if city.is_empty() {
            return;
        }
        let key = api_key.read().clone();
        spawn(async move {
            match weather_by_city(city, key).await {
                Ok(outcome) => apply(outcome),
                Err(_) => apply(WeatherOutcome::Unavailable(
                    "Weather service unavailable".to_string(),
                )),
            }
        });
    };

    // Coordinates arrive outside the component scope, so the callback only
    // parks them in a signal; this effect runs the actual fetch.
    use_effect(move || {
        let coords = *pending_coords.read();
        if let Some((lat, lon)) = coords {
            let mut pending_coords = pending_coords;
            pending_coords.set(None);
            let key = api_key.peek().clone();
            spawn(async move {
                match weather_by_coords(lat, lon, key).await {
                    Ok(outcome) => apply(outcome),
                    Err(_) => apply(WeatherOutcome::Unavailable(
                        "Weather service unavailable".to_string(),
                    )),
                }
            });
        }
    });

    #[cfg(feature = "web")]
    let locate = move |_| {
        if request_position(pending_coords) {
            info!("[weather] waiting for browser position");
        } else {
            let mut notice = notice;
            notice.set(Some(
                "Geolocation is not supported by this browser.".to_string(),
            ));
        }
    };
    #[cfg(not(feature = "web"))]
    let locate = move |_| {};

    let save_key = move |_| {
        let k = key_input.read().trim().to_string();
        if k.is_empty() {
            return;
        }
        storage::set(storage::WEATHER_KEY, &k);
        api_key.set(k);
        key_input.set(String::new());
        notice.set(None);
    };

    let change_key = move |_| {
        storage::remove(storage::WEATHER_KEY);
        api_key.set(String::new());
    };

    let key_missing = api_key.read().is_empty();
    let snap = weather.read().clone();
    let city_text = snap.city.clone().unwrap_or_else(|| "-".to_string());
    let temp_text = format_unit(snap.temperature, "°C");
    let humidity_text = format_unit(snap.humidity, "%");
    let wind_text = format_unit(snap.wind, " m/s");
    let feels_text = snap.feels_like.map(|v| format_unit(Some(v), "°C"));
    let map_src = format!(
        "https://openweathermap.org/weathermap?basemap=map&cities=true&layer=temperature&lat={MAP_LAT}&lon={MAP_LON}&zoom=12"
    );

    let cells = [
        ("City", city_text),
        ("Temperature", temp_text),
        ("Humidity", humidity_text),
        ("Wind", wind_text),
    ];

    rsx! {
        section {
            class: "card",
            style: "background-color:{palette.card_bg};border-color:{palette.border}",
            h2 { style: "color:{palette.primary}", "Weather" }

            if key_missing {
                div {
                    class: "key-prompt",
                    style: "border-color:{palette.accent}",
                    p { "Enter your OpenWeatherMap API key to enable weather lookups:" }
                    div { class: "form-row",
                        input {
                            class: "field grow",
                            style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                            r#type: "text",
                            placeholder: "API key",
                            value: "{key_input}",
                            oninput: move |e| key_input.set(e.value()),
                        }
                        button {
                            class: "btn",
                            style: "background-color:{palette.accent}",
                            onclick: save_key,
                            "Save Key"
                        }
                    }
                    p { class: "subtle", style: "color:{palette.text_secondary}",
                        "Free keys are available from openweathermap.org."
                    }
                }
            } else {
                div { class: "form-row",
                    input {
                        class: "field grow",
                        style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                        r#type: "text",
                        placeholder: "Enter city (e.g., Delhi)",
                        value: "{city_input}",
                        oninput: move |e| city_input.set(e.value()),
                    }
                    button {
                        class: "btn",
                        style: "background-color:{palette.accent}",
                        onclick: check_city,
                        "Check Weather"
                    }
                    button {
                        class: "btn",
                        style: "background-color:{palette.accent}",
                        onclick: locate,
                        "Use My Location"
                    }
                }
                button {
                    class: "link-btn",
                    style: "color:{palette.accent}",
                    onclick: change_key,
                    "Change API key"
                }
            }

            if let Some(msg) = notice.read().clone() {
                p { class: "notice", style: "color:{palette.error}", "{msg}" }
            }

            div { class: "metric-grid weather-grid",
                for (label, value) in cells {
                    div {
                        class: "metric-cell",
                        style: "background-color:{palette.input_bg};border-color:{palette.border}",
                        div { class: "metric-label", style: "color:{palette.text_secondary}", "{label}" }
                        div { class: "metric-value", "{value}" }
                    }
                }
            }

            if let Some(desc) = snap.description.clone() {
                div { class: "condition-row",
                    if let Some(icon) = snap.icon.clone() {
                        img {
                            class: "condition-icon",
                            src: "https://openweathermap.org/img/wn/{icon}@2x.png",
                            alt: "{desc}",
                        }
                    }
                    span { "{desc}" }
                    if let Some(feels) = feels_text {
                        span { class: "subtle", style: "color:{palette.text_secondary}",
                            "feels like {feels}"
                        }
                    }
                }
            }

            div { class: "map-embed",
                iframe {
                    src: "{map_src}",
                    width: "100%",
                    height: "300",
                    style: "border:1px solid {palette.border};border-radius:8px",
                    title: "Weather map",
                }
            }
            p { class: "subtle", style: "color:{palette.text_secondary}",
                "Weather data provided by OpenWeatherMap"
            }
        }
    }
}

/// Kick off a browser geolocation request, parking the coordinates in the
/// given signal when (if) they arrive. Returns false when the API is not
/// available at all.
#[cfg(feature = "web")]
fn request_position(mut out: Signal<Option<(f64, f64)>>) -> bool {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(geo) = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.geolocation().ok())
    else {
        return false;
    };
    // Field access goes through Reflect so this does not depend on the
    // generated Position interface bindings.
    let cb = Closure::once(move |position: JsValue| {
        let coords = js_sys::Reflect::get(&position, &JsValue::from_str("coords"))
            .unwrap_or(JsValue::UNDEFINED);
        let lat = js_sys::Reflect::get(&coords, &JsValue::from_str("latitude"))
            .ok()
            .and_then(|v| v.as_f64());
        let lon = js_sys::Reflect::get(&coords, &JsValue::from_str("longitude"))
            .ok()
            .and_then(|v| v.as_f64());
        if let (Some(lat), Some(lon)) = (lat, lon) {
            out.set(Some((lat, lon)));
        }
    });
    let started = geo.get_current_position(cb.as_ref().unchecked_ref()).is_ok();
    if started {
        cb.forget();
    }
    started
}
