use dioxus::prelude::*;

use crate::shared::types::Reading;
use crate::state::theme::Theme;
use crate::utils::format::{format_local, format_metric};

#[allow(non_snake_case)]
#[component]
pub fn ReadingGrid(reading: Reading) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();

    let cells = [
        ("PM1.0", reading.pm1),
        ("PM2.5", reading.pm25),
        ("PM10", reading.pm10),
        ("CO2", reading.co2),
        ("Humidity", reading.humidity),
        ("Temperature", reading.temperature),
    ];

    let sampled = reading.timestamp.clone().map(|ts| {
        let local = format_local(&ts);
        (ts, local)
    });

    rsx! {
        section {
            class: "card",
            style: "background-color:{palette.card_bg};border-color:{palette.border}",
            h2 { style: "color:{palette.primary}", "Live Data" }
            p { class: "subtle", style: "color:{palette.text_secondary}",
                "Latest sample from the sensor backend"
            }
            div { class: "metric-grid",
                for (label, value) in cells {
                    div {
                        class: "metric-cell",
                        style: "background-color:{palette.input_bg};border-color:{palette.border}",
                        div { class: "metric-label", style: "color:{palette.text_secondary}", "{label}" }
                        div { class: "metric-value", "{format_metric(value)}" }
                    }
                }
            }
            if let Some((ts, local)) = sampled {
                time { class: "subtle", style: "color:{palette.text_secondary}",
                    datetime: "{ts}",
                    "As of {local}"
                }
            }
        }
    }
}
