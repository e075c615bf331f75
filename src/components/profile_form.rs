use dioxus::prelude::*;

use crate::state::session::Session;
use crate::state::storage;
use crate::state::theme::Theme;

/// Display name, email, and city saved to browser storage. The city doubles
/// as the weather panel's remembered default.
#[allow(non_snake_case)]
#[component]
pub fn ProfileForm() -> Element {
    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();
    let mut session = use_context::<Signal<Session>>();
    let mut name_input = use_signal(String::new);
    let mut email_input = use_signal(String::new);
    let mut city_input = use_signal(String::new);
    let mut saved = use_signal(|| false);

    // Prefill from the previous visit.
    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(v) = storage::get(storage::USER_NAME) {
            name_input.set(v);
        }
        if let Some(v) = storage::get(storage::USER_EMAIL) {
            email_input.set(v);
        }
        if let Some(v) = storage::get(storage::USER_CITY) {
            city_input.set(v);
        }
    });

    let save = move |_| {
        let name = name_input.read().trim().to_string();
        let email = email_input.read().trim().to_string();
        let city = city_input.read().trim().to_string();
        if !name.is_empty() {
            storage::set(storage::USER_NAME, &name);
            session.write().display_name = name;
        }
        if !email.is_empty() {
            storage::set(storage::USER_EMAIL, &email);
        }
        if !city.is_empty() {
            storage::set(storage::USER_CITY, &city);
        }
        saved.set(true);
    };

    rsx! {
        section {
            class: "card",
            style: "background-color:{palette.card_bg};border-color:{palette.border}",
            h2 { style: "color:{palette.primary}", "Your Info" }
            div { class: "form-column",
                input {
                    class: "field",
                    style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                    r#type: "text",
                    placeholder: "Enter your name",
                    value: "{name_input}",
                    oninput: move |e| name_input.set(e.value()),
                }
                input {
                    class: "field",
                    style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{email_input}",
                    oninput: move |e| email_input.set(e.value()),
                }
                input {
                    class: "field",
                    style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                    r#type: "text",
                    placeholder: "Enter your city",
                    value: "{city_input}",
                    oninput: move |e| city_input.set(e.value()),
                }
                button {
                    class: "btn",
                    style: "background-color:{palette.primary}",
                    onclick: save,
                    "Update Info"
                }
            }
            if *saved.read() {
                p { class: "subtle", style: "color:{palette.success}", "Profile saved." }
            }
        }
    }
}
