use dioxus::prelude::*;

use crate::api::login;
use crate::shared::types::{LoginDto, PLACEHOLDER_TOKEN};
use crate::state::session::Session;
use crate::state::storage;
use crate::state::theme::Theme;

/// Sign-in inputs while logged out, greeting plus sign-out once logged in.
/// Any credentials are accepted; even an unreachable server falls back to
/// the placeholder token.
#[allow(non_snake_case)]
#[component]
pub fn LoginControls() -> Element {
    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();
    let mut session = use_context::<Signal<Session>>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let sign_in = move |_| {
        let name = username.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        let pass = password.read().clone();
        spawn(async move {
            let dto = match login(name.clone(), pass).await {
                Ok(dto) => dto,
                Err(_) => LoginDto {
                    token: PLACEHOLDER_TOKEN.to_string(),
                    display_name: name,
                },
            };
            storage::set(storage::ACCESS_TOKEN, &dto.token);
            storage::set(storage::USER_NAME, &dto.display_name);
            session.set(Session::logged_in(dto.token, dto.display_name));
            username.set(String::new());
            password.set(String::new());
        });
    };

    let sign_out = move |_| {
        storage::remove(storage::ACCESS_TOKEN);
        storage::remove(storage::USER_NAME);
        session.set(Session::logged_out());
    };

    let current = session.read().clone();

    rsx! {
        if current.authenticated {
            div { class: "auth-controls",
                span { class: "subtle", style: "color:{palette.text_secondary}",
                    if current.display_name.is_empty() {
                        "Signed in"
                    } else {
                        "User: {current.display_name}"
                    }
                }
                button {
                    class: "btn",
                    style: "background-color:{palette.primary}",
                    onclick: sign_out,
                    "Sign Out"
                }
            }
        } else {
            div { class: "auth-controls",
                input {
                    class: "field",
                    style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "field",
                    style: "background-color:{palette.input_bg};border-color:{palette.border};color:{palette.text}",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    class: "btn",
                    style: "background-color:{palette.primary}",
                    onclick: sign_in,
                    "Sign In"
                }
            }
        }
    }
}
