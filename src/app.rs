use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::state::session::Session;
use crate::state::theme::Theme;
use crate::MAIN_CSS;

#[cfg(feature = "web")]
use crate::state::storage;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Theme::default()));
    use_context_provider(|| Signal::new(Session::default()));

    // A token left behind by a previous visit restores the session as-is;
    // there is no expiry check.
    #[cfg(feature = "web")]
    {
        let mut session = use_context::<Signal<Session>>();
        use_effect(move || {
            let restored = Session::restore(
                storage::get(storage::ACCESS_TOKEN),
                storage::get(storage::USER_NAME),
            );
            if restored.authenticated {
                session.set(restored);
            }
        });
    }

    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "color-scheme", content: "light dark" }
        div {
            class: "page",
            style: "background-color:{palette.background};color:{palette.text}",
            Dashboard {}
        }
    }
}
