use dioxus::prelude::*;

use crate::shared::types::BackendStatus;
use crate::state::theme::Theme;

#[allow(non_snake_case)]
#[component]
pub fn StatusBadge(status: BackendStatus) -> Element {
    let theme = use_context::<Signal<Theme>>();
    let palette = theme.read().palette();
    let (bg, fg) = match status {
        BackendStatus::Connected => (palette.success_soft, palette.success),
        BackendStatus::Disconnected => (palette.error_soft, palette.error),
        BackendStatus::Checking => (palette.input_bg, palette.text_secondary),
    };
    rsx! {
        span {
            class: "badge",
            style: "background-color:{bg};color:{fg};border:1px solid {fg}",
            "{status.label()}"
        }
    }
}
