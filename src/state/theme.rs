//! Light/dark theme store: a mode flag and one fixed palette per mode.
//! Toggle-only; the choice is not persisted across reloads.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Semantic color names resolved to CSS values. Components never hard-code
/// colors; they read the active palette and apply values inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub input_bg: &'static str,
    pub success: &'static str,
    pub success_soft: &'static str,
    pub error: &'static str,
    pub error_soft: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f8fafc",
    card_bg: "#ffffff",
    text: "#0f172a",
    text_secondary: "#475569",
    primary: "#0284c7",
    accent: "#10b981",
    border: "#e2e8f0",
    input_bg: "#f1f5f9",
    success: "#047857",
    success_soft: "#e6ffed",
    error: "#b91c1c",
    error_soft: "#fee2e2",
};

pub const DARK: Palette = Palette {
    background: "#020618",
    card_bg: "#0f172a",
    text: "#f1f5f9",
    text_secondary: "#94a3b8",
    primary: "#38bdf8",
    accent: "#34d399",
    border: "#1e293b",
    input_bg: "#1e293b",
    success: "#34d399",
    success_soft: "#064e3b",
    error: "#f87171",
    error_soft: "#450a0a",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self.mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_exactly_two_modes() {
        let mut theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Light);
    }

    #[test]
    fn each_mode_resolves_its_own_palette() {
        let mut theme = Theme::default();
        let light = theme.palette();
        theme.toggle();
        let dark = theme.palette();
        assert_ne!(light.background, dark.background);
        assert_ne!(light.card_bg, dark.card_bg);
    }
}
