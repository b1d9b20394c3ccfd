use dioxus::prelude::*;

/// localStorage key holding the persisted theme mode.
pub const THEME_STORAGE_KEY: &str = "iw_theme_mode";

/// Light or dark rendering of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Parse a stored key. Anything other than `light`/`dark` is rejected.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Theme state provided as context from the application root.
///
/// The mode signal is private; writes go through [`ThemeState::set_mode`]
/// or [`ThemeState::toggle`] so the document and storage stay in sync.
#[derive(Clone, Copy)]
pub struct ThemeState {
    mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Signal::new(initial),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        set_theme(mode);
    }

    pub fn toggle(&mut self) {
        let next = self.mode().toggled();
        self.set_mode(next);
    }
}

/// Read the consumer's theme state from context.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Restore the persisted mode on startup.
///
/// Reads localStorage once, applies `data-theme` to `<html>` and
/// updates the [`ThemeState`] in context. Render once near the root.
#[component]
pub fn ThemeSeed() -> Element {
    let mut theme = use_theme();

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&format!(
                r#"
                var stored = null;
                try {{ stored = window.localStorage.getItem('{THEME_STORAGE_KEY}'); }} catch (e) {{}}
                dioxus.send(stored || '');
                "#,
            ));
            let stored = eval.recv::<String>().await.unwrap_or_default();
            let mode = ThemeMode::from_key(&stored).unwrap_or_default();
            theme.set_mode(mode);
        });
    });

    rsx! {}
}

/// Persist the mode and apply it to the document root.
pub fn set_theme(mode: ThemeMode) {
    let key = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            try {{ window.localStorage.setItem('{THEME_STORAGE_KEY}', '{key}'); }} catch (e) {{}}
            document.documentElement.setAttribute('data-theme', '{key}');
        }})();
        "#,
    ));
}
