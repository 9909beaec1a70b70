//! Light/dark theme with localStorage persistence.
//!
//! The preference is a process-global presentation flag: persisted under
//! the `theme` key and mirrored as a `dark` class on the document root so
//! plain CSS can react to it.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Theme {
    crate::shared::storage::get_string(THEME_STORAGE_KEY)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    crate::shared::storage::set_string(THEME_STORAGE_KEY, theme.as_str());
}

/// Toggles the `dark` class on the document root element.
fn apply_theme_class(theme: Theme) {
    let root = match window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        Some(root) => root,
        None => return,
    };
    let class_list = root.class_list();
    let _ = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Flips the theme, persisting and re-applying the DOM class.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        save_theme_to_storage(next);
        apply_theme_class(next);
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_theme_from_storage();
    apply_theme_class(initial);

    provide_context(ThemeContext { theme: RwSignal::new(initial) });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button flipping between day and night mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="header__icon-btn"
            title=move || match ctx.get() {
                Theme::Light => "Ativar Modo Noturno",
                Theme::Dark => "Ativar Modo Diurno",
            }
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.get() {
                Theme::Light => crate::shared::icons::icon("moon"),
                Theme::Dark => crate::shared::icons::icon("sun"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_returns_to_the_original() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn parsing_is_total() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("garbage"), Theme::Light);
    }
}
