use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::use_auth;

/// Top bar: greeting, theme toggle, role badge and (for the field
/// worker, who has no sidebar) the logout action.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    let title = move || {
        auth.current()
            .map(|u| {
                if u.is_operacional() {
                    format!("Olá, {}", u.name)
                } else {
                    "Sistema de Gestão".to_string()
                }
            })
            .unwrap_or_default()
    };

    let role_badge = move || auth.role().map(|r| r.as_str()).unwrap_or_default();
    let is_operacional = move || auth.current().map(|u| u.is_operacional()).unwrap_or(false);

    view! {
        <header class="header">
            <h2 class="header__title">{title}</h2>
            <div class="header__actions">
                <ThemeToggle />
                <div class="header__role">
                    {icon("user")}
                    <span>{role_badge}</span>
                </div>
                <Show when=is_operacional>
                    <button class="header__logout" on:click=move |_| auth.logout()>
                        {icon("logout")}
                        <span>"Sair"</span>
                    </button>
                </Show>
            </div>
        </header>
    }
}
