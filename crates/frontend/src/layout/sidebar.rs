use contracts::system::auth::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

fn nav_label(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "Painel Geral",
        AppRoute::QrScan => "Gestão QR",
        AppRoute::Condos => "Condomínios",
        AppRoute::Maintenance => "Manutenção",
        AppRoute::Reports => "Relatórios",
        AppRoute::ChecklistRun => "Vistoria",
    }
}

fn nav_icon(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "dashboard",
        AppRoute::QrScan => "qr-code",
        AppRoute::Condos => "building",
        AppRoute::Maintenance => "wrench",
        AppRoute::Reports => "file-text",
        AppRoute::ChecklistRun => "clipboard",
    }
}

/// Navigation sidebar. Menu entries come from the central authorization
/// table, so a hidden entry is also an unreachable route.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let (open, set_open) = signal(true);

    let entries = move || {
        auth.role()
            .map(AppRoute::nav_entries)
            .unwrap_or_default()
    };

    view! {
        <aside class=move || if open.get() { "sidebar" } else { "sidebar sidebar--collapsed" }>
            <div class="sidebar__top">
                <Show when=move || open.get() fallback=|| icon("clipboard")>
                    <h1 class="sidebar__brand">"MS APP"</h1>
                </Show>
                <button class="sidebar__toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                    {icon("menu")}
                </button>
            </div>

            <nav class="sidebar__nav">
                <For
                    each=entries
                    key=|route| route.path()
                    children=move |route| {
                        view! {
                            <A href=route.path() attr:class="sidebar__item">
                                {icon(nav_icon(route))}
                                <Show when=move || open.get()>
                                    <span class="sidebar__label">{nav_label(route)}</span>
                                </Show>
                            </A>
                        }
                    }
                />
            </nav>

            <div class="sidebar__footer">
                <Show when=move || open.get()>
                    {move || auth.current().map(|user| {
                        let initials: String = user.name.chars().take(2).collect();
                        view! {
                            <div class="sidebar__user">
                                <div class="sidebar__avatar">{initials.to_uppercase()}</div>
                                <div>
                                    <p class="sidebar__user-name">{user.name.clone()}</p>
                                    <p class="sidebar__user-role">{user.role.as_str()}</p>
                                </div>
                            </div>
                        }
                    })}
                </Show>
                <button class="sidebar__logout" title="Sair" on:click=move |_| auth.logout()>
                    {icon("logout")}
                </button>
            </div>
        </aside>
    }
}
