use contracts::system::auth::AppRoute;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Route-level authorization gate.
///
/// Consults the central `AppRoute` table once per navigation; a role the
/// table rejects is redirected to its default route instead of seeing a
/// "denied" screen. Views behind this component never re-check roles.
#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    let allowed = move || {
        auth.user
            .with(|u| u.as_ref().map(|u| route.allows(u.role)).unwrap_or(false))
    };

    view! {
        <Show
            when=allowed
            fallback=move || {
                let target = auth
                    .user
                    .with(|u| u.as_ref().map(|u| AppRoute::fallback_for(u.role)).unwrap_or("/"));
                view! { <Redirect path=target /> }
            }
        >
            {children()}
        </Show>
    }
}
