pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::system::auth::context::use_auth;

use self::header::Header;
use self::sidebar::Sidebar;

/// Main layout: sidebar + header + routed content.
///
/// The Operacional profile works from the QR module only and gets no
/// sidebar, matching the field-worker presentation of the prototype.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let has_sidebar = move || auth.user.with(|u| u.as_ref().map(|u| !u.is_operacional()).unwrap_or(false));

    view! {
        <div class="shell">
            <Show when=has_sidebar>
                <Sidebar />
            </Show>
            <main class="shell__main">
                <Header />
                <div class="shell__content">{children()}</div>
            </main>
        </div>
    }
}
