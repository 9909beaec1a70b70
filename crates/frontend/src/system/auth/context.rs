use contracts::system::auth::{login_user, Role, User};
use leptos::prelude::*;

use super::storage;

/// Single-session auth state: one user at a time, restored from
/// localStorage on startup.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
}

impl AuthContext {
    /// Role selection stub; always succeeds and persists the record.
    pub fn login(&self, role: Role) {
        let user = login_user(role);
        storage::save_user(&user);
        log::info!("sessão iniciada: {} ({})", user.name, user.role.as_str());
        self.user.set(Some(user));
    }

    /// Clears both the in-memory user and the persisted record.
    pub fn logout(&self) {
        storage::clear_user();
        log::info!("sessão encerrada");
        self.user.set(None);
    }

    pub fn current(&self) -> Option<User> {
        self.user.get()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.with(|u| u.as_ref().map(|u| u.role))
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Rehydrate the session before the first render; no server round-trip
    // exists to validate it against.
    let user = RwSignal::new(storage::load_user());

    provide_context(AuthContext { user });

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
