use contracts::system::auth::User;

const USER_KEY: &str = "user";

/// Persist the session user to localStorage.
pub fn save_user(user: &User) {
    crate::shared::storage::save_json(USER_KEY, user);
}

/// Restore the persisted session, if any. A corrupt record is discarded
/// so a broken value can never lock the user out of the role picker.
pub fn load_user() -> Option<User> {
    crate::shared::storage::load_json(USER_KEY)
}

pub fn clear_user() {
    crate::shared::storage::remove(USER_KEY);
}
