use leptos::prelude::*;

use crate::domain::checkin::store::CleaningLogStore;
use crate::domain::condominium::store::CondoStore;
use crate::domain::maintenance::store::TicketStore;
use crate::routes::routes::AppRouter;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Data stores are rehydrated from localStorage once, here, and shared
    // with every view through context.
    provide_context(CondoStore::new());
    provide_context(TicketStore::new());
    provide_context(CleaningLogStore::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRouter />
            </AuthProvider>
        </ThemeProvider>
    }
}
