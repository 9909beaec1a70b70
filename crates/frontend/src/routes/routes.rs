use contracts::system::auth::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::OverviewPage;
use crate::domain::checkin::ui::QrScanPage;
use crate::domain::checklist::ui::ChecklistRunnerPage;
use crate::domain::condominium::ui::CondoManagementPage;
use crate::domain::maintenance::ui::MaintenancePage;
use crate::domain::reports::ui::ReportsPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::Protected;
use crate::system::pages::login::LoginPage;

/// Auth gate plus the path-routed main application.
///
/// Every route body goes through [`Protected`], which consults the
/// central authorization table; unknown paths fall back to `/`.
#[component]
pub fn AppRouter() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.user.with(|u| u.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <Router>
                <Shell>
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route
                            path=path!("/")
                            view=|| view! {
                                <Protected route=AppRoute::Dashboard>
                                    <OverviewPage />
                                </Protected>
                            }
                        />
                        <Route
                            path=path!("/condos")
                            view=|| view! {
                                <Protected route=AppRoute::Condos>
                                    <CondoManagementPage />
                                </Protected>
                            }
                        />
                        <Route
                            path=path!("/qr-scan")
                            view=|| view! {
                                <Protected route=AppRoute::QrScan>
                                    <QrScanPage />
                                </Protected>
                            }
                        />
                        <Route
                            path=path!("/checklist/run/:condo_id")
                            view=|| view! {
                                <Protected route=AppRoute::ChecklistRun>
                                    <ChecklistRunnerPage />
                                </Protected>
                            }
                        />
                        <Route
                            path=path!("/maintenance")
                            view=|| view! {
                                <Protected route=AppRoute::Maintenance>
                                    <MaintenancePage />
                                </Protected>
                            }
                        />
                        <Route
                            path=path!("/reports")
                            view=|| view! {
                                <Protected route=AppRoute::Reports>
                                    <ReportsPage />
                                </Protected>
                            }
                        />
                    </Routes>
                </Shell>
            </Router>
        </Show>
    }
}
