use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Role picker shown while no session exists. There is no password: the
/// prototype authenticates by profile selection only.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="login">
            <div class="login__box">
                <div class="login__badge">{icon("shield")}</div>
                <h1 class="login__title">"MS APP"</h1>
                <p class="login__subtitle">"Selecione seu perfil para acessar o sistema"</p>
                <div class="login__options">
                    <button
                        class="login__option login__option--admin"
                        on:click=move |_| auth.login(Role::Administrador)
                    >
                        "Administrador"
                    </button>
                    <button
                        class="login__option login__option--sindico"
                        on:click=move |_| auth.login(Role::Sindico)
                    >
                        "Síndico"
                    </button>
                    <button
                        class="login__option login__option--operacional"
                        on:click=move |_| auth.login(Role::Operacional)
                    >
                        "Zelador / Operacional"
                    </button>
                </div>
            </div>
        </div>
    }
}
