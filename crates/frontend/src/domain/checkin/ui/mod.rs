use chrono::Utc;
use contracts::domain::checkin::{CheckinFlow, CheckinStep};
use contracts::domain::condominium::DEFAULT_AREAS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::checkin::store::use_cleaning_logs;
use crate::shared::components::page_header::PageHeader;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// How long the success screen stays up before the flow rearms.
const SUCCESS_RESET_MS: u32 = 2_000;

/// QR module route, shared by two very different audiences: management
/// (code printing + cleaning history) for Administrador/Síndico, and the
/// scan -> form -> success check-in flow for the field worker.
#[component]
pub fn QrScanPage() -> impl IntoView {
    let auth = use_auth();
    let is_management = move || {
        auth.current()
            .map(|u| !u.is_operacional())
            .unwrap_or(false)
    };

    view! {
        <Show when=is_management fallback=|| view! { <CheckinFlowView /> }>
            <QrManagementView />
        </Show>
    }
}

/// Administrador/Síndico view: printable per-area codes and the cleaning
/// log timeline. Print actions are acknowledgement stubs.
#[component]
fn QrManagementView() -> impl IntoView {
    let logs = use_cleaning_logs();
    let (search, set_search) = signal(String::new());

    let areas = move || {
        let needle = search.get().to_lowercase();
        DEFAULT_AREAS
            .iter()
            .filter(|a| a.to_lowercase().contains(&needle))
            .copied()
            .collect::<Vec<_>>()
    };

    let print_one = move |area: &str| {
        dialog::notify(&format!(
            "Gerando arquivo para impressão do QR Code: {}\nEste arquivo contém o identificador único para fixação no local.",
            area
        ));
    };

    view! {
        <div class="page qr-page">
            <PageHeader
                title="Gestão de QR Codes e Registros"
                subtitle="Gerencie os códigos para fixação e acompanhe os registros do zelador."
                actions=view! {
                    <button
                        class="button button--primary"
                        on:click=move |_| dialog::notify("Gerando arquivo com todos os QR Codes para impressão.")
                    >
                        {icon("printer")}
                        <span>"Imprimir Todos"</span>
                    </button>
                }.into_any()
            />

            <div class="qr-page__columns">
                <section class="qr-page__codes">
                    <div class="qr-page__codes-header">
                        <h3 class="qr-page__section-title">
                            {icon("qr-code")}
                            <span>"Códigos por Ambiente"</span>
                        </h3>
                        <div class="qr-page__search">
                            {icon("search")}
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Buscar área..."
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="qr-page__code-grid">
                        <For
                            each=areas
                            key=|area| *area
                            children=move |area: &'static str| {
                                view! {
                                    <div class="qr-code-card">
                                        <div class="qr-code-card__info">
                                            {icon("qr-code")}
                                            <span>{area}</span>
                                        </div>
                                        <button
                                            class="qr-code-card__print"
                                            title="Imprimir QR Code para este ambiente"
                                            on:click=move |_| print_one(area)
                                        >
                                            {icon("printer")}
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </section>

                <section class="qr-page__logs">
                    <h3 class="qr-page__section-title">
                        {icon("history")}
                        <span>"Registros Realizados"</span>
                    </h3>
                    <div class="qr-page__timeline">
                        <For
                            each=move || logs.logs.get()
                            key=|log| log.id.clone()
                            children=move |log| {
                                view! {
                                    <div class="log-entry">
                                        <div class="log-entry__head">
                                            <span class="log-entry__area">{log.area.clone()}</span>
                                            <span class="log-entry__time">{log.time.clone()}</span>
                                        </div>
                                        <p class="log-entry__detail">
                                            {icon("user")}
                                            <span>{log.user_name.clone()}</span>
                                            {icon("check-circle")}
                                            <span class="log-entry__status">{log.status.clone()}</span>
                                        </p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Field-worker check-in: scan (simulated) -> confirmation form ->
/// success, rearming automatically after [`SUCCESS_RESET_MS`].
#[component]
fn CheckinFlowView() -> impl IntoView {
    let auth = use_auth();
    let logs = use_cleaning_logs();
    let flow = RwSignal::new(CheckinFlow::new());

    let step = move || flow.with(|f| f.step);
    let area = move || flow.with(|f| f.area.clone().unwrap_or_default());

    let simulate_scan = move |area: &str| {
        flow.update(|f| {
            if let Err(e) = f.scan(area) {
                log::warn!("leitura rejeitada: {}", e);
            }
        });
    };

    let submit = move |_| {
        let user_name = auth
            .current()
            .map(|u| u.name)
            .unwrap_or_else(|| "Operacional".to_string());
        let mut entry = None;
        flow.update(|f| match f.submit(&user_name, Utc::now()) {
            Ok(log) => entry = Some(log),
            Err(e) => log::warn!("envio rejeitado: {}", e),
        });
        if let Some(log) = entry {
            logs.add(log);
            spawn_local(async move {
                TimeoutFuture::new(SUCCESS_RESET_MS).await;
                flow.update(|f| f.reset());
            });
        }
    };

    view! {
        <div class="page checkin-page">
            <Show when=move || step() == CheckinStep::Scan>
                <div class="checkin-page__scan">
                    <div class="checkin-page__viewfinder">
                        {icon("qr-code")}
                        {icon("camera")}
                    </div>
                    <h2 class="checkin-page__title">"Escanear QR Code"</h2>
                    <p class="checkin-page__hint">
                        "Posicione o código fixado no ambiente para registrar a execução do serviço."
                    </p>
                    <p class="checkin-page__simulate-label">"Simular leitura (Prototipagem)"</p>
                    <div class="checkin-page__simulate-grid">
                        {DEFAULT_AREAS[..4]
                            .iter()
                            .map(|a| {
                                view! {
                                    <button
                                        class="checkin-page__simulate"
                                        on:click=move |_| simulate_scan(a)
                                    >
                                        {*a}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>

            <Show when=move || step() == CheckinStep::Form>
                <div class="checkin-page__form">
                    <div class="checkin-page__banner">
                        <p class="checkin-page__banner-label">
                            {icon("map-pin")}
                            <span>"Ambiente Escaneado"</span>
                        </p>
                        <h2 class="checkin-page__banner-area">{area}</h2>
                    </div>

                    <div class="checkin-page__card">
                        <p class="checkin-page__confirm">"Confirmar Limpeza e Manutenção"</p>

                        <div class="form__group">
                            <label class="form__label">"Fotos da Área"</label>
                            <div class="checkin-page__photos">
                                <button
                                    class="checkin-page__photo-btn"
                                    on:click=move |_| flow.update(|f| {
                                        f.photos.push(format!("camera-{}", uuid::Uuid::new_v4()));
                                    })
                                >
                                    {icon("camera")}
                                    <span>"Câmera"</span>
                                </button>
                                <button
                                    class="checkin-page__photo-btn"
                                    on:click=move |_| flow.update(|f| {
                                        f.photos.push(format!("galeria-{}", uuid::Uuid::new_v4()));
                                    })
                                >
                                    {icon("image")}
                                    <span>"Galeria"</span>
                                </button>
                            </div>
                            <Show when=move || flow.with(|f| !f.photos.is_empty())>
                                <p class="checkin-page__photo-count">
                                    {move || flow.with(|f| format!("{} foto(s) anexada(s)", f.photos.len()))}
                                </p>
                            </Show>
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Relatar Observação"</label>
                            <textarea
                                class="form__textarea"
                                placeholder="Ex: Reposição de insumos ou irregularidades..."
                                prop:value=move || flow.with(|f| f.observation.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    flow.update(|f| f.observation = text);
                                }
                            ></textarea>
                        </div>

                        <button class="checkin-page__submit" on:click=submit>
                            {icon("save")}
                            <span>"Enviar Registro Agora"</span>
                        </button>
                        <button
                            class="checkin-page__cancel"
                            on:click=move |_| flow.update(|f| f.cancel())
                        >
                            "Cancelar Leitura"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || step() == CheckinStep::Success>
                <div class="checkin-page__success">
                    <div class="checkin-page__success-badge">{icon("check-circle")}</div>
                    <h2 class="checkin-page__title">"Registro Concluído!"</h2>
                    <p class="checkin-page__hint">
                        "Os dados foram enviados para o painel de administração."
                    </p>
                </div>
            </Show>
        </div>
    }
}
