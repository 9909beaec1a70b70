use contracts::domain::checklist::{ChecklistRun, ItemStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::condominium::store::use_condos;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::date_utils::local_time_now;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Simulated sync latency when closing a run.
const FINISH_DELAY_MS: u32 = 1_500;

/// One inspection pass over a condominium's common areas.
///
/// The run lives only in this component; finishing discards it after the
/// simulated sync delay and navigates back to the dashboard.
#[component]
pub fn ChecklistRunnerPage() -> impl IntoView {
    let params = use_params_map();
    let store = use_condos();

    let condo_id = move || params.get().get("condo_id").unwrap_or_default();
    let condo = store.find(&condo_id());

    match condo {
        Some(condo) => {
            let run = RwSignal::new(ChecklistRun::start(&condo));
            view! { <RunView run=run /> }.into_any()
        }
        None => view! {
            <div class="page">
                <p class="page__empty">"Condomínio não encontrado."</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn RunView(run: RwSignal<ChecklistRun>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (finishing, set_finishing) = signal(false);

    let resolved = move || run.with(|r| r.resolved_count());
    let total = move || run.with(|r| r.total_count());
    let progress = Signal::derive(move || run.with(|r| r.progress()));
    let can_finish = move || run.with(|r| r.can_finish()) && !finishing.get();

    let inspector = auth
        .current()
        .map(|u| u.name)
        .unwrap_or_else(|| "—".to_string());
    let condo_name = run.with_untracked(|r| r.condo_name.clone());

    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    let finish = move |_| {
        if !can_finish() {
            return;
        }
        set_finishing.set(true);
        let nav = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(FINISH_DELAY_MS).await;
            dialog::notify("Vistoria finalizada e sincronizada com sucesso!");
            nav("/", Default::default());
        });
    };

    view! {
        <div class="page checklist-page">
            <div class="checklist-page__header">
                <div class="checklist-page__headline">
                    <button class="checklist-page__back" on:click=go_back>
                        {icon("arrow-left")}
                    </button>
                    <div>
                        <h2 class="checklist-page__condo">{condo_name}</h2>
                        <p class="checklist-page__meta">
                            {icon("clock")}
                            <span>{local_time_now()}</span>
                            {icon("user")}
                            <span>{inspector}</span>
                        </p>
                    </div>
                </div>
                <div class="checklist-page__summary">
                    <div class="checklist-page__count">
                        <p class="checklist-page__count-label">"Progresso"</p>
                        <p class="checklist-page__count-value">
                            {move || format!("{}/{}", resolved(), total())}
                        </p>
                    </div>
                    <button
                        class="checklist-page__finish"
                        disabled=move || !can_finish()
                        on:click=finish
                    >
                        {move || if finishing.get() {
                            view! { <span class="spinner"></span> }.into_any()
                        } else {
                            view! {
                                {icon("save")}
                                <span>"Finalizar"</span>
                            }
                            .into_any()
                        }}
                    </button>
                </div>
            </div>

            <ProgressBar percent=progress />

            <div class="checklist-page__items">
                // Keyed by item id so a status or note update only
                // re-renders the touched item and the textarea keeps
                // focus between keystrokes.
                <For
                    each=move || run.with(|r| r.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>())
                    key=|id| id.clone()
                    children=move |item_id: String| {
                        view! { <RunItem run=run item_id=item_id /> }
                    }
                />
            </div>
        </div>
    }
}

/// One area row of the run. All item state is read reactively through
/// the run signal, keyed by the (stable) item id.
#[component]
fn RunItem(run: RwSignal<ChecklistRun>, item_id: String) -> impl IntoView {
    let area = run.with_untracked(|r| {
        r.items
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.area.clone())
            .unwrap_or_default()
    });

    let status = {
        let id = item_id.clone();
        Memo::new(move |_| {
            run.with(|r| {
                r.items
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.status)
                    .unwrap_or_default()
            })
        })
    };
    let photo_count = {
        let id = item_id.clone();
        Memo::new(move |_| {
            run.with(|r| {
                r.items
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.photos.len())
                    .unwrap_or(0)
            })
        })
    };
    let observation = {
        let id = item_id.clone();
        move || {
            run.with(|r| {
                r.items
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.observation.clone())
                    .unwrap_or_default()
            })
        }
    };

    let resolved = move || status.get().is_resolved();
    let has_photos = move || photo_count.get() > 0;
    let item_class = move || match status.get() {
        ItemStatus::Pendente => "check-item",
        ItemStatus::Conforme => "check-item check-item--ok",
        ItemStatus::NaoConforme => "check-item check-item--bad",
    };

    let id_ok = item_id.clone();
    let id_bad = item_id.clone();
    let id_note = item_id.clone();
    let id_photo = item_id.clone();
    let id_gallery = item_id;

    view! {
        <div class=item_class>
            <div class="check-item__row">
                <h4 class="check-item__area">{area}</h4>
                <div class="check-item__choices">
                    <button
                        class=move || if status.get() == ItemStatus::Conforme {
                            "check-item__choice check-item__choice--ok-active"
                        } else {
                            "check-item__choice"
                        }
                        on:click=move |_| run.update(|r| r.set_status(&id_ok, ItemStatus::Conforme))
                    >
                        {icon("check-circle")}
                        <span>"Conforme"</span>
                    </button>
                    <button
                        class=move || if status.get() == ItemStatus::NaoConforme {
                            "check-item__choice check-item__choice--bad-active"
                        } else {
                            "check-item__choice"
                        }
                        on:click=move |_| run.update(|r| r.set_status(&id_bad, ItemStatus::NaoConforme))
                    >
                        {icon("x-circle")}
                        <span>"NÃO Conforme"</span>
                    </button>
                </div>
            </div>

            <Show when=resolved>
                <div class="check-item__details">
                    <div class="form__group">
                        <label class="form__label">"Observações"</label>
                        <textarea
                            class="form__textarea"
                            placeholder="Detalhes sobre a limpeza ou estado da área..."
                            prop:value=observation.clone()
                            on:input={
                                let id = id_note.clone();
                                move |ev| {
                                    let text = event_target_value(&ev);
                                    run.update(|r| {
                                        let _ = r.set_observation(&id, &text);
                                    });
                                }
                            }
                        ></textarea>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Evidência Fotográfica"</label>
                        <div class="check-item__evidence">
                            <button
                                class="check-item__photo-btn"
                                on:click={
                                    let id = id_photo.clone();
                                    move |_| run.update(|r| {
                                        let re = format!("camera-{}", uuid::Uuid::new_v4());
                                        let _ = r.add_photo(&id, &re);
                                    })
                                }
                            >
                                {icon("camera")}
                                <span>"CÂMERA"</span>
                            </button>
                            <button
                                class="check-item__photo-btn"
                                on:click={
                                    let id = id_gallery.clone();
                                    move |_| run.update(|r| {
                                        let re = format!("galeria-{}", uuid::Uuid::new_v4());
                                        let _ = r.add_photo(&id, &re);
                                    })
                                }
                            >
                                {icon("image")}
                                <span>"GALERIA"</span>
                            </button>
                        </div>
                        <Show when=has_photos>
                            <p class="check-item__photo-count">
                                {move || format!("{} evidência(s) anexada(s)", photo_count.get())}
                            </p>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
