use contracts::domain::condominium::{filter_condos, CondoFields, Condominium};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

use super::store::use_condos;

/// Administration screen for the condominium registry (CRUD over the
/// persisted list).
#[component]
pub fn CondoManagementPage() -> impl IntoView {
    let store = use_condos();
    let auth = use_auth();
    let navigate = use_navigate();

    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (blocks, set_blocks) = signal(String::new());
    let (floors, set_floors) = signal(String::new());

    let filtered = move || {
        store
            .condos
            .with(|c| filter_condos(c, &search.get()).into_iter().cloned().collect::<Vec<_>>())
    };
    let total = move || store.condos.with(|c| c.len());

    let open_create = move || {
        set_editing_id.set(None);
        set_name.set(String::new());
        set_address.set(String::new());
        set_blocks.set("1".to_string());
        set_floors.set("1".to_string());
        set_form_error.set(None);
        set_show_form.set(true);
    };

    let open_edit = move |condo: Condominium| {
        set_editing_id.set(Some(condo.id.clone()));
        set_name.set(condo.name.clone());
        set_address.set(condo.address.clone());
        set_blocks.set(condo.blocks.to_string());
        set_floors.set(condo.floors.to_string());
        set_form_error.set(None);
        set_show_form.set(true);
    };

    let save = move || {
        let Some(role) = auth.role() else { return };
        let fields = CondoFields {
            name: name.get(),
            address: address.get(),
            blocks: blocks.get().trim().parse().unwrap_or(0),
            floors: floors.get().trim().parse().unwrap_or(0),
            common_areas: Vec::new(),
        };
        let result = match editing_id.get() {
            Some(id) => store.update(role, &id, fields),
            None => store.create(role, fields).map(|_| ()),
        };
        match result {
            Ok(()) => set_show_form.set(false),
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    let remove = move |condo: Condominium| {
        let Some(role) = auth.role() else { return };
        let prompt = format!("Remover o condomínio \"{}\"?", condo.name);
        if dialog::confirm(&prompt) {
            if let Err(e) = store.delete(role, &condo.id) {
                dialog::notify(&e);
            }
        }
    };

    view! {
        <div class="page condo-page">
            <PageHeader
                title="Gestão de Condomínios"
                subtitle=Signal::derive(move || {
                    format!("Administre seus {} empreendimentos cadastrados.", total())
                })
                actions=view! {
                    <Button on_click=Callback::new(move |_| open_create())>
                        {icon("plus")}
                        <span>"Novo Condomínio"</span>
                    </Button>
                }.into_any()
            />

            <div class="condo-page__search">
                {icon("search")}
                <input
                    type="text"
                    class="form__input"
                    placeholder="Filtrar por nome ou endereço..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="condo-page__grid">
                <For
                    each=filtered
                    key=|condo| condo.id.clone()
                    children=move |condo| {
                        let nav = navigate.clone();
                        let run_target = format!("/checklist/run/{}", condo.id);
                        let for_edit = condo.clone();
                        let for_delete = condo.clone();
                        let areas_preview: Vec<String> =
                            condo.common_areas.iter().take(4).cloned().collect();
                        let extra_areas = condo.common_areas.len().saturating_sub(4);
                        let has_more_areas = move || extra_areas > 0;

                        view! {
                            <div class="condo-card">
                                <div class="condo-card__top">
                                    <div class="condo-card__icon">{icon("building")}</div>
                                    <div class="condo-card__top-actions">
                                        <button
                                            class="condo-card__action"
                                            title="Editar"
                                            on:click=move |_| open_edit(for_edit.clone())
                                        >
                                            {icon("menu")}
                                        </button>
                                        <button
                                            class="condo-card__action condo-card__action--danger"
                                            title="Remover"
                                            on:click=move |_| remove(for_delete.clone())
                                        >
                                            {icon("x-circle")}
                                        </button>
                                    </div>
                                </div>

                                <h3 class="condo-card__name">{condo.name.clone()}</h3>
                                <p class="condo-card__address">
                                    {icon("map-pin")}
                                    <span>{condo.address.clone()}</span>
                                </p>

                                <div class="condo-card__stats">
                                    <div>
                                        <p class="condo-card__stat-label">"Blocos/Torres"</p>
                                        <p class="condo-card__stat-value">{condo.blocks}</p>
                                    </div>
                                    <div>
                                        <p class="condo-card__stat-label">"Pavimentos"</p>
                                        <p class="condo-card__stat-value">{condo.floors}</p>
                                    </div>
                                </div>

                                <div class="condo-card__areas">
                                    <p class="condo-card__stat-label">"Áreas Principais"</p>
                                    {areas_preview
                                        .into_iter()
                                        .map(|a| view! { <span class="condo-card__area">{a}</span> })
                                        .collect_view()}
                                    <Show when=has_more_areas>
                                        <span class="condo-card__area">{format!("+{} mais", extra_areas)}</span>
                                    </Show>
                                </div>

                                <div class="condo-card__footer">
                                    <button
                                        class="condo-card__run"
                                        on:click=move |_| nav(&run_target, Default::default())
                                    >
                                        {icon("clipboard")}
                                        <span>"Iniciar Vistoria"</span>
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="modal">
                    <div class="modal__box">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "Editar Condomínio" } else { "Novo Condomínio" }}
                        </h3>

                        {move || form_error.get().map(|e| view! { <p class="form__error">{e}</p> })}

                        <Input
                            label="Nome"
                            value=name
                            on_input=Callback::new(move |v| set_name.set(v))
                            placeholder="Residencial..."
                        />
                        <Input
                            label="Endereço"
                            value=address
                            on_input=Callback::new(move |v| set_address.set(v))
                            placeholder="Av. ..., 100"
                        />
                        <div class="form__row">
                            <Input
                                label="Blocos/Torres"
                                value=blocks
                                input_type="number"
                                on_input=Callback::new(move |v| set_blocks.set(v))
                            />
                            <Input
                                label="Pavimentos"
                                value=floors
                                input_type="number"
                                on_input=Callback::new(move |v| set_floors.set(v))
                            />
                        </div>

                        <div class="modal__actions">
                            <Button variant="secondary" on_click=Callback::new(move |_| set_show_form.set(false))>
                                "Cancelar"
                            </Button>
                            <Button on_click=Callback::new(move |_| save())>
                                {icon("save")}
                                <span>"Salvar"</span>
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
