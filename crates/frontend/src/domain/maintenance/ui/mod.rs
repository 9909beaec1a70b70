use contracts::domain::maintenance::{
    filter_tickets, MaintenanceTicket, TicketFields, TicketFilter, TicketStatus, Urgency,
};
use leptos::prelude::*;

use crate::domain::condominium::store::use_condos;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Input, Textarea};
use crate::shared::icons::icon;

use super::store::use_tickets;

fn urgency_tone(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Alta => "red",
        Urgency::Media => "orange",
        Urgency::Baixa => "blue",
    }
}

fn status_tone(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Aberto => "orange",
        TicketStatus::EmAndamento => "blue",
        TicketStatus::Concluido => "green",
    }
}

/// Maintenance board: tab-filtered ticket list plus the "Abrir Chamado"
/// form, both persisted through the ticket store.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    let store = use_tickets();
    let condos = use_condos();

    let (filter, set_filter) = signal(TicketFilter::default());
    let (show_form, set_show_form) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let (condo, set_condo) = signal(String::new());
    let (area, set_area) = signal(String::new());
    let (problem, set_problem) = signal(String::new());
    let (urgency, set_urgency) = signal(Urgency::Baixa);

    let visible = move || {
        store
            .tickets
            .with(|t| filter_tickets(t, filter.get()).into_iter().cloned().collect::<Vec<_>>())
    };

    let open_form = move || {
        set_condo.set(condos.condos.with(|c| c.first().map(|c| c.name.clone()).unwrap_or_default()));
        set_area.set(String::new());
        set_problem.set(String::new());
        set_urgency.set(Urgency::Baixa);
        set_form_error.set(None);
        set_show_form.set(true);
    };

    let save = move || {
        let fields = TicketFields {
            condo: condo.get(),
            area: area.get(),
            problem: problem.get(),
            urgency: Some(urgency.get()),
        };
        match store.create(fields) {
            Ok(_) => set_show_form.set(false),
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    view! {
        <div class="page maintenance-page">
            <PageHeader
                title="Ordens de Manutenção"
                subtitle="Monitore chamados e manutenções preventivas."
                actions=view! {
                    <Button on_click=Callback::new(move |_| open_form())>
                        {icon("plus")}
                        <span>"Abrir Chamado"</span>
                    </Button>
                }.into_any()
            />

            <div class="maintenance-page__tabs">
                {TicketFilter::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || if filter.get() == tab {
                                    "maintenance-page__tab maintenance-page__tab--active"
                                } else {
                                    "maintenance-page__tab"
                                }
                                on:click=move |_| set_filter.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="maintenance-page__list">
                <For
                    each=visible
                    key=|t| (t.id.clone(), t.status)
                    children=move |ticket: MaintenanceTicket| {
                        let advance_id = ticket.id.clone();
                        let terminal = ticket.status == TicketStatus::Concluido;
                        let status_icon =
                            if terminal { icon("check-circle") } else { icon("wrench") };

                        view! {
                            <div class="ticket-card">
                                <div class="ticket-card__head">
                                    <div class="ticket-card__id-block">
                                        <div class=format!("ticket-card__icon ticket-card__icon--{}", status_tone(ticket.status))>
                                            {status_icon}
                                        </div>
                                        <div>
                                            <h3 class="ticket-card__condo">{ticket.condo.clone()}</h3>
                                            <p class="ticket-card__area">{ticket.area.clone()}</p>
                                        </div>
                                    </div>
                                    <Badge
                                        label=ticket.urgency.as_str().to_uppercase()
                                        tone=urgency_tone(ticket.urgency)
                                    />
                                </div>

                                <p class="ticket-card__problem">{ticket.problem.clone()}</p>

                                <div class="ticket-card__footer">
                                    <div class="ticket-card__meta">
                                        <span>{icon("calendar")}{ticket.date.clone()}</span>
                                        <span>{icon("clock")}{format!("ID: #{}", ticket.id)}</span>
                                    </div>
                                    <div class="ticket-card__status">
                                        <Badge
                                            label=ticket.status.as_str()
                                            tone=status_tone(ticket.status)
                                        />
                                        <Show when=move || !terminal>
                                            <button
                                                class="ticket-card__advance"
                                                on:click={
                                                    let id = advance_id.clone();
                                                    move |_| store.advance(&id)
                                                }
                                            >
                                                "Avançar status"
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="modal">
                    <div class="modal__box">
                        <h3 class="modal__title">"Abrir Chamado"</h3>

                        {move || form_error.get().map(|e| view! { <p class="form__error">{e}</p> })}

                        <Input
                            label="Condomínio"
                            value=condo
                            on_input=Callback::new(move |v| set_condo.set(v))
                        />
                        <Input
                            label="Área"
                            value=area
                            on_input=Callback::new(move |v| set_area.set(v))
                            placeholder="Ex: Elevador 02"
                        />
                        <Textarea
                            label="Problema"
                            value=problem
                            on_input=Callback::new(move |v| set_problem.set(v))
                            placeholder="Descreva o problema encontrado..."
                        />

                        <div class="form__group">
                            <label class="form__label">"Urgência"</label>
                            <div class="maintenance-page__urgency">
                                {[Urgency::Baixa, Urgency::Media, Urgency::Alta]
                                    .into_iter()
                                    .map(|u| {
                                        view! {
                                            <button
                                                class=move || if urgency.get() == u {
                                                    "maintenance-page__tab maintenance-page__tab--active"
                                                } else {
                                                    "maintenance-page__tab"
                                                }
                                                on:click=move |_| set_urgency.set(u)
                                            >
                                                {u.as_str()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
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
