use contracts::domain::reports::{filter_reports, monthly_metrics, seed_reports, ReportFile};
use leptos::prelude::*;

use crate::domain::condominium::store::use_condos;
use crate::shared::components::page_header::PageHeader;
use crate::shared::dialog;
use crate::shared::icons::icon;

/// Reports screen: history filter, the list of previously generated
/// files and the quick-export panel. Document generation itself stays a
/// stub; only the list filtering is live.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let condos = use_condos();
    let (search, set_search) = signal(String::new());

    let reports = move || {
        let all = seed_reports();
        filter_reports(&all, &search.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let condo_options = move || {
        condos
            .condos
            .with(|c| c.iter().map(|c| c.name.clone()).collect::<Vec<_>>())
    };

    view! {
        <div class="page reports-page">
            <PageHeader
                title="Relatórios e Histórico"
                subtitle="Acesse dados históricos e gere documentos oficiais."
            />

            <div class="reports-page__columns">
                <div class="reports-page__main">
                    <section class="panel reports-page__filter">
                        <h3 class="panel__title">
                            {icon("search")}
                            <span>"Filtrar Histórico"</span>
                        </h3>
                        <div class="reports-page__filter-grid">
                            <div class="form__group">
                                <label class="form__label">"Período"</label>
                                <div class="reports-page__date-field">
                                    {icon("calendar")}
                                    <input
                                        type="text"
                                        class="form__input"
                                        placeholder="Selecionar data"
                                        prop:value=move || search.get()
                                        on:input=move |ev| set_search.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Condomínio"</label>
                                <select class="form__input">
                                    <option>"Todos os condomínios"</option>
                                    {move || condo_options()
                                        .into_iter()
                                        .map(|name| view! { <option>{name}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <button
                            class="button button--primary reports-page__generate"
                            on:click=move |_| dialog::notify(
                                "Gerando relatório customizado com os filtros selecionados.",
                            )
                        >
                            "Gerar Relatório Customizado"
                        </button>
                    </section>

                    <section class="reports-page__recent">
                        <h3 class="panel__title">
                            {icon("clock")}
                            <span>"Gerados Recentemente"</span>
                        </h3>
                        <For
                            each=reports
                            key=|r| r.title
                            children=move |report: ReportFile| {
                                view! { <ReportRow report /> }
                            }
                        />
                    </section>
                </div>

                <div class="reports-page__side">
                    <section class="panel panel--accent reports-page__export">
                        <h3 class="panel__title">"Exportação Rápida"</h3>
                        <p class="reports-page__export-hint">
                            "Gere um PDF completo da situação atual de todos os seus empreendimentos em um clique."
                        </p>
                        <button
                            class="button button--light"
                            on:click=move |_| dialog::notify(
                                "Gerando PDF consolidado de todos os empreendimentos.",
                            )
                        >
                            {icon("download")}
                            <span>"Download PDF Completo"</span>
                        </button>
                        <button
                            class="button button--ghost"
                            on:click=move |_| dialog::notify(
                                "Preparando envio do relatório por e-mail.",
                            )
                        >
                            {icon("share")}
                            <span>"Compartilhar via E-mail"</span>
                        </button>
                    </section>

                    <section class="panel reports-page__metrics">
                        <h3 class="panel__title">"Métricas do Mês"</h3>
                        {monthly_metrics()
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <div class="metric-row">
                                        <span class="metric-row__label">{m.label}</span>
                                        <span class="metric-row__value">{m.value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReportRow(report: ReportFile) -> impl IntoView {
    let title = report.title;
    let whatsapp = move |_| {
        dialog::notify(&format!("Enviando \"{}\" via WhatsApp.", title));
    };
    let download = move |_| {
        dialog::notify(&format!("Baixando \"{}\" ({}).", title, report.size));
    };

    view! {
        <div class="report-row">
            <div class="report-row__info">
                <div class="report-row__icon">{icon("file-text")}</div>
                <div>
                    <h4 class="report-row__title">{report.title}</h4>
                    <p class="report-row__meta">
                        {icon("calendar")}
                        <span>{format!("{} • {}", report.period, report.kind)}</span>
                    </p>
                </div>
            </div>
            <div class="report-row__actions">
                <button
                    class="report-row__action"
                    title="Enviar via WhatsApp"
                    on:click=whatsapp
                >
                    {icon("share")}
                </button>
                <button
                    class="report-row__action"
                    title="Baixar PDF"
                    on:click=download
                >
                    {icon("download")}
                </button>
            </div>
        </div>
    }
}
