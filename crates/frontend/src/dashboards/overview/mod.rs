use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::domain::checkin::store::use_cleaning_logs;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Checklists closed per weekday, mock series behind the activity strip.
const WEEKLY_ACTIVITY: [(&str, u32, u32); 7] = [
    ("Seg", 12, 2),
    ("Ter", 15, 5),
    ("Qua", 10, 3),
    ("Qui", 18, 1),
    ("Sex", 20, 6),
    ("Sab", 8, 2),
    ("Dom", 5, 0),
];

/// Landing dashboard for Administrador and Síndico: headline indicators,
/// the weekly activity strip and the latest QR check-in entries.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = use_auth();
    let logs = use_cleaning_logs();
    let navigate = use_navigate();

    let user = auth.current();
    let is_admin = user.as_ref().map(|u| u.is_admin()).unwrap_or(false);
    let greeting = user
        .as_ref()
        .map(|u| format!("Olá, {}", u.name))
        .unwrap_or_else(|| "Olá".to_string());
    let summary = if is_admin {
        "Visão global de todos os condomínios."
    } else {
        "Resumo operacional do seu condomínio."
    };

    let max_count = WEEKLY_ACTIVITY
        .iter()
        .map(|(_, checklists, _)| *checklists)
        .max()
        .unwrap_or(1)
        .max(1);

    let to_qr = {
        let nav = navigate.clone();
        move |_| nav("/qr-scan", Default::default())
    };
    let to_condos = move |_| navigate("/condos", Default::default());

    view! {
        <div class="page overview-page">
            <div class="overview-page__head">
                <div>
                    <h2 class="overview-page__greeting">{greeting}</h2>
                    <p class="overview-page__summary">{summary}</p>
                </div>
                <div class="overview-page__actions">
                    <button class="button button--secondary" on:click=to_qr>
                        {icon("qr-code")}
                        <span>"Ver QR Codes"</span>
                    </button>
                    <button class="button button--primary" on:click=to_condos>
                        {icon("plus")}
                        <span>"Nova Tarefa"</span>
                    </button>
                </div>
            </div>

            <div class="overview-page__stats">
                <StatCard
                    label=if is_admin { "Condomínios Ativos" } else { "Blocos Atendidos" }
                    icon_name="building"
                    value=if is_admin { "24" } else { "04" }
                    trend=if is_admin { "+2 novos" } else { "100% ativos" }
                    accent="blue"
                />
                <StatCard
                    label="Limpezas Pendentes"
                    icon_name="clipboard"
                    value="08"
                    trend="Prioridade alta"
                    accent="orange"
                />
                <StatCard
                    label="Concluídos Hoje"
                    icon_name="check-circle"
                    value="16"
                    trend="Dentro da meta"
                    accent="green"
                />
                <StatCard
                    label="Zonas de Risco"
                    icon_name="alert"
                    value="03"
                    trend="Atraso de +4h"
                    accent="red"
                />
            </div>

            <div class="overview-page__columns">
                <div class="overview-page__main">
                    <section class="panel overview-page__chart">
                        <h3 class="panel__title">
                            {icon("dashboard")}
                            <span>"Performance Operacional"</span>
                        </h3>
                        <div class="overview-page__bars">
                            {WEEKLY_ACTIVITY
                                .into_iter()
                                .map(|(day, checklists, alerts)| {
                                    let height = checklists * 100 / max_count;
                                    view! {
                                        <div
                                            class="overview-page__bar-col"
                                            title=format!("{} vistorias, {} alertas", checklists, alerts)
                                        >
                                            <div
                                                class="overview-page__bar"
                                                style:height=format!("{}%", height)
                                            ></div>
                                            <span class="overview-page__bar-label">{day}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <div class="overview-page__panels">
                        <section class="panel panel--danger">
                            <h4 class="panel__title">
                                {icon("alert")}
                                <span>"Áreas sem Limpeza (Atrasadas)"</span>
                            </h4>
                            <div class="overview-page__late">
                                <div class="overview-page__late-row">
                                    <span>"Garagem G1"</span>
                                    <span class="overview-page__late-delay">"6h ATRASO"</span>
                                </div>
                                <div class="overview-page__late-row">
                                    <span>"Hall Entrada"</span>
                                    <span class="overview-page__late-delay">"4h ATRASO"</span>
                                </div>
                            </div>
                        </section>

                        <section class="panel panel--success">
                            <h4 class="panel__title">
                                {icon("check-circle")}
                                <span>"Eficiência Mensal"</span>
                            </h4>
                            <div class="overview-page__efficiency">
                                <span class="overview-page__efficiency-value">"98.2%"</span>
                                <span class="overview-page__efficiency-trend">"+2.4% vs mês ant."</span>
                            </div>
                            <div class="overview-page__efficiency-track">
                                <div class="overview-page__efficiency-fill" style:width="98%"></div>
                            </div>
                        </section>
                    </div>
                </div>

                <section class="panel overview-page__logs">
                    <div class="overview-page__logs-head">
                        <h3 class="panel__title">
                            {icon("clock")}
                            <span>"Logs de QR Code"</span>
                        </h3>
                        <A href="/qr-scan" attr:class="overview-page__logs-link">"VER TODOS"</A>
                    </div>
                    <For
                        each=move || logs.logs.with(|l| l.iter().take(5).cloned().collect::<Vec<_>>())
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
                                        <span class="log-entry__status">{log.status.clone()}</span>
                                    </p>
                                </div>
                            }
                        }
                    />
                </section>
            </div>
        </div>
    }
}
