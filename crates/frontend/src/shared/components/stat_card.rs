use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard indicator card: icon, label, value and a short trend note.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] trend: MaybeProp<String>,
    /// Accent modifier appended to the card class, e.g. "blue".
    #[prop(optional, into)] accent: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || {
        match accent.get() {
            Some(a) if !a.is_empty() => format!("stat-card stat-card--{}", a),
            _ => "stat-card".to_string(),
        }
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
            {move || trend.get().map(|t| view! { <p class="stat-card__trend">{t}</p> })}
        </div>
    }
}
