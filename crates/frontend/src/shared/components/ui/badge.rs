use leptos::prelude::*;

/// Small status/urgency pill. `tone` maps to a CSS modifier
/// ("red", "orange", "blue", "green", "slate").
#[component]
pub fn Badge(
    #[prop(into)] label: String,
    #[prop(optional, into)] tone: MaybeProp<String>,
) -> impl IntoView {
    let badge_class = move || {
        format!(
            "badge badge--{}",
            tone.get().unwrap_or_else(|| "slate".to_string())
        )
    };

    view! { <span class=badge_class>{label}</span> }
}
