use leptos::prelude::*;

/// Standard page heading: title, subtitle, optional action slot on the
/// right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] actions: Option<AnyView>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h2 class="page-header__title">{title}</h2>
                {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            {actions.map(|a| view! { <div class="page-header__actions">{a}</div> })}
        </div>
    }
}
