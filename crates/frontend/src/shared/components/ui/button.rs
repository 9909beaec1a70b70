use leptos::prelude::*;

/// Action button. Modal forms use the "secondary" variant for the
/// dismiss action; everything else is primary.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if variant.get().as_deref() == Some("secondary") {
            "button button--secondary"
        } else {
            "button button--primary"
        }
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
