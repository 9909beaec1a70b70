use leptos::prelude::*;

/// Thin horizontal progress indicator (0..=100).
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    let width = move || format!("width: {:.2}%", percent.get().clamp(0.0, 100.0));

    view! {
        <div class="progress">
            <div class="progress__fill" style=width></div>
        </div>
    }
}
