use leptos::prelude::*;

/// Shown above the last good view when a navigation fails
#[component]
pub fn NotFound(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="mb-6 border border-dashed border-[var(--rule)] p-4">
            <strong>"404"</strong> " " {message}
        </div>
    }
}
