use leptos::prelude::*;
use shared::CONFIG;

/// Placeholder body shared by the task views
#[component]
fn TaskPage(view_id: &'static str) -> impl IntoView {
    let title = CONFIG.task(view_id).map_or(view_id, |task| task.title);

    view! {
        <article id=view_id.to_lowercase() class="task-view">
            <h2>{title}</h2>
            <p>"Placeholder view."</p>
        </article>
    }
}

#[component]
pub fn Task1View() -> impl IntoView {
    view! { <TaskPage view_id="Task1" /> }
}

#[component]
pub fn Task2View() -> impl IntoView {
    view! { <TaskPage view_id="Task2" /> }
}

#[component]
pub fn Task3View() -> impl IntoView {
    view! { <TaskPage view_id="Task3" /> }
}

#[component]
pub fn Task4View() -> impl IntoView {
    view! { <TaskPage view_id="Task4" /> }
}
