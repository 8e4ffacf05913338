use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};
use shared::CONFIG;
use vast_router::Navigator;

use crate::components::{NavBar, NavLink, NotFound};
use crate::pages::Page;

/// Navigate to `requested` and return the path the address bar should show
/// instead, if resolution landed somewhere else through a redirect
pub fn replacement_path(nav: &mut Navigator, requested: &str) -> Option<String> {
    nav.navigate(requested).ok()?;
    nav.state()
        .current_path()
        .filter(|path| *path != requested)
        .map(str::to_string)
}

#[component]
pub fn App(navigator: Navigator) -> impl IntoView {
    view! {
        <Router>
            <Shell navigator=navigator />
        </Router>
    }
}

/// Keeps the navigator in step with the address bar and renders its active view
#[component]
fn Shell(navigator: Navigator) -> impl IntoView {
    let links = NavLink::from_table(navigator.table());
    let navigator = RwSignal::new(navigator);
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let requested = location.pathname.get();
        let replacement = navigator.try_update(|nav| replacement_path(nav, &requested)).flatten();

        if let Some(path) = replacement {
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let active = Memo::new(move |_| navigator.with(|nav| nav.state().view().cloned()));
    let failure = Memo::new(move |_| navigator.with(|nav| nav.failure().map(ToString::to_string)));

    view! {
        <div class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold mb-2">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)]">{CONFIG.tagline}</div>
                <NavBar links=links />
            </header>

            {move || failure.get().map(|message| view! { <NotFound message=message /> })}

            <main>
                {move || match active.get().as_ref().and_then(Page::from_view_id) {
                    Some(page) => page.render(),
                    None => view! { <p>"Nothing to show yet."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vast_router::{RouteTable, ViewId};

    fn navigator() -> Navigator {
        Navigator::new(RouteTable::builtin().unwrap())
    }

    #[test]
    fn test_redirect_replaces_address() {
        let mut nav = navigator();
        assert_eq!(replacement_path(&mut nav, "/"), Some("/task1".to_string()));
        assert_eq!(nav.state().view(), Some(&ViewId::new("Task1")));
    }

    #[test]
    fn test_direct_route_keeps_address() {
        let mut nav = navigator();
        assert_eq!(replacement_path(&mut nav, "/task2"), None);
        assert_eq!(nav.state().current_path(), Some("/task2"));
    }

    #[test]
    fn test_unknown_route_keeps_address_and_view() {
        let mut nav = navigator();
        replacement_path(&mut nav, "/task4");

        assert_eq!(replacement_path(&mut nav, "/unknown"), None);
        assert_eq!(nav.state().current_path(), Some("/task4"));
        assert!(nav.failure().is_some());
    }
}
