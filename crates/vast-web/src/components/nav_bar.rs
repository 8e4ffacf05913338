use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;
use vast_router::{RouteTable, RouteTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    /// One link per named route, in table order, labelled with the task title when there is one
    pub fn from_table(table: &RouteTable) -> Vec<Self> {
        table
            .routes()
            .iter()
            .filter_map(|route| {
                let name = route.name()?;
                let title: Option<&str> = match route.target() {
                    RouteTarget::View(view) => CONFIG.task(view.as_str()).map(|task| task.title),
                    RouteTarget::Redirect(_) => None,
                };
                Some(NavLink {
                    label: title.unwrap_or(name).to_string(),
                    href: route.path().to_string(),
                })
            })
            .collect()
    }
}

#[component]
pub fn NavBar(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <nav class="mt-4 space-x-4">
            {links
                .into_iter()
                .map(|link| view! { <A href=link.href>{link.label}</A> })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vast_router::{Route, ViewId};

    #[test]
    fn test_links_skip_unnamed_redirect() {
        let table = RouteTable::builtin().unwrap();
        let links = NavLink::from_table(&table);

        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/task1", "/task2", "/task3", "/task4"]);
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Task 1", "Task 2", "Task 3", "Task 4"]);
    }

    #[test]
    fn test_label_falls_back_to_route_name() {
        let mut table = RouteTable::new();
        table
            .register(Route::view("/extra", ViewId::new("Extra")).named("extra"))
            .unwrap();

        let links = NavLink::from_table(&table);
        assert_eq!(
            links,
            [NavLink {
                label: "extra".to_string(),
                href: "/extra".to_string(),
            }]
        );
    }
}
