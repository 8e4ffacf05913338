//! Builds the navigator and mounts the app into the host document

use anyhow::{Context, Result};
use leptos::prelude::*;
use shared::CONFIG;
use thiserror::Error;
use vast_router::{Navigator, RouteTable};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::App;
use crate::pages::Page;

#[derive(Debug, Error)]
#[error("Mount target '#{id}' not found in the host document")]
pub struct MountTargetMissingError {
    pub id: String,
}

/// Any error here halts startup before anything is mounted
pub fn start() -> Result<()> {
    let table = RouteTable::builtin().context("Failed to load route table")?;
    ensure_renderable(&table)?;

    let target = mount_target(CONFIG.mount_id)?;

    let mut navigator = Navigator::new(table);
    let initial_path = host_path();
    if navigator.start(initial_path.as_deref()).is_err() {
        log::warn!("No view for initial path {:?}", initial_path);
    }

    log::info!("{} starting", CONFIG.name);
    leptos::mount::mount_to(target, move || view! { <App navigator=navigator /> }).forget();
    Ok(())
}

/// Every view id in the table needs a page to render it
pub fn ensure_renderable(table: &RouteTable) -> Result<()> {
    for id in table.view_ids() {
        if Page::from_view_id(id).is_none() {
            anyhow::bail!("No page renders view id '{}'", id);
        }
    }
    Ok(())
}

fn mount_target(id: &str) -> Result<HtmlElement, MountTargetMissingError> {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    require_mount_target(id, element)
}

/// Startup stops here when the host document has no element `#id`
pub fn require_mount_target<T>(id: &str, element: Option<T>) -> Result<T, MountTargetMissingError> {
    element.ok_or_else(|| MountTargetMissingError { id: id.to_string() })
}

fn host_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vast_router::{Route, ViewId};

    #[test]
    fn test_builtin_table_is_renderable() {
        let table = RouteTable::builtin().unwrap();
        assert!(ensure_renderable(&table).is_ok());
    }

    #[test]
    fn test_unrenderable_view_fails_startup() {
        let mut table = RouteTable::builtin().unwrap();
        table.register(Route::view("/task5", ViewId::new("Task5"))).unwrap();

        let err = ensure_renderable(&table).unwrap_err();
        assert!(err.to_string().contains("Task5"));
    }

    #[test]
    fn test_missing_mount_target_fails() {
        let err = require_mount_target::<()>(CONFIG.mount_id, None).unwrap_err();
        assert_eq!(err.id, "app");
        assert_eq!(err.to_string(), "Mount target '#app' not found in the host document");
    }

    #[test]
    fn test_present_mount_target_is_returned() {
        assert_eq!(require_mount_target("app", Some(7)).unwrap(), 7);
    }
}
