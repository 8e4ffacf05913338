use crate::error::NavigationError;
use crate::route::ViewId;
use crate::table::RouteTable;

/// What the navigator currently displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    /// No navigation has succeeded yet
    #[default]
    Unresolved,
    Resolved { path: String, view: ViewId },
}

impl NavigationState {
    pub fn current_path(&self) -> Option<&str> {
        match self {
            Self::Unresolved => None,
            Self::Resolved { path, .. } => Some(path),
        }
    }

    pub fn view(&self) -> Option<&ViewId> {
        match self {
            Self::Unresolved => None,
            Self::Resolved { view, .. } => Some(view),
        }
    }
}

/// Resolves path changes against a route table and tracks the active view.
///
/// A failed navigation keeps the last resolved view and is reported through
/// [`Navigator::failure`] until the next successful one.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    /// Resolved by `start` when the host supplies no initial path
    home_path: String,
    state: NavigationState,
    failure: Option<NavigationError>,
}

impl Navigator {
    /// Navigator with the home path from the shared site configuration
    pub fn new(table: RouteTable) -> Self {
        Self::with_home_path(table, shared::CONFIG.home_path)
    }

    pub fn with_home_path(table: RouteTable, home_path: impl Into<String>) -> Self {
        Self {
            table,
            home_path: home_path.into(),
            state: NavigationState::Unresolved,
            failure: None,
        }
    }

    /// Initial navigation on load, falling back to the home path without a host path
    pub fn start(&mut self, initial_path: Option<&str>) -> Result<ViewId, NavigationError> {
        let path = match initial_path.filter(|p| !p.is_empty()) {
            Some(path) => path.to_string(),
            None => self.home_path.clone(),
        };
        self.navigate(&path)
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    pub fn navigate(&mut self, path: &str) -> Result<ViewId, NavigationError> {
        match self.table.resolve(path) {
            Ok(resolution) => {
                log::debug!(
                    "Resolved '{}' to view {} at '{}' ({} redirects)",
                    path,
                    resolution.view,
                    resolution.path,
                    resolution.redirects
                );
                self.state = NavigationState::Resolved {
                    path: resolution.path,
                    view: resolution.view.clone(),
                };
                self.failure = None;
                Ok(resolution.view)
            }
            Err(err) => {
                log::warn!("Navigation to '{}' failed: {}", path, err);
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Navigate to the route registered under `name`
    pub fn navigate_named(&mut self, name: &str) -> Result<ViewId, NavigationError> {
        let Some(path) = self.table.lookup_name(name).map(|route| route.path().to_string()) else {
            let err = NavigationError::UnknownRouteName(name.to_string());
            log::warn!("Navigation failed: {}", err);
            self.failure = Some(err.clone());
            return Err(err);
        };
        self.navigate(&path)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Error from the latest navigation, if it failed
    pub fn failure(&self) -> Option<&NavigationError> {
        self.failure.as_ref()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
