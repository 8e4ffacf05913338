use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{NavigationError, RouteTableError};
use crate::route::{Route, RouteTarget, ViewId};

/// Redirects followed before a navigation is abandoned as a loop
pub const MAX_REDIRECT_HOPS: usize = 10;

// =============================================================================
// Manifest (routes.toml)
// =============================================================================

/// Route list as declared in the manifest
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "route", default)]
    routes: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    path: String,
    name: Option<String>,
    view: Option<ViewId>,
    /// Takes precedence over `view` when both are set
    redirect: Option<String>,
}

impl TryFrom<ManifestEntry> for Route {
    type Error = RouteTableError;

    fn try_from(entry: ManifestEntry) -> Result<Self, Self::Error> {
        let route = match (entry.redirect, entry.view) {
            (Some(to), _) => Route::redirect(entry.path, to),
            (None, Some(view)) => Route::view(entry.path, view),
            (None, None) => return Err(RouteTableError::MissingTarget(entry.path)),
        };

        Ok(match entry.name {
            Some(name) => route.named(name),
            None => route,
        })
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// Outcome of resolving a path, after redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path of the route that renders the view
    pub path: String,
    pub view: ViewId,
    /// Redirects followed to get here
    pub redirects: usize,
}

/// Ordered set of routes with unique paths, populated once at startup
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a TOML route manifest
    pub fn from_manifest(text: &str) -> Result<Self, RouteTableError> {
        let manifest: Manifest = toml::from_str(text)?;

        let mut table = Self::new();
        for entry in manifest.routes {
            table.register(Route::try_from(entry)?)?;
        }
        table.check_redirects()?;
        Ok(table)
    }

    /// Every redirect must point at a registered path
    pub fn check_redirects(&self) -> Result<(), RouteTableError> {
        for route in &self.routes {
            if let RouteTarget::Redirect(to) = route.target() {
                if self.lookup(to).is_none() {
                    return Err(RouteTableError::UnknownRedirectTarget {
                        path: route.path().to_string(),
                        target: to.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The table declared in the shared site configuration
    pub fn builtin() -> Result<Self, RouteTableError> {
        Self::from_manifest(shared::CONFIG.routes_manifest)
    }

    /// Add a route. A rejected route leaves the table untouched.
    pub fn register(&mut self, route: Route) -> Result<(), RouteTableError> {
        if !route.path().starts_with('/') {
            return Err(RouteTableError::InvalidPath(route.path().to_string()));
        }
        if self.by_path.contains_key(route.path()) {
            return Err(RouteTableError::DuplicatePath(route.path().to_string()));
        }
        if let Some(name) = route.name().filter(|name| self.by_name.contains_key(*name)) {
            return Err(RouteTableError::DuplicateName(name.to_string()));
        }

        let index = self.routes.len();
        self.by_path.insert(route.path().to_string(), index);
        if let Some(name) = route.name() {
            self.by_name.insert(name.to_string(), index);
        }
        self.routes.push(route);
        Ok(())
    }

    /// Exact-match lookup by path
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&index| &self.routes[index])
    }

    pub fn lookup_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Follow redirects from `path` until a route that renders a view
    pub fn resolve(&self, path: &str) -> Result<Resolution, NavigationError> {
        let mut current = path;

        for redirects in 0..=MAX_REDIRECT_HOPS {
            let route = self
                .lookup(current)
                .ok_or_else(|| NavigationError::UnknownRoute(current.to_string()))?;

            match route.target() {
                RouteTarget::View(view) => {
                    return Ok(Resolution {
                        path: route.path().to_string(),
                        view: view.clone(),
                        redirects,
                    });
                }
                RouteTarget::Redirect(to) => current = to.as_str(),
            }
        }

        Err(NavigationError::RedirectLoop {
            path: path.to_string(),
            hops: MAX_REDIRECT_HOPS,
        })
    }

    /// Routes in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Distinct view ids rendered by the table, in registration order
    pub fn view_ids(&self) -> Vec<&ViewId> {
        let mut ids: Vec<&ViewId> = Vec::new();
        for route in &self.routes {
            if let RouteTarget::View(view) = route.target() {
                if !ids.contains(&view) {
                    ids.push(view);
                }
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
