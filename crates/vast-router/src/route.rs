use serde::Deserialize;
use std::fmt;

/// Opaque token naming the view an external renderer should display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a matched route does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render this view
    View(ViewId),
    /// Re-resolve another path instead
    Redirect(String),
}

/// A static association between a path and a view or redirect target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    name: Option<String>,
    target: RouteTarget,
}

impl Route {
    pub fn view(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(view),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}
