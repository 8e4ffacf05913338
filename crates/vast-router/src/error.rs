use thiserror::Error;

/// Errors raised while building the route table. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("Route path '{0}' is already registered")]
    DuplicatePath(String),

    #[error("Route name '{0}' is already registered")]
    DuplicateName(String),

    #[error("Route path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("Route '{0}' has neither a view nor a redirect")]
    MissingTarget(String),

    #[error("Route '{path}' redirects to unregistered path '{target}'")]
    UnknownRedirectTarget { path: String, target: String },

    #[error("Failed to parse route manifest")]
    Manifest(#[from] toml::de::Error),
}

/// Errors from a single navigation. The previous state is kept when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No route matches '{0}'")]
    UnknownRoute(String),

    #[error("No route is named '{0}'")]
    UnknownRouteName(String),

    #[error("Redirects from '{path}' exceeded {hops} hops")]
    RedirectLoop { path: String, hops: usize },
}
