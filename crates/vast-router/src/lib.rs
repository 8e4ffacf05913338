//! Route-to-view resolution for the VAST Challenge task shell
//!
//! A [`RouteTable`] holds the static list of paths, each either rendering a
//! view or redirecting elsewhere. A [`Navigator`] owns the table and the
//! current [`NavigationState`], resolving every path change into the id of
//! the view to display. Rendering is left to the caller.

mod error;
mod navigator;
mod route;
mod table;

pub use error::{NavigationError, RouteTableError};
pub use navigator::{NavigationState, Navigator};
pub use route::{Route, RouteTarget, ViewId};
pub use table::{MAX_REDIRECT_HOPS, Resolution, RouteTable};
