mod nav_bar;
mod not_found;

pub use nav_bar::{NavBar, NavLink};
pub use not_found::NotFound;
