mod task;

use leptos::prelude::*;
use vast_router::ViewId;

pub use task::{Task1View, Task2View, Task3View, Task4View};

/// Pages the renderer knows how to draw, keyed by view id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Task1,
    Task2,
    Task3,
    Task4,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Task1, Page::Task2, Page::Task3, Page::Task4];

    pub fn view_id(self) -> &'static str {
        match self {
            Page::Task1 => "Task1",
            Page::Task2 => "Task2",
            Page::Task3 => "Task3",
            Page::Task4 => "Task4",
        }
    }

    pub fn from_view_id(id: &ViewId) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.view_id() == id.as_str())
    }

    pub fn render(self) -> AnyView {
        match self {
            Page::Task1 => view! { <Task1View /> }.into_any(),
            Page::Task2 => view! { <Task2View /> }.into_any(),
            Page::Task3 => view! { <Task3View /> }.into_any(),
            Page::Task4 => view! { <Task4View /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CONFIG;

    #[test]
    fn test_from_view_id() {
        for page in Page::ALL {
            assert_eq!(Page::from_view_id(&ViewId::new(page.view_id())), Some(page));
        }
        assert_eq!(Page::from_view_id(&ViewId::new("task1")), None);
        assert_eq!(Page::from_view_id(&ViewId::new("NotFound")), None);
    }

    #[test]
    fn test_every_page_has_a_title() {
        for page in Page::ALL {
            assert!(CONFIG.task(page.view_id()).is_some(), "missing task entry for {:?}", page);
        }
    }
}
