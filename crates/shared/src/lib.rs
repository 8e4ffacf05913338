/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Id of the host element the app mounts into
    pub mount_id: &'static str,
    /// Path resolved when the host supplies no initial path
    pub home_path: &'static str,

    /// Declarative route table, see routes.toml
    pub routes_manifest: &'static str,
    pub tasks: &'static [TaskEntry],
}

/// Heading shown by a task view, keyed by its view id
pub struct TaskEntry {
    pub view: &'static str,
    pub title: &'static str,
}

pub static CONFIG: Config = Config {
    name: "VAST Challenge",
    tagline: "Visual analytics workbench",

    mount_id: "app",
    home_path: "/",

    routes_manifest: include_str!("../routes.toml"),

    tasks: &[
        TaskEntry {
            view: "Task1",
            title: "Task 1",
        },
        TaskEntry {
            view: "Task2",
            title: "Task 2",
        },
        TaskEntry {
            view: "Task3",
            title: "Task 3",
        },
        TaskEntry {
            view: "Task4",
            title: "Task 4",
        },
    ],
};

impl Config {
    /// Look up the task entry rendered for a view id
    pub fn task(&self, view: &str) -> Option<&TaskEntry> {
        self.tasks.iter().find(|task| task.view == view)
    }
}
