//! Static project catalog backing the home cards and detail routes.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio entry. `id` is the `/projects/:id` route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub year: u16,
    pub link: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "edge-cache",
        title: "Edge Cache",
        summary: "A write-through HTTP cache that runs next to the origin.",
        description: "Sits in front of a slow origin and serves hot responses from memory. \
                      Entries are keyed by method, path, and the headers listed in Vary, and \
                      expire on a per-route TTL.",
        tags: &["Rust", "Tokio", "HTTP"],
        year: 2025,
        link: Some("https://github.com/"),
    },
    Project {
        id: "field-notes",
        title: "Field Notes",
        summary: "Markdown notebook with offline sync between devices.",
        description: "Notes are stored as plain files and merged with a three-way diff when \
                      two devices edit the same page. The editor renders previews as you type.",
        tags: &["TypeScript", "SQLite"],
        year: 2024,
        link: None,
    },
    Project {
        id: "transit-board",
        title: "Transit Board",
        summary: "Live departure board for a city bus network.",
        description: "Polls the public realtime feed, reconciles it with the published \
                      timetable, and shows the next departures for a stop with delay estimates.",
        tags: &["Go", "GTFS", "WebSockets"],
        year: 2023,
        link: Some("https://github.com/"),
    },
    Project {
        id: "palette-lab",
        title: "Palette Lab",
        summary: "Color tool that builds accessible palettes from one seed color.",
        description: "Derives tints and shades in HSL space and checks every foreground and \
                      background pair against WCAG contrast ratios.",
        tags: &["Rust", "WASM", "Leptos"],
        year: 2023,
        link: None,
    },
];

/// Result of resolving a `/projects/:id` segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectLookup {
    Found(&'static Project),
    /// Carries the id that was requested.
    NotFound(String),
}

pub fn lookup_project(id: &str) -> ProjectLookup {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .map_or_else(|| ProjectLookup::NotFound(id.to_owned()), ProjectLookup::Found)
}
