//! Startup sample data.
//!
//! The original demo bootstraps five todos so the front-end has something to
//! show. `Fixed` keeps `completed` at false for reproducible test runs;
//! `Demo` rolls it randomly like the original did.

use crate::config::SeedMode;
use crate::store::TodoStore;

pub const SAMPLE_TITLES: [&str; 5] = [
    "Buy milk",
    "Eat pizza",
    "Update tutorial",
    "Study Vue",
    "Go kayaking",
];

/// Insert the sample todos into a freshly built store, then log the full
/// resulting list.
pub fn apply(store: &mut TodoStore, mode: SeedMode) {
    if mode == SeedMode::Off {
        return;
    }
    for title in SAMPLE_TITLES {
        let completed = match mode {
            SeedMode::Demo => rand::random(),
            _ => false,
        };
        if let Err(err) = store.create(title.to_string(), completed) {
            tracing::error!(%err, title, "failed to seed todo");
        }
    }
    for todo in store.list() {
        tracing::info!(
            id = todo.id,
            title = %todo.title,
            completed = todo.completed,
            "seeded todo"
        );
    }
}
