// Persistence of scored stories: one append-only JSON file per question + competency.

pub mod handlers;
pub mod store;
