//! Domain records exposed to the list engine and services.

pub mod campaign;
pub mod follow_up;
pub mod invoice;
pub mod lead;
pub mod project;
pub mod prospect;
pub mod record;
pub mod search_history;
pub mod types;
