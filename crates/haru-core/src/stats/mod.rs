//! Visit streak and viewing statistics.

pub mod model;

pub use model::SessionStats;
