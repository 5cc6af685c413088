pub mod backup;
pub mod core;
pub mod plan;
pub mod progress;
