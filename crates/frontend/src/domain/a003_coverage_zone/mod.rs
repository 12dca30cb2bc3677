pub mod api;
pub mod hooks;
pub mod ui;

pub use hooks::use_coverage_zones;
