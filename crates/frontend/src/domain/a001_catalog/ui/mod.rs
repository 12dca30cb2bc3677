pub mod browser;
pub mod columns;

pub use browser::{CatalogBrowser, ResourceStatus};
pub use columns::ProductColumnsPanel;
