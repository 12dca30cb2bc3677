pub mod panel;

pub use panel::ProductMediaPanel;
