pub mod hook;
pub mod state;

pub use hook::{use_resource, ResourceHandle};
pub use state::{Completion, FailurePolicy, ResourceCell, ResourcePhase, ResourceState};
