pub mod aggregate;

pub use aggregate::{DeleteDetailImagesRequest, DeletePreviewImageRequest, MediaUpdateFields};
