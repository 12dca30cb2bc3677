pub mod backend_url;
pub mod envelope;
pub mod validation;
