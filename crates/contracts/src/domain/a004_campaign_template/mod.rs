pub mod aggregate;

pub use aggregate::{CampaignTemplate, TemplateButton, TemplateHeader};
