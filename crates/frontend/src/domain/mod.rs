pub mod a001_catalog;
pub mod a002_product_media;
pub mod a003_coverage_zone;
pub mod a004_campaign_template;
