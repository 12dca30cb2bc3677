pub mod api_utils;
pub mod endpoint_client;
pub mod resource;
