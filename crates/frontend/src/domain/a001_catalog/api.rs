use contracts::domain::a001_catalog::aggregate::{
    normalize_names, CategoryList, DisplayType, MenuList, ProductColumn, SubcategoryList,
};
use contracts::endpoints::ResourceKey;
use contracts::shared::envelope::ApiResponse;

use crate::shared::endpoint_client::fetch_resource;

pub async fn fetch_categories() -> ApiResponse<CategoryList> {
    fetch_resource(ResourceKey::Categories)
        .await
        .map(normalize_names)
}

pub async fn fetch_menus(category: &str) -> ApiResponse<MenuList> {
    fetch_resource(ResourceKey::Menus {
        category: category.to_string(),
    })
    .await
    .map(normalize_names)
}

pub async fn fetch_subcategories(category: &str, menu: &str) -> ApiResponse<SubcategoryList> {
    fetch_resource(ResourceKey::Subcategories {
        category: category.to_string(),
        menu: menu.to_string(),
    })
    .await
    .map(normalize_names)
}

pub async fn fetch_product_columns() -> ApiResponse<Vec<ProductColumn>> {
    fetch_resource(ResourceKey::ProductColumns).await
}

pub async fn fetch_display_types() -> ApiResponse<Vec<DisplayType>> {
    fetch_resource(ResourceKey::DisplayTypes).await
}
