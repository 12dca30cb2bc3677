pub mod api;
pub mod hooks;
pub mod ui;

pub use hooks::{
    use_available_categories, use_available_menus, use_available_subcategories,
    use_display_types, use_product_columns,
};
