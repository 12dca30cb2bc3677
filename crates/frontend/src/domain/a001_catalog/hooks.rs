use contracts::domain::a001_catalog::aggregate::{
    CategoryList, DisplayType, MenuList, ProductColumn, SubcategoryList,
};
use leptos::prelude::*;

use super::api;
use crate::shared::resource::{use_resource, FailurePolicy, ResourceHandle};

// Каталожные списки при ошибке загрузки сбрасываются в пустые

/// Пустая строка равносильна отсутствию выбора
fn selected(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn menus_key(category: Option<String>) -> Option<String> {
    selected(category)
}

fn subcategories_key(category: Option<String>, menu: Option<String>) -> Option<(String, String)> {
    Some((selected(category)?, selected(menu)?))
}

pub fn use_available_categories() -> ResourceHandle<CategoryList> {
    use_resource(
        || Some(()),
        |_| api::fetch_categories(),
        FailurePolicy::Reset,
    )
}

/// Меню выбранной категории; без категории запрос не выполняется
pub fn use_available_menus(category: Signal<Option<String>>) -> ResourceHandle<MenuList> {
    use_resource(
        move || menus_key(category.get()),
        |category: String| async move { api::fetch_menus(&category).await },
        FailurePolicy::Reset,
    )
}

pub fn use_available_subcategories(
    category: Signal<Option<String>>,
    menu: Signal<Option<String>>,
) -> ResourceHandle<SubcategoryList> {
    use_resource(
        move || subcategories_key(category.get(), menu.get()),
        |(category, menu): (String, String)| async move {
            api::fetch_subcategories(&category, &menu).await
        },
        FailurePolicy::Reset,
    )
}

pub fn use_product_columns() -> ResourceHandle<Vec<ProductColumn>> {
    use_resource(
        || Some(()),
        |_| api::fetch_product_columns(),
        FailurePolicy::Reset,
    )
}

pub fn use_display_types() -> ResourceHandle<Vec<DisplayType>> {
    use_resource(
        || Some(()),
        |_| api::fetch_display_types(),
        FailurePolicy::Reset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_key_requires_category() {
        assert_eq!(menus_key(None), None);
        assert_eq!(menus_key(Some("   ".into())), None);
        assert_eq!(menus_key(Some(" Bebidas ".into())), Some("Bebidas".into()));
    }

    #[test]
    fn test_subcategories_key_requires_both() {
        assert_eq!(subcategories_key(Some("Bebidas".into()), None), None);
        assert_eq!(subcategories_key(None, Some("Jugos".into())), None);
        assert_eq!(subcategories_key(Some("".into()), Some("Jugos".into())), None);
        assert_eq!(
            subcategories_key(Some("Bebidas".into()), Some("Jugos".into())),
            Some(("Bebidas".to_string(), "Jugos".to_string()))
        );
    }
}
