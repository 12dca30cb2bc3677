use leptos::prelude::*;

use crate::domain::a001_catalog::hooks::{
    use_available_categories, use_available_menus, use_available_subcategories,
};
use crate::shared::resource::ResourceHandle;

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn name_option(name: String) -> impl IntoView {
    let label = name.clone();
    view! { <option value=name>{label}</option> }
}

/// Каскадный выбор категория → меню → подкатегория
#[component]
pub fn CatalogBrowser() -> impl IntoView {
    let (category, set_category) = signal::<Option<String>>(None);
    let (menu, set_menu) = signal::<Option<String>>(None);

    let categories = use_available_categories();
    let menus = use_available_menus(category.into());
    let subcategories = use_available_subcategories(category.into(), menu.into());

    view! {
        <section class="catalog-browser">
            <div class="catalog-browser__header">
                <h3>"Catálogo"</h3>
                <button class="button button--secondary" on:click=move |_| categories.refresh()>
                    "Actualizar"
                </button>
            </div>

            <label>"Categoría"</label>
            <select on:change=move |ev| {
                set_menu.set(None);
                set_category.set(none_if_empty(event_target_value(&ev)));
            }>
                <option value="">"Seleccione una categoría"</option>
                {move || {
                    categories
                        .value
                        .get()
                        .into_iter()
                        .map(name_option)
                        .collect_view()
                }}
            </select>
            <ResourceStatus handle=categories />

            <label>"Menú"</label>
            <select
                disabled=move || category.get().is_none()
                on:change=move |ev| set_menu.set(none_if_empty(event_target_value(&ev)))
            >
                <option value="">"Seleccione un menú"</option>
                {move || {
                    menus
                        .value
                        .get()
                        .into_iter()
                        .map(name_option)
                        .collect_view()
                }}
            </select>
            <ResourceStatus handle=menus />

            <label>"Subcategorías"</label>
            <ResourceStatus handle=subcategories />
            <ul class="catalog-browser__list">
                {move || {
                    subcategories
                        .value
                        .get()
                        .into_iter()
                        .map(|name| view! { <li>{name}</li> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

/// Индикатор загрузки и текст ошибки ресурса
#[component]
pub fn ResourceStatus<T>(handle: ResourceHandle<T>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        {move || {
            handle
                .loading
                .get()
                .then(|| view! { <span class="resource-loading">"Cargando..."</span> })
        }}
        {move || {
            handle
                .error
                .get()
                .map(|err| view! { <div class="resource-error">{err}</div> })
        }}
    }
}
