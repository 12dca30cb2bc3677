use contracts::domain::a001_catalog::aggregate::{DisplayType, ProductColumn};
use leptos::prelude::*;

use super::ResourceStatus;
use crate::domain::a001_catalog::hooks::{use_display_types, use_product_columns};

/// Только видимые колонки, в порядке бэкенда
fn visible_columns(columns: &[ProductColumn]) -> Vec<ProductColumn> {
    columns.iter().filter(|c| c.visible).cloned().collect()
}

fn column_align(column: &ProductColumn) -> &'static str {
    if column.is_numeric() {
        "cell--right"
    } else {
        "cell--left"
    }
}

fn display_type_title(display_type: &DisplayType) -> String {
    match display_type.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => format!("{} - {}", display_type.name, d),
        _ => display_type.name.clone(),
    }
}

/// Настройка таблицы товаров: колонки и типы отображения
#[component]
pub fn ProductColumnsPanel() -> impl IntoView {
    let columns = use_product_columns();
    let display_types = use_display_types();

    view! {
        <section class="product-columns">
            <div class="product-columns__header">
                <h3>"Columnas de productos"</h3>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        columns.refresh();
                        display_types.refresh();
                    }
                >
                    "Actualizar"
                </button>
            </div>
            <ResourceStatus handle=columns />
            <table class="product-columns__table">
                <thead>
                    <tr>
                        {move || {
                            columns
                                .value
                                .with(|c| visible_columns(c))
                                .into_iter()
                                .map(|column| {
                                    let class = column_align(&column);
                                    view! { <th class=class>{column.label}</th> }
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
            </table>

            <h4>"Tipos de visualización"</h4>
            <ResourceStatus handle=display_types />
            <ul class="product-columns__display-types">
                {move || {
                    display_types
                        .value
                        .get()
                        .into_iter()
                        .map(|t| view! { <li>{display_type_title(&t)}</li> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
