use crate::domain::a001_catalog::ui::{CatalogBrowser, ProductColumnsPanel};
use crate::domain::a002_product_media::ui::ProductMediaPanel;
use crate::domain::a003_coverage_zone::ui::CoverageZoneSummary;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="dashboard">
            <CatalogBrowser />
            <ProductColumnsPanel />
            <ProductMediaPanel />
            <CoverageZoneSummary />
        </main>
    }
}
