use contracts::domain::a003_coverage_zone::aggregate::CoverageZone;

use super::api;
use crate::shared::resource::{use_resource, FailurePolicy, ResourceHandle};

/// Зоны покрытия; при ошибке обновления остаётся последний загруженный список
pub fn use_coverage_zones() -> ResourceHandle<Vec<CoverageZone>> {
    use_resource(
        || Some(()),
        |_| api::fetch_coverage_zones(),
        FailurePolicy::KeepStale,
    )
}
