use contracts::domain::a003_coverage_zone::aggregate::{CoverageZone, LatLng};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_catalog::ui::ResourceStatus;
use crate::domain::a003_coverage_zone::api;
use crate::domain::a003_coverage_zone::hooks::use_coverage_zones;

fn parse_point(lat: &str, lng: &str) -> Option<LatLng> {
    Some(LatLng::new(lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}

/// Имена активных зон, в которые попадает точка
fn zones_containing(zones: &[CoverageZone], point: &LatLng) -> Vec<String> {
    zones
        .iter()
        .filter(|z| z.active && z.contains(point))
        .map(|z| z.name.clone())
        .collect()
}

fn format_fee(fee: Option<f64>) -> String {
    fee.map(|f| format!("{:.0}", f)).unwrap_or_else(|| "-".to_string())
}

/// Список зон покрытия с проверкой адреса по координатам
#[component]
pub fn CoverageZoneSummary() -> impl IntoView {
    let zones = use_coverage_zones();
    let (lat, set_lat) = signal(String::new());
    let (lng, set_lng) = signal(String::new());
    let (notice, set_notice) = signal::<Option<String>>(None);

    let matches = move || {
        parse_point(&lat.get(), &lng.get()).map(|p| zones.value.with(|z| zones_containing(z, &p)))
    };

    let delete_zone = move |id: String| {
        spawn_local(async move {
            let response = api::delete_coverage_zone(&id).await;
            set_notice.set(response.message.clone());
            if response.success {
                zones.refresh();
            }
        });
    };

    view! {
        <section class="coverage-zones">
            <div class="coverage-zones__header">
                <h3>"Zonas de cobertura"</h3>
                <button class="button button--secondary" on:click=move |_| zones.refresh()>
                    "Actualizar"
                </button>
            </div>
            <ResourceStatus handle=zones />
            {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

            <table class="coverage-zones__table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Activa"</th>
                        <th>"Costo de envío"</th>
                        <th>"Puntos"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        zones
                            .value
                            .get()
                            .into_iter()
                            .map(|zone| {
                                let id = zone.id.clone();
                                view! {
                                    <tr>
                                        <td>{zone.name.clone()}</td>
                                        <td>{if zone.active { "Sí" } else { "No" }}</td>
                                        <td>{format_fee(zone.delivery_fee)}</td>
                                        <td>{zone.polygon.len()}</td>
                                        <td>
                                            {id.map(|id| view! {
                                                <button
                                                    class="button button--danger"
                                                    on:click=move |_| delete_zone(id.clone())
                                                >
                                                    "Eliminar"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="coverage-zones__check">
                <input
                    placeholder="Latitud"
                    prop:value=lat
                    on:input=move |ev| set_lat.set(event_target_value(&ev))
                />
                <input
                    placeholder="Longitud"
                    prop:value=lng
                    on:input=move |ev| set_lng.set(event_target_value(&ev))
                />
                {move || match matches() {
                    None => view! { <span></span> }.into_any(),
                    Some(names) if names.is_empty() => {
                        view! { <span>"Fuera de cobertura"</span> }.into_any()
                    }
                    Some(names) => view! { <span>{names.join(", ")}</span> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str, active: bool) -> CoverageZone {
        CoverageZone {
            id: Some(name.to_lowercase()),
            name: name.to_string(),
            active,
            delivery_fee: Some(1990.0),
            polygon: vec![
                LatLng::new(-33.0, -70.0),
                LatLng::new(-33.0, -69.0),
                LatLng::new(-32.0, -69.0),
                LatLng::new(-32.0, -70.0),
            ],
            updated_at: None,
        }
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point(" -32.5", "-69.5 "), Some(LatLng::new(-32.5, -69.5)));
        assert_eq!(parse_point("", "-69.5"), None);
        assert_eq!(parse_point("abc", "1"), None);
    }

    #[test]
    fn test_only_active_zones_match() {
        let zones = vec![zone("Centro", true), zone("Antigua", false)];
        assert_eq!(
            zones_containing(&zones, &LatLng::new(-32.5, -69.5)),
            vec!["Centro".to_string()]
        );
        assert!(zones_containing(&zones, &LatLng::new(-10.0, -69.5)).is_empty());
    }

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(Some(1990.4)), "1990");
        assert_eq!(format_fee(None), "-");
    }
}
