use contracts::domain::a002_product_media::aggregate::{FIELD_MARKET_CODE, FIELD_SKU};
use contracts::shared::envelope::ApiResponse;
use leptos::html::Input;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use crate::domain::a002_product_media::api;

/// "1, 3 ,5" -> [1, 3, 5]; нечисловые элементы отбрасываются
fn parse_numbers(input: &str) -> Vec<u32> {
    input
        .split(',')
        .filter_map(|n| n.trim().parse().ok())
        .collect()
}

fn build_form(sku: &str, market_code: &str, files: &NodeRef<Input>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str(FIELD_SKU, sku)?;
    form.append_with_str(FIELD_MARKET_CODE, market_code)?;
    if let Some(files) = files.get_untracked().and_then(|input| input.files()) {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                form.append_with_blob_and_filename("imagenes", &file, &file.name())?;
            }
        }
    }
    Ok(form)
}

/// Управление изображениями товара
#[component]
pub fn ProductMediaPanel() -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (sku, set_sku) = signal(String::new());
    let (market_code, set_market_code) = signal(String::new());
    let (numbers, set_numbers) = signal(String::new());
    let (result, set_result) = signal::<Option<ApiResponse<Value>>>(None);
    let (busy, set_busy) = signal(false);
    let files_ref = NodeRef::<Input>::new();

    let finish = move |response: ApiResponse<Value>| {
        set_busy.set(false);
        set_result.set(Some(response));
    };

    let on_delete_detail = move |_| {
        set_busy.set(true);
        let (code, sku, numbers) = (code.get(), sku.get(), parse_numbers(&numbers.get()));
        spawn_local(async move {
            finish(api::delete_detail_images(&code, &sku, numbers).await);
        });
    };

    let on_delete_preview = move |_| {
        set_busy.set(true);
        let (code, sku) = (code.get(), sku.get());
        spawn_local(async move {
            finish(api::delete_preview_image(&code, &sku).await);
        });
    };

    let on_upload = move |_| {
        let form = match build_form(&sku.get(), &market_code.get(), &files_ref) {
            Ok(form) => form,
            Err(e) => {
                log::error!("Failed to build media form: {:?}", e);
                return;
            }
        };
        set_busy.set(true);
        let code = code.get();
        spawn_local(async move {
            finish(api::update_media(&code, form).await);
        });
    };

    view! {
        <section class="product-media">
            <h3>"Multimedia del producto"</h3>
            <input placeholder="Código" prop:value=code on:input=move |ev| set_code.set(event_target_value(&ev)) />
            <input placeholder="SKU" prop:value=sku on:input=move |ev| set_sku.set(event_target_value(&ev)) />
            <input
                placeholder="Código market"
                prop:value=market_code
                on:input=move |ev| set_market_code.set(event_target_value(&ev))
            />
            <input
                placeholder="Números (1, 2, 3)"
                prop:value=numbers
                on:input=move |ev| set_numbers.set(event_target_value(&ev))
            />
            <input type="file" multiple=true accept="image/*" node_ref=files_ref />

            <div class="product-media__actions">
                <button class="button button--primary" disabled=busy on:click=on_upload>
                    "Subir imágenes"
                </button>
                <button class="button button--danger" disabled=busy on:click=on_delete_detail>
                    "Eliminar detalle"
                </button>
                <button class="button button--danger" disabled=busy on:click=on_delete_preview>
                    "Eliminar preview"
                </button>
            </div>

            {move || {
                result
                    .get()
                    .map(|r| {
                        let class = if r.success { "notice" } else { "resource-error" };
                        view! { <div class=class>{r.message.unwrap_or_default()}</div> }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers("1, 3 ,5"), vec![1, 3, 5]);
        assert_eq!(parse_numbers("2,x,,4"), vec![2, 4]);
        assert!(parse_numbers("").is_empty());
    }
}
