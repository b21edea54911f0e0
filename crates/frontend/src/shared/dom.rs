//! Thin wrappers over browser APIs the page needs outside of Leptos views
use contracts::shared::page::{PageBootstrap, BOOTSTRAP_ELEMENT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Selector of the markup the server renders next to a field that failed validation
pub const VALIDATION_ERROR_SELECTOR: &str = ".has-error";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read the page bootstrap JSON embedded by the server
pub fn load_bootstrap() -> Result<PageBootstrap, String> {
    let element = document()
        .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .ok_or_else(|| format!("#{} not found", BOOTSTRAP_ELEMENT_ID))?;
    let raw = element.text_content().unwrap_or_default();
    PageBootstrap::from_json(&raw).map_err(|e| format!("{:#}", e))
}

/// True when the server rendered a form with validation errors
pub fn has_validation_errors() -> bool {
    document()
        .and_then(|d| d.query_selector(VALIDATION_ERROR_SELECTOR).ok().flatten())
        .is_some()
}

/// Tab-scoped storage; `None` when disabled by the browser
pub fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Load an image and check it actually decoded.
///
/// Zero natural width or an incomplete load count as a broken image.
pub async fn probe_image(src: &str) -> Result<(), String> {
    let img = web_sys::HtmlImageElement::new().map_err(|e| format!("{e:?}"))?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);

    let outcome = JsFuture::from(loaded).await;
    img.set_onload(None);
    img.set_onerror(None);
    outcome.map_err(|_| format!("failed to load {}", src))?;

    if !img.complete() || img.natural_width() == 0 {
        return Err(format!("broken image {}", src));
    }
    Ok(())
}

/// Files currently selected in a file input
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// `event.target` as a file input, if it is one
pub fn file_input_target(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
}
