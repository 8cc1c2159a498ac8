//! Client-side file download side effect for exports.

/// Hand `body` to the browser as a downloadable file.
#[cfg(target_arch = "wasm32")]
pub fn trigger_download(filename: &str, mime: &str, body: &str) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(body));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type(mime);
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let anchor: web_sys::HtmlAnchorElement = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(anchor) => anchor,
        None => return,
    };
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body_el) = document.body() {
        let _ = body_el.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

/// Native builds have nowhere to download to; log and move on.
#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(filename: &str, _mime: &str, _body: &str) {
    tracing::info!("download of {filename} requested off the web platform; skipped");
}
