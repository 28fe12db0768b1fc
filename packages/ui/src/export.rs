//! Platform download of the exported HTML document.
//!
//! On web this mirrors the classic Blob + anchor-click download; on desktop
//! and mobile the file lands in the user's Downloads directory (falling back
//! to the app data directory).

use store::{export, PortfolioData, StoreError};

/// Render the portfolio and save it. Returns a user-facing description of
/// where the file went: the filename on web, the full path natively.
pub fn download_portfolio(data: &PortfolioData) -> Result<String, StoreError> {
    let html = export::render_html(data);
    let filename = export::export_filename(&data.personal_info.name);
    save(&html, &filename)
}

#[cfg(target_arch = "wasm32")]
fn save(html: &str, filename: &str) -> Result<String, StoreError> {
    use wasm_bindgen::{JsCast, JsValue};

    let backend_err = |msg: &str| StoreError::Backend(msg.to_string());

    let window = web_sys::window().ok_or_else(|| backend_err("no window"))?;
    let document = window.document().ok_or_else(|| backend_err("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/html");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| backend_err("blob creation failed"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| backend_err("object URL creation failed"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| backend_err("anchor creation failed"))?
        .dyn_into()
        .map_err(|_| backend_err("anchor cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| backend_err("no body"))?;
    body.append_child(&anchor)
        .map_err(|_| backend_err("anchor append failed"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(filename.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn save(html: &str, filename: &str) -> Result<String, StoreError> {
    let dir = dirs::download_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, html)?;
    Ok(path.display().to_string())
}
