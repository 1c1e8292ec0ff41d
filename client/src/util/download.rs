//! Save generated text as a file through the browser.
//!
//! The text is wrapped in a `Blob`, exposed as an object URL, and clicked
//! through a detached anchor carrying the `download` attribute. The URL is
//! revoked right after the click.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("file downloads need a browser window")]
    Unavailable,
    #[error("browser rejected the download: {0}")]
    Browser(String),
}

#[cfg(feature = "hydrate")]
fn browser_err(value: wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Offer `contents` to the user as a `text/plain` file named `file_name`.
///
/// # Errors
///
/// Returns `Unavailable` outside the browser and `Browser` when any DOM call
/// fails.
pub fn save_text_file(file_name: &str, contents: &str) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::Unavailable)?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser_err)?;

        let anchor = document
            .create_element("a")
            .map_err(browser_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DownloadError::Browser("anchor element cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(browser_err)?;
        log::info!("saved {file_name} ({} bytes)", contents.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, contents);
        Err(DownloadError::Unavailable)
    }
}
