//! Client-side file save for the exported spreadsheet.
//!
//! Wraps the bytes in a `Blob`, points a temporary `<a download>` at an
//! object URL and clicks it. Requires a browser environment.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Filename every export is saved under.
pub const EXPORT_FILENAME: &str = "gitlab_variables_all_groups.xlsx";

/// MIME type attached to the saved blob.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// How long the object URL outlives the click. Browsers start the save
/// asynchronously, so revoking right away can abort large downloads.
pub const REVOKE_DELAY_MS: u32 = 40_000;

/// Failure modes of a client-side save.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    /// No `window.document` to attach the anchor to.
    #[error("no document")]
    NoDocument,

    /// A DOM call rejected.
    #[error("{step} failed: {detail}")]
    Dom { step: &'static str, detail: String },

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
fn dom_error(step: &'static str, value: &wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Dom { step, detail: format!("{value:?}") }
}

/// Trigger a browser save of `bytes` as [`EXPORT_FILENAME`].
///
/// # Errors
///
/// Returns the failing DOM step, or `Unavailable` outside the browser.
pub fn save_bytes(bytes: &[u8]) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::NoDocument)?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(XLSX_MIME);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| dom_error("blob", &e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| dom_error("object url", &e))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| dom_error("create anchor", &e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|e| dom_error("anchor cast", &e))?;
        anchor.set_href(&url);
        anchor.set_download(EXPORT_FILENAME);
        anchor.click();

        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bytes;
        Err(DownloadError::Unavailable)
    }
}
