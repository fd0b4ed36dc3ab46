//! File Transfer
//!
//! Reading picked files and saving bytes through a temporary object URL.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Read the full contents of a picked file
pub async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Offer `bytes` to the user as a download named `file_name`
pub fn download_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to build blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    link.set_href(&url);
    link.set_download(file_name);
    let _ = body.append_child(&link);
    link.click();
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&url);

    log::info!("[Download] offered {} ({} bytes)", file_name, bytes.len());
    Ok(())
}
