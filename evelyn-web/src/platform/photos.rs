//! Reading captured photos from a file input into data URLs.
use thiserror::Error;

const IMAGE_DATA_URL: &str = r"^data:image/(png|jpe?g|gif|webp|heic|heif|bmp);base64,[A-Za-z0-9+/=]+$";

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("file could not be read: {0}")]
    Read(String),
    #[error("file is not an image")]
    NotAnImage,
}

/// Whether `url` is a base64 image data URL we are willing to store.
#[must_use]
pub fn is_image_data_url(url: &str) -> bool {
    regex::Regex::new(IMAGE_DATA_URL)
        .map(|re| re.is_match(url))
        .unwrap_or(false)
}

/// Keep only well-formed image data URLs, preserving order.
#[must_use]
pub fn accept_photos(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    urls.into_iter()
        .filter(|url| {
            let ok = is_image_data_url(url);
            if !ok {
                log::debug!("dropping non-image upload");
            }
            ok
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
async fn read_data_url(file: &web_sys::File) -> Result<String, PhotoError> {
    let reader = web_sys::FileReader::new()
        .map_err(|err| PhotoError::Read(crate::dom::js_error_message(&err)))?;
    let onload_reader = reader.clone();
    crate::dom::await_callback(move |resolve| {
        onload_reader.set_onload(Some(&resolve));
        onload_reader.read_as_data_url(file)
    })
    .await
    .map_err(|err| PhotoError::Read(crate::dom::js_error_message(&err)))?;
    let url = reader
        .result()
        .map_err(|err| PhotoError::Read(crate::dom::js_error_message(&err)))?
        .as_string()
        .ok_or(PhotoError::NotAnImage)?;
    if is_image_data_url(&url) {
        Ok(url)
    } else {
        Err(PhotoError::NotAnImage)
    }
}

/// Read every selected file. Files that fail are skipped.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn read_files(files: web_sys::FileList) -> Vec<String> {
    let mut urls = Vec::new();
    for idx in 0..files.length() {
        let Some(file) = files.get(idx) else {
            continue;
        };
        match read_data_url(&file).await {
            Ok(url) => urls.push(url),
            Err(err) => log::warn!("photo skipped: {err}"),
        }
    }
    urls
}
