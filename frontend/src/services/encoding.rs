//! File reading and data URL encoding.
//!
//! Produces the same text a `FileReader.readAsDataURL` call would:
//! `data:<mime>;base64,<contents>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::{AppError, AppResult};

/// MIME type used when the browser reports none.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode raw bytes as a base64 data URL.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() { FALLBACK_MIME } else { mime_type };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read the full contents of a browser `File`.
pub async fn read_file_bytes(file: &File) -> AppResult<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Read a browser `File` and encode it as a data URL.
pub async fn encode_file(file: &File) -> AppResult<String> {
    let bytes = read_file_bytes(file).await?;
    Ok(encode_data_url(&file.type_(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_url() {
        let bytes = [0x89, b'P', b'N', b'G'];
        assert_eq!(encode_data_url("image/png", &bytes), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_missing_mime_falls_back() {
        assert_eq!(
            encode_data_url("", b"hi"),
            "data:application/octet-stream;base64,aGk="
        );
    }

    #[test]
    fn test_empty_file_still_has_prefix() {
        let url = encode_data_url("image/jpeg", &[]);
        assert_eq!(url, "data:image/jpeg;base64,");
        assert!(!url.is_empty());
    }
}
