use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::PhotoDecodeError;

/// Drop a leading `data:image/<type>;base64,` from camera output.
///
/// Input without that exact shape is returned unchanged.
pub fn strip_data_uri_prefix(data: &str) -> &str {
    let Some(rest) = data.strip_prefix("data:image/") else {
        return data;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return data;
    };

    let is_word = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_word { payload } else { data }
}

/// Raw image bytes from what the camera handed over
pub fn decode_captured_image(data: &str) -> Result<Vec<u8>, PhotoDecodeError> {
    let payload = strip_data_uri_prefix(data.trim());
    if payload.is_empty() {
        return Err(PhotoDecodeError::Empty);
    }

    Ok(STANDARD.decode(payload)?)
}
