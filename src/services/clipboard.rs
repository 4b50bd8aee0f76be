use wasm_bindgen_futures::JsFuture;

use crate::models::error::AppError;

/// Writes `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Clipboard("No browser window available".to_string()))?;

    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| AppError::Clipboard(format!("{e:?}")))
}
