/// Ask a blocking yes/no question. A failed prompt counts as "no".
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window.confirm_with_message(message).unwrap_or_else(|e| {
        log::warn!("[DIALOG] confirm failed: {:?}", e);
        false
    })
}
