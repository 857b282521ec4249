pub mod constants;
pub mod encoding;
pub mod storage;

pub use constants::*;
pub use encoding::*;
pub use storage::*;

/// Aviso modal para errores de acciones del usuario (mutaciones)
pub fn show_alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
