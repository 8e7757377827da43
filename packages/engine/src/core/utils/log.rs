//! Console logging
//!
//! The engine has no logging framework: messages go straight to the browser
//! console. On native targets (unit tests, benches) the macro compiles to
//! nothing so no JS import is ever called outside a browser.

/// Format and forward a message to `console.log`.
///
/// ```rust
/// use verdant_life_engine::console_log;
///
/// let rows = 48;
/// console_log!("grid resized to {} rows", rows);
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
