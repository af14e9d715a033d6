//! Console logging
//!
//! In the browser every line goes to `console.log`.
//! Native builds (tests, tooling) compile the call away, so nothing here
//! ever touches an imported JS function outside of wasm32.
//!
//! Usage:
//! ```rust
//! use bounce_merge_engine::console_log;
//!
//! let absorber = 3;
//! console_log!("merge: body {} absorbed body {}", absorber, 1);
//! ```

/// Format and log a line to the browser console
///
/// - wasm32: `web_sys::console::log_1`
/// - native: arguments are type-checked, nothing is printed
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::logging::log_line(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn log_line(line: &str) {
    web_sys::console::log_1(&line.into());
}
