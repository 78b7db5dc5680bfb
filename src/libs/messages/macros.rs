//! Output macros with debug-aware routing.
//!
//! In normal runs messages are printed plainly to the console. When
//! `HOURMAP_DEBUG` or `RUST_LOG` is set they go through `tracing` instead, so
//! they interleave with the structured events the library emits.
//!
//! ```text
//! msg_print!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                         │
//!                         └──no───▶ println!
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use hourmap::{msg_print, msg_success};
//! use hourmap::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_print!(Message::NoActivity, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug output is enabled. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("HOURMAP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::__private::tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::__private::tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::__private::tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::__private::tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::__private::tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` carrying the message text.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        $crate::__private::anyhow::anyhow!("{}", $msg)
    };
}
