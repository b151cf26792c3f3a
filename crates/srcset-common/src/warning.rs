//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used to report `srcset` candidates that were dropped during parsing.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned set only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Format the line printed for a warning (without color codes).
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[srcset {component}] ⚠ {message}")
}

/// Record a warning, returning `true` the first time a given
/// `(component, message)` pair is seen.
#[must_use]
pub fn record_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned().get_or_insert_with(HashSet::new).insert(key)
}

/// Warn about a dropped candidate (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "dropped `data:,a 1x 1w` at 0: conflicting descriptor");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_once(component, message) {
        eprintln!("{YELLOW}{}{RESET}", format_warning(component, message));
    }
}

/// Clear all recorded warnings (call before processing a new input)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
