//! Root page handler.

use crate::config::GREETING;

/// Returns the static greeting.
pub async fn index() -> &'static str {
    GREETING
}
