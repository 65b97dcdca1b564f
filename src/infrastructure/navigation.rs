//! Navigator implementations

use tracing::info;

use crate::domain::{Navigator, Screen};

/// Navigator that only records transitions in the log
///
/// Used by headless hosts (the CLI) where there is no screen stack.
#[derive(Debug, Clone, Default)]
pub struct TracingNavigator;

impl TracingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for TracingNavigator {
    fn replace(&self, screen: Screen) {
        info!(screen = %screen, "replacing current screen");
    }
}
