//! Navigation sink
//!
//! The workflow never navigates; the registration facade invokes the
//! navigator once, after a fully successful attempt.

use std::fmt;

/// Screens the onboarding flow can move to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Post-registration display-name entry screen
    NameEntry,
    /// Login screen
    Login,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameEntry => "name-entry",
            Self::Login => "login",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for replacing the current screen
pub trait Navigator: Send + Sync + fmt::Debug {
    /// Replace the current screen, dropping it from the back stack
    fn replace(&self, screen: Screen);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Navigator that records every transition
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        screens: Mutex<Vec<Screen>>,
        calls: Option<Arc<Mutex<Vec<String>>>>,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_call_log(mut self, calls: Arc<Mutex<Vec<String>>>) -> Self {
            self.calls = Some(calls);
            self
        }

        pub fn screens(&self) -> Vec<Screen> {
            self.screens.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, screen: Screen) {
            if let Some(calls) = &self.calls {
                calls.lock().unwrap().push(format!("replace({})", screen));
            }
            self.screens.lock().unwrap().push(screen);
        }
    }
}
