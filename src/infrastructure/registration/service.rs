//! Caller-facing registration facade
//!
//! Owns the workflow plus the navigation sink, and maps every error kind to
//! user-visible text. The workflow itself never talks to the user.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    AccountDirectory, AuthErrorReason, AuthProvider, Navigator, RegisteredAccount,
    RegistrationError, RegistrationInput, RegistrationWorkflow, Screen, SessionStore,
};

/// Facade driving the workflow on behalf of a host screen
#[derive(Debug)]
pub struct RegistrationService<A, D, S, N> {
    workflow: Arc<RegistrationWorkflow<A, D, S>>,
    navigator: Arc<N>,
}

impl<A, D, S, N> RegistrationService<A, D, S, N>
where
    A: AuthProvider,
    D: AccountDirectory,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(workflow: Arc<RegistrationWorkflow<A, D, S>>, navigator: Arc<N>) -> Self {
        Self {
            workflow,
            navigator,
        }
    }

    pub fn workflow(&self) -> &RegistrationWorkflow<A, D, S> {
        &self.workflow
    }

    /// Submit the form; navigate to name entry only on full success
    pub async fn register(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegisteredAccount, RegistrationError> {
        match self.workflow.submit(input).await {
            Ok(account) => {
                info!(user_name = %account.user_name(), "registration succeeded");
                self.navigator.replace(Screen::NameEntry);
                Ok(account)
            }
            Err(RegistrationError::Cancelled) => {
                // The host is gone; nothing to render, nothing to navigate
                debug!("registration attempt cancelled, dropping outcome");
                Err(RegistrationError::Cancelled)
            }
            Err(error) => {
                warn!(%error, "registration attempt failed");
                Err(error)
            }
        }
    }
}

/// Map an error to the text shown on the form
///
/// `None` means nothing should be rendered (the attempt was cancelled).
pub fn user_message(error: &RegistrationError) -> Option<String> {
    let message = match error {
        RegistrationError::ValidationFailed(errors) => {
            format!("Please fix the highlighted fields: {}.", errors)
        }
        RegistrationError::UserNameTaken(name) => {
            format!("The username '{}' is already taken.", name)
        }
        RegistrationError::Auth {
            reason: AuthErrorReason::EmailInUse,
        } => "This email is already registered. Try logging in instead.".to_string(),
        RegistrationError::Auth {
            reason: AuthErrorReason::WeakPassword,
        } => "The identity service rejected this password as too weak.".to_string(),
        RegistrationError::Auth {
            reason: AuthErrorReason::Network(_),
        }
        | RegistrationError::DirectoryLookup { .. } => {
            "We couldn't reach the registration service. Check your connection and try again."
                .to_string()
        }
        RegistrationError::Auth {
            reason: AuthErrorReason::Unknown(_),
        } => "Something went wrong creating your account. Please try again.".to_string(),
        RegistrationError::DirectoryWrite { .. } => {
            "Your account was created but your profile could not be saved. Please contact support."
                .to_string()
        }
        RegistrationError::SessionWrite { .. } => {
            "Your account was created but we couldn't save your session. Please log in.".to_string()
        }
        RegistrationError::AttemptInProgress => "Registration is already in progress.".to_string(),
        RegistrationError::Cancelled => return None,
    };

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Semaphore;
    use tokio_util::sync::CancellationToken;

    use crate::domain::auth::MockAuthProvider;
    use crate::domain::directory::MockAccountDirectory;
    use crate::domain::navigation::mock::RecordingNavigator;
    use crate::domain::session::MockSessionStore;
    use crate::domain::RegistrationPolicy;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            user_name: "alice".to_string(),
            email: "a@b.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        }
    }

    fn service(
        auth: MockAuthProvider,
        directory: MockAccountDirectory,
        navigator: RecordingNavigator,
    ) -> RegistrationService<
        MockAuthProvider,
        MockAccountDirectory,
        MockSessionStore,
        RecordingNavigator,
    > {
        let workflow = RegistrationWorkflow::new(
            Arc::new(auth),
            Arc::new(directory),
            Arc::new(MockSessionStore::new()),
        )
        .with_policy(RegistrationPolicy::default());

        RegistrationService::new(Arc::new(workflow), Arc::new(navigator))
    }

    #[tokio::test]
    async fn test_success_navigates_to_name_entry() {
        let svc = service(
            MockAuthProvider::new(),
            MockAccountDirectory::new(),
            RecordingNavigator::new(),
        );

        let account = svc.register(&valid_input()).await.unwrap();

        assert_eq!(account.user_name(), "alice");
        assert_eq!(svc.navigator.screens(), vec![Screen::NameEntry]);
    }

    #[tokio::test]
    async fn test_failure_does_not_navigate() {
        let svc = service(
            MockAuthProvider::new(),
            MockAccountDirectory::new().with_taken(),
            RecordingNavigator::new(),
        );

        let result = svc.register(&valid_input()).await;

        assert!(matches!(result, Err(RegistrationError::UserNameTaken(_))));
        assert!(svc.navigator.screens().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_attempt_is_a_silent_no_op() {
        let gate = Arc::new(Semaphore::new(0));
        let token = CancellationToken::new();

        let workflow = RegistrationWorkflow::new(
            Arc::new(MockAuthProvider::new().with_gate(gate)),
            Arc::new(MockAccountDirectory::new()),
            Arc::new(MockSessionStore::new()),
        )
        .with_cancellation(token.clone());

        let svc = Arc::new(RegistrationService::new(
            Arc::new(workflow),
            Arc::new(RecordingNavigator::new()),
        ));

        let attempt = {
            let svc = svc.clone();
            let input = valid_input();
            tokio::spawn(async move { svc.register(&input).await })
        };

        while !svc.workflow().is_in_flight() {
            tokio::task::yield_now().await;
        }

        token.cancel();

        let result = attempt.await.unwrap();
        assert_eq!(result.unwrap_err(), RegistrationError::Cancelled);
        assert!(svc.navigator.screens().is_empty());
        assert!(user_message(&RegistrationError::Cancelled).is_none());
    }

    #[test]
    fn test_user_message_covers_every_failure() {
        let errors = [
            RegistrationError::UserNameTaken("alice".to_string()),
            RegistrationError::auth(AuthErrorReason::EmailInUse),
            RegistrationError::auth(AuthErrorReason::WeakPassword),
            RegistrationError::auth(AuthErrorReason::Network("x".to_string())),
            RegistrationError::auth(AuthErrorReason::Unknown("x".to_string())),
            RegistrationError::directory_lookup("x"),
            RegistrationError::directory_write("acct-1", "x"),
            RegistrationError::session_write("x"),
            RegistrationError::AttemptInProgress,
        ];

        for error in errors {
            assert!(user_message(&error).is_some(), "no message for {:?}", error);
        }
    }

    #[test]
    fn test_username_taken_message_names_the_username() {
        let message =
            user_message(&RegistrationError::UserNameTaken("alice".to_string())).unwrap();
        assert!(message.contains("'alice'"));
    }
}
