//! Registration submit orchestration
//!
//! The only component with externally visible side effects: it validates the
//! form locally, then runs the remote sequence (uniqueness probe, account
//! creation, display name, profile write, session write) fail-fast. No step
//! is retried and no compensation runs; every remote failure short-circuits
//! the rest of the attempt.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::account::{
    validate_all, ProfileRecord, RegisteredAccount, RegistrationInput, RegistrationPolicy,
};
use crate::domain::auth::{AuthErrorReason, AuthProvider};
use crate::domain::directory::{AccountDirectory, DirectoryError};
use crate::domain::error::RegistrationError;
use crate::domain::session::{SessionCredentials, SessionStore, SessionStoreError};

/// Orchestrates one registration attempt at a time
///
/// Holds a per-instance in-flight flag: at most one remote sequence runs per
/// form instance, and the flag is released on every terminal outcome. The
/// attempt races the cancellation token so a dismissed host never observes a
/// late completion.
#[derive(Debug)]
pub struct RegistrationWorkflow<A, D, S> {
    auth: Arc<A>,
    directory: Arc<D>,
    sessions: Arc<S>,
    policy: RegistrationPolicy,
    call_timeout: Option<Duration>,
    cancellation: CancellationToken,
    in_flight: AtomicBool,
}

impl<A, D, S> RegistrationWorkflow<A, D, S>
where
    A: AuthProvider,
    D: AccountDirectory,
    S: SessionStore,
{
    /// Create a workflow with the default policy, no per-call timeout, and a
    /// token that never cancels
    pub fn new(auth: Arc<A>, directory: Arc<D>, sessions: Arc<S>) -> Self {
        Self {
            auth,
            directory,
            sessions,
            policy: RegistrationPolicy::default(),
            call_timeout: None,
            cancellation: CancellationToken::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bound every remote call; elapse maps to that step's transport error
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Attach the host's cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Whether a remote sequence is currently running
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one registration attempt
    ///
    /// Validation rejects locally before the in-flight flag is taken, so a
    /// rejected form never blocks a concurrent attempt.
    pub async fn submit(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegisteredAccount, RegistrationError> {
        let errors = validate_all(input, &self.policy);
        if !errors.is_empty() {
            debug!(error_count = errors.len(), "registration input rejected locally");
            return Err(RegistrationError::ValidationFailed(errors));
        }

        let _guard = InFlightGuard::acquire(&self.in_flight)
            .ok_or(RegistrationError::AttemptInProgress)?;

        tokio::select! {
            () = self.cancellation.cancelled() => {
                info!("registration attempt cancelled by host");
                Err(RegistrationError::Cancelled)
            }
            result = self.run_attempt(input) => result,
        }
    }

    async fn run_attempt(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegisteredAccount, RegistrationError> {
        let available = self
            .bounded(
                self.directory.is_user_name_available(&input.user_name),
                || DirectoryError::new("username lookup timed out"),
            )
            .await
            .map_err(|e| RegistrationError::directory_lookup(e.to_string()))?;

        if !available {
            warn!(user_name = %input.user_name, "username already taken");
            return Err(RegistrationError::UserNameTaken(input.user_name.clone()));
        }

        let handle = self
            .bounded(self.auth.create_account(&input.email, &input.password), || {
                AuthErrorReason::Network("account creation timed out".to_string())
            })
            .await
            .map_err(RegistrationError::auth)?;

        info!(account_id = %handle.id(), "account created");

        self.bounded(self.auth.set_display_name(&handle, &input.user_name), || {
            AuthErrorReason::Network("display name update timed out".to_string())
        })
        .await
        .map_err(RegistrationError::auth)?;

        let profile = ProfileRecord::new(&input.email, &input.user_name);
        self.bounded(self.directory.write_profile(handle.id(), &profile), || {
            DirectoryError::new("profile write timed out")
        })
        .await
        .map_err(|e| {
            // The auth account exists with no directory record; surfaced for
            // manual reconciliation, never rolled back here.
            warn!(account_id = %handle.id(), "profile write failed after account creation");
            RegistrationError::directory_write(handle.id().as_str(), e.to_string())
        })?;

        let credentials = SessionCredentials::new(&input.email, &input.password);
        self.bounded(credentials.persist(self.sessions.as_ref()), || {
            SessionStoreError::new("session write timed out")
        })
        .await
        .map_err(|e| RegistrationError::session_write(e.to_string()))?;

        info!(account_id = %handle.id(), user_name = %input.user_name, "registration complete");

        Ok(RegisteredAccount::new(
            handle.into_id(),
            &input.user_name,
            &input.email,
        ))
    }

    async fn bounded<T, E, F>(&self, call: F, on_timeout: impl FnOnce() -> E) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        match self.call_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(on_timeout()),
            },
            None => call.await,
        }
    }
}

/// Releases the in-flight flag on every exit path, including cancellation
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
