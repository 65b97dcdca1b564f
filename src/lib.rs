//! Academeet Accounts
//!
//! Registration workflow for the Academeet onboarding flow:
//! - Pure form validation (username, email, password, confirmation)
//! - Username uniqueness against the profile directory
//! - Account creation through the identity provider
//! - Local session credential persistence
//!
//! The workflow consumes the remote services through narrow traits; HTTP and
//! in-memory implementations of each live in the infrastructure layer.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use domain::{RegistrationPolicy, RegistrationWorkflow};
use infrastructure::auth::IdentityApiAuthProvider;
use infrastructure::directory::RestAccountDirectory;
use infrastructure::http_client::HttpClient;
use infrastructure::navigation::TracingNavigator;
use infrastructure::registration::RegistrationService;
use infrastructure::session::FileSessionStore;

/// Registration service wired against the HTTP collaborators
pub type HttpRegistrationService = RegistrationService<
    IdentityApiAuthProvider<HttpClient>,
    RestAccountDirectory<HttpClient>,
    FileSessionStore,
    TracingNavigator,
>;

/// Create the registration service from configuration
pub async fn create_registration_service(
    config: &AppConfig,
) -> anyhow::Result<HttpRegistrationService> {
    let client = HttpClient::with_timeout(Duration::from_secs(config.http.request_timeout_secs));

    let auth = Arc::new(IdentityApiAuthProvider::with_base_url(
        client.clone(),
        &config.auth.api_key,
        &config.auth.base_url,
    ));
    let directory = Arc::new(RestAccountDirectory::new(
        client,
        &config.directory.base_url,
    ));
    let sessions = Arc::new(FileSessionStore::open(&config.session.path).await?);

    let mut workflow = RegistrationWorkflow::new(auth, directory, sessions).with_policy(
        RegistrationPolicy::new(config.registration.min_password_length),
    );

    if let Some(secs) = config.registration.call_timeout_secs {
        workflow = workflow.with_call_timeout(Duration::from_secs(secs));
    }

    info!(
        auth = %config.auth.base_url,
        directory = %config.directory.base_url,
        "registration service wired"
    );

    Ok(RegistrationService::new(
        Arc::new(workflow),
        Arc::new(TracingNavigator::new()),
    ))
}
