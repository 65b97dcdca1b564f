//! Identity REST API provider
//!
//! Talks to a Google-Identity-Toolkit-style endpoint: sign-up issues the
//! account id and a short-lived id token; a second call sets the display
//! name using that token.

use async_trait::async_trait;
use serde::Deserialize;

use super::super::http_client::{HttpClientTrait, TransportError};
use crate::domain::{AccountHandle, AccountId, AuthErrorReason, AuthProvider};

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Identity toolkit REST provider
#[derive(Debug)]
pub struct IdentityApiAuthProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> IdentityApiAuthProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_IDENTITY_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn sign_up_url(&self) -> String {
        format!("{}/v1/accounts:signUp?key={}", self.base_url, self.api_key)
    }

    fn update_url(&self) -> String {
        format!("{}/v1/accounts:update?key={}", self.base_url, self.api_key)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Classify a transport failure using the service's error code
///
/// Error bodies look like `{"error": {"message": "EMAIL_EXISTS"}}`; weak
/// password responses append the policy detail after a colon.
fn classify(error: TransportError) -> AuthErrorReason {
    match error {
        TransportError::Request(message) => AuthErrorReason::Network(message),
        TransportError::Status { status, body } => {
            let code = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));

            if code.starts_with("EMAIL_EXISTS") {
                AuthErrorReason::EmailInUse
            } else if code.starts_with("WEAK_PASSWORD") {
                AuthErrorReason::WeakPassword
            } else {
                AuthErrorReason::Unknown(code)
            }
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> AuthProvider for IdentityApiAuthProvider<C> {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, AuthErrorReason> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .client
            .post_json(&self.sign_up_url(), &body)
            .await
            .map_err(classify)?;

        let parsed: SignUpResponse = serde_json::from_value(response).map_err(|e| {
            AuthErrorReason::Unknown(format!("failed to parse sign-up response: {}", e))
        })?;

        Ok(AccountHandle::new(AccountId::new(parsed.local_id)).with_access_token(parsed.id_token))
    }

    async fn set_display_name(
        &self,
        handle: &AccountHandle,
        name: &str,
    ) -> Result<(), AuthErrorReason> {
        let token = handle.access_token().ok_or_else(|| {
            AuthErrorReason::Unknown("account handle carries no access token".to_string())
        })?;

        let body = serde_json::json!({
            "idToken": token,
            "displayName": name,
            "returnSecureToken": false,
        });

        self.client
            .post_json(&self.update_url(), &body)
            .await
            .map_err(classify)?;

        Ok(())
    }
}
