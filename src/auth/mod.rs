//! Simulated login against the fixed demo user list.

mod error;

pub use error::*;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::config::{simulate_latency, LatencyConfig};
use crate::domain::{AuthSession, PublicUser, User, USERS};

#[derive(Debug, Clone)]
pub struct AuthService {
    users: &'static [User],
    latency: LatencyConfig,
}

impl AuthService {
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_users(USERS, latency)
    }

    pub fn with_users(users: &'static [User], latency: LatencyConfig) -> Self {
        Self { users, latency }
    }

    /// Exact match on email and password; mints an opaque session token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        simulate_latency(self.latency.login()).await;

        let Some(user) = self
            .users
            .iter()
            .find(|user| user.email == email && user.password == password)
        else {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let token = mint_token(user.id)?;
        info!(user_id = user.id, "Login successful");
        Ok(AuthSession {
            success: true,
            user: PublicUser::from(user),
            token,
        })
    }

    /// Nothing is stored server side, so there is nothing to revoke.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        simulate_latency(self.latency.logout()).await;
        info!("Logged out");
        Ok(())
    }
}

/// URL-safe base64 of `user_id:unix_millis:nonce`.
fn mint_token(user_id: &str) -> Result<String, AuthError> {
    let mut nonce = [0u8; 16];
    getrandom::fill(&mut nonce).map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    let nonce: String = nonce.iter().map(|byte| format!("{byte:02x}")).collect();
    let raw = format!("{}:{}:{}", user_id, Utc::now().timestamp_millis(), nonce);
    Ok(URL_SAFE_NO_PAD.encode(raw))
}
