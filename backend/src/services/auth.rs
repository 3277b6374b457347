//! Authentication service: password check and session tokens

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Subject stored in every session token; there is a single household login
const SESSION_SUBJECT: &str = "household";

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    secret: String,
    session_ttl_secs: i64,
}

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Hash the configured password once at startup
pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    hash(password, cost).map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: &Config) -> Self {
        Self {
            secret: config.auth.secret_key.clone(),
            session_ttl_secs: config.auth.session_ttl_secs,
        }
    }

    /// Check the household password and issue a session token
    pub fn login(&self, password: &str, password_hash: &str) -> AppResult<String> {
        let valid = verify(password, password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            tracing::warn!("Login attempt with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.issue_token()?;
        tracing::info!("Household session started");
        Ok(token)
    }

    /// Validate a session token and return its claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid session: {}", e)))?;

        if token_data.claims.sub != SESSION_SUBJECT {
            return Err(AppError::Unauthorized("Invalid session".to_string()));
        }

        Ok(token_data.claims)
    }

    fn issue_token(&self) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: SESSION_SUBJECT.to_string(),
            exp: (now + Duration::seconds(self.session_ttl_secs)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }
}
