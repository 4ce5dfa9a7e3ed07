//! Authentication tokens and login.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        transaction::{Generated, TransactionExecutor},
        user::find_user_by_email,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{Claims, LoginParams},
        user::User,
    },
    util::password::verify_password,
};

/// Name of the cookie carrying the authentication token.
pub const TOKEN_COOKIE: &str = "token";

/// How long an issued token stays valid.
pub const TOKEN_LIFETIME_HOURS: i64 = 72;

/// A freshly signed token and the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// HS256 keys derived from the server secret.
///
/// Built once at startup and shared read-only by the authentication middleware and
/// token issuance.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs `claims` into a compact token.
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(AuthError::TokenSigning)
    }

    /// Verifies the signature and expiry of `token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::ExpiredToken)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Malformed token or signature mismatch
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(decode::<Claims>(token, &self.decoding, &self.validation)?.claims)
    }

    /// Issues a token for `user` that expires `TOKEN_LIFETIME_HOURS` after `now`.
    pub fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let claims = Claims::for_user(user, now + Duration::hours(TOKEN_LIFETIME_HOURS));
        let token = self.encode(&claims)?;

        Ok(IssuedToken { token, claims })
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Checks the submitted credentials and issues a token for the matching user.
    ///
    /// An unknown email and a wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No such user or wrong password
    /// - `Err(AppError::DbErr)` - Lookup failed
    pub async fn login(&self, params: LoginParams) -> Result<IssuedToken, AppError> {
        let found = Generated::new();
        TransactionExecutor::new(self.db)
            .execute(vec![find_user_by_email(params.email, found.clone())])
            .await?;

        let Some(user) = found.get()? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(self.tokens.issue(&User::from_entity(user), Utc::now())?)
    }
}
