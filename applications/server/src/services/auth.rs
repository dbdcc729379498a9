/// Password hashing and bearer token handling
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use learntube_core::UserId;
use learntube_storage::{users, Database};
use serde::{Deserialize, Serialize};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Issues and checks the access/refresh token pair
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    bcrypt_cost: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub exp: i64,
    pub iat: i64,
    #[serde(rename = "typ")]
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl AuthService {
    /// Lifetimes are bounded by `ServerConfig::validate`
    pub fn new(secret: String, access_expiration_hours: u64, refresh_expiration_days: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_ttl: Duration::hours(access_expiration_hours as i64),
            refresh_token_ttl: Duration::days(refresh_expiration_days as i64),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt work factor
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn validate_password(password: &str) -> Result<()> {
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ServerError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        Ok(())
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }

    pub fn create_access_token(&self, user_id: &UserId) -> Result<String> {
        self.issue(user_id, TokenType::Access)
    }

    pub fn create_refresh_token(&self, user_id: &UserId) -> Result<String> {
        self.issue(user_id, TokenType::Refresh)
    }

    /// User behind a bearer access token
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        Ok(self.claims(token, TokenType::Access)?.sub)
    }

    /// Trade a refresh token for a new access token.
    ///
    /// The account must still exist.
    pub async fn refresh_access_token(&self, db: &Database, refresh_token: &str) -> Result<String> {
        let user_id = self.claims(refresh_token, TokenType::Refresh)?.sub;

        if users::get_by_id(db.pool(), &user_id).await?.is_none() {
            tracing::warn!(user_id = %user_id, "Refresh token for unknown user");
            return Err(ServerError::Auth("User no longer exists".to_string()));
        }

        self.create_access_token(&user_id)
    }

    fn issue(&self, user_id: &UserId, token_type: TokenType) -> Result<String> {
        let ttl = match token_type {
            TokenType::Access => self.access_token_ttl,
            TokenType::Refresh => self.refresh_token_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            token_type,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Decode `token` and require `expected`; every rejection is `Auth`
    fn claims(&self, token: &str, expected: TokenType) -> Result<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => ServerError::Auth("Token expired".to_string()),
                _ => ServerError::Auth("Invalid token".to_string()),
            })?
            .claims;

        if claims.token_type != expected {
            return Err(ServerError::Auth("Invalid token type".to_string()));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learntube_core::CreateUser;

    const SECRET: &str = "secret";

    fn service() -> AuthService {
        AuthService::new(SECRET.to_string(), 24, 30).with_bcrypt_cost(4)
    }

    fn auth_message(result: Result<UserId>) -> String {
        match result {
            Err(ServerError::Auth(msg)) => msg,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_password_hashing() {
        let auth = service();
        let hash = auth.hash_password("my_secure_password").unwrap();
        assert!(auth.verify_password("my_secure_password", &hash).unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_password_length_rule() {
        assert!(AuthService::validate_password("short").is_err());
        assert!(AuthService::validate_password("12345678").is_ok());
    }

    #[test]
    fn test_access_token_round_trip() {
        let auth = service();
        let user_id = UserId::new("user-123");

        let token = auth.create_access_token(&user_id).unwrap();
        assert_eq!(auth.verify_access_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let auth = service();
        let token = auth.create_refresh_token(&UserId::new("user-123")).unwrap();
        assert_eq!(
            auth_message(auth.verify_access_token(&token)),
            "Invalid token type"
        );
    }

    #[test]
    fn test_expired_token_is_auth_error() {
        let past = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: UserId::new("user-123"),
            exp: past.timestamp(),
            iat: (past - Duration::hours(1)).timestamp(),
            token_type: TokenType::Access,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            auth_message(service().verify_access_token(&token)),
            "Token expired"
        );
    }

    #[test]
    fn test_foreign_or_garbled_token_is_auth_error() {
        let token = service().create_access_token(&UserId::new("u")).unwrap();
        let other = AuthService::new("other".to_string(), 24, 30);
        assert_eq!(auth_message(other.verify_access_token(&token)), "Invalid token");
        assert_eq!(
            auth_message(service().verify_access_token("not.a.jwt")),
            "Invalid token"
        );
    }

    #[test]
    fn test_claims_subject_is_user_id() {
        let token = service().create_access_token(&UserId::new("user-9")).unwrap();
        let data = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims["sub"], "user-9");
        assert_eq!(data.claims["typ"], "access");
    }

    #[tokio::test]
    async fn test_refresh_requires_existing_user() {
        let temp_dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", temp_dir.path().join("auth.db").display());
        let db = Database::new(&url).await.unwrap();
        let auth = service();

        let user = users::create(
            db.pool(),
            CreateUser::new("Ada", "ada@example.com").unwrap(),
            "hash",
        )
        .await
        .unwrap();

        let refresh = auth.create_refresh_token(&user.id).unwrap();
        let access = auth.refresh_access_token(&db, &refresh).await.unwrap();
        assert_eq!(auth.verify_access_token(&access).unwrap(), user.id);

        let ghost = auth.create_refresh_token(&UserId::new("ghost")).unwrap();
        assert!(matches!(
            auth.refresh_access_token(&db, &ghost).await,
            Err(ServerError::Auth(msg)) if msg == "User no longer exists"
        ));

        // Access tokens cannot be traded in
        let access = auth.create_access_token(&user.id).unwrap();
        assert!(matches!(
            auth.refresh_access_token(&db, &access).await,
            Err(ServerError::Auth(_))
        ));
    }
}
