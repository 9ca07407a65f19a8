use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Validates HS256 bearer tokens and resolves the caller's identity.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "https://auth.test".to_string(),
            audience: "forgeui-api".to_string(),
            jwt_leeway: Duration::from_secs(30),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "7f2c1a60-3b4e-4b5d-9f6a-1c2d3e4f5a6b".to_string(),
            iss: "https://auth.test".to_string(),
            aud: "forgeui-api".to_string(),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn test_valid_token_resolves_user() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&valid_claims(), "test-secret");

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(
            user.id.to_string(),
            "7f2c1a60-3b4e-4b5d-9f6a-1c2d3e4f5a6b"
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let validator = JwtValidator::new(&test_config());
        let mut claims = valid_claims();
        claims.exp = Utc::now().timestamp() - 3600;
        let token = sign(&claims, "test-secret");

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let validator = JwtValidator::new(&test_config());
        let mut claims = valid_claims();
        claims.iss = "https://evil.test".to_string();
        let token = sign(&claims, "test-secret");

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&valid_claims(), "other-secret");

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let validator = JwtValidator::new(&test_config());
        let mut claims = valid_claims();
        claims.sub = "not-a-uuid".to_string();
        let token = sign(&claims, "test-secret");

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }
}
