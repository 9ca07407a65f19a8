use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity attached to a request after bearer-token validation.
///
/// Carries only the user id; tier and profile live in the database and are
/// resolved per-operation so a tier change takes effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

/// JWT claims expected on access tokens.
///
/// Tokens are issued by the identity provider; this service only validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}
