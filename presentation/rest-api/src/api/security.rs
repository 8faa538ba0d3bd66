use business::domain::shared::value_objects::{Actor, Role, UserId};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;

static JWT_SECRET: Lazy<String> = Lazy::new(|| AuthConfig::from_env().jwt_secret);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    sub: String,
    role: String,
    exp: u64,
}

/// Authenticated caller extracted from a bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub role: Role,
}

impl CurrentUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role)
    }
}

fn decode_with_secret(token: &str, secret: &str) -> Result<CurrentUser, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let role = token_data
        .claims
        .role
        .parse::<Role>()
        .map_err(|e| format!("auth.unknown_role: {e}"))?;

    Ok(CurrentUser {
        id: UserId::new(token_data.claims.sub),
        role,
    })
}

/// Bearer token authentication signed by the auth provider (HS256)
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "api_bearer_checker")]
pub struct ApiBearer(pub CurrentUser);

async fn api_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<CurrentUser> {
    match decode_with_secret(&bearer.token, &JWT_SECRET) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

/// Resolves an optional Authorization header for endpoints that serve both
/// anonymous and signed-in callers. An invalid token degrades to anonymous
/// instead of failing the request.
pub fn optional_user(authorization: Option<&String>) -> Option<CurrentUser> {
    let header = authorization?;
    let token = header.strip_prefix("Bearer ")?;

    match decode_with_secret(token, &JWT_SECRET) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Optional bearer auth failed: {e}");
            None
        }
    }
}
