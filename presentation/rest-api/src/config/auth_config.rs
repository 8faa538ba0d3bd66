/// Configuration for bearer-token validation. The API never issues tokens;
/// it only verifies what the auth provider signed.
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("AUTH_JWT_SECRET")
                .expect("AUTH_JWT_SECRET must be set"),
        }
    }
}
