//! Login and signup.
//!
//! These live outside any one page: the header control opens them from
//! everywhere.

use crate::api::{ApiError, ApiResult};
use crate::context::ConsoleContext;
use crate::models::{LoginRequest, RegisterRequest, User};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ApiResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl SignupForm {
    pub fn validate(&self) -> ApiResult<()> {
        if self.password != self.confirm_password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ApiError::Validation(
                "Username and email are required".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Exchange credentials for a token and persist the session. The caller
/// resets its form and re-activates the current page on `Ok`.
pub async fn login(ctx: &ConsoleContext, form: &LoginForm) -> ApiResult<User> {
    if let Err(e) = form.validate() {
        ctx.report(&e);
        return Err(e);
    }

    let request = LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    let response = match ctx.api.login(&request).await {
        Ok(response) => response,
        Err(e) => {
            ctx.report(&e);
            return Err(e);
        }
    };

    if let Err(e) = ctx
        .session
        .set_session(&response.access_token, &response.user)
    {
        let err = ApiError::Validation(format!("Could not save session: {}", e));
        ctx.report(&err);
        return Err(err);
    }

    ctx.notices
        .success(format!("Welcome back, {}!", response.user.username));
    Ok(response.user)
}

/// Create an account. A password mismatch fails before any request.
pub async fn register(ctx: &ConsoleContext, form: &SignupForm) -> ApiResult<()> {
    if let Err(e) = form.validate() {
        ctx.report(&e);
        return Err(e);
    }

    let request = RegisterRequest {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    match ctx.api.register(&request).await {
        Ok(_) => {
            tracing::info!(username = %request.username, "Registered");
            ctx.notices.success("Registration successful! Please login.");
            Ok(())
        }
        Err(e) => {
            ctx.report(&e);
            Err(e)
        }
    }
}

/// Sign out from the header control
pub fn logout(ctx: &ConsoleContext) -> bool {
    ctx.session.logout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::context;
    use crate::session::AuthControl;

    #[tokio::test]
    async fn test_signup_mismatch_sends_nothing() {
        let (transport, ctx) = context(false);
        let form = SignupForm {
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
        };

        let err = register(&ctx, &form).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Passwords do not match".to_string()));
        assert!(transport.requests().is_empty());
        assert_eq!(ctx.notices.last_error().as_deref(), Some("Passwords do not match"));
    }

    #[tokio::test]
    async fn test_signup_success() {
        let (transport, ctx) = context(false);
        let form = SignupForm {
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        };

        transport.respond(201, r#"{"message": "User created"}"#);
        register(&ctx, &form).await.unwrap();

        assert!(transport.urls()[0].ends_with("/auth/register"));
        assert_eq!(
            ctx.notices.current()[0].message,
            "Registration successful! Please login."
        );
        assert!(!ctx.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let (transport, ctx) = context(false);
        transport.respond(
            200,
            r#"{"access_token": "abc", "user": {"id": 1, "username": "dana", "email": "dana@example.com"}}"#,
        );

        let form = LoginForm {
            email: "dana@example.com".to_string(),
            password: "pw".to_string(),
        };
        let user = login(&ctx, &form).await.unwrap();

        assert_eq!(user.username, "dana");
        assert_eq!(ctx.session.token().as_deref(), Some("abc"));
        assert_eq!(
            ctx.session.auth_control().get(),
            AuthControl::Logout {
                username: "dana".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_login_then_logout_clears_session() {
        let (transport, ctx) = context(false);
        transport.respond(
            200,
            r#"{"access_token": "abc", "user": {"id": 1, "username": "dana", "email": "dana@example.com"}}"#,
        );
        let form = LoginForm {
            email: "dana@example.com".to_string(),
            password: "pw".to_string(),
        };
        login(&ctx, &form).await.unwrap();

        assert!(logout(&ctx));
        let session = ctx.session.get_session();
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let (transport, ctx) = context(false);
        transport.respond(401, r#"{"message": "Invalid credentials"}"#);

        let form = LoginForm {
            email: "dana@example.com".to_string(),
            password: "nope".to_string(),
        };
        let err = login(&ctx, &form).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!ctx.session.is_authenticated());
    }
}
