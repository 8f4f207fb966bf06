use std::sync::Arc;

use anyhow::Result as AnyResult;
use chrono::{DateTime, Duration, Utc};
use crates::domain::{
    entities::{admin_sessions::InsertAdminSessionEntity, admin_users::InsertAdminUserEntity},
    repositories::{admin_sessions::AdminSessionRepository, admin_users::AdminUserRepository},
    value_objects::admin::{AdminIdentity, LoginModel},
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::{generate_session_token, hash_password, hash_session_token, verify_password};

#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Session is missing or invalid")]
    InvalidSession,
    #[error("Session has expired")]
    SessionExpired,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AdminAuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AdminAuthError::InvalidCredentials
            | AdminAuthError::InvalidSession
            | AdminAuthError::SessionExpired => StatusCode::UNAUTHORIZED,
            AdminAuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AdminAuthResult<T> = std::result::Result<T, AdminAuthError>;

/// A freshly created session. `token` goes into the cookie and nowhere else.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub identity: AdminIdentity,
    pub expires_at: DateTime<Utc>,
}

pub struct AdminAuthUseCase<U, S>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    admin_user_repo: Arc<U>,
    session_repo: Arc<S>,
    session_ttl: Duration,
}

impl<U, S> AdminAuthUseCase<U, S>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    pub fn new(admin_user_repo: Arc<U>, session_repo: Arc<S>, session_ttl: Duration) -> Self {
        Self {
            admin_user_repo,
            session_repo,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub async fn login(&self, login_model: LoginModel) -> AdminAuthResult<IssuedSession> {
        let username = login_model.username.trim().to_string();
        info!(%username, "admin_auth: login attempt");

        let admin = self
            .admin_user_repo
            .find_by_username(username.clone())
            .await
            .map_err(|err| {
                error!(%username, db_error = ?err, "admin_auth: failed to load admin user");
                AdminAuthError::Internal(err)
            })?;

        let Some(admin) = admin else {
            warn!(%username, "admin_auth: unknown username");
            return Err(AdminAuthError::InvalidCredentials);
        };

        if !verify_password(&login_model.password, &admin.password_hash)? {
            warn!(%username, "admin_auth: wrong password");
            return Err(AdminAuthError::InvalidCredentials);
        }

        let token = generate_session_token();
        let expires_at = Utc::now() + self.session_ttl;

        self.session_repo
            .create(InsertAdminSessionEntity {
                admin_id: admin.id,
                token_hash: hash_session_token(&token),
                expires_at,
            })
            .await
            .map_err(|err| {
                error!(admin_id = %admin.id, db_error = ?err, "admin_auth: failed to store session");
                AdminAuthError::Internal(err)
            })?;

        info!(admin_id = %admin.id, %expires_at, "admin_auth: session created");

        Ok(IssuedSession {
            token,
            identity: AdminIdentity {
                admin_id: admin.id,
                username: admin.username,
            },
            expires_at,
        })
    }

    pub async fn authenticate(&self, token: String) -> AdminAuthResult<AdminIdentity> {
        let token_hash = hash_session_token(&token);

        let Some(session) = self
            .session_repo
            .find_by_token_hash(token_hash.clone())
            .await?
        else {
            return Err(AdminAuthError::InvalidSession);
        };

        if session.expires_at <= Utc::now() {
            info!(admin_id = %session.admin_id, "admin_auth: removing expired session");
            self.session_repo.delete_by_token_hash(token_hash).await?;
            return Err(AdminAuthError::SessionExpired);
        }

        let admin = self
            .admin_user_repo
            .find_by_id(session.admin_id)
            .await?
            .ok_or(AdminAuthError::InvalidSession)?;

        Ok(AdminIdentity {
            admin_id: admin.id,
            username: admin.username,
        })
    }

    pub async fn logout(&self, token: String) -> AdminAuthResult<()> {
        self.session_repo
            .delete_by_token_hash(hash_session_token(&token))
            .await
            .map_err(|err| {
                error!(db_error = ?err, "admin_auth: failed to delete session");
                AdminAuthError::Internal(err)
            })?;

        info!("admin_auth: session deleted");
        Ok(())
    }

    /// Creates the configured admin on first start. Returns whether an account
    /// was created.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> AnyResult<bool> {
        let username = username.trim().to_string();

        if self
            .admin_user_repo
            .find_by_username(username.clone())
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let admin = self
            .admin_user_repo
            .create(InsertAdminUserEntity {
                username,
                password_hash: hash_password(password)?,
            })
            .await?;

        info!(admin_id = %admin.id, username = %admin.username, "admin_auth: bootstrap admin created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        entities::{admin_sessions::AdminSessionEntity, admin_users::AdminUserEntity},
        repositories::{
            admin_sessions::MockAdminSessionRepository, admin_users::MockAdminUserRepository,
        },
    };
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn admin(password: &str) -> AdminUserEntity {
        AdminUserEntity {
            id: Uuid::new_v4(),
            username: "coach".to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn session(admin_id: Uuid, token: &str, expires_at: DateTime<Utc>) -> AdminSessionEntity {
        AdminSessionEntity {
            id: Uuid::new_v4(),
            admin_id,
            token_hash: hash_session_token(token),
            expires_at,
            created_at: Utc::now(),
        }
    }

    fn login_model(password: &str) -> LoginModel {
        LoginModel {
            username: " coach ".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_stores_only_the_token_digest() {
        let admin = admin("s3cret");
        let admin_id = admin.id;

        let mut admin_user_repo = MockAdminUserRepository::new();
        let mut session_repo = MockAdminSessionRepository::new();

        admin_user_repo
            .expect_find_by_username()
            .with(eq("coach".to_string()))
            .returning(move |_| {
                let admin = admin.clone();
                Box::pin(async move { Ok(Some(admin)) })
            });

        session_repo
            .expect_create()
            .withf(move |session| session.admin_id == admin_id && session.token_hash.len() == 64)
            .times(1)
            .returning(|session| {
                Box::pin(async move {
                    Ok(AdminSessionEntity {
                        id: Uuid::new_v4(),
                        admin_id: session.admin_id,
                        token_hash: session.token_hash,
                        expires_at: session.expires_at,
                        created_at: Utc::now(),
                    })
                })
            });

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(session_repo),
            Duration::hours(24),
        );

        let issued = usecase.login(login_model("s3cret")).await.unwrap();
        assert_eq!(issued.identity.admin_id, admin_id);
        assert_ne!(issued.token, hash_session_token(&issued.token));
        assert!(issued.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn wrong_password_creates_no_session() {
        let admin = admin("s3cret");

        let mut admin_user_repo = MockAdminUserRepository::new();
        let mut session_repo = MockAdminSessionRepository::new();

        admin_user_repo.expect_find_by_username().returning(move |_| {
            let admin = admin.clone();
            Box::pin(async move { Ok(Some(admin)) })
        });
        session_repo.expect_create().never();

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(session_repo),
            Duration::hours(24),
        );

        let err = usecase.login(login_model("guess")).await.unwrap_err();
        assert!(matches!(err, AdminAuthError::InvalidCredentials));
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_user_gets_the_same_error() {
        let mut admin_user_repo = MockAdminUserRepository::new();
        admin_user_repo
            .expect_find_by_username()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(MockAdminSessionRepository::new()),
            Duration::hours(24),
        );

        let err = usecase.login(login_model("s3cret")).await.unwrap_err();
        assert!(matches!(err, AdminAuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn expired_session_is_deleted_and_rejected() {
        let admin_id = Uuid::new_v4();
        let expired = session(admin_id, "tok", Utc::now() - Duration::minutes(1));

        let mut session_repo = MockAdminSessionRepository::new();
        session_repo
            .expect_find_by_token_hash()
            .with(eq(hash_session_token("tok")))
            .returning(move |_| {
                let expired = expired.clone();
                Box::pin(async move { Ok(Some(expired)) })
            });
        session_repo
            .expect_delete_by_token_hash()
            .with(eq(hash_session_token("tok")))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = AdminAuthUseCase::new(
            Arc::new(MockAdminUserRepository::new()),
            Arc::new(session_repo),
            Duration::hours(24),
        );

        let err = usecase.authenticate("tok".to_string()).await.unwrap_err();
        assert!(matches!(err, AdminAuthError::SessionExpired));
    }

    #[tokio::test]
    async fn live_session_resolves_admin() {
        let admin = admin("s3cret");
        let admin_id = admin.id;
        let live = session(admin_id, "tok", Utc::now() + Duration::hours(1));

        let mut admin_user_repo = MockAdminUserRepository::new();
        let mut session_repo = MockAdminSessionRepository::new();

        session_repo.expect_find_by_token_hash().returning(move |_| {
            let live = live.clone();
            Box::pin(async move { Ok(Some(live)) })
        });
        admin_user_repo
            .expect_find_by_id()
            .with(eq(admin_id))
            .returning(move |_| {
                let admin = admin.clone();
                Box::pin(async move { Ok(Some(admin)) })
            });

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(session_repo),
            Duration::hours(24),
        );

        let identity = usecase.authenticate("tok".to_string()).await.unwrap();
        assert_eq!(identity.admin_id, admin_id);
        assert_eq!(identity.username, "coach");
    }

    #[tokio::test]
    async fn bootstrap_skips_existing_admin() {
        let admin = admin("s3cret");

        let mut admin_user_repo = MockAdminUserRepository::new();
        admin_user_repo.expect_find_by_username().returning(move |_| {
            let admin = admin.clone();
            Box::pin(async move { Ok(Some(admin)) })
        });
        admin_user_repo.expect_create().never();

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(MockAdminSessionRepository::new()),
            Duration::hours(24),
        );

        assert!(!usecase.bootstrap_admin("coach", "s3cret").await.unwrap());
    }

    #[tokio::test]
    async fn bootstrap_hashes_the_password() {
        let mut admin_user_repo = MockAdminUserRepository::new();
        admin_user_repo
            .expect_find_by_username()
            .returning(|_| Box::pin(async { Ok(None) }));
        admin_user_repo
            .expect_create()
            .withf(|admin| admin.username == "coach" && admin.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|admin| {
                Box::pin(async move {
                    Ok(AdminUserEntity {
                        id: Uuid::new_v4(),
                        username: admin.username,
                        password_hash: admin.password_hash,
                        created_at: Utc::now(),
                    })
                })
            });

        let usecase = AdminAuthUseCase::new(
            Arc::new(admin_user_repo),
            Arc::new(MockAdminSessionRepository::new()),
            Duration::hours(24),
        );

        assert!(usecase.bootstrap_admin(" coach ", "s3cret").await.unwrap());
    }
}
