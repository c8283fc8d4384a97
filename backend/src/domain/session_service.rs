//! Sign-in state of the client: who is signed in and with which tokens.

use anyhow::{anyhow, Result};
use shared::{AuthSession, User};
use std::sync::Arc;
use tracing::info;

use crate::storage::{Connection, SessionStorage};

#[derive(Clone)]
pub struct SessionService<C: Connection> {
    session_repository: C::SessionRepository,
}

impl<C: Connection> SessionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            session_repository: connection.create_session_repository(),
        }
    }

    pub async fn current_session(&self) -> Result<Option<AuthSession>> {
        self.session_repository.get_session().await
    }

    /// Persist a freshly obtained session, replacing any previous one
    pub async fn sign_in(&self, session: AuthSession) -> Result<AuthSession> {
        if session.token.trim().is_empty() {
            return Err(anyhow!("Session token cannot be empty"));
        }
        self.session_repository.store_session(&session).await?;
        info!("Signed in as {}", session.user.email);
        Ok(session)
    }

    /// Returns true when someone was signed in
    pub async fn sign_out(&self) -> Result<bool> {
        self.session_repository.clear_session().await
    }

    /// Replace the stored user profile, keeping the tokens
    pub async fn update_user(&self, user: User) -> Result<AuthSession> {
        let mut session = self
            .session_repository
            .get_session()
            .await?
            .ok_or_else(|| anyhow!("No user is signed in"))?;

        session.user = user;
        self.session_repository.store_session(&session).await?;
        Ok(session)
    }
}
