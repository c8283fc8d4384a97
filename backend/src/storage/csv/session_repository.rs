//! YAML-backed session store at `{data_dir}/session.yaml`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::AuthSession;
use std::fs;
use tracing::info;

use super::connection::CsvConnection;
use crate::storage::traits::SessionStorage;

#[derive(Debug, Clone)]
pub struct SessionRepository {
    connection: CsvConnection,
}

impl SessionRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl SessionStorage for SessionRepository {
    async fn get_session(&self) -> Result<Option<AuthSession>> {
        let path = self.connection.session_file_path();
        if !path.exists() {
            return Ok(None);
        }

        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let session: AuthSession = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse session file {}", path.display()))?;
        Ok(Some(session))
    }

    async fn store_session(&self, session: &AuthSession) -> Result<()> {
        let path = self.connection.session_file_path();
        let yaml_content = serde_yaml::to_string(session).context("Failed to serialize session")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path).with_context(|| format!("Failed to replace {}", path.display()))?;

        info!("Stored session for user {}", session.user.id);
        Ok(())
    }

    async fn clear_session(&self) -> Result<bool> {
        let path = self.connection.session_file_path();
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
        info!("Cleared stored session");
        Ok(true)
    }
}
