use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use business::domain::errors::SessionError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::session::{SessionProvider, SessionStore};

use crate::entity::StoredUser;

/// The file holds the password, so only the owner may read it.
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Session kept in a JSON file and cached in memory.
///
/// A missing or unreadable file means nobody is signed in.
pub struct FileSessionStore {
    path: PathBuf,
    cache: RwLock<Option<User>>,
}

impl FileSessionStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = Self::load(&path).await;
        Self {
            path,
            cache: RwLock::new(cached),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> Option<User> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Cannot read session file {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<StoredUser>(&raw) {
            Ok(stored) => Some(stored.into_domain()),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn write_private(&self, contents: &[u8]) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(SESSION_FILE_MODE);

        let mut file = options.open(&self.path).await?;
        // `mode` only applies on creation; tighten files left by older runs.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(SESSION_FILE_MODE))
                .await?;
        }
        file.write_all(contents).await?;
        file.flush().await
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.cache.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionProvider for FileSessionStore {
    fn current_user_id(&self) -> Option<UserId> {
        self.read_cache().as_ref().map(|user| user.id)
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    fn current_user(&self) -> Option<User> {
        self.read_cache().clone()
    }

    async fn save_user(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_vec_pretty(&StoredUser::from_domain(user, Utc::now()))
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionError::Io(e.to_string()))?;
        }
        self.write_private(&json)
            .await
            .map_err(|e| SessionError::Io(e.to_string()))?;

        *self.write_cache() = Some(user.clone());
        tracing::debug!("Session saved for user {}", user.id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(SessionError::Io(e.to_string())),
        }

        *self.write_cache() = None;
        Ok(())
    }
}
