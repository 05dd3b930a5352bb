// In-memory UserRepository for tests. Mirrors the unique email index.

use crate::{
    database::users::{UserRepository, EMAIL_TAKEN_MESSAGE},
    models::{UpdateUserRequest, User},
    utils::error::AppError,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
    offline: bool,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like an unreachable database
    pub fn offline() -> Self {
        Self { users: RwLock::default(), offline: true }
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::DatabaseError("server selection timeout".to_string()));
        }
        Ok(())
    }
}

fn matches_id(user: &User, id: &str) -> bool {
    user.id.map(|oid| oid.to_hex() == id).unwrap_or(false)
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        self.check_online()?;
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.check_online()?;
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.check_online()?;
        Ok(self.users.read().await.iter().find(|u| matches_id(u, id)).cloned())
    }

    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> Result<bool, AppError> {
        self.check_online()?;
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email {
            if users.iter().any(|u| &u.email == email && !matches_id(u, id)) {
                return Err(AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
            }
        }

        let Some(user) = users.iter_mut().find(|u| matches_id(u, id)) else {
            return Ok(false);
        };

        if let Some(name) = &changes.name { user.name = name.clone(); }
        if let Some(email) = &changes.email { user.email = email.clone(); }
        if let Some(address) = &changes.address { user.address = address.clone(); }

        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.check_online()?;
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| !matches_id(u, id));
        Ok(users.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}
