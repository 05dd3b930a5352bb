use crate::{
    database::MongoDB,
    models::{UpdateUserRequest, User},
    utils::error::AppError,
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

pub const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

pub const EMAIL_TAKEN_MESSAGE: &str = "User with this email already exists";

/// Storage operations for user records.
///
/// Ids are the hex form of the document id. An id that does not parse is
/// treated as absent rather than as an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts `user` and returns it with its generated id.
    /// Fails with `AppError::Conflict` when the email is taken.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// All users in storage order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Writes the present fields of `changes`. Returns false when no user
    /// has this id.
    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> Result<bool, AppError>;

    /// Returns false when no user has this id.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoUserRepository {
    db: MongoDB,
}

impl MongoUserRepository {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn translate_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string())
    } else {
        AppError::from(err)
    }
}

fn set_document(changes: &UpdateUserRequest) -> Document {
    let mut set = Document::new();

    if let Some(name) = &changes.name { set.insert("name", name); }
    if let Some(email) = &changes.email { set.insert("email", email); }
    if let Some(address) = &changes.address { set.insert("address", address); }

    set
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        user.id = None;

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(translate_write_error)?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection().find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.collection().find_one(doc! { "_id": object_id }).await?)
    }

    async fn update(&self, id: &str, changes: &UpdateUserRequest) -> Result<bool, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        if changes.is_empty() {
            // $set with no fields is rejected by the server
            return Ok(self.find_by_id(id).await?.is_some());
        }
        let set = set_document(changes);

        let result = self
            .collection()
            .update_one(doc! { "_id": object_id }, doc! { "$set": set })
            .await
            .map_err(translate_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection().delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_only_has_present_fields() {
        let changes = UpdateUserRequest {
            address: Some("99 Oak Ave".to_string()),
            ..Default::default()
        };

        let set = set_document(&changes);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("address").unwrap(), "99 Oak Ave");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_duplicate_email_is_a_conflict() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/user_service_test".to_string());
        let db = MongoDB::new(&uri, "user_service_test").await.unwrap();
        let repo = MongoUserRepository::new(db);

        let email = format!("{}@example.com", ObjectId::new().to_hex());
        let user = User {
            id: None,
            name: "Ann Lee".into(),
            email,
            address: "12 Main Street".into(),
        };

        let created = repo.insert(user.clone()).await.unwrap();
        let duplicate = repo.insert(user).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let id = created.id.unwrap().to_hex();
        assert!(repo.delete(&id).await.unwrap());
    }
}
