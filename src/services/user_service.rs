// ==================== USER MANAGEMENT ====================
// Regras de negócio dos usuários: validação, normalização e mapeamento
// de resultados do repositório para erros da API

use crate::{
    database::UserRepository,
    models::{CreateUserRequest, MessageResponse, UpdateUserRequest, User, UserResponse},
    utils::{error::AppError, validation::validate_fields},
};

pub const USER_NOT_FOUND: &str = "User not found";

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_string())
}

/// POST /user - Cria novo usuário
pub async fn create_user(
    repo: &dyn UserRepository,
    request: CreateUserRequest,
) -> Result<UserResponse, AppError> {
    let errors = validate_fields(
        Some(request.name.as_str()),
        Some(request.email.as_str()),
        Some(request.address.as_str()),
    );
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let user = User {
        id: None,
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        address: request.address.trim().to_string(),
    };

    let created = repo.insert(user).await?;
    Ok(UserResponse::from(created))
}

/// GET /get/users - Lista todos os usuários
pub async fn list_users(repo: &dyn UserRepository) -> Result<Vec<UserResponse>, AppError> {
    let users = repo.find_all().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// GET /get/user/{id}
pub async fn get_user(repo: &dyn UserRepository, id: &str) -> Result<UserResponse, AppError> {
    repo.find_by_id(id)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
}

/// PUT /update/user/{id} - Atualiza apenas os campos enviados
pub async fn update_user(
    repo: &dyn UserRepository,
    id: &str,
    request: UpdateUserRequest,
) -> Result<MessageResponse, AppError> {
    let errors = validate_fields(
        request.name.as_deref(),
        request.email.as_deref(),
        request.address.as_deref(),
    );
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let changes = UpdateUserRequest {
        name: trimmed(&request.name),
        email: trimmed(&request.email),
        address: trimmed(&request.address),
    };

    if !repo.update(id, &changes).await? {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    }

    Ok(MessageResponse::new("User updated successfully"))
}

/// DELETE /delete/user/{id}
pub async fn delete_user(repo: &dyn UserRepository, id: &str) -> Result<MessageResponse, AppError> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    }

    Ok(MessageResponse::new("User deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryUserRepository;

    fn ann() -> CreateUserRequest {
        CreateUserRequest {
            name: "Ann Lee".into(),
            email: "ann@example.com".into(),
            address: "12 Main Street".into(),
        }
    }

    #[tokio::test]
    async fn test_created_user_is_listed() {
        let repo = MemoryUserRepository::new();

        let created = create_user(&repo, ann()).await.unwrap();
        let users = list_users(&repo).await.unwrap();

        assert_eq!(users, vec![created]);
        assert_eq!(users[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = MemoryUserRepository::new();
        create_user(&repo, ann()).await.unwrap();

        let mut other = ann();
        other.name = "Ann Other".into();
        let result = create_user(&repo, other).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(list_users(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_match_is_case_sensitive() {
        let repo = MemoryUserRepository::new();
        create_user(&repo, ann()).await.unwrap();

        let mut upper = ann();
        upper.email = "Ann@Example.com".into();

        assert!(create_user(&repo, upper).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let repo = MemoryUserRepository::new();
        let request = CreateUserRequest {
            name: "  Ann Lee ".into(),
            email: " ann@example.com".into(),
            address: "12 Main Street  ".into(),
        };

        let created = create_user(&repo, request).await.unwrap();

        assert_eq!(created.name, "Ann Lee");
        assert_eq!(created.email, "ann@example.com");
        assert_eq!(created.address, "12 Main Street");
    }

    #[tokio::test]
    async fn test_invalid_fields_are_not_stored() {
        let repo = MemoryUserRepository::new();
        let request = CreateUserRequest {
            name: "A1".into(),
            email: "nodomain".into(),
            address: "hi".into(),
        };

        match create_user(&repo, request).await {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(list_users(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let repo = MemoryUserRepository::new();
        let id = mongodb::bson::oid::ObjectId::new().to_hex();

        assert!(matches!(get_user(&repo, &id).await, Err(AppError::NotFound(_))));
        assert!(matches!(delete_user(&repo, &id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            update_user(&repo, &id, UpdateUserRequest::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let repo = MemoryUserRepository::new();

        assert!(matches!(get_user(&repo, "not-an-id").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let repo = MemoryUserRepository::new();
        let created = create_user(&repo, ann()).await.unwrap();
        let changes = UpdateUserRequest {
            address: Some("99 Oak Ave".into()),
            ..Default::default()
        };

        update_user(&repo, &created.id, changes.clone()).await.unwrap();
        let first = get_user(&repo, &created.id).await.unwrap();
        let message = update_user(&repo, &created.id, changes).await.unwrap();
        let second = get_user(&repo, &created.id).await.unwrap();

        assert_eq!(message.message, "User updated successfully");
        assert_eq!(first, second);
        assert_eq!(second.address, "99 Oak Ave");
        assert_eq!(second.name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let repo = MemoryUserRepository::new();
        create_user(&repo, ann()).await.unwrap();
        let bob = create_user(
            &repo,
            CreateUserRequest {
                name: "Bob Stone".into(),
                email: "bob@example.com".into(),
                address: "7 Hill Road".into(),
            },
        )
        .await
        .unwrap();

        let changes = UpdateUserRequest {
            email: Some("ann@example.com".into()),
            ..Default::default()
        };

        assert!(matches!(
            update_user(&repo, &bob.id, changes).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let repo = MemoryUserRepository::offline();

        assert!(matches!(list_users(&repo).await, Err(AppError::DatabaseError(_))));
    }
}
