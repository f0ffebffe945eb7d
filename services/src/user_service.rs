use db::models::user::{self, Role};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, SqlErr};
use serde::Deserialize;
use validator::Validate;

use crate::access::{Requester, can_change_roles};
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupInput {
    #[serde(default)]
    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: String,

    pub role: Option<Role>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleInput {
    pub role: Role,
}

pub struct UserService;

impl UserService {
    /// Registers a new account. Self-service signup may not claim `ADMIN`.
    pub async fn signup(db: &DatabaseConnection, input: SignupInput) -> ServiceResult<user::Model> {
        input.validate()?;

        let role = input.role.unwrap_or_default();
        match role {
            Role::User | Role::Organizer => {}
            Role::Admin => {
                return Err(ServiceError::Validation(
                    "Role must be USER or ORGANIZER".into(),
                ));
            }
        }

        if user::Model::find_by_email(db, &input.email).await?.is_some() {
            return Err(ServiceError::Conflict("Email is already registered".into()));
        }

        let created = user::Model::create(db, &input.email, &input.name, &input.password, role)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    ServiceError::Conflict("Email is already registered".into())
                }
                _ => ServiceError::Database(e),
            })?;

        tracing::info!(user_id = created.id, role = %created.role, "User registered");
        Ok(created)
    }

    pub async fn login(db: &DatabaseConnection, input: LoginInput) -> ServiceResult<user::Model> {
        match user::Model::verify(db, &input.email, &input.password).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(email = %input.email, "Failed login attempt");
                Err(ServiceError::Unauthorized("Invalid email or password".into()))
            }
        }
    }

    pub async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<user::Model> {
        user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))
    }

    pub async fn set_role(
        db: &DatabaseConnection,
        requester: &Requester,
        user_id: i64,
        role: Role,
    ) -> ServiceResult<user::Model> {
        if !can_change_roles(requester.role) {
            return Err(ServiceError::Forbidden("Not authorized to change roles".into()));
        }

        let updated = user::Model::set_role(db, user_id, role)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotFound(_) => ServiceError::NotFound("User not found".into()),
                other => ServiceError::Database(other),
            })?;

        tracing::info!(user_id, role = %role, changed_by = requester.id, "Role changed");
        Ok(updated)
    }
}
