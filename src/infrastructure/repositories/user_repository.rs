//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::{CreateUserInput, DomainError, User, UserRepository};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity, Model};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for User {
    fn from(u: Model) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(user.map(User::from))
    }

    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let user = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(input.name),
            email: Set(input.email),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = user.insert(&self.db).await?;
        Ok(User::from(result))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
