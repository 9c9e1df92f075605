//! SeaORM implementation of TicketRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::{CreateTicketInput, DomainError, Ticket, TicketRepository};
use crate::models::ticket::{ActiveModel, Column, Entity as TicketEntity, Model};

/// SeaORM-based implementation of TicketRepository
pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
}

impl SeaOrmTicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for Ticket {
    fn from(t: Model) -> Self {
        Ticket {
            id: t.id,
            title: t.title,
            description: t.description,
            created_at: t.created_at,
        }
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn find_all(&self) -> Result<Vec<Ticket>, DomainError> {
        let tickets = TicketEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(tickets.into_iter().map(Ticket::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Ticket>, DomainError> {
        let ticket = TicketEntity::find_by_id(id).one(&self.db).await?;
        Ok(ticket.map(Ticket::from))
    }

    async fn create(&self, input: CreateTicketInput) -> Result<Ticket, DomainError> {
        let ticket = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(input.title),
            description: Set(input.description),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        let result = ticket.insert(&self.db).await?;
        Ok(Ticket::from(result))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = TicketEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
