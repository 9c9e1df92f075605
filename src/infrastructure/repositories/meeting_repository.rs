//! SeaORM implementation of MeetingRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::membership_repository::decode_ids;
use crate::domain::{CreateMeetingInput, DomainError, Meeting, MeetingRepository};
use crate::models::meeting::{ActiveModel, Column, Entity as MeetingEntity, Model};

/// SeaORM-based implementation of MeetingRepository
pub struct SeaOrmMeetingRepository {
    db: DatabaseConnection,
}

impl SeaOrmMeetingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_meeting(m: Model) -> Result<Meeting, DomainError> {
    Ok(Meeting {
        attendees: decode_ids(&m.attendees)?,
        tickets: decode_ids(&m.tickets)?,
        id: m.id,
        name: m.name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

#[async_trait]
impl MeetingRepository for SeaOrmMeetingRepository {
    async fn find_all(&self) -> Result<Vec<Meeting>, DomainError> {
        MeetingEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_meeting)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Meeting>, DomainError> {
        MeetingEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_meeting)
            .transpose()
    }

    async fn create(&self, input: CreateMeetingInput) -> Result<Meeting, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let meeting = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(input.name),
            attendees: Set("[]".to_string()),
            tickets: Set("[]".to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = meeting.insert(&self.db).await?;
        to_meeting(result)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = MeetingEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
