//! SeaORM implementation of StoryRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Statement, Value,
};
use uuid::Uuid;

use super::membership_repository::decode_ids;
use crate::domain::{CreateStoryInput, DomainError, MeetingRef, Story, StoryRepository};
use crate::models::story::{Column, Entity as StoryEntity, Model};

/// Insert that only lands while the referenced meeting row exists
const INSERT_UNDER_MEETING: &str = r#"
    INSERT INTO stories (id, name, meeting_id, meeting, estimates, created_at, updated_at)
    SELECT ?, ?, ?, ?, '[]', ?, ?
    WHERE EXISTS (SELECT 1 FROM meetings WHERE id = ?)
"#;

/// SeaORM-based implementation of StoryRepository
pub struct SeaOrmStoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmStoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_story(s: Model) -> Result<Story, DomainError> {
    Ok(Story {
        meeting: serde_json::from_str(&s.meeting)?,
        estimates: decode_ids(&s.estimates)?,
        id: s.id,
        name: s.name,
        created_at: s.created_at,
        updated_at: s.updated_at,
    })
}

#[async_trait]
impl StoryRepository for SeaOrmStoryRepository {
    async fn find_all(&self) -> Result<Vec<Story>, DomainError> {
        StoryEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_story)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Story>, DomainError> {
        StoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_story)
            .transpose()
    }

    async fn find_by_meeting(&self, meeting_id: &str) -> Result<Vec<Story>, DomainError> {
        StoryEntity::find()
            .filter(Column::MeetingId.eq(meeting_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_story)
            .collect()
    }

    async fn create_for_meeting(
        &self,
        meeting: MeetingRef,
        input: CreateStoryInput,
    ) -> Result<Option<Story>, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let id = Uuid::new_v4().to_string();
        let snapshot = serde_json::to_string(&meeting)?;
        let values: Vec<Value> = vec![
            id.clone().into(),
            input.name.clone().into(),
            meeting.id.clone().into(),
            snapshot.into(),
            now.clone().into(),
            now.clone().into(),
            meeting.id.clone().into(),
        ];

        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                INSERT_UNDER_MEETING,
                values,
            ))
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Story {
            id,
            name: input.name,
            meeting,
            estimates: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = StoryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
