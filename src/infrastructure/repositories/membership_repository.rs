//! SeaORM implementation of MembershipRepository
//!
//! Membership sets are JSON arrays on the parent row. Each mutation is a
//! single `UPDATE ... WHERE id = ?` built from SQLite's JSON1 functions, so
//! concurrent writers on the same parent never interleave inside one change.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, Value};

use crate::domain::{DomainError, MembershipField, MembershipRepository, SetMutation};

/// Decode a stored membership array
pub(crate) fn decode_ids(raw: &str) -> Result<Vec<String>, DomainError> {
    Ok(serde_json::from_str(raw)?)
}

/// SeaORM-based implementation of MembershipRepository
pub struct SeaOrmMembershipRepository {
    db: DatabaseConnection,
}

impl SeaOrmMembershipRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Build the single-statement update for `mutation` on `field`.
fn mutation_statement(
    field: MembershipField,
    parent_id: &str,
    mutation: SetMutation,
) -> (String, Vec<Value>) {
    let table = field.parent_table();
    let column = field.column();
    let now = chrono::Utc::now().to_rfc3339();

    match mutation {
        SetMutation::AddToSet(member) => (
            format!(
                "UPDATE {table} SET {column} = CASE \
                     WHEN EXISTS (SELECT 1 FROM json_each({table}.{column}) WHERE json_each.value = ?) \
                     THEN {column} \
                     ELSE json_insert({column}, '$[#]', ?) \
                 END, updated_at = ? WHERE id = ?"
            ),
            vec![
                member.clone().into(),
                member.into(),
                now.into(),
                parent_id.into(),
            ],
        ),
        SetMutation::PullAll(member) => (
            // json_group_array over zero rows yields '[]'; ordering the inner
            // select by array index keeps the survivors in store order
            format!(
                "UPDATE {table} SET {column} = ( \
                     SELECT json_group_array(kept.value) FROM ( \
                         SELECT json_each.value AS value FROM json_each({table}.{column}) \
                         WHERE json_each.value <> ? ORDER BY json_each.key \
                     ) AS kept \
                 ), updated_at = ? WHERE id = ?"
            ),
            vec![member.into(), now.into(), parent_id.into()],
        ),
    }
}

#[async_trait]
impl MembershipRepository for SeaOrmMembershipRepository {
    async fn apply(
        &self,
        field: MembershipField,
        parent_id: &str,
        mutation: SetMutation,
    ) -> Result<bool, DomainError> {
        let (sql, values) = mutation_statement(field, parent_id, mutation);
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                &sql,
                values,
            ))
            .await?;

        // SQLite counts matched rows even when the value is unchanged, so
        // zero means the parent document does not exist.
        Ok(result.rows_affected() > 0)
    }

    async fn members(
        &self,
        field: MembershipField,
        parent_id: &str,
    ) -> Result<Option<Vec<String>>, DomainError> {
        let column = field.column();
        let sql = format!(
            "SELECT {column} FROM {table} WHERE id = ?",
            table = field.parent_table()
        );

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                &sql,
                [Value::from(parent_id)],
            ))
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("", column)?;
                Ok(Some(decode_ids(&raw)?))
            }
            None => Ok(None),
        }
    }
}
