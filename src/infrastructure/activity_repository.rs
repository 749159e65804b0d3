use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{
    domain::{
        error::RepositoryError, models::activity::ActivityRecord,
        repositories::activity_repository::ActivityRepository,
    },
    infrastructure::entity::user_activity,
};

#[derive(Clone)]
pub struct PostgresActivityRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresActivityRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert(&self, record: &ActivityRecord) -> Result<(), RepositoryError> {
        // user_activity.id references the auth user's uuid
        let id = Uuid::parse_str(record.id.as_str())
            .map_err(|_| RepositoryError::InvalidAccountId(record.id.as_str().to_string()))?;
        let activity_data = serde_json::to_value(&record.activity_data)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let model = user_activity::ActiveModel {
            id: Set(id),
            activity_type: Set(record.activity_type.as_str().to_string()),
            activity_data: Set(activity_data),
        };

        user_activity::Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::*;
    use crate::domain::models::account::AccountId;

    /// hand the mock connection back once the repository is gone
    fn transaction_log(db: Arc<DatabaseConnection>) -> String {
        let db = Arc::try_unwrap(db).ok().expect("repository still holds the connection");
        format!("{:?}", db.into_transaction_log())
    }

    const ACCOUNT_ID: &str = "6f1d3c1e-2a4b-4c5d-8e9f-0a1b2c3d4e5f";

    #[tokio::test]
    async fn test_insert_initial_signup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let db = Arc::new(db);
        let repository = PostgresActivityRepository::new(db.clone());

        repository
            .insert(&ActivityRecord::initial_signup(AccountId::new(ACCOUNT_ID)))
            .await
            .unwrap();
        drop(repository);

        let log = transaction_log(db);
        assert!(log.contains("user_activity"));
        assert!(log.contains("initial_signup"));
        assert!(log.contains(ACCOUNT_ID));
    }

    #[tokio::test]
    async fn test_insert_reports_database_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();
        let repository = PostgresActivityRepository::new(Arc::new(db));

        let err = repository
            .insert(&ActivityRecord::initial_signup(AccountId::new(ACCOUNT_ID)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::DatabaseError(_)));
        assert!(err.to_string().contains("duplicate key value"));
    }

    #[tokio::test]
    async fn test_insert_rejects_non_uuid_account() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let repository = PostgresActivityRepository::new(db.clone());

        let err = repository
            .insert(&ActivityRecord::initial_signup(AccountId::new("abc123")))
            .await
            .unwrap_err();
        drop(repository);

        assert!(matches!(err, RepositoryError::InvalidAccountId(_)));
        assert_eq!("[]", transaction_log(db));
    }
}
