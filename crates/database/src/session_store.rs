//! `tower-sessions` store persisted in the application's own database.
//!
//! Sessions survive restarts and are shared by every server process pointed at
//! the same database.

use crate::entities::sessions;
use async_trait::async_trait;
use log::{debug, error};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use std::time::Duration;
use tower_sessions::{
    SessionStore,
    cookie::time::OffsetDateTime,
    session::{Id, Record},
    session_store,
};

#[derive(Clone, Debug)]
pub struct SeaOrmSessionStore {
    db: DatabaseConnection,
}

impl SeaOrmSessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes every session whose expiry date has passed, returning how many were dropped
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::ExpiryDate.lt(now))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sweeps expired sessions every `period`, forever
    ///
    /// A failed sweep is logged and retried on the next tick.
    pub async fn continuously_delete_expired(self, period: Duration) {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;

            match self.delete_expired().await {
                Ok(0) => {}
                Ok(removed) => debug!("Deleted {removed} expired session(s)"),
                Err(e) => error!("Failed to delete expired sessions: {e}"),
            }
        }
    }

    async fn exists(&self, id: &Id) -> Result<bool, DbErr> {
        Ok(sessions::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .is_some())
    }
}

fn backend(err: DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

#[async_trait]
impl SessionStore for SeaOrmSessionStore {
    async fn create(&self, record: &mut Record) -> Result<(), session_store::Error> {
        // Ids are random; on the rare collision just draw another one
        while self.exists(&record.id).await.map_err(backend)? {
            record.id = Id::default();
        }

        self.save(record).await
    }

    async fn save(&self, record: &Record) -> Result<(), session_store::Error> {
        let data = serde_json::to_string(record)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let session = sessions::ActiveModel {
            id: Set(record.id.to_string()),
            data: Set(data),
            expiry_date: Set(record.expiry_date.unix_timestamp()),
        };

        sessions::Entity::insert(session)
            .on_conflict(
                OnConflict::column(sessions::Column::Id)
                    .update_columns([sessions::Column::Data, sessions::Column::ExpiryDate])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> Result<Option<Record>, session_store::Error> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let session = sessions::Entity::find_by_id(session_id.to_string())
            .filter(sessions::Column::ExpiryDate.gt(now))
            .one(&self.db)
            .await
            .map_err(backend)?;

        session
            .map(|session| {
                serde_json::from_str(&session.data)
                    .map_err(|e| session_store::Error::Decode(e.to_string()))
            })
            .transpose()
    }

    async fn delete(&self, session_id: &Id) -> Result<(), session_store::Error> {
        sessions::Entity::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SeaOrmSessionStore;
    use crate::{db::test_connection, entities::sessions};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use std::collections::HashMap;
    use tower_sessions::{
        SessionStore,
        cookie::time::{Duration, OffsetDateTime},
        session::{Id, Record},
    };

    fn record(expires_in: Duration) -> Record {
        let mut data = HashMap::new();
        data.insert("user_id".to_string(), serde_json::json!(7));

        Record {
            id: Id::default(),
            data,
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = SeaOrmSessionStore::new(test_connection().await);
        let mut session = record(Duration::hours(1));

        store.create(&mut session).await.unwrap();
        let loaded = store.load(&session.id).await.unwrap().unwrap();

        assert_eq!(loaded.id, session.id);
        assert_eq!(loaded.data, session.data);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let db = test_connection().await;
        let store = SeaOrmSessionStore::new(db.clone());
        let mut session = record(Duration::hours(1));
        store.create(&mut session).await.unwrap();

        session
            .data
            .insert("csrf_token".to_string(), serde_json::json!("abc"));
        store.save(&session).await.unwrap();

        let loaded = store.load(&session.id).await.unwrap().unwrap();
        assert_eq!(loaded.data.len(), 2);
        assert_eq!(sessions::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SeaOrmSessionStore::new(test_connection().await);
        let mut session = record(Duration::hours(1));
        store.create(&mut session).await.unwrap();

        store.delete(&session.id).await.unwrap();

        assert!(store.load(&session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_sessions_are_ignored_and_swept() {
        let db = test_connection().await;
        let store = SeaOrmSessionStore::new(db.clone());

        let mut expired = record(Duration::hours(-1));
        let mut live = record(Duration::hours(1));
        store.create(&mut expired).await.unwrap();
        store.create(&mut live).await.unwrap();

        assert!(store.load(&expired.id).await.unwrap().is_none());

        assert_eq!(store.delete_expired().await.unwrap(), 1);
        assert_eq!(sessions::Entity::find().count(&db).await.unwrap(), 1);
        assert!(store.load(&live.id).await.unwrap().is_some());
    }
}
