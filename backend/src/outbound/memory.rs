//! Process-local [`EmployeeRepository`].
//!
//! Serves the API when no database URL is configured and backs the HTTP
//! tests. Every operation holds the lock for its whole duration, so a delete
//! checks and removes in one step.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmployeeId, EmployeeRecord};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<EmployeeId, EmployeeRecord>,
}

/// In-memory employee table with sequential ids starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: RwLock<Store>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(
        &self,
        mut record: EmployeeRecord,
    ) -> Result<EmployeeRecord, EmployeeRepositoryError> {
        let mut store = self.store.write().await;

        let id = match record.id {
            Some(id) if store.rows.contains_key(&id) => id,
            Some(id) => return Err(EmployeeRepositoryError::missing(id)),
            None => {
                store.last_id += 1;
                let id = EmployeeId::new(store.last_id);
                record.id = Some(id);
                id
            }
        };

        store.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, EmployeeRepositoryError> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        Ok(self.store.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn repo() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn inserts_assign_sequential_ids(repo: InMemoryEmployeeRepository) {
        let first = repo
            .save(EmployeeRecord::unsaved("Jane", "Doe", "jane@x.com"))
            .await
            .expect("first insert");
        let second = repo
            .save(EmployeeRecord::unsaved("John", "Roe", "john@x.com"))
            .await
            .expect("second insert");

        assert_eq!(first.id, Some(EmployeeId::new(1)));
        assert_eq!(second.id, Some(EmployeeId::new(2)));
    }

    #[rstest]
    #[tokio::test]
    async fn save_with_id_overwrites_in_place(repo: InMemoryEmployeeRepository) {
        let mut stored = repo
            .save(EmployeeRecord::unsaved("Jane", "Doe", "jane@x.com"))
            .await
            .expect("insert");
        stored.first_name = "Janet".to_owned();

        repo.save(stored.clone()).await.expect("overwrite");

        let all = repo.find_all().await.expect("list");
        assert_eq!(all, vec![stored]);
    }

    #[rstest]
    #[tokio::test]
    async fn save_with_unknown_id_reports_missing(repo: InMemoryEmployeeRepository) {
        let mut record = EmployeeRecord::unsaved("Ghost", "Row", "ghost@x.com");
        record.id = Some(EmployeeId::new(41));

        let err = repo.save(record).await.expect_err("overwrite fails");
        assert_eq!(err, EmployeeRepositoryError::missing(EmployeeId::new(41)));
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_ids_are_not_reused(repo: InMemoryEmployeeRepository) {
        let first = repo
            .save(EmployeeRecord::unsaved("Jane", "Doe", "jane@x.com"))
            .await
            .expect("insert");
        let id = first.id.expect("id assigned");

        assert!(repo.delete_by_id(id).await.expect("delete"));
        assert!(!repo.delete_by_id(id).await.expect("second delete"));
        assert_eq!(repo.find_by_id(id).await.expect("lookup"), None);

        let next = repo
            .save(EmployeeRecord::unsaved("John", "Roe", "john@x.com"))
            .await
            .expect("insert after delete");
        assert_eq!(next.id, Some(EmployeeId::new(2)));
    }
}
