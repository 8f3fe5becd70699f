use std::path::Path;

use super::{StoreError, TodoStore};
use crate::model::{Todo, TodoPatch};

/// Durable store backed by an embedded sled database.
///
/// Each todo is one JSON document keyed by its id. Ids come from
/// `generate_id()` rendered as 16 zero-padded hex digits, so the tree's key
/// order is insertion order.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// A store that is deleted when dropped.
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    fn next_id(&self) -> Result<String, StoreError> {
        Ok(format!("{:016x}", self.db.generate_id()?))
    }
}

fn decode(key: &[u8], value: &[u8]) -> Result<Todo, StoreError> {
    serde_json::from_slice(value).map_err(|source| StoreError::Corrupt {
        key: String::from_utf8_lossy(key).into_owned(),
        source,
    })
}

impl TodoStore for SledStore {
    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.db
            .iter()
            .map(|item| {
                let (key, value) = item?;
                decode(&key, &value)
            })
            .collect()
    }

    fn insert(&self, title: String) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: self.next_id()?,
            title,
            completed: false,
        };
        self.db.insert(todo.id.as_bytes(), serde_json::to_vec(&todo)?)?;
        Ok(todo)
    }

    fn update_by_id(&self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut failure = None;
        // The closure may run more than once if the record changes underneath it.
        let updated = self.db.update_and_fetch(id.as_bytes(), |old| {
            failure = None;
            let old = old?;
            let mut todo = match decode(id.as_bytes(), old) {
                Ok(todo) => todo,
                Err(err) => {
                    failure = Some(err);
                    return Some(old.to_vec());
                }
            };
            todo.apply(patch);
            match serde_json::to_vec(&todo) {
                Ok(bytes) => Some(bytes),
                Err(err) => {
                    failure = Some(StoreError::Encode(err));
                    Some(old.to_vec())
                }
            }
        })?;
        if let Some(err) = failure {
            return Err(err);
        }
        updated.map(|value| decode(id.as_bytes(), &value)).transpose()
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.db.remove(id.as_bytes())?.is_some())
    }

    /// Removes records one by one, counting only the removals that hit.
    fn delete_all(&self) -> Result<usize, StoreError> {
        let mut removed = 0;
        for key in self.db.iter().keys() {
            if self.db.remove(key?)?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
