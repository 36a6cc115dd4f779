use std::collections::BTreeMap;

use tokio::sync::RwLock;

/// In-memory table keyed by auto-incremented integer IDs.
///
/// IDs start at 1 and are never reused. Allocation and insertion happen under
/// one write lock so concurrent inserts never collide.
#[derive(Debug)]
pub struct RecordTable<T> {
    state: RwLock<TableState<T>>,
}

#[derive(Debug)]
struct TableState<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> RecordTable<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a table pre-populated with `items`, assigning IDs 1, 2, ...
    pub fn seeded<I, F>(items: I, mut build: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(u64, I::Item) -> T,
    {
        let mut rows = BTreeMap::new();
        let mut next_id = 1;
        for item in items {
            rows.insert(next_id, build(next_id, item));
            next_id += 1;
        }

        Self {
            state: RwLock::new(TableState { rows, next_id }),
        }
    }

    /// Allocate the next ID, build the row from it, and store it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let row = build(id);
        state.rows.insert(id, row.clone());
        row
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.state.read().await.rows.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }
}

impl<T: Clone> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let table = RecordTable::new();

        let first = table.insert_with(|id| (id, "a")).await;
        let second = table.insert_with(|id| (id, "b")).await;

        assert_eq!(first, (1, "a"));
        assert_eq!(second, (2, "b"));
        assert_eq!(table.get(2).await, Some((2, "b")));
        assert_eq!(table.get(3).await, None);
    }

    #[tokio::test]
    async fn test_seeded_continues_numbering() {
        let table = RecordTable::seeded(["x", "y"], |id, name| (id, name));

        assert_eq!(table.len().await, 2);
        assert_eq!(table.get(1).await, Some((1, "x")));

        let next = table.insert_with(|id| (id, "z")).await;
        assert_eq!(next.0, 3);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let table = Arc::new(RecordTable::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let table = Arc::clone(&table);
                tokio::spawn(async move { table.insert_with(|id| id).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
        assert_eq!(table.len().await, 32);
    }
}
