//! In-process store used when no database is configured and by the
//! end-to-end tests.
//!
//! All tables live behind a single `RwLock`, so each port operation is atomic
//! with respect to every other one. Identifiers are handed out from
//! per-table counters starting at 1, mirroring a database sequence.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    ConfirmationLog, ConfirmationLogId, ContentName, Food, FoodContent, FoodContentId, FoodId,
    FoodName, ImageRef, User, UserId,
};

mod repositories;

#[derive(Debug, Default)]
struct Sequence(i64);

impl Sequence {
    fn next(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug)]
struct FoodRow {
    name: FoodName,
    image: ImageRef,
    contents: Vec<FoodContentId>,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    user_ids: Sequence,
    contents: BTreeMap<FoodContentId, ContentName>,
    content_ids: Sequence,
    foods: BTreeMap<FoodId, FoodRow>,
    food_ids: Sequence,
    // One entry per association row; duplicates are kept.
    sensitivities: Vec<(UserId, FoodContentId)>,
    logs: Vec<ConfirmationLog>,
    log_ids: Sequence,
}

impl Tables {
    fn content(&self, id: FoodContentId) -> Option<FoodContent> {
        self.contents
            .get(&id)
            .map(|name| FoodContent::new(id, name.clone()))
    }

    fn food(&self, id: FoodId) -> Option<Food> {
        self.foods.get(&id).map(|row| Food {
            id,
            name: row.name.clone(),
            image: row.image.clone(),
            contents: row.contents.clone(),
        })
    }

    fn sensitive_contents(&self, user_id: UserId) -> Vec<FoodContent> {
        let ids: BTreeSet<FoodContentId> = self
            .sensitivities
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, content_id)| *content_id)
            .collect();
        ids.into_iter().filter_map(|id| self.content(id)).collect()
    }

    fn push_log(
        &mut self,
        user_id: UserId,
        food_id: FoodId,
        sensitive_contents: Vec<FoodContentId>,
    ) -> ConfirmationLog {
        let log = ConfirmationLog {
            id: ConfirmationLogId::from_store(self.log_ids.next()),
            user_id,
            food_id,
            confirmed_at: Utc::now(),
            result: sensitive_contents.is_empty(),
            sensitive_contents,
        };
        self.logs.push(log.clone());
        log
    }
}

/// Shared in-memory implementation of every driven repository port.
///
/// Cloning is cheap and yields a handle to the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every confirmation log entry in insertion order.
    pub async fn confirmation_logs(&self) -> Vec<ConfirmationLog> {
        self.tables.read().await.logs.clone()
    }

    /// Number of stored sensitivity association rows, duplicates included.
    pub async fn sensitivity_rows(&self, user_id: UserId) -> usize {
        self.tables
            .read()
            .await
            .sensitivities
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .count()
    }
}
