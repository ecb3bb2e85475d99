//! Food safety verdicts and the append-only confirmation log.
//!
//! A verdict is the intersection of a user's sensitivities with a food's
//! contents, matched by content id. The food is safe exactly when that
//! intersection is empty.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfirmationLogId, Food, FoodContent, FoodContentId, FoodId, UserId};

/// Outcome of checking one food against one user's sensitivities.
///
/// ## Invariants
/// - `sensitive_contents` is a subset of both inputs and carries each content
///   once, in the food's content order.
///
/// # Examples
/// ```
/// use scanfood::domain::{
///     ContentName, Food, FoodContent, FoodContentId, FoodId, FoodName, ImageRef, Verdict,
/// };
///
/// let gluten = FoodContent::new(FoodContentId::new(1).unwrap(), ContentName::new("gluten").unwrap());
/// let food = Food {
///     id: FoodId::new(1).unwrap(),
///     name: FoodName::new("Bread").unwrap(),
///     image: ImageRef::new("foods/bread.jpg").unwrap(),
///     contents: vec![gluten.id, FoodContentId::new(2).unwrap()],
/// };
/// let verdict = Verdict::evaluate(&[gluten.clone()], &food);
/// assert!(!verdict.is_safe());
/// assert_eq!(verdict.sensitive_contents(), &[gluten]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    sensitive_contents: Vec<FoodContent>,
}

impl Verdict {
    /// Intersect `sensitivities` with the contents of `food`.
    ///
    /// Duplicate sensitivity records collapse; they never change the outcome.
    pub fn evaluate(sensitivities: &[FoodContent], food: &Food) -> Self {
        let mut seen = HashSet::with_capacity(food.contents.len());
        let sensitive_contents = food
            .contents
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| sensitivities.iter().find(|content| content.id == *id))
            .cloned()
            .collect();
        Self { sensitive_contents }
    }

    /// `true` when the user has no sensitivity to anything in the food.
    pub fn is_safe(&self) -> bool {
        self.sensitive_contents.is_empty()
    }

    /// Contents that made the food unsafe; empty when safe.
    pub fn sensitive_contents(&self) -> &[FoodContent] {
        &self.sensitive_contents
    }

    /// Consume the verdict, returning the offending contents.
    pub fn into_sensitive_contents(self) -> Vec<FoodContent> {
        self.sensitive_contents
    }
}

/// Log entry to append, derived from a [`Verdict`] so `result` always agrees
/// with `sensitive_content_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConfirmationLog {
    user_id: UserId,
    food_id: FoodId,
    sensitive_content_ids: Vec<FoodContentId>,
}

impl NewConfirmationLog {
    /// Record `verdict` for the given user and food.
    pub fn from_verdict(user_id: UserId, food_id: FoodId, verdict: &Verdict) -> Self {
        Self {
            user_id,
            food_id,
            sensitive_content_ids: verdict.sensitive_contents().iter().map(|c| c.id).collect(),
        }
    }

    /// User the evaluation was made for.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Food that was evaluated.
    pub fn food_id(&self) -> FoodId {
        self.food_id
    }

    /// `true` (safe) exactly when no content triggered a conflict.
    pub fn result(&self) -> bool {
        self.sensitive_content_ids.is_empty()
    }

    /// Offending content ids.
    pub fn sensitive_content_ids(&self) -> &[FoodContentId] {
        &self.sensitive_content_ids
    }
}

/// Immutable record of one safety evaluation.
///
/// Entries are append-only: `confirmed_at` is assigned by the store at
/// creation and no operation updates or deletes a log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationLog {
    pub id: ConfirmationLogId,
    pub user_id: UserId,
    pub food_id: FoodId,
    pub confirmed_at: DateTime<Utc>,
    pub result: bool,
    pub sensitive_contents: Vec<FoodContentId>,
}

/// Result returned to callers of the confirmation use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationOutcome {
    pub log: ConfirmationLog,
    pub sensitive_contents: Vec<FoodContent>,
}

impl ConfirmationOutcome {
    /// `true` when the food is safe for the user.
    pub fn result(&self) -> bool {
        self.log.result
    }
}
