use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;
use serde::Serialize;

/// Labels of the reference deployment: hot, just right, cold.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["あつい", "ちょうどよい", "さむい"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    #[error("Invalid vote option: {0}")] InvalidCategory(String),
    #[error("Need at least 1 category")] NoCategories,
    #[error("Duplicate category: {0}")] DuplicateCategory(String),
    #[error("Empty category label")] EmptyCategory,
}

/// A member of a [`Categories`] set. Only obtainable through
/// [`Categories::parse`], so holding one proves the label was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of vote options, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    labels: Vec<Category>,
}

impl Categories {
    pub fn new<I, S>(labels: I) -> Result<Self, VotingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let labels = labels.into_iter()
            .map(|label| {
                let label: String = label.into();
                if label.trim().is_empty() {
                    return Err(VotingError::EmptyCategory);
                }
                if !seen.insert(label.clone()) {
                    return Err(VotingError::DuplicateCategory(label));
                }
                Ok(Category(label))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if labels.is_empty() {
            return Err(VotingError::NoCategories);
        }
        Ok(Self { labels })
    }

    pub fn parse(&self, label: &str) -> Result<Category, VotingError> {
        self.labels.iter()
            .find(|c| c.as_str() == label)
            .cloned()
            .ok_or_else(|| VotingError::InvalidCategory(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|c| c.as_str() == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> { self.labels.iter() }

    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
}

impl Default for Categories {
    fn default() -> Self {
        Self { labels: DEFAULT_CATEGORIES.iter().map(|l| Category(l.to_string())).collect() }
    }
}

/// Point-in-time count per category. Serializes as a flat `{label: count}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: HashMap<Category, u64>,
}

impl Tally {
    fn seeded(categories: &Categories) -> Self {
        Self { counts: categories.iter().map(|c| (c.clone(), 0)).collect() }
    }

    pub fn count(&self, label: &str) -> Option<u64> { self.counts.get(label).copied() }

    pub fn total(&self) -> u64 { self.counts.values().sum() }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn into_labels(self) -> HashMap<String, u64> {
        self.counts.into_iter().map(|(c, n)| (c.0, n)).collect()
    }
}

/// Per-user current vote plus the aggregate tally kept in step with it.
/// Carries no locking of its own; callers serialize access.
#[derive(Debug, Clone)]
pub struct Poll {
    tally: Tally,
    user_votes: HashMap<String, Category>,
}

impl Poll {
    pub fn new(categories: &Categories) -> Self {
        Self { tally: Tally::seeded(categories), user_votes: HashMap::new() }
    }

    /// Records `category` as the current vote of `user_id` and returns the
    /// category it replaced.
    ///
    /// Switching away from a previous category moves one count from it to the
    /// new one. Re-voting for the same category leaves the record as is but
    /// still adds one to that category's count.
    pub fn record(&mut self, user_id: &str, category: Category) -> Option<Category> {
        let previous = self.user_votes.get(user_id).cloned();

        if let Some(prev) = previous.as_ref().filter(|prev| **prev != category) {
            if let Some(count) = self.tally.counts.get_mut(prev) {
                *count = count.saturating_sub(1);
            }
        }

        *self.tally.counts.entry(category.clone()).or_insert(0) += 1;
        self.user_votes.insert(user_id.to_string(), category);
        previous
    }

    pub fn tally(&self) -> &Tally { &self.tally }

    pub fn vote_of(&self, user_id: &str) -> Option<&Category> { self.user_votes.get(user_id) }

    pub fn voter_count(&self) -> usize { self.user_votes.len() }
}
