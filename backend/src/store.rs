use std::sync::{Mutex, MutexGuard};
use tracing::warn;
use shared::{Categories, Category, Poll, Tally, VotingError};

/// Result of an accepted vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastOutcome {
    pub previous: Option<Category>,
    pub tally: Tally,
}

/// Process-wide vote state. The category set is immutable and read without
/// locking; the per-user record and tally live behind a single mutex so every
/// cast and snapshot is serialized against every other.
#[derive(Debug)]
pub struct VoteStore {
    categories: Categories,
    poll: Mutex<Poll>,
}

impl Default for VoteStore {
    fn default() -> Self {
        Self::new(Categories::default())
    }
}

impl VoteStore {
    pub fn new(categories: Categories) -> Self {
        let poll = Mutex::new(Poll::new(&categories));
        Self { categories, poll }
    }

    /// Unknown labels are rejected before the lock is taken and leave the
    /// state untouched.
    pub fn cast_vote(&self, user_id: &str, label: &str) -> Result<CastOutcome, VotingError> {
        let category = self.categories.parse(label)?;

        let mut poll = self.lock();
        let previous = poll.record(user_id, category);
        Ok(CastOutcome { previous, tally: poll.tally().clone() })
    }

    pub fn snapshot(&self) -> Tally {
        self.lock().tally().clone()
    }

    pub fn vote_of(&self, user_id: &str) -> Option<Category> {
        self.lock().vote_of(user_id).cloned()
    }

    pub fn voter_count(&self) -> usize {
        self.lock().voter_count()
    }

    // Nothing fallible runs while the guard is held, so a poisoned lock still
    // guards a consistent poll.
    fn lock(&self) -> MutexGuard<'_, Poll> {
        self.poll.lock().unwrap_or_else(|poisoned| {
            warn!("Vote store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
