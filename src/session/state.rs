//! In-memory session state

use crate::models::{Budget, Expense, LivestockRecord, Revenue, User};

/// Who is signed in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// The four collections as last loaded from the farm API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub expenses: Vec<Expense>,
    pub revenues: Vec<Revenue>,
    pub livestock: Vec<LivestockRecord>,
    pub budget: Option<Budget>,
}

/// Signed-in user plus their loaded records
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub expenses: Vec<Expense>,
    pub revenues: Vec<Revenue>,
    pub livestock: Vec<LivestockRecord>,
    pub budget: Option<Budget>,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.status.user()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }

    /// Enter the authenticated state with empty collections
    pub(crate) fn authenticate(&mut self, user: User) {
        self.clear_collections();
        self.status = SessionStatus::Authenticated(user);
    }

    /// Back to anonymous with nothing loaded
    pub(crate) fn clear(&mut self) {
        self.clear_collections();
        self.status = SessionStatus::Anonymous;
    }

    /// Swap in a complete set of collections
    pub(crate) fn replace(&mut self, collections: Collections) {
        self.expenses = collections.expenses;
        self.revenues = collections.revenues;
        self.livestock = collections.livestock;
        self.budget = collections.budget;
    }

    fn clear_collections(&mut self) {
        self.replace(Collections::default());
    }
}
