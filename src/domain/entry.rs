use serde::{Deserialize, Serialize};

use super::Cents;

/// Identifier of an entry, unique within its kind.
pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (salary, gifts, refunds)
    Income,
    /// Money going out (rent, groceries, bills)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "inc" | "+" => Some(EntryKind::Income),
            "expense" | "exp" | "-" => Some(EntryKind::Expense),
            _ => None,
        }
    }

    /// Sign shown in front of list amounts.
    pub fn sign(&self) -> char {
        match self {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record.
///
/// The id is fixed at creation; description and amount can be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    kind: EntryKind,
    description: String,
    amount_cents: Cents,
}

impl Entry {
    pub(crate) fn new(
        id: EntryId,
        kind: EntryKind,
        description: String,
        amount_cents: Cents,
    ) -> Self {
        Self {
            id,
            kind,
            description,
            amount_cents,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount(&mut self, amount_cents: Cents) {
        self.amount_cents = amount_cents;
    }
}
