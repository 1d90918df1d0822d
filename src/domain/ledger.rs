use super::{Cents, Entry, EntryId, EntryKind};

/// In-memory owner of the income and expense sequences.
///
/// Entries keep insertion order. Each kind has its own id counter starting
/// at 1; counters only move forward, so removed ids are never handed out again.
#[derive(Debug, Clone)]
pub struct Ledger {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
    next_income_id: EntryId,
    next_expense_id: EntryId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            next_income_id: 1,
            next_expense_id: 1,
        }
    }

    /// Append a new income entry. No validation happens here.
    pub fn add_income(&mut self, description: impl Into<String>, amount_cents: Cents) -> Entry {
        self.add(EntryKind::Income, description, amount_cents)
    }

    /// Append a new expense entry. No validation happens here.
    pub fn add_expense(&mut self, description: impl Into<String>, amount_cents: Cents) -> Entry {
        self.add(EntryKind::Expense, description, amount_cents)
    }

    pub fn add(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        amount_cents: Cents,
    ) -> Entry {
        let counter = match kind {
            EntryKind::Income => &mut self.next_income_id,
            EntryKind::Expense => &mut self.next_expense_id,
        };
        let id = *counter;
        *counter += 1;

        let entry = Entry::new(id, kind, description.into(), amount_cents);
        self.entries_mut(kind).push(entry.clone());
        entry
    }

    pub fn remove_income(&mut self, id: EntryId) -> Option<Entry> {
        self.remove(EntryKind::Income, id)
    }

    pub fn remove_expense(&mut self, id: EntryId) -> Option<Entry> {
        self.remove(EntryKind::Expense, id)
    }

    /// Remove the first entry of `kind` with the given id.
    /// A missing id is a no-op and yields `None`.
    pub fn remove(&mut self, kind: EntryKind, id: EntryId) -> Option<Entry> {
        let entries = self.entries_mut(kind);
        let position = entries.iter().position(|e| e.id() == id)?;
        Some(entries.remove(position))
    }

    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    pub fn total_income(&self) -> Cents {
        self.total(EntryKind::Income)
    }

    pub fn total_expense(&self) -> Cents {
        self.total(EntryKind::Expense)
    }

    /// Sum of the amounts of one kind. Callers keep each sum within `Cents`.
    pub fn total(&self, kind: EntryKind) -> Cents {
        self.entries(kind).iter().map(Entry::amount_cents).sum()
    }

    /// Balance = total income - total expense. Can go negative.
    pub fn balance(&self) -> Cents {
        self.total_income() - self.total_expense()
    }

    /// Fraction of income spent. Zero when there is no income yet.
    pub fn expense_ratio(&self) -> f64 {
        self.share_of_income(self.total_expense())
    }

    /// `amount_cents` as a fraction of total income, zero when there is no income.
    pub fn share_of_income(&self, amount_cents: Cents) -> f64 {
        let income = self.total_income();
        if income > 0 {
            amount_cents as f64 / income as f64
        } else {
            0.0
        }
    }
}
