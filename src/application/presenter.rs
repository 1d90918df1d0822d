use crate::domain::{parse_cents, Cents, Entry, EntryId, EntryKind, Ledger, MAX_AMOUNT_CENTS};

use super::view::{self, ExpenseRow, IncomeRow, Snapshot, Summary};
use super::{AppError, ValidationError};

/// Rendering target for the presenter (a page, a terminal, a test recorder).
///
/// Every call replaces the whole region it names.
pub trait DisplaySurface {
    fn show_summary(&mut self, summary: &Summary);
    fn show_income_list(&mut self, rows: &[IncomeRow]);
    fn show_expense_list(&mut self, rows: &[ExpenseRow]);

    /// Blocking notice shown to the user, e.g. a validation failure.
    fn notify(&mut self, message: &str);

    fn clear_inputs(&mut self);
    fn focus_description(&mut self);
}

/// Events raised by the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit {
        kind: EntryKind,
        description: String,
        amount: String,
    },
    Delete {
        kind: EntryKind,
        id: EntryId,
    },
}

/// Bridges user actions and ledger state to a display surface.
pub struct Presenter<S: DisplaySurface> {
    ledger: Ledger,
    surface: S,
}

impl<S: DisplaySurface> Presenter<S> {
    /// Create a presenter over an empty ledger.
    pub fn new(surface: S) -> Self {
        Self::with_ledger(Ledger::new(), surface)
    }

    pub fn with_ledger(ledger: Ledger, surface: S) -> Self {
        Self { ledger, surface }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Initial render of the (normally empty) ledger.
    pub fn bootstrap(&mut self) {
        tracing::debug!(empty = self.ledger.is_empty(), "bootstrapping display");
        self.render_summary();
        self.render_income_list();
        self.render_expense_list();
    }

    /// Dispatch an event coming from the display surface.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), AppError> {
        match event {
            UiEvent::Submit {
                kind,
                description,
                amount,
            } => {
                self.submit_entry(kind, &description, &amount)?;
            }
            UiEvent::Delete { kind, id } => match kind {
                EntryKind::Income => self.delete_income(id),
                EntryKind::Expense => self.delete_expense(id),
            },
        }
        Ok(())
    }

    /// Validate and record a new entry, then refresh the display.
    ///
    /// On a validation failure the user is notified, the ledger is untouched and
    /// the inputs are left as they are so they can be corrected.
    pub fn submit_entry(
        &mut self,
        kind: EntryKind,
        description: &str,
        raw_amount: &str,
    ) -> Result<Entry, AppError> {
        let validated = validate_entry(description, raw_amount).and_then(|(description, amount)| {
            // Totals must stay representable for the summary and percentages
            match self.ledger.total(kind).checked_add(amount) {
                Some(_) => Ok((description, amount)),
                None => Err(ValidationError::TotalTooLarge(kind)),
            }
        });
        let (description, amount_cents) = match validated {
            Ok(valid) => valid,
            Err(err) => {
                tracing::warn!(%kind, error = %err, "rejected entry");
                self.surface.notify(&err.to_string());
                return Err(err.into());
            }
        };

        let entry = self.ledger.add(kind, description, amount_cents);
        tracing::debug!(
            %kind,
            id = entry.id(),
            amount_cents = entry.amount_cents(),
            "entry added"
        );

        match kind {
            EntryKind::Income => {
                self.render_income_list();
                // Expense percentages are relative to total income
                self.render_expense_list();
            }
            EntryKind::Expense => self.render_expense_list(),
        }
        self.render_summary();

        self.surface.clear_inputs();
        self.surface.focus_description();
        Ok(entry)
    }

    pub fn delete_income(&mut self, id: EntryId) {
        let removed = self.ledger.remove_income(id);
        tracing::debug!(id, found = removed.is_some(), "income deleted");

        self.render_income_list();
        self.render_expense_list();
        self.render_summary();
    }

    pub fn delete_expense(&mut self, id: EntryId) {
        let removed = self.ledger.remove_expense(id);
        tracing::debug!(id, found = removed.is_some(), "expense deleted");

        self.render_expense_list();
        self.render_summary();
    }

    pub fn render_summary(&mut self) {
        let summary = view::summary(&self.ledger);
        self.surface.show_summary(&summary);
    }

    pub fn render_income_list(&mut self) {
        let rows = view::income_rows(&self.ledger);
        self.surface.show_income_list(&rows);
    }

    pub fn render_expense_list(&mut self) {
        let rows = view::expense_rows(&self.ledger);
        self.surface.show_expense_list(&rows);
    }

    pub fn snapshot(&self) -> Snapshot {
        view::snapshot(&self.ledger)
    }
}

/// Check raw form input. Returns the trimmed description and the amount in cents.
pub fn validate_entry(
    description: &str,
    raw_amount: &str,
) -> Result<(String, Cents), ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let amount_cents =
        parse_cents(raw_amount).map_err(|reason| ValidationError::InvalidAmount {
            input: raw_amount.trim().to_string(),
            reason,
        })?;
    if amount_cents <= 0 {
        return Err(ValidationError::NonPositiveAmount(
            raw_amount.trim().to_string(),
        ));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(ValidationError::AmountTooLarge(
            raw_amount.trim().to_string(),
        ));
    }

    Ok((description.to_string(), amount_cents))
}
