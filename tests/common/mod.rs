// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use budgetbook::application::{DisplaySurface, ExpenseRow, IncomeRow, Presenter, Summary};

/// Which region of the display a call touched, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Summary,
    Incomes,
    Expenses,
    Notice,
    ClearInputs,
    Focus,
}

/// Display surface that remembers everything it was told.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Region>,
    pub summary: Option<Summary>,
    pub incomes: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
    pub notices: Vec<String>,
}

impl RecordingSurface {
    /// Forget recorded calls, keeping the last rendered state.
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_summary(&mut self, summary: &Summary) {
        self.calls.push(Region::Summary);
        self.summary = Some(summary.clone());
    }

    fn show_income_list(&mut self, rows: &[IncomeRow]) {
        self.calls.push(Region::Incomes);
        self.incomes = rows.to_vec();
    }

    fn show_expense_list(&mut self, rows: &[ExpenseRow]) {
        self.calls.push(Region::Expenses);
        self.expenses = rows.to_vec();
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(Region::Notice);
        self.notices.push(message.to_string());
    }

    fn clear_inputs(&mut self) {
        self.calls.push(Region::ClearInputs);
    }

    fn focus_description(&mut self) {
        self.calls.push(Region::Focus);
    }
}

/// Presenter over an empty ledger, already bootstrapped, with call history cleared.
pub fn test_presenter() -> Presenter<RecordingSurface> {
    let mut presenter = Presenter::new(RecordingSurface::default());
    presenter.bootstrap();
    presenter.surface_mut().reset_calls();
    presenter
}

/// Last rendered summary. Panics if nothing was rendered yet.
pub fn summary(presenter: &Presenter<RecordingSurface>) -> Summary {
    presenter
        .surface()
        .summary
        .clone()
        .expect("summary should have been rendered")
}
