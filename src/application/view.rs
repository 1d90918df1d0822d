use serde::{Deserialize, Serialize};

use crate::domain::{format_currency, format_percentage, Entry, EntryId, Ledger};

/// The four values shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub balance: String,
    pub total_income: String,
    pub total_expense: String,
    pub expense_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub id: EntryId,
    pub description: String,
    pub formatted_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: EntryId,
    pub description: String,
    pub formatted_amount: String,
    pub formatted_percentage: String,
}

/// Everything the display shows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub summary: Summary,
    pub incomes: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
}

/// Amount with the entry's sign in front, e.g. "+ $1,000.00".
fn signed_amount(entry: &Entry) -> String {
    format!(
        "{} {}",
        entry.kind().sign(),
        format_currency(entry.amount_cents())
    )
}

pub fn summary(ledger: &Ledger) -> Summary {
    Summary {
        balance: format_currency(ledger.balance()),
        total_income: format_currency(ledger.total_income()),
        total_expense: format_currency(ledger.total_expense()),
        expense_percentage: format_percentage(ledger.expense_ratio()),
    }
}

pub fn income_rows(ledger: &Ledger) -> Vec<IncomeRow> {
    ledger
        .incomes()
        .iter()
        .map(|entry| IncomeRow {
            id: entry.id(),
            description: entry.description().to_string(),
            formatted_amount: signed_amount(entry),
        })
        .collect()
}

pub fn expense_rows(ledger: &Ledger) -> Vec<ExpenseRow> {
    ledger
        .expenses()
        .iter()
        .map(|entry| ExpenseRow {
            id: entry.id(),
            description: entry.description().to_string(),
            formatted_amount: signed_amount(entry),
            formatted_percentage: format_percentage(
                ledger.share_of_income(entry.amount_cents()),
            ),
        })
        .collect()
}

pub fn snapshot(ledger: &Ledger) -> Snapshot {
    Snapshot {
        summary: summary(ledger),
        incomes: income_rows(ledger),
        expenses: expense_rows(ledger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = summary(&Ledger::new());
        assert_eq!(summary.balance, "$0.00");
        assert_eq!(summary.total_income, "$0.00");
        assert_eq!(summary.total_expense, "$0.00");
        assert_eq!(summary.expense_percentage, "0.00%");
    }

    #[test]
    fn test_rows_carry_sign_and_percentage() {
        let mut ledger = Ledger::new();
        ledger.add_income("Salary", 250000);
        ledger.add_expense("Rent", 100000);
        ledger.add_expense("Coffee", 350);

        let incomes = income_rows(&ledger);
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].formatted_amount, "+ $2,500.00");

        let expenses = expense_rows(&ledger);
        assert_eq!(expenses[0].formatted_amount, "- $1,000.00");
        assert_eq!(expenses[0].formatted_percentage, "40.00%");
        assert_eq!(expenses[1].formatted_amount, "- $3.50");
        assert_eq!(expenses[1].formatted_percentage, "0.14%");
    }

    #[test]
    fn test_negative_balance() {
        let mut ledger = Ledger::new();
        ledger.add_income("Gift", 1000);
        ledger.add_expense("Dinner", 4550);

        let summary = summary(&ledger);
        assert_eq!(summary.balance, "-$35.50");
        assert_eq!(summary.expense_percentage, "455.00%");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut ledger = Ledger::new();
        ledger.add_income("Salary", 100000);

        let json = serde_json::to_value(snapshot(&ledger)).unwrap();
        assert_eq!(json["summary"]["balance"], "$1,000.00");
        assert_eq!(json["incomes"][0]["id"], 1);
        assert_eq!(json["expenses"].as_array().map(Vec::len), Some(0));
    }
}
