use std::io::{self, Write};

use crate::application::{DisplaySurface, ExpenseRow, IncomeRow, Snapshot, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Display surface backed by a terminal.
///
/// Presenter calls only update the held regions; `flush_to` prints the pending
/// notices and, if anything changed, the whole view.
pub struct TerminalSurface {
    format: OutputFormat,
    summary: Summary,
    incomes: Vec<IncomeRow>,
    expenses: Vec<ExpenseRow>,
    notices: Vec<String>,
    dirty: bool,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            summary: Summary {
                balance: String::new(),
                total_income: String::new(),
                total_expense: String::new(),
                expense_percentage: String::new(),
            },
            incomes: Vec::new(),
            expenses: Vec::new(),
            notices: Vec::new(),
            dirty: false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            summary: self.summary.clone(),
            incomes: self.incomes.clone(),
            expenses: self.expenses.clone(),
        }
    }

    /// Force the next `flush_to` to print the view even if nothing changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Write pending notices, then the view if it changed since the last flush.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for notice in self.notices.drain(..) {
            writeln!(out, "! {}", notice)?;
        }

        if self.dirty {
            match self.format {
                OutputFormat::Table => self.write_table(out)?,
                OutputFormat::Json => {
                    let json = serde_json::to_string(&self.snapshot())
                        .map_err(io::Error::other)?;
                    writeln!(out, "{}", json)?;
                }
            }
            self.dirty = false;
        }

        out.flush()
    }

    fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:<12} {:>16}", "Balance", self.summary.balance)?;
        writeln!(out, "{:<12} {:>16}", "Income", self.summary.total_income)?;
        writeln!(
            out,
            "{:<12} {:>16} {:>10}",
            "Expenses", self.summary.total_expense, self.summary.expense_percentage
        )?;

        writeln!(out)?;
        writeln!(out, "INCOME")?;
        if self.incomes.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for row in &self.incomes {
            writeln!(
                out,
                "  {:<4} {:<24} {:>16}",
                row.id, row.description, row.formatted_amount
            )?;
        }

        writeln!(out, "EXPENSES")?;
        if self.expenses.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for row in &self.expenses {
            writeln!(
                out,
                "  {:<4} {:<24} {:>16} {:>10}",
                row.id, row.description, row.formatted_amount, row.formatted_percentage
            )?;
        }
        Ok(())
    }
}

impl DisplaySurface for TerminalSurface {
    fn show_summary(&mut self, summary: &Summary) {
        self.summary = summary.clone();
        self.dirty = true;
    }

    fn show_income_list(&mut self, rows: &[IncomeRow]) {
        self.incomes = rows.to_vec();
        self.dirty = true;
    }

    fn show_expense_list(&mut self, rows: &[ExpenseRow]) {
        self.expenses = rows.to_vec();
        self.dirty = true;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    // Line input has no fields to reset or focus.
    fn clear_inputs(&mut self) {}

    fn focus_description(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Presenter;

    fn flushed(surface: &mut TerminalSurface) -> String {
        let mut out = Vec::new();
        surface.flush_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bootstrap_prints_zero_table() {
        let mut presenter = Presenter::new(TerminalSurface::new(OutputFormat::Table));
        presenter.bootstrap();

        let text = flushed(presenter.surface_mut());
        assert!(text.contains("Balance"));
        assert!(text.contains("$0.00"));
        assert!(text.contains("0.00%"));
        assert!(text.contains("(none)"));

        // Nothing changed since, so nothing is printed
        assert_eq!(flushed(presenter.surface_mut()), "");
    }

    #[test]
    fn test_notice_printed_without_view() {
        let mut presenter = Presenter::new(TerminalSurface::new(OutputFormat::Table));
        assert!(presenter.submit_entry(crate::domain::EntryKind::Income, "", "5").is_err());

        assert_eq!(
            flushed(presenter.surface_mut()),
            "! Please enter a description\n"
        );
    }

    #[test]
    fn test_json_output_is_one_line_per_refresh() {
        let mut presenter = Presenter::new(TerminalSurface::new(OutputFormat::Json));
        presenter
            .submit_entry(crate::domain::EntryKind::Income, "Salary", "1000")
            .unwrap();

        let text = flushed(presenter.surface_mut());
        assert_eq!(text.lines().count(), 1);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["summary"]["total_income"], "$1,000.00");
        assert_eq!(json["incomes"][0]["formatted_amount"], "+ $1,000.00");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("csv"), None);
    }
}
