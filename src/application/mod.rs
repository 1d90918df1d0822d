// Application layer: validation, view formatting and the presenter that
// keeps a display surface in sync with the ledger.

pub mod error;
pub mod presenter;
pub mod view;

pub use error::*;
pub use presenter::*;
pub use view::{ExpenseRow, IncomeRow, Snapshot, Summary};
