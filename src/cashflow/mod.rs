//! Cash-flow projection for rental property acquisitions

mod input;
mod projector;
mod result;

pub use input::CashFlowInput;
pub use projector::project;
pub use result::{
    Analysis, CashFlowResult, CashFlowSummary, ExpenseBreakdown, IncomeBreakdown, LoanSummary,
    ReturnMetrics,
};
