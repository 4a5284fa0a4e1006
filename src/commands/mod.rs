//! Command implementations

pub mod check;
pub mod reconcile;
pub mod session;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use reconcile::{Reconciliation, reconcile};
pub use session::{SessionConfig, SessionError, run_session};
pub use solve::{SolveResult, solve_grid};
