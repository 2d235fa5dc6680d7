//! Budget alerts
//!
//! After every mutation the store runs an alert pass: each budget whose
//! progress reaches the threshold produces a [`BudgetAlert`], delivered to
//! every subscriber of the [`AlertBus`].
//!
//! There is no deduplication. A budget that stays over the threshold alerts
//! again on every pass.

mod bus;
mod policy;

pub use bus::AlertBus;
pub use policy::{AlertPolicy, BudgetAlert, DEFAULT_ALERT_THRESHOLD};
