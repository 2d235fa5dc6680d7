//! Threshold policy deciding which budgets alert

use crate::models::{Budget, Transaction};
use crate::services::progress::progress;

use super::bus::AlertBus;

/// Utilization at which a budget alerts unless settings say otherwise
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.8;

/// A budget that reached the alert threshold
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub budget: Budget,
    /// Unclamped progress at the time of the pass
    pub progress: f64,
}

impl BudgetAlert {
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

pub struct AlertPolicy {
    threshold: f64,
    bus: AlertBus,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_THRESHOLD)
    }
}

impl AlertPolicy {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            bus: AlertBus::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn bus(&self) -> &AlertBus {
        &self.bus
    }

    /// Budgets at or over the threshold, in budget order
    ///
    /// `transactions` must be the complete set; budgets with a non-positive
    /// limit never alert.
    pub fn evaluate(&self, budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetAlert> {
        budgets
            .iter()
            .filter_map(|budget| {
                progress(budget, transactions)
                    .filter(|p| *p >= self.threshold)
                    .map(|p| BudgetAlert {
                        budget: budget.clone(),
                        progress: p,
                    })
            })
            .collect()
    }

    /// Evaluate and broadcast; returns the alerts raised by this pass
    pub fn run(&self, budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetAlert> {
        let alerts = self.evaluate(budgets, transactions);
        for alert in &alerts {
            tracing::warn!(
                budget = %alert.budget.id,
                category = %alert.budget.category_id,
                progress = alert.progress,
                "budget reached alert threshold"
            );
            self.bus.broadcast(alert);
        }
        alerts
    }
}
