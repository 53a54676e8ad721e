//! Budget aggregation: per-category totals, overall summary, warning
//! predicate, and the expense status state machine.
//!
//! All functions here are pure and total over well-formed input. Input
//! validation (negative amounts, unknown categories/statuses) happens at
//! the data-entry boundary via the `validate_*` helpers; the aggregators
//! themselves never raise domain errors. Money is `rust_decimal::Decimal`
//! end to end.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Expense categories
// ---------------------------------------------------------------------------

/// Built-in category names matching the seed data.
pub const CATEGORY_CREW: &str = "crew";
pub const CATEGORY_CAST: &str = "cast";
pub const CATEGORY_EQUIPMENT: &str = "equipment";
pub const CATEGORY_LOCATIONS: &str = "locations";
pub const CATEGORY_PRODUCTION_DESIGN: &str = "production-design";
pub const CATEGORY_POST_PRODUCTION: &str = "post-production";
pub const CATEGORY_TRANSPORT: &str = "transport";
pub const CATEGORY_CATERING: &str = "catering";
pub const CATEGORY_INSURANCE: &str = "insurance";
pub const CATEGORY_MISC: &str = "misc";

/// All valid expense category names (closed set).
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_CREW,
    CATEGORY_CAST,
    CATEGORY_EQUIPMENT,
    CATEGORY_LOCATIONS,
    CATEGORY_PRODUCTION_DESIGN,
    CATEGORY_POST_PRODUCTION,
    CATEGORY_TRANSPORT,
    CATEGORY_CATERING,
    CATEGORY_INSURANCE,
    CATEGORY_MISC,
];

// ---------------------------------------------------------------------------
// Expense statuses
// ---------------------------------------------------------------------------

pub const STATUS_PLANNED: &str = "planned";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_PAID: &str = "paid";
pub const STATUS_OVERDUE: &str = "overdue";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid expense status values.
pub const VALID_EXPENSE_STATUSES: &[&str] = &[
    STATUS_PLANNED,
    STATUS_APPROVED,
    STATUS_PAID,
    STATUS_OVERDUE,
    STATUS_CANCELLED,
];

/// Expense status state machine.
///
/// The happy path is `planned -> approved -> paid`; `overdue` and
/// `cancelled` are reachable from any non-terminal state. `paid` and
/// `cancelled` are terminal.
pub mod expense_status {
    use super::{STATUS_APPROVED, STATUS_CANCELLED, STATUS_OVERDUE, STATUS_PAID, STATUS_PLANNED};

    /// Returns the set of valid target statuses reachable from `from`.
    ///
    /// Terminal states (`paid`, `cancelled`) return an empty slice because
    /// no further transitions are allowed.
    pub fn valid_transitions(from: &str) -> &'static [&'static str] {
        match from {
            STATUS_PLANNED => &[STATUS_APPROVED, STATUS_OVERDUE, STATUS_CANCELLED],
            STATUS_APPROVED => &[STATUS_PAID, STATUS_OVERDUE, STATUS_CANCELLED],
            STATUS_OVERDUE => &[STATUS_APPROVED, STATUS_PAID, STATUS_CANCELLED],
            // Terminal states, or unknown status: no transitions allowed.
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: &str, to: &str) -> bool {
        valid_transitions(from).contains(&to)
    }

    /// Validate a state transition, returning an error message for invalid ones.
    pub fn validate_transition(from: &str, to: &str) -> Result<(), String> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(format!("Invalid expense status transition: {from} -> {to}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation inputs
// ---------------------------------------------------------------------------

/// A category definition as the aggregator sees it: a name and a planned
/// amount. The repository layer maps its row structs into this.
#[derive(Debug, Clone)]
pub struct CategoryBudget {
    pub name: String,
    pub budgeted: Decimal,
}

/// Minimal expense view needed by the aggregators.
#[derive(Debug, Clone)]
pub struct ExpenseLine {
    pub category: String,
    pub amount: Decimal,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Aggregation outputs
// ---------------------------------------------------------------------------

/// Derived totals for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub name: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

/// Overall budget report derived from category totals and expense lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub percentage_used: Decimal,
    pub over_budget: bool,
    pub over_budget_amount: Decimal,
}

// ---------------------------------------------------------------------------
// Aggregation logic
// ---------------------------------------------------------------------------

/// Sum per-category spend from the expense list.
///
/// For each category: `spent` is the sum of amounts of *paid* expenses
/// whose category matches; `remaining = budgeted - spent`; `percentage`
/// is `spent / budgeted * 100`, or zero when `budgeted` is zero. Expenses
/// referencing a category not present in `categories` are ignored here
/// (they still count toward [`summarize`]'s `total_spent`).
pub fn aggregate_categories(
    categories: &[CategoryBudget],
    expenses: &[ExpenseLine],
) -> Vec<CategoryTotals> {
    categories
        .iter()
        .map(|cat| {
            let spent: Decimal = expenses
                .iter()
                .filter(|e| e.status == STATUS_PAID && e.category == cat.name)
                .map(|e| e.amount)
                .sum();
            let percentage = if cat.budgeted > Decimal::ZERO {
                spent / cat.budgeted * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            CategoryTotals {
                name: cat.name.clone(),
                budgeted: cat.budgeted,
                spent,
                remaining: cat.budgeted - spent,
                percentage,
            }
        })
        .collect()
}

/// Combine category totals and expense lines into the overall report.
///
/// `total_spent` is computed from the expense list directly so that paid
/// expenses without a matching category row still count toward the total.
/// Idempotent: calling this twice without intervening mutation produces
/// identical output.
pub fn summarize(categories: &[CategoryTotals], expenses: &[ExpenseLine]) -> BudgetSummary {
    let total_budgeted: Decimal = categories.iter().map(|c| c.budgeted).sum();
    let total_spent: Decimal = expenses
        .iter()
        .filter(|e| e.status == STATUS_PAID)
        .map(|e| e.amount)
        .sum();

    let percentage_used = if total_budgeted > Decimal::ZERO {
        total_spent / total_budgeted * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let over_budget = total_spent > total_budgeted;
    let over_budget_amount = if over_budget {
        total_spent - total_budgeted
    } else {
        Decimal::ZERO
    };

    BudgetSummary {
        total_budgeted,
        total_spent,
        total_remaining: total_budgeted - total_spent,
        percentage_used,
        over_budget,
        over_budget_amount,
    }
}

/// Warning predicate: true iff `percentage_used >= warning_threshold`.
pub fn is_over_warning_threshold(summary: &BudgetSummary, warning_threshold: Decimal) -> bool {
    summary.percentage_used >= warning_threshold
}

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

/// Reject negative amounts at the data-entry boundary.
pub fn validate_amount(amount: Decimal) -> Result<(), CoreError> {
    if amount < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Amount must be non-negative, got {amount}"
        )));
    }
    Ok(())
}

/// Reject category names outside the closed set.
pub fn validate_category(name: &str) -> Result<(), CoreError> {
    if !VALID_CATEGORIES.contains(&name) {
        return Err(CoreError::Validation(format!(
            "Unknown expense category '{name}'"
        )));
    }
    Ok(())
}

/// Reject expense status values outside the closed set.
pub fn validate_expense_status(status: &str) -> Result<(), CoreError> {
    if !VALID_EXPENSE_STATUSES.contains(&status) {
        return Err(CoreError::Validation(format!(
            "Unknown expense status '{status}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cat(name: &str, budgeted: Decimal) -> CategoryBudget {
        CategoryBudget {
            name: name.to_string(),
            budgeted,
        }
    }

    fn paid(category: &str, amount: Decimal) -> ExpenseLine {
        ExpenseLine {
            category: category.to_string(),
            amount,
            status: STATUS_PAID.to_string(),
        }
    }

    fn planned(category: &str, amount: Decimal) -> ExpenseLine {
        ExpenseLine {
            category: category.to_string(),
            amount,
            status: STATUS_PLANNED.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Category aggregation
    // -----------------------------------------------------------------------

    #[test]
    fn only_paid_expenses_count_as_spent() {
        let cats = vec![cat(CATEGORY_CREW, dec!(5000))];
        let expenses = vec![
            paid(CATEGORY_CREW, dec!(1000)),
            planned(CATEGORY_CREW, dec!(2000)),
        ];

        let totals = aggregate_categories(&cats, &expenses);
        assert_eq!(totals[0].spent, dec!(1000));
        assert_eq!(totals[0].remaining, dec!(4000));
        assert_eq!(totals[0].percentage, dec!(20));
    }

    #[test]
    fn zero_budget_category_yields_zero_percentage() {
        let cats = vec![cat(CATEGORY_MISC, dec!(0))];
        let expenses = vec![paid(CATEGORY_MISC, dec!(100))];

        let totals = aggregate_categories(&cats, &expenses);
        assert_eq!(totals[0].percentage, dec!(0));
        assert_eq!(totals[0].remaining, dec!(-100));
    }

    #[test]
    fn uncategorized_expense_ignored_per_category() {
        let cats = vec![cat(CATEGORY_CREW, dec!(5000))];
        let expenses = vec![paid(CATEGORY_CATERING, dec!(300))];

        let totals = aggregate_categories(&cats, &expenses);
        assert_eq!(totals[0].spent, dec!(0));
    }

    #[test]
    fn remaining_sums_match_budgeted_minus_spent() {
        let cats = vec![
            cat(CATEGORY_CREW, dec!(5000)),
            cat(CATEGORY_EQUIPMENT, dec!(3000)),
            cat(CATEGORY_CATERING, dec!(0)),
        ];
        let expenses = vec![
            paid(CATEGORY_CREW, dec!(1200)),
            paid(CATEGORY_EQUIPMENT, dec!(3500)),
            paid(CATEGORY_CATERING, dec!(250)),
        ];

        let totals = aggregate_categories(&cats, &expenses);
        let sum_budgeted: Decimal = totals.iter().map(|c| c.budgeted).sum();
        let sum_spent: Decimal = totals.iter().map(|c| c.spent).sum();
        let sum_remaining: Decimal = totals.iter().map(|c| c.remaining).sum();
        assert_eq!(sum_remaining, sum_budgeted - sum_spent);
    }

    // -----------------------------------------------------------------------
    // Summary
    // -----------------------------------------------------------------------

    #[test]
    fn summary_within_budget() {
        // Budget 10000, paid 1000 (equipment) + 2000 (crew).
        let cats = vec![
            cat(CATEGORY_EQUIPMENT, dec!(4000)),
            cat(CATEGORY_CREW, dec!(6000)),
        ];
        let expenses = vec![
            paid(CATEGORY_EQUIPMENT, dec!(1000)),
            paid(CATEGORY_CREW, dec!(2000)),
        ];

        let totals = aggregate_categories(&cats, &expenses);
        let summary = summarize(&totals, &expenses);

        assert_eq!(summary.total_budgeted, dec!(10000));
        assert_eq!(summary.total_spent, dec!(3000));
        assert_eq!(summary.total_remaining, dec!(7000));
        assert_eq!(summary.percentage_used, dec!(30));
        assert!(!summary.over_budget);
        assert_eq!(summary.over_budget_amount, dec!(0));
    }

    #[test]
    fn summary_over_budget() {
        let cats = vec![
            cat(CATEGORY_EQUIPMENT, dec!(4000)),
            cat(CATEGORY_CREW, dec!(6000)),
        ];
        let expenses = vec![paid(CATEGORY_EQUIPMENT, dec!(12000))];

        let totals = aggregate_categories(&cats, &expenses);
        let summary = summarize(&totals, &expenses);

        assert!(summary.over_budget);
        assert_eq!(summary.over_budget_amount, dec!(2000));
        assert_eq!(summary.total_remaining, dec!(-2000));
    }

    #[test]
    fn uncategorized_paid_expense_counts_toward_total_spent() {
        let cats = vec![cat(CATEGORY_CREW, dec!(1000))];
        let expenses = vec![
            paid(CATEGORY_CREW, dec!(400)),
            paid(CATEGORY_TRANSPORT, dec!(100)),
        ];

        let totals = aggregate_categories(&cats, &expenses);
        let summary = summarize(&totals, &expenses);

        // Per-category spend only sees the crew expense...
        assert_eq!(totals[0].spent, dec!(400));
        // ...but the overall total includes the uncategorized one.
        assert_eq!(summary.total_spent, dec!(500));
    }

    #[test]
    fn empty_budget_summary_is_all_zeroes() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_budgeted, dec!(0));
        assert_eq!(summary.total_spent, dec!(0));
        assert_eq!(summary.percentage_used, dec!(0));
        assert!(!summary.over_budget);
    }

    #[test]
    fn summary_is_idempotent() {
        let cats = vec![cat(CATEGORY_CREW, dec!(5000))];
        let expenses = vec![paid(CATEGORY_CREW, dec!(1234))];

        let totals = aggregate_categories(&cats, &expenses);
        let first = summarize(&totals, &expenses);
        let second = summarize(&totals, &expenses);
        assert_eq!(first, second);
    }

    // -----------------------------------------------------------------------
    // Warning threshold
    // -----------------------------------------------------------------------

    #[test]
    fn warning_threshold_is_inclusive() {
        let cats = vec![cat(CATEGORY_CREW, dec!(1000))];
        let expenses = vec![paid(CATEGORY_CREW, dec!(800))];

        let totals = aggregate_categories(&cats, &expenses);
        let summary = summarize(&totals, &expenses);

        assert_eq!(summary.percentage_used, dec!(80));
        assert!(is_over_warning_threshold(&summary, dec!(80)));
        assert!(!is_over_warning_threshold(&summary, dec!(80.01)));
    }

    // -----------------------------------------------------------------------
    // Expense status state machine
    // -----------------------------------------------------------------------

    #[test]
    fn planned_to_approved() {
        assert!(expense_status::can_transition(STATUS_PLANNED, STATUS_APPROVED));
    }

    #[test]
    fn approved_to_paid() {
        assert!(expense_status::can_transition(STATUS_APPROVED, STATUS_PAID));
    }

    #[test]
    fn planned_to_paid_invalid() {
        assert!(!expense_status::can_transition(STATUS_PLANNED, STATUS_PAID));
    }

    #[test]
    fn overdue_reachable_from_planned_and_approved() {
        assert!(expense_status::can_transition(STATUS_PLANNED, STATUS_OVERDUE));
        assert!(expense_status::can_transition(STATUS_APPROVED, STATUS_OVERDUE));
    }

    #[test]
    fn overdue_can_still_be_paid() {
        assert!(expense_status::can_transition(STATUS_OVERDUE, STATUS_PAID));
    }

    #[test]
    fn paid_is_terminal() {
        assert!(expense_status::valid_transitions(STATUS_PAID).is_empty());
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(expense_status::valid_transitions(STATUS_CANCELLED).is_empty());
    }

    #[test]
    fn validate_transition_err_names_both_states() {
        let err = expense_status::validate_transition(STATUS_PAID, STATUS_PLANNED).unwrap_err();
        assert!(err.contains(STATUS_PAID));
        assert!(err.contains(STATUS_PLANNED));
    }

    // -----------------------------------------------------------------------
    // Boundary validation
    // -----------------------------------------------------------------------

    #[test]
    fn negative_amount_rejected() {
        assert!(validate_amount(dec!(-1)).is_err());
        assert!(validate_amount(dec!(0)).is_ok());
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(validate_category("pyrotechnics").is_err());
        assert!(validate_category(CATEGORY_EQUIPMENT).is_ok());
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(validate_expense_status("pending").is_err());
        assert!(validate_expense_status(STATUS_PLANNED).is_ok());
    }
}
