//! Integration tests for the budget aggregation flow.
//!
//! Exercises budget/category/expense CRUD plus explicit summary
//! recomputation against a real database, covering the documented
//! scenarios: within-budget, over-budget, warning threshold, stale
//! summaries with auto_calculate off, and uncategorized paid expenses.

use rust_decimal_macros::dec;
use slate_db::models::budget::{CreateBudget, CreateBudgetCategory, UpdateBudget};
use slate_db::models::expense::CreateExpense;
use slate_db::models::project::CreateProject;
use slate_db::repositories::{BudgetRepo, ExpenseRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        status: None,
        start_date: None,
        end_date: None,
    }
}

fn paid_expense(category: &str, amount: rust_decimal::Decimal) -> CreateExpense {
    CreateExpense {
        expense_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        description: format!("{category} expense"),
        category: category.to_string(),
        amount,
        status: Some("paid".to_string()),
        approved_by: None,
        paid_by: None,
    }
}

async fn project_with_budget(pool: &PgPool, name: &str) -> (i64, i64) {
    let project = ProjectRepo::create(pool, &new_project(name)).await.unwrap();
    let budget = BudgetRepo::create(
        pool,
        project.id,
        &CreateBudget {
            auto_calculate: true,
            warning_threshold: None,
        },
    )
    .await
    .unwrap();
    (project.id, budget.id)
}

async fn add_category(pool: &PgPool, budget_id: i64, name: &str, budgeted: rust_decimal::Decimal) {
    BudgetRepo::create_category(
        pool,
        budget_id,
        &CreateBudgetCategory {
            name: name.to_string(),
            budgeted,
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Within-budget scenario
// ---------------------------------------------------------------------------

/// Budget 10000, paid 1000 (equipment) + 2000 (crew): spent 3000,
/// remaining 7000, 30% used, not over budget.
#[sqlx::test(migrations = "./migrations")]
async fn summary_within_budget(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-a").await;
    add_category(&pool, budget_id, "equipment", dec!(4000)).await;
    add_category(&pool, budget_id, "crew", dec!(6000)).await;
    ExpenseRepo::create(&pool, budget_id, &paid_expense("equipment", dec!(1000)))
        .await
        .unwrap();
    ExpenseRepo::create(&pool, budget_id, &paid_expense("crew", dec!(2000)))
        .await
        .unwrap();

    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();

    assert_eq!(budget.total_budgeted, dec!(10000));
    assert_eq!(budget.total_spent, dec!(3000));
    assert_eq!(budget.total_remaining, dec!(7000));
    assert_eq!(budget.percentage_used, dec!(30));
    assert!(!budget.over_budget);
    assert_eq!(budget.over_budget_amount, dec!(0));

    // Per-category derived fields are written back too.
    let categories = BudgetRepo::list_categories(&pool, budget_id).await.unwrap();
    let equipment = categories.iter().find(|c| c.name == "equipment").unwrap();
    assert_eq!(equipment.spent, dec!(1000));
    assert_eq!(equipment.remaining, dec!(3000));
    assert_eq!(equipment.percentage, dec!(25));
}

// ---------------------------------------------------------------------------
// Over-budget scenario
// ---------------------------------------------------------------------------

/// One paid expense of 12000 against a 10000 budget: over by 2000.
#[sqlx::test(migrations = "./migrations")]
async fn summary_over_budget(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-b").await;
    add_category(&pool, budget_id, "equipment", dec!(4000)).await;
    add_category(&pool, budget_id, "crew", dec!(6000)).await;
    ExpenseRepo::create(&pool, budget_id, &paid_expense("equipment", dec!(12000)))
        .await
        .unwrap();

    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();

    assert!(budget.over_budget);
    assert_eq!(budget.over_budget_amount, dec!(2000));
    assert_eq!(budget.total_remaining, dec!(-2000));
}

// ---------------------------------------------------------------------------
// Only paid expenses count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn planned_expenses_do_not_count(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-c").await;
    add_category(&pool, budget_id, "crew", dec!(5000)).await;

    let mut planned = paid_expense("crew", dec!(700));
    planned.status = Some("planned".to_string());
    ExpenseRepo::create(&pool, budget_id, &planned).await.unwrap();

    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    assert_eq!(budget.total_spent, dec!(0));
}

// ---------------------------------------------------------------------------
// Adding a paid expense raises total_spent by exactly that amount
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn paid_expense_raises_total_spent_exactly(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-d").await;
    add_category(&pool, budget_id, "catering", dec!(2000)).await;

    let before = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    ExpenseRepo::create(&pool, budget_id, &paid_expense("catering", dec!(123.45)))
        .await
        .unwrap();
    let after = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();

    assert_eq!(after.total_spent - before.total_spent, dec!(123.45));
}

// ---------------------------------------------------------------------------
// auto_calculate off leaves the summary stale
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn auto_calculate_off_leaves_summary_stale(pool: PgPool) {
    let (project_id, budget_id) = project_with_budget(&pool, "feature-e").await;
    add_category(&pool, budget_id, "crew", dec!(5000)).await;

    let budget = BudgetRepo::update_settings(
        &pool,
        project_id,
        &UpdateBudget {
            auto_calculate: Some(false),
            warning_threshold: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!budget.auto_calculate);

    ExpenseRepo::create(&pool, budget_id, &paid_expense("crew", dec!(900)))
        .await
        .unwrap();

    // The conditional recompute is a no-op with the flag off.
    let stale = BudgetRepo::recalculate_if_auto(&pool, &budget).await.unwrap();
    assert_eq!(stale.total_spent, dec!(0));

    // The explicit recompute still works.
    let fresh = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    assert_eq!(fresh.total_spent, dec!(900));
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn recalculate_is_idempotent(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-f").await;
    add_category(&pool, budget_id, "transport", dec!(800)).await;
    ExpenseRepo::create(&pool, budget_id, &paid_expense("transport", dec!(150)))
        .await
        .unwrap();

    let first = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    let second = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();

    assert_eq!(first.total_budgeted, second.total_budgeted);
    assert_eq!(first.total_spent, second.total_spent);
    assert_eq!(first.total_remaining, second.total_remaining);
    assert_eq!(first.percentage_used, second.percentage_used);
}

// ---------------------------------------------------------------------------
// Uncategorized paid expenses count toward the overall total
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn uncategorized_expense_counts_in_total_only(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-g").await;
    add_category(&pool, budget_id, "crew", dec!(1000)).await;
    ExpenseRepo::create(&pool, budget_id, &paid_expense("misc", dec!(250)))
        .await
        .unwrap();

    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    let categories = BudgetRepo::list_categories(&pool, budget_id).await.unwrap();

    assert_eq!(categories[0].spent, dec!(0));
    assert_eq!(budget.total_spent, dec!(250));
}

// ---------------------------------------------------------------------------
// Zero-budget category never divides by zero
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn zero_budget_category_percentage_is_zero(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-h").await;
    add_category(&pool, budget_id, "misc", dec!(0)).await;
    ExpenseRepo::create(&pool, budget_id, &paid_expense("misc", dec!(50)))
        .await
        .unwrap();

    BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    let categories = BudgetRepo::list_categories(&pool, budget_id).await.unwrap();
    assert_eq!(categories[0].percentage, dec!(0));
    assert_eq!(categories[0].remaining, dec!(-50));
}

// ---------------------------------------------------------------------------
// One budget per project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn second_budget_for_project_rejected(pool: PgPool) {
    let (project_id, _budget_id) = project_with_budget(&pool, "feature-i").await;
    let duplicate = BudgetRepo::create(
        &pool,
        project_id,
        &CreateBudget {
            auto_calculate: true,
            warning_threshold: None,
        },
    )
    .await;
    assert!(duplicate.is_err(), "uq_budgets_project should reject this");
}

// ---------------------------------------------------------------------------
// Deleting an expense flows through recalculation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deleted_expense_leaves_totals_consistent(pool: PgPool) {
    let (_project_id, budget_id) = project_with_budget(&pool, "feature-j").await;
    add_category(&pool, budget_id, "cast", dec!(3000)).await;
    let expense = ExpenseRepo::create(&pool, budget_id, &paid_expense("cast", dec!(600)))
        .await
        .unwrap();

    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    assert_eq!(budget.total_spent, dec!(600));

    assert!(ExpenseRepo::delete(&pool, budget_id, expense.id).await.unwrap());
    let budget = BudgetRepo::recalculate(&pool, budget_id).await.unwrap();
    assert_eq!(budget.total_spent, dec!(0));
    assert_eq!(budget.total_remaining, dec!(3000));
}
