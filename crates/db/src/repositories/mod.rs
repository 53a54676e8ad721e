//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod budget_repo;
pub mod expense_repo;
pub mod location_repo;
pub mod project_repo;
pub mod schedule_repo;
pub mod script_repo;
pub mod shot_list_repo;
pub mod storyboard_repo;

pub use budget_repo::BudgetRepo;
pub use expense_repo::ExpenseRepo;
pub use location_repo::LocationRepo;
pub use project_repo::ProjectRepo;
pub use schedule_repo::ScheduleRepo;
pub use script_repo::ScriptRepo;
pub use shot_list_repo::ShotListRepo;
pub use storyboard_repo::StoryboardRepo;
