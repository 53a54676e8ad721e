//! Schedule entry entity model and DTOs.
//!
//! Times are validated 24-hour `"HH:MM"` strings (see
//! `slate_core::schedule`); crew / cast / equipment assignments are JSONB
//! lists of [`Assignment`] objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A schedule entry row from the `schedule_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub shoot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub status: String,
    pub crew: serde_json::Value,
    pub cast_members: serde_json::Value,
    pub equipment: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One crew / cast / equipment assignment inside a schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_assignment_status")]
    pub status: String,
}

fn default_assignment_status() -> String {
    "pending".to_string()
}

/// DTO for creating a schedule entry. Status defaults to `draft`,
/// assignment lists default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleEntry {
    pub shoot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub crew: Vec<Assignment>,
    #[serde(default)]
    pub cast_members: Vec<Assignment>,
    #[serde(default)]
    pub equipment: Vec<Assignment>,
    pub notes: Option<String>,
}

/// DTO for updating a schedule entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScheduleEntry {
    pub shoot_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub crew: Option<Vec<Assignment>>,
    pub cast_members: Option<Vec<Assignment>>,
    pub equipment: Option<Vec<Assignment>>,
    pub notes: Option<String>,
}
