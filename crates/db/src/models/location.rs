//! Location entity model and DTOs.

use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub permit_status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Valid permit statuses for a location.
pub const VALID_PERMIT_STATUSES: &[&str] = &["pending", "requested", "approved", "denied"];

/// DTO for creating a location. Permit status defaults to `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub permit_status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a location. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub permit_status: Option<String>,
    pub notes: Option<String>,
}
