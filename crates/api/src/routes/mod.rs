pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /projects/{project_id}/budget                    get, create, update settings
/// /projects/{project_id}/budget/recalculate        recompute summary (POST)
/// /projects/{project_id}/budget/summary            summary + warning flag (GET)
/// /projects/{project_id}/budget/categories         list, create
/// /projects/{project_id}/budget/categories/{id}    update, delete
/// /projects/{project_id}/budget/expenses           list, create
/// /projects/{project_id}/budget/expenses/{id}      get, update, delete
///
/// /projects/{project_id}/schedule                  list, create
/// /projects/{project_id}/schedule/conflicts        conflict query (GET)
/// /projects/{project_id}/schedule/{id}             get, update, delete
///
/// /projects/{project_id}/storyboard                list, create
/// /projects/{project_id}/storyboard/{id}           get, update, delete
///
/// /projects/{project_id}/scripts                   list, create
/// /projects/{project_id}/scripts/{id}              get, update, delete
///
/// /projects/{project_id}/locations                 list, create
/// /projects/{project_id}/locations/{id}            get, update, delete
///
/// /projects/{project_id}/shot-lists                list, create
/// /projects/{project_id}/shot-lists/{id}           get, update, delete
/// /projects/{project_id}/shot-lists/{list_id}/shots        list, create
/// /projects/{project_id}/shot-lists/{list_id}/shots/{id}   update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
