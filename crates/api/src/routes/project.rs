//! Route definitions for the `/projects` resource.
//!
//! All production sub-resources (budget, schedule, storyboard, scripts,
//! locations, shot lists) nest under `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{budget, expense, location, project, schedule, script, shot_list, storyboard};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
///
/// GET    /{project_id}/budget                -> get
/// POST   /{project_id}/budget                -> create
/// PUT    /{project_id}/budget                -> update_settings
/// POST   /{project_id}/budget/recalculate    -> recalculate
/// GET    /{project_id}/budget/summary        -> summary
/// GET    /{project_id}/budget/categories     -> list_categories
/// POST   /{project_id}/budget/categories     -> create_category
/// PUT    /{project_id}/budget/categories/{id}    -> update_category
/// DELETE /{project_id}/budget/categories/{id}    -> delete_category
/// GET    /{project_id}/budget/expenses       -> list
/// POST   /{project_id}/budget/expenses       -> create
/// GET    /{project_id}/budget/expenses/{id}  -> get_by_id
/// PUT    /{project_id}/budget/expenses/{id}  -> update
/// DELETE /{project_id}/budget/expenses/{id}  -> delete
///
/// GET    /{project_id}/schedule              -> list
/// POST   /{project_id}/schedule              -> create
/// GET    /{project_id}/schedule/conflicts    -> conflicts
/// GET    /{project_id}/schedule/{id}         -> get_by_id
/// PUT    /{project_id}/schedule/{id}         -> update
/// DELETE /{project_id}/schedule/{id}         -> delete
///
/// GET    /{project_id}/storyboard            -> list
/// POST   /{project_id}/storyboard            -> create
/// GET    /{project_id}/storyboard/{id}       -> get_by_id
/// PUT    /{project_id}/storyboard/{id}       -> update
/// DELETE /{project_id}/storyboard/{id}       -> delete
///
/// GET    /{project_id}/scripts               -> list
/// POST   /{project_id}/scripts               -> create
/// GET    /{project_id}/scripts/{id}          -> get_by_id
/// PUT    /{project_id}/scripts/{id}          -> update
/// DELETE /{project_id}/scripts/{id}          -> delete
///
/// GET    /{project_id}/locations             -> list
/// POST   /{project_id}/locations             -> create
/// GET    /{project_id}/locations/{id}        -> get_by_id
/// PUT    /{project_id}/locations/{id}        -> update
/// DELETE /{project_id}/locations/{id}        -> delete
///
/// GET    /{project_id}/shot-lists            -> list
/// POST   /{project_id}/shot-lists            -> create
/// GET    /{project_id}/shot-lists/{id}       -> get_by_id
/// PUT    /{project_id}/shot-lists/{id}       -> update
/// DELETE /{project_id}/shot-lists/{id}       -> delete
/// GET    /{project_id}/shot-lists/{list_id}/shots      -> list_shots
/// POST   /{project_id}/shot-lists/{list_id}/shots      -> create_shot
/// PUT    /{project_id}/shot-lists/{list_id}/shots/{id} -> update_shot
/// DELETE /{project_id}/shot-lists/{list_id}/shots/{id} -> delete_shot
/// ```
pub fn router() -> Router<AppState> {
    let budget_routes = Router::new()
        .route(
            "/",
            get(budget::get)
                .post(budget::create)
                .put(budget::update_settings),
        )
        .route("/recalculate", post(budget::recalculate))
        .route("/summary", get(budget::summary))
        .route(
            "/categories",
            get(budget::list_categories).post(budget::create_category),
        )
        .route(
            "/categories/{id}",
            axum::routing::put(budget::update_category).delete(budget::delete_category),
        )
        .route("/expenses", get(expense::list).post(expense::create))
        .route(
            "/expenses/{id}",
            get(expense::get_by_id)
                .put(expense::update)
                .delete(expense::delete),
        );

    // `/conflicts` must register before `/{id}` so the literal segment wins.
    let schedule_routes = Router::new()
        .route("/", get(schedule::list).post(schedule::create))
        .route("/conflicts", get(schedule::conflicts))
        .route(
            "/{id}",
            get(schedule::get_by_id)
                .put(schedule::update)
                .delete(schedule::delete),
        );

    let storyboard_routes = Router::new()
        .route("/", get(storyboard::list).post(storyboard::create))
        .route(
            "/{id}",
            get(storyboard::get_by_id)
                .put(storyboard::update)
                .delete(storyboard::delete),
        );

    let script_routes = Router::new()
        .route("/", get(script::list).post(script::create))
        .route(
            "/{id}",
            get(script::get_by_id)
                .put(script::update)
                .delete(script::delete),
        );

    let location_routes = Router::new()
        .route("/", get(location::list).post(location::create))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        );

    let shot_list_routes = Router::new()
        .route("/", get(shot_list::list).post(shot_list::create))
        .route(
            "/{id}",
            get(shot_list::get_by_id)
                .put(shot_list::update)
                .delete(shot_list::delete),
        )
        .route(
            "/{list_id}/shots",
            get(shot_list::list_shots).post(shot_list::create_shot),
        )
        .route(
            "/{list_id}/shots/{id}",
            axum::routing::put(shot_list::update_shot).delete(shot_list::delete_shot),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/budget", budget_routes)
        .nest("/{project_id}/schedule", schedule_routes)
        .nest("/{project_id}/storyboard", storyboard_routes)
        .nest("/{project_id}/scripts", script_routes)
        .nest("/{project_id}/locations", location_routes)
        .nest("/{project_id}/shot-lists", shot_list_routes)
}
