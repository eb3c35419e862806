//! Route table and shared handler state.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use staffbook_storage::EmployeeStore;

use crate::handlers;

/// State shared by every handler: only the store handle.
#[derive(Clone)]
pub struct AppState {
    /// The employee store behind the API.
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Wrap a store handle.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

/// The five employee operations, relative to the base path.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
}

/// Full route table: the banner at `/` plus the employee routes under
/// `base_path` (empty for the root).
pub fn router(state: AppState, base_path: &str) -> Router {
    let employees = employee_routes();
    let routes = if base_path.is_empty() {
        Router::new().merge(employees)
    } else {
        Router::new().nest(base_path, employees)
    };

    routes
        .route("/", get(handlers::banner))
        .with_state(state)
}
