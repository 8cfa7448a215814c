use axum::{
    Router,
    routing::{get, post},
};

use assetdesk_core::health::{healthz, readyz};
use assetdesk_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    auth::{login, me},
    department::{
        create_department, delete_department, get_department, list_active_departments,
        list_departments, update_department,
    },
    deployment_task::{create_task, delete_task, get_task, list_tasks, update_task},
    hardware::{create_hardware, delete_hardware, get_hardware, list_hardware, update_hardware},
    site::{create_site, delete_site, get_site, list_sites, update_site},
    user::{create_user, delete_user, get_user, list_users, update_user},
    virtual_machine::{create_vm, delete_vm, get_vm, list_vms, update_vm},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<AppState>))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // Departments
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route("/api/departments/active", get(list_active_departments))
        .route(
            "/api/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        // Sites
        .route("/api/sites", get(list_sites).post(create_site))
        .route(
            "/api/sites/{id}",
            get(get_site).put(update_site).delete(delete_site),
        )
        // Hardware
        .route("/api/hardware", get(list_hardware).post(create_hardware))
        .route(
            "/api/hardware/{id}",
            get(get_hardware).put(update_hardware).delete(delete_hardware),
        )
        // Virtual machines
        .route("/api/virtual-machines", get(list_vms).post(create_vm))
        .route(
            "/api/virtual-machines/{id}",
            get(get_vm).put(update_vm).delete(delete_vm),
        )
        // Deployment tasks
        .route("/api/deployment-tasks", get(list_tasks).post(create_task))
        .route(
            "/api/deployment-tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        // Users
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Layers run bottom-up: the request id is set before tracing sees it.
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
