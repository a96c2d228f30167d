mod announcement;
mod health;
mod topup;
mod user;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use shared::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::announcement::announcement_routes;
pub use self::topup::topup_routes;
pub use self::user::users_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        user::get_users,
        user::delete_user,
        announcement::get_announcements,
        announcement::create_announcement,
        announcement::delete_announcement,
        topup::get_topups,
        topup::get_approved_topups,
        topup::get_declined_topups,
        topup::get_topup,
        topup::create_topup,
        topup::approve_topup,
        topup::decline_topup,
        topup::delete_topup
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "User", description = "User directory endpoints"),
        (name = "Announcement", description = "Announcement board endpoints"),
        (name = "Topup", description = "Top-up request workflow endpoints")
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let mut router =
            OpenApiRouter::with_openapi(ApiDoc::openapi()).route("/health", get(health::health_check));

        router = router.merge(users_routes(shared_state.clone()));
        router = router.merge(announcement_routes(shared_state.clone()));
        router = router.merge(topup_routes(shared_state.clone()));

        // The admin console is a browser SPA served from another origin.
        let router = router
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (router, api) = router.split_for_parts();

        let app =
            router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("Swagger UI available at http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }

    info!("Shutdown signal received, draining in-flight requests");
}
