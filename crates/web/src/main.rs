use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::list_athlete_names,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::categories::handlers::create_category,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::training_centers::handlers::create_training_center,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::get_training_center,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteNamesResponse,
            storage::dto::category::CategoryRef,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::TrainingCenterRef,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::models::Athlete,
            storage::models::AthleteWithRelations,
            storage::models::Category,
            storage::models::TrainingCenter,
        )
    ),
    tags(
        (name = "atletas", description = "Athlete endpoints"),
        (name = "categorias", description = "Categoria endpoints"),
        (name = "centros_treinamento", description = "Centro de treinamento endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/atletas", features::athletes::routes())
        .nest("/categorias", features::categories::routes())
        .nest("/centros_treinamento", features::training_centers::routes())
        .with_state(db);

    let app = Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
