use actix_web::{App, HttpServer, middleware::from_fn, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use product_catalog::config::Settings;
use product_catalog::create_pool;
use product_catalog::handlers;
use product_catalog::middleware::exception_middleware;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let db = create_pool(&settings).await.map_err(std::io::Error::other)?;
    Migrator::up(&db, None).await.map_err(std::io::Error::other)?;
    tracing::info!("Connected to database, migrations applied");

    let db_data = web::Data::new(db);
    let settings_data = web::Data::new(settings.clone());
    let development = settings.is_development();

    let bind_addr = settings.bind_addr();
    tracing::info!(environment = %settings.environment, "Server running at http://{bind_addr}");
    if development {
        tracing::info!("API reference at http://{bind_addr}/scalar");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(exception_middleware))
            .wrap(handlers::cors())
            .app_data(db_data.clone())
            .app_data(settings_data.clone())
            .configure(handlers::init_routes)
            .configure(|cfg| {
                if development {
                    handlers::init_docs_routes(cfg);
                }
            })
    })
    .bind(&bind_addr)?
    .run()
    .await
}
