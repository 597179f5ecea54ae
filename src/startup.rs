use crate::helpers;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http::StatusCode, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await
}

pub fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "deserialize error at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        helpers::json::error(StatusCode::BAD_REQUEST, msg)
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| helpers::json::error(StatusCode::BAD_REQUEST, err.to_string()));

    let server = HttpServer::new(move || {
        // FormConfig holds its handler in an Rc, build it per worker
        let form_config = web::FormConfig::default().error_handler(|err, _req| {
            helpers::json::error(StatusCode::BAD_REQUEST, err.to_string())
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::home)
            .service(routes::openapi)
            .service(routes::health_check)
            .service(routes::product::add_handler)
            .service(routes::product::list_handler)
            .service(routes::product::search_handler)
            .service(routes::product::item_handler)
            .app_data(json_config.clone())
            .app_data(form_config)
            .app_data(query_config.clone())
            .app_data(db_pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
