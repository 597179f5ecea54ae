use super::{NOT_FOUND, NOT_LISTED};
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

fn listing(products: Result<Vec<models::Product>, db::Error>) -> Result<impl Responder> {
    products
        .map(|products| {
            tracing::debug!("{} products found", products.len());
            JsonResponse::build()
                .ok(views::product::Listing::from(products.as_slice()))
        })
        .map_err(|err| {
            tracing::error!("Failed to list products: {:?}", err);
            JsonResponse::<views::product::Listing>::build().internal_server_error(NOT_LISTED)
        })
}

#[tracing::instrument(name = "Get all products.", skip(db_pool))]
#[get("/products/get_all")]
pub async fn list_handler(db_pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    listing(db::product::fetch_all(db_pool.get_ref()).await)
}

#[tracing::instrument(name = "Search products by name.", skip(db_pool))]
#[get("/products/sarch_name")]
pub async fn search_handler(
    query: web::Query<forms::SearchByName>,
    db_pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let products = match query.fragment() {
        Some(fragment) => db::product::fetch_by_name(db_pool.get_ref(), fragment).await,
        None => {
            tracing::debug!("Fragment '{}' too short, listing everything", query.name);
            db::product::fetch_all(db_pool.get_ref()).await
        }
    };

    listing(products)
}

#[tracing::instrument(name = "Get product by id.", skip(db_pool))]
#[get("/product/find_id")]
pub async fn item_handler(
    query: web::Query<forms::FindById>,
    db_pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let id = query.id;
    let product = db::product::fetch(db_pool.get_ref(), id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product {}: {:?}", id, err);
            JsonResponse::<views::product::Product>::build().internal_server_error(NOT_LISTED)
        })?
        .ok_or_else(|| {
            tracing::warn!("Failed to find product '{}', {}", id, NOT_FOUND);
            JsonResponse::<views::product::Product>::build().not_found(NOT_FOUND)
        })?;

    Ok(JsonResponse::build().ok(views::product::Product::from(&product)))
}
