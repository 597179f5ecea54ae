use super::{DUPLICATE_NAME, NOT_SAVED};
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::SqlitePool;

#[tracing::instrument(name = "Add product.", skip(db_pool))]
#[post("/product/add")]
pub async fn add_handler(
    form: forms::JsonOrForm<forms::AddProduct>,
    db_pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::product::Product>::build().form_error(errors.to_string()));
    }

    let product: models::Product = form.into();
    let name = product.name.clone();
    tracing::debug!("Adding product named: '{}'", name);

    db::product::insert(db_pool.get_ref(), product)
        .await
        .map(|product| {
            tracing::debug!("Added product named: '{}'", product.name);
            JsonResponse::build()
                .ok(views::product::Product::from(&product))
        })
        .map_err(|err| match err {
            db::Error::Conflict(_) => {
                tracing::warn!("Failed to add product '{}', {}", name, DUPLICATE_NAME);
                JsonResponse::<views::product::Product>::build().conflict(DUPLICATE_NAME)
            }
            err => {
                tracing::warn!("Failed to add product '{}', {}: {:?}", name, NOT_SAVED, err);
                JsonResponse::<views::product::Product>::build().bad_request(NOT_SAVED)
            }
        })
}
