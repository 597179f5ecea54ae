use crate::db::{comment, Error};
use crate::models;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;
use tracing::Instrument;

const SELECT_PRODUCT: &str = "SELECT id, name, quantity, unit_value, created_at FROM product";

/// Inserts `product` inside its own transaction.
/// A taken name comes back as `Error::Conflict`, the row is never replaced.
pub async fn insert(pool: &SqlitePool, mut product: models::Product) -> Result<models::Product, Error> {
    let query_span = tracing::info_span!("Saving new product into the database");
    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO product (name, quantity, unit_value, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&product.name)
    .bind(product.quantity)
    .bind(product.unit_value)
    .bind(product.created_at)
    .fetch_one(&mut *tx)
    .instrument(query_span)
    .await?;

    tx.commit().await?;

    product.id = id;
    product.comments.clear();
    Ok(product)
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<models::Product>, Error> {
    tracing::info!("Fetch product {}", id);
    let mut conn = pool.acquire().await?;

    let product = sqlx::query_as::<_, models::Product>(&format!("{} WHERE id = ? LIMIT 1", SELECT_PRODUCT))
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch product, error: {:?}", e);
                Err(Error::from(e))
            }
        })?;

    match product {
        Some(product) => {
            let mut products = vec![product];
            attach_comments(&mut conn, &mut products).await?;
            Ok(products.pop())
        }
        None => Ok(None),
    }
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<models::Product>, Error> {
    let query_span = tracing::info_span!("Fetch all products.");
    let mut conn = pool.acquire().await?;

    let mut products = sqlx::query_as::<_, models::Product>(&format!("{} ORDER BY id", SELECT_PRODUCT))
        .fetch_all(&mut *conn)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            Error::from(err)
        })?;

    attach_comments(&mut conn, &mut products).await?;
    Ok(products)
}

/// Products whose name contains `fragment`, using the database's `LIKE` collation.
/// `%` and `_` in the fragment match themselves.
pub async fn fetch_by_name(pool: &SqlitePool, fragment: &str) -> Result<Vec<models::Product>, Error> {
    let query_span = tracing::info_span!("Fetch products by name fragment.");
    let mut conn = pool.acquire().await?;

    let mut products = sqlx::query_as::<_, models::Product>(&format!(
        r"{} WHERE name LIKE '%' || ? || '%' ESCAPE '\' ORDER BY id",
        SELECT_PRODUCT
    ))
    .bind(escape_like(fragment))
    .fetch_all(&mut *conn)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to search products, error: {:?}", err);
        Error::from(err)
    })?;

    attach_comments(&mut conn, &mut products).await?;
    Ok(products)
}

async fn attach_comments(
    conn: &mut SqliteConnection,
    products: &mut [models::Product],
) -> Result<(), Error> {
    let ids: Vec<i64> = products.iter().map(|product| product.id).collect();
    let mut by_product: HashMap<i64, Vec<models::Comment>> = HashMap::new();
    for item in comment::fetch_by_products(conn, &ids).await? {
        by_product.entry(item.product_id).or_default().push(item);
    }

    for product in products.iter_mut() {
        product.comments = by_product.remove(&product.id).unwrap_or_default();
    }

    Ok(())
}

fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
