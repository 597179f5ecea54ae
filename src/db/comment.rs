use crate::db::Error;
use crate::models;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::Instrument;

pub async fn insert(pool: &SqlitePool, mut comment: models::Comment) -> Result<models::Comment, Error> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO comment (text, created_at, product_id)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&comment.text)
    .bind(comment.created_at)
    .bind(comment.product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |id| {
        comment.id = id;
        comment
    })
    .map_err(|err| {
        tracing::error!("Failed to insert comment: {:?}", err);
        err.into()
    })
}

/// Ids bound per `IN (...)` query, below SQLite's bind variable limit.
const IDS_PER_QUERY: usize = 500;

/// Comments of every product in `product_ids`, ordered by id.
pub async fn fetch_by_products(
    conn: &mut SqliteConnection,
    product_ids: &[i64],
) -> Result<Vec<models::Comment>, Error> {
    let query_span = tracing::info_span!("Fetch comments by product ids.", products = product_ids.len());
    let mut comments = vec![];

    for chunk in product_ids.chunks(IDS_PER_QUERY) {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, text, created_at, product_id FROM comment WHERE product_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in chunk {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");

        let rows = query
            .build_query_as::<models::Comment>()
            .fetch_all(&mut *conn)
            .instrument(query_span.clone())
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch comments, error: {:?}", err);
                Error::from(err)
            })?;
        comments.extend(rows);
    }

    comments.sort_by_key(|comment| comment.id);
    Ok(comments)
}
