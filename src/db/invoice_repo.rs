//! Invoice table search, page count, and single-invoice lookup.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::like_pattern;
use crate::error::DataError;
use crate::models::{InvoiceForm, InvoiceFormRow, InvoicesTableRow};
use crate::pagination;

// $1 is the `%query%` pattern; Postgres lets one placeholder appear several times.
const SEARCH_PREDICATE: &str = r#"
    customers.name ILIKE $1 OR
    customers.email ILIKE $1 OR
    invoices.amount::text ILIKE $1 OR
    invoices.date::text ILIKE $1 OR
    invoices.status ILIKE $1
"#;

lazy_static::lazy_static! {
    static ref FILTERED_INVOICES_SQL: String = format!(
        r#"
        SELECT
            invoices.id,
            invoices.amount,
            invoices.date,
            invoices.status,
            customers.name,
            customers.email,
            customers.image_url
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE {SEARCH_PREDICATE}
        ORDER BY invoices.date DESC
        LIMIT $2 OFFSET $3
        "#
    );

    static ref FILTERED_INVOICES_COUNT_SQL: String = format!(
        r#"
        SELECT COUNT(*)
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE {SEARCH_PREDICATE}
        "#
    );
}

/// One page of invoices matching `query` in any searchable column.
pub async fn fetch_filtered_invoices(
    db: &PgPool,
    query: &str,
    current_page: u32,
    per_page: u32,
) -> Result<Vec<InvoicesTableRow>, DataError> {
    let offset = pagination::offset(current_page, per_page);

    sqlx::query_as::<_, InvoicesTableRow>(FILTERED_INVOICES_SQL.as_str())
        .bind(like_pattern(query))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(db)
        .await
        .map_err(|e| DataError::Invoices.caused_by(&e))
}

/// Number of pages the filtered invoice table spans.
pub async fn fetch_invoices_pages(
    db: &PgPool,
    query: &str,
    per_page: u32,
) -> Result<u32, DataError> {
    let count: i64 = sqlx::query_scalar(FILTERED_INVOICES_COUNT_SQL.as_str())
        .bind(like_pattern(query))
        .fetch_one(db)
        .await
        .map_err(|e| DataError::InvoicePages.caused_by(&e))?;

    Ok(pagination::page_count(count, per_page))
}

pub async fn fetch_invoice_by_id(db: &PgPool, id: Uuid) -> Result<Option<InvoiceForm>, DataError> {
    let row: Option<InvoiceFormRow> =
        sqlx::query_as("SELECT id, customer_id, amount, status FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| DataError::Invoice.caused_by(&e))?;

    Ok(row.map(InvoiceForm::from))
}
