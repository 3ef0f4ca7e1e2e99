//! Customer lookups for select inputs and the customers table.
use sqlx::PgPool;

use crate::db::like_pattern;
use crate::error::DataError;
use crate::models::{CustomerField, CustomersTableRow, FormattedCustomersTable};

pub async fn fetch_customers(db: &PgPool) -> Result<Vec<CustomerField>, DataError> {
    sqlx::query_as("SELECT id, name FROM customers ORDER BY name ASC")
        .fetch_all(db)
        .await
        .map_err(|e| DataError::Customers.caused_by(&e))
}

/// Customers whose name or email matches `query`, with invoice totals.
pub async fn fetch_filtered_customers(
    db: &PgPool,
    query: &str,
) -> Result<Vec<FormattedCustomersTable>, DataError> {
    let rows: Vec<CustomersTableRow> = sqlx::query_as(
        r#"
        SELECT
            customers.id,
            customers.name,
            customers.email,
            customers.image_url,
            COUNT(invoices.id) AS total_invoices,
            COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_pending,
            COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_paid
        FROM customers
        LEFT JOIN invoices ON customers.id = invoices.customer_id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1
        GROUP BY customers.id, customers.name, customers.email, customers.image_url
        ORDER BY customers.name ASC
        "#,
    )
    .bind(like_pattern(query))
    .fetch_all(db)
    .await
    .map_err(|e| DataError::CustomerTable.caused_by(&e))?;

    Ok(rows.into_iter().map(FormattedCustomersTable::from).collect())
}
