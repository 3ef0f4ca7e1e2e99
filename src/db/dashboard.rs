//! Aggregates behind the dashboard overview page.
use sqlx::PgPool;

use crate::error::DataError;
use crate::format::format_currency;
use crate::models::{CardData, LatestInvoice, LatestInvoiceRow, Revenue, RevenueRow};

pub async fn fetch_revenue(db: &PgPool) -> Result<Vec<Revenue>, DataError> {
    let rows: Vec<RevenueRow> = sqlx::query_as("SELECT month, revenue FROM revenue")
        .fetch_all(db)
        .await
        .map_err(|e| DataError::Revenue.caused_by(&e))?;

    Ok(rows.into_iter().map(Revenue::from).collect())
}

/// The most recent invoices by date, amounts formatted for display.
pub async fn fetch_latest_invoices(
    db: &PgPool,
    limit: i64,
) -> Result<Vec<LatestInvoice>, DataError> {
    let rows: Vec<LatestInvoiceRow> = sqlx::query_as(
        r#"
        SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        ORDER BY invoices.date DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .map_err(|e| DataError::LatestInvoices.caused_by(&e))?;

    Ok(rows.into_iter().map(LatestInvoice::from).collect())
}

/// Counts and paid/pending totals, queried concurrently.
pub async fn fetch_card_data(db: &PgPool) -> Result<CardData, DataError> {
    let invoice_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices").fetch_one(db);
    let customer_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers").fetch_one(db);
    let invoice_status = sqlx::query_as::<_, (Option<i64>, Option<i64>)>(
        r#"
        SELECT
            SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid,
            SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending
        FROM invoices
        "#,
    )
    .fetch_one(db);

    let (number_of_invoices, number_of_customers, (paid, pending)) =
        tokio::try_join!(invoice_count, customer_count, invoice_status)
            .map_err(|e| DataError::CardData.caused_by(&e))?;

    Ok(CardData {
        number_of_invoices,
        number_of_customers,
        total_paid_invoices: format_currency(paid.unwrap_or(0)),
        total_pending_invoices: format_currency(pending.unwrap_or(0)),
    })
}
