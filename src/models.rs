//! Rows read from Postgres and the shapes handed back to the dashboard.
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::format::{cents_to_dollars, format_currency, format_date_to_local};

/// Application-level representation of a stored user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Monthly revenue with the month coerced to text and the figure widened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct RevenueRow {
    pub month: String,
    pub revenue: i32,
}

impl From<RevenueRow> for Revenue {
    fn from(row: RevenueRow) -> Self {
        Self {
            month: row.month,
            revenue: i64::from(row.revenue),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Already formatted, e.g. `$157.95`.
    pub amount: String,
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            email: row.email,
            amount: format_currency(i64::from(row.amount)),
        }
    }
}

/// Summary figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct InvoicesTableRow {
    pub id: Uuid,
    pub amount: i32,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// A table row plus the amount and date as the table displays them.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicesTableEntry {
    #[serde(flatten)]
    pub row: InvoicesTableRow,
    pub formatted_amount: String,
    pub formatted_date: String,
}

impl From<InvoicesTableRow> for InvoicesTableEntry {
    fn from(row: InvoicesTableRow) -> Self {
        Self {
            formatted_amount: format_currency(i64::from(row.amount)),
            formatted_date: format_date_to_local(row.date),
            row,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct InvoiceFormRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
}

/// An invoice as loaded into the edit form; `amount` is in dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: String,
}

impl From<InvoiceFormRow> for InvoiceForm {
    fn from(row: InvoiceFormRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: cents_to_dollars(i64::from(row.amount)),
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct CustomersTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedCustomersTable {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CustomersTableRow> for FormattedCustomersTable {
    fn from(row: CustomersTableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_form_amount_is_in_dollars() {
        let form = InvoiceForm::from(InvoiceFormRow {
            id: Uuid::nil(),
            customer_id: Uuid::nil(),
            amount: 15795,
            status: "pending".into(),
        });
        assert_eq!(form.amount, 157.95);
    }

    #[test]
    fn customer_totals_are_formatted() {
        let row = FormattedCustomersTable::from(CustomersTableRow {
            id: Uuid::nil(),
            name: "Amy Burns".into(),
            email: "amy@burns.com".into(),
            image_url: "/customers/amy-burns.png".into(),
            total_invoices: 2,
            total_pending: 0,
            total_paid: 4290,
        });
        assert_eq!(row.total_pending, "$0.00");
        assert_eq!(row.total_paid, "$42.90");
    }

    #[test]
    fn table_entry_flattens_the_row() {
        let entry = InvoicesTableEntry::from(InvoicesTableRow {
            id: Uuid::nil(),
            amount: 3040,
            date: NaiveDate::from_ymd_opt(2022, 10, 29).unwrap(),
            status: "paid".into(),
            name: "Amy Burns".into(),
            email: "amy@burns.com".into(),
            image_url: "/customers/amy-burns.png".into(),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["amount"], 3040);
        assert_eq!(json["date"], "2022-10-29");
        assert_eq!(json["formatted_amount"], "$30.40");
        assert_eq!(json["formatted_date"], "Oct 29, 2022");
    }
}
