//! Invoice table, its page strip, and the edit-form lookup.
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Serialize;
use uuid::Uuid;

use super::SearchParams;
use crate::SharedState;
use crate::db::invoice_repo;
use crate::error::AppError;
use crate::models::{InvoiceForm, InvoicesTableEntry};
use crate::pagination::{PageItem, generate_pagination};

// GET /api/invoices?query=&page=
pub async fn filtered(
    Extension(state): Extension<SharedState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<InvoicesTableEntry>>, AppError> {
    let Query(params) = query?;
    let rows = invoice_repo::fetch_filtered_invoices(
        &state.db,
        &params.query,
        params.page,
        state.config.items_per_page,
    )
    .await?;

    Ok(Json(rows.into_iter().map(InvoicesTableEntry::from).collect()))
}

#[derive(Serialize)]
pub struct InvoicePages {
    pub total_pages: u32,
    pub pagination: Vec<PageItem>,
}

// GET /api/invoices/pages?query=&page=
pub async fn pages(
    Extension(state): Extension<SharedState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<InvoicePages>, AppError> {
    let Query(params) = query?;
    let total_pages =
        invoice_repo::fetch_invoices_pages(&state.db, &params.query, state.config.items_per_page)
            .await?;

    Ok(Json(InvoicePages {
        total_pages,
        pagination: generate_pagination(params.page.max(1), total_pages),
    }))
}

// GET /api/invoices/{id}
pub async fn by_id(
    Extension(state): Extension<SharedState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<InvoiceForm>, AppError> {
    let Path(id) = id?;
    invoice_repo::fetch_invoice_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
