//! Overview page: revenue chart, summary cards, latest invoices.
use axum::{Extension, Json};
use serde::Serialize;

use crate::SharedState;
use crate::chart::{YAxis, generate_y_axis};
use crate::db::dashboard;
use crate::error::AppError;
use crate::models::{CardData, LatestInvoice, Revenue};

#[derive(Serialize)]
pub struct RevenueChart {
    pub revenue: Vec<Revenue>,
    pub y_axis: YAxis,
}

// GET /api/revenue
pub async fn revenue(
    Extension(state): Extension<SharedState>,
) -> Result<Json<RevenueChart>, AppError> {
    let revenue = dashboard::fetch_revenue(&state.db).await?;
    let y_axis = generate_y_axis(&revenue);
    Ok(Json(RevenueChart { revenue, y_axis }))
}

// GET /api/cards
pub async fn cards(Extension(state): Extension<SharedState>) -> Result<Json<CardData>, AppError> {
    Ok(Json(dashboard::fetch_card_data(&state.db).await?))
}

// GET /api/invoices/latest
pub async fn latest_invoices(
    Extension(state): Extension<SharedState>,
) -> Result<Json<Vec<LatestInvoice>>, AppError> {
    let invoices =
        dashboard::fetch_latest_invoices(&state.db, state.config.latest_invoices_limit).await?;
    Ok(Json(invoices))
}
