use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
};

use super::SearchParams;
use crate::SharedState;
use crate::db::customer_repo;
use crate::error::AppError;
use crate::models::{CustomerField, FormattedCustomersTable};

// GET /api/customers
pub async fn list(
    Extension(state): Extension<SharedState>,
) -> Result<Json<Vec<CustomerField>>, AppError> {
    Ok(Json(customer_repo::fetch_customers(&state.db).await?))
}

// GET /api/customers/table?query=
pub async fn table(
    Extension(state): Extension<SharedState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<FormattedCustomersTable>>, AppError> {
    let Query(params) = query?;
    Ok(Json(
        customer_repo::fetch_filtered_customers(&state.db, &params.query).await?,
    ))
}
