use crate::pagination;

/// Number of rows shown in the "latest invoices" panel.
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Runtime settings shared by every handler.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub items_per_page: u32,
    pub latest_invoices_limit: i64,
    /// Whether `GET /seed` is mounted.
    pub seed_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items_per_page: pagination::ITEMS_PER_PAGE,
            latest_invoices_limit: LATEST_INVOICES_LIMIT,
            seed_enabled: true,
        }
    }
}
