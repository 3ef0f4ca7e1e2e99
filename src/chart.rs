//! Y-axis scale for the monthly revenue chart.
use serde::Serialize;

use crate::models::Revenue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxis {
    /// Labels from the top of the chart down to zero, e.g. `$5K` .. `$0K`.
    pub labels: Vec<String>,
    pub top_label: i64,
}

/// Round the best month up to the next thousand and label every thousand
/// below it.
pub fn generate_y_axis(revenue: &[Revenue]) -> YAxis {
    let highest = revenue.iter().map(|r| r.revenue).max().unwrap_or(0).max(0);
    let top_label = (highest + 999) / 1000 * 1000;

    let labels = (0..=top_label / 1000)
        .rev()
        .map(|k| format!("${k}K"))
        .collect();

    YAxis { labels, top_label }
}
