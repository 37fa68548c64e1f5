use serde::Serialize;

use crate::domain::analytics::{DashboardStats, SalesPoint};

/// Data required to render the dashboard template.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPageData {
    pub stats: DashboardStats,
    pub monthly_sales: Vec<SalesPoint>,
    pub daily_sales: Vec<SalesPoint>,
    /// Largest value of each series, used to scale the bar charts.
    pub monthly_peak: f64,
    pub daily_peak: f64,
    pub days: u32,
}
