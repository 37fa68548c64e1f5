//! Read-only sales figures shown on the dashboard landing page.

use serde::Serialize;

use crate::domain::types::Amount;

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct DashboardStats {
    pub total_revenue: Amount,
    pub total_orders: u64,
    pub total_customers: u64,
}

/// One point of a sales series, labelled by month or by day.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SalesPoint {
    pub label: String,
    pub total_sales: Amount,
}

impl SalesPoint {
    pub fn new(label: impl Into<String>, total_sales: Amount) -> Self {
        Self {
            label: label.into(),
            total_sales,
        }
    }
}

/// Largest value in a series, used to scale the bar charts.
pub fn series_peak(points: &[SalesPoint]) -> f64 {
    points
        .iter()
        .map(|point| point.total_sales.get())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_of_empty_series_is_zero() {
        assert_eq!(series_peak(&[]), 0.0);
    }

    #[test]
    fn peak_picks_largest_total() {
        let points = vec![
            SalesPoint::new("Jan", Amount::new(10.0).unwrap()),
            SalesPoint::new("Feb", Amount::new(42.5).unwrap()),
            SalesPoint::new("Mar", Amount::new(3.0).unwrap()),
        ];
        assert_eq!(series_peak(&points), 42.5);
    }
}
