use serde::Deserialize;

use crate::domain::analytics::{DashboardStats as DomainStats, SalesPoint};
use crate::domain::types::TypeConstraintError;
use crate::models::wire::WireNumber;

/// `{data: ...}` wrapper used by every analytics endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_revenue: Option<WireNumber>,
    #[serde(default)]
    pub total_orders: Option<WireNumber>,
    #[serde(default)]
    pub total_customers: Option<WireNumber>,
}

fn count(value: Option<WireNumber>) -> Result<u64, TypeConstraintError> {
    match value {
        Some(value) => {
            let raw = value.as_i64()?;
            u64::try_from(raw).map_err(|_| TypeConstraintError::InvalidValue(raw.to_string()))
        }
        None => Ok(0),
    }
}

impl TryFrom<DashboardStats> for DomainStats {
    type Error = TypeConstraintError;

    fn try_from(row: DashboardStats) -> Result<Self, Self::Error> {
        Ok(Self {
            total_revenue: row
                .total_revenue
                .map(|r| r.as_amount())
                .transpose()?
                .unwrap_or_default(),
            total_orders: count(row.total_orders)?,
            total_customers: count(row.total_customers)?,
        })
    }
}

/// One point of the monthly (`month`) or daily (`day`) series.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRow {
    #[serde(alias = "month", alias = "day", alias = "date")]
    pub label: WireNumberOrLabel,
    #[serde(default)]
    pub total_sales: Option<WireNumber>,
}

/// Labels are usually strings but some months arrive as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireNumberOrLabel {
    Label(String),
    Number(i64),
}

impl TryFrom<SalesRow> for SalesPoint {
    type Error = TypeConstraintError;

    fn try_from(row: SalesRow) -> Result<Self, Self::Error> {
        let label = match row.label {
            WireNumberOrLabel::Label(label) => label,
            WireNumberOrLabel::Number(number) => number.to_string(),
        };
        let total = row
            .total_sales
            .map(|t| t.as_amount())
            .transpose()?
            .unwrap_or_default();
        Ok(SalesPoint::new(label, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decode_from_camel_case() {
        let envelope: DataEnvelope<DashboardStats> = serde_json::from_str(
            r#"{"data": {"totalRevenue": "1520.5", "totalOrders": 12, "totalCustomers": 4}}"#,
        )
        .unwrap();
        let stats = DomainStats::try_from(envelope.data).unwrap();
        assert_eq!(stats.total_revenue.get(), 1520.5);
        assert_eq!(stats.total_orders, 12);
        assert_eq!(stats.total_customers, 4);
    }

    #[test]
    fn series_accept_month_and_day_keys() {
        let monthly: DataEnvelope<Vec<SalesRow>> = serde_json::from_str(
            r#"{"data": [{"month": "Jan", "total_sales": 10}, {"month": 2, "total_sales": "5"}]}"#,
        )
        .unwrap();
        let points: Vec<SalesPoint> = monthly
            .data
            .into_iter()
            .map(SalesPoint::try_from)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(points[1].label, "2");

        let daily: DataEnvelope<Vec<SalesRow>> =
            serde_json::from_str(r#"{"data": [{"day": "2024-05-01", "total_sales": 3.5}]}"#)
                .unwrap();
        let point = SalesPoint::try_from(daily.data[0].clone()).unwrap();
        assert_eq!(point.total_sales.get(), 3.5);
    }
}
