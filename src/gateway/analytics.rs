use async_trait::async_trait;

use crate::domain::analytics::{DashboardStats, SalesPoint};
use crate::gateway::AnalyticsReader;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::HttpGateway;
use crate::models::analytics::{DashboardStats as StatsRow, DataEnvelope, SalesRow};

fn decode_series(rows: Vec<SalesRow>) -> GatewayResult<Vec<SalesPoint>> {
    rows.into_iter()
        .map(|row| {
            SalesPoint::try_from(row)
                .map_err(|e| GatewayError::InvalidResponse(format!("sales point: {e}")))
        })
        .collect()
}

#[async_trait]
impl AnalyticsReader for HttpGateway {
    async fn dashboard_stats(&self) -> GatewayResult<DashboardStats> {
        let envelope: DataEnvelope<StatsRow> =
            self.get("analytic/admin/dashboard-stats").await?;
        DashboardStats::try_from(envelope.data)
            .map_err(|e| GatewayError::InvalidResponse(format!("dashboard stats: {e}")))
    }

    async fn monthly_sales(&self) -> GatewayResult<Vec<SalesPoint>> {
        let envelope: DataEnvelope<Vec<SalesRow>> =
            self.get("analytic/admin/analytics/sales/monthly").await?;
        decode_series(envelope.data)
    }

    async fn daily_sales(&self, days: u32) -> GatewayResult<Vec<SalesPoint>> {
        let envelope: DataEnvelope<Vec<SalesRow>> = self
            .get_with_query("analytic/admin/analytics/sales/daily", &[("days", days)])
            .await?;
        decode_series(envelope.data)
    }
}
