use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::analytics::series_peak;
use crate::domain::auth::AdminSession;
use crate::dto::dashboard::DashboardPageData;
use crate::gateway::AnalyticsReader;
use crate::services::{ServiceResult, cached, ensure_admin};

/// Window of the daily sales chart.
pub const DAILY_SALES_DAYS: u32 = 30;

/// Loads totals plus the monthly and daily sales series.
pub async fn load_dashboard<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
) -> ServiceResult<DashboardPageData>
where
    G: AnalyticsReader + ?Sized,
{
    ensure_admin(session)?;

    let stats = cached(cache, CacheKey::new(Collection::Analytics, "stats"), || {
        gateway.dashboard_stats()
    })
    .await?;
    let monthly_sales = cached(cache, CacheKey::new(Collection::Analytics, "monthly"), || {
        gateway.monthly_sales()
    })
    .await?;
    let daily_sales = cached(
        cache,
        CacheKey::new(Collection::Analytics, format!("daily={DAILY_SALES_DAYS}")),
        || gateway.daily_sales(DAILY_SALES_DAYS),
    )
    .await?;

    Ok(DashboardPageData {
        monthly_peak: series_peak(&monthly_sales),
        daily_peak: series_peak(&daily_sales),
        stats,
        monthly_sales,
        daily_sales,
        days: DAILY_SALES_DAYS,
    })
}
