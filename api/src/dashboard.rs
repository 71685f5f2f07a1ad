//! Account dashboard page: session gate, tenant-scoped queries, chart shapes.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};
use ui::{
    charts::create_area_chart_config_with, format_metrics_data, AreaChartConfig, MetricRow,
    MetricsData,
};

use crate::{
    config::DashboardConfig,
    error::{ApiError, Redirect},
    session::{Session, SessionProvider},
    store::{MetricsQuery, MetricsStore},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountDashboard {
    pub radar_chart_data: Option<Value>,
    pub metrics_data: Vec<MetricRow>,
    pub user: Session,
    pub overview: MetricsData,
    pub area_chart: AreaChartConfig,
}

/// Load everything the account page shows.
///
/// Without a session this returns [`ApiError::Redirect`] to the login path.
/// A failing query is logged and treated as "no data" so the page still renders.
pub async fn load_account_dashboard<P, S>(
    sessions: &P,
    store: &S,
    config: &DashboardConfig,
) -> Result<AccountDashboard, ApiError>
where
    P: SessionProvider,
    S: MetricsStore,
{
    let Some(session) = sessions.safe_get_session().await else {
        debug!(location = %config.login_path, "no session, redirecting");
        return Err(ApiError::Redirect(Redirect::see_other(&config.login_path)));
    };

    let radar_chart_data = match store.latest_radar_chart(&session.user_id).await {
        Ok(chart) => chart,
        Err(err) => {
            error!(user_id = %session.user_id, error = %err, "error fetching radar chart data");
            None
        }
    };

    let query = MetricsQuery {
        tenant_id: session.user_id.clone(),
        limit: config.metrics_limit,
        ascending: true,
    };
    let metrics_data = match store.metrics(&query).await {
        Ok(rows) => rows,
        Err(err) => {
            error!(tenant_id = %query.tenant_id, error = %err, "error fetching metrics data");
            Vec::new()
        }
    };

    let overview = format_metrics_data(&metrics_data);
    let area_chart = create_area_chart_config_with(
        &metrics_data,
        config.chart.default_metrics.as_slice(),
        &config.chart,
    );

    info!(
        user_id = %session.user_id,
        rows = metrics_data.len(),
        radar = radar_chart_data.is_some(),
        "loaded account dashboard"
    );

    Ok(AccountDashboard {
        radar_chart_data,
        metrics_data,
        user: session,
        overview,
        area_chart,
    })
}

/// Sign the current user out and send them home. Without a session there is nothing to do.
pub async fn sign_out_action<P: SessionProvider>(
    sessions: &P,
    config: &DashboardConfig,
) -> Result<Option<Redirect>, ApiError> {
    if sessions.safe_get_session().await.is_none() {
        return Ok(None);
    }

    sessions.sign_out().await?;
    Ok(Some(Redirect::see_other(&config.home_path)))
}
