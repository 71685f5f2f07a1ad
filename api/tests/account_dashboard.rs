//! Account dashboard loader against in-memory collaborators.

use std::cell::Cell;

use api::{
    load_account_dashboard, sign_out_action, ApiError, DashboardConfig, MemoryStore,
    MetricsQuery, MetricsStore, Redirect, Session, SessionProvider,
};
use futures::executor::block_on;
use serde_json::{json, Value};
use time::{
    macros::{date, datetime},
    Duration,
};
use ui::MetricRow;

struct FixedSession {
    session: Option<Session>,
    signed_out: Cell<bool>,
}

impl FixedSession {
    fn signed_in(user_id: &str) -> Self {
        Self {
            session: Some(Session::new(user_id)),
            signed_out: Cell::new(false),
        }
    }

    fn anonymous() -> Self {
        Self {
            session: None,
            signed_out: Cell::new(false),
        }
    }
}

impl SessionProvider for FixedSession {
    async fn safe_get_session(&self) -> Option<Session> {
        self.session.clone()
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        self.signed_out.set(true);
        Ok(())
    }
}

struct ExpiredSession;

impl SessionProvider for ExpiredSession {
    async fn safe_get_session(&self) -> Option<Session> {
        Some(Session::new("user-1"))
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        Err(ApiError::Session("refresh token revoked".into()))
    }
}

struct BrokenStore;

impl MetricsStore for BrokenStore {
    async fn metrics(&self, _query: &MetricsQuery) -> Result<Vec<MetricRow>, ApiError> {
        Err(ApiError::Store("connection reset".into()))
    }

    async fn latest_radar_chart(&self, _user_id: &str) -> Result<Option<Value>, ApiError> {
        Err(ApiError::Store("connection reset".into()))
    }
}

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_metric("user-1", MetricRow::new("Revenue", date!(2024 - 01 - 03), 300.0));
    store.insert_metric("user-1", MetricRow::new("Users", date!(2024 - 01 - 02), 5.0));
    store.insert_metric("user-1", MetricRow::new("Revenue", date!(2024 - 01 - 01), 100.0));
    store.insert_metric("user-2", MetricRow::new("Revenue", date!(2024 - 01 - 01), 9_999.0));

    store.insert_radar_chart(
        "user-1",
        datetime!(2024-01-01 09:00 UTC),
        json!({ "label": "older" }),
    );
    store.insert_radar_chart(
        "user-1",
        datetime!(2024-02-01 09:00 UTC),
        json!({ "label": "newest" }),
    );
    store.insert_radar_chart(
        "user-2",
        datetime!(2024-03-01 09:00 UTC),
        json!({ "label": "someone else" }),
    );
    store
}

#[test]
fn anonymous_visitors_are_sent_to_login() {
    let outcome = block_on(load_account_dashboard(
        &FixedSession::anonymous(),
        &seeded_store(),
        &DashboardConfig::default(),
    ));

    match outcome {
        Err(ApiError::Redirect(redirect)) => {
            assert_eq!(redirect, Redirect::see_other("/login"));
            assert_eq!(redirect.status, 303);
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn loads_only_the_tenants_rows() {
    let dashboard = block_on(load_account_dashboard(
        &FixedSession::signed_in("user-1"),
        &seeded_store(),
        &DashboardConfig::default(),
    ))
    .unwrap();

    assert_eq!(dashboard.user.user_id, "user-1");
    assert_eq!(dashboard.metrics_data.len(), 3);
    assert!(dashboard
        .metrics_data
        .windows(2)
        .all(|pair| pair[0].metric_date <= pair[1].metric_date));
    assert_eq!(dashboard.radar_chart_data, Some(json!({ "label": "newest" })));

    assert_eq!(dashboard.overview.labels, ["Jan 1", "Jan 2", "Jan 3"]);
    assert_eq!(dashboard.area_chart.series[0].data, vec![100.0, 0.0, 300.0]);
    assert_eq!(dashboard.area_chart.series[1].data, vec![0.0, 5.0, 0.0]);
}

#[test]
fn caps_rows_at_the_configured_limit() {
    let mut store = MemoryStore::new();
    let start = date!(2024 - 01 - 01);
    for offset in (0..40).rev() {
        store.insert_metric(
            "user-1",
            MetricRow::new("Revenue", start + Duration::days(offset), offset as f64),
        );
    }

    let dashboard = block_on(load_account_dashboard(
        &FixedSession::signed_in("user-1"),
        &store,
        &DashboardConfig::default(),
    ))
    .unwrap();

    assert_eq!(dashboard.metrics_data.len(), 30);
    assert_eq!(dashboard.metrics_data[0].metric_date, start);
    assert_eq!(dashboard.area_chart.labels().len(), 30);
    assert_eq!(dashboard.area_chart.labels()[29], "Jan 30");
}

#[test]
fn store_failures_degrade_to_empty_data() {
    let dashboard = block_on(load_account_dashboard(
        &FixedSession::signed_in("user-1"),
        &BrokenStore,
        &DashboardConfig::default(),
    ))
    .unwrap();

    assert!(dashboard.metrics_data.is_empty());
    assert_eq!(dashboard.radar_chart_data, None);
    assert!(dashboard.overview.datasets.is_empty());
    assert_eq!(dashboard.area_chart.series.len(), 2);
}

#[test]
fn chart_metrics_come_from_config() {
    let config = DashboardConfig::from_json_str(
        r#"{ "chart": { "default_metrics": ["Users"], "title": "Account" } }"#,
    )
    .unwrap();

    let dashboard = block_on(load_account_dashboard(
        &FixedSession::signed_in("user-1"),
        &seeded_store(),
        &config,
    ))
    .unwrap();

    assert_eq!(dashboard.area_chart.legend.data, ["Users"]);
    assert_eq!(dashboard.area_chart.title.text, "Account");
}

#[test]
fn sign_out_redirects_home() {
    let sessions = FixedSession::signed_in("user-1");
    let redirect = block_on(sign_out_action(&sessions, &DashboardConfig::default())).unwrap();

    assert_eq!(redirect, Some(Redirect::see_other("/")));
    assert!(sessions.signed_out.get());
}

#[test]
fn sign_out_failures_are_propagated() {
    let outcome = block_on(sign_out_action(&ExpiredSession, &DashboardConfig::default()));

    match outcome {
        Err(ApiError::Session(reason)) => assert_eq!(reason, "refresh token revoked"),
        other => panic!("expected session error, got {other:?}"),
    }
}

#[test]
fn sign_out_without_session_is_a_no_op() {
    let sessions = FixedSession::anonymous();
    let redirect = block_on(sign_out_action(&sessions, &DashboardConfig::default())).unwrap();

    assert_eq!(redirect, None);
    assert!(!sessions.signed_out.get());
}

#[test]
fn descending_queries_return_newest_first() {
    let store = seeded_store();
    let rows = block_on(store.metrics(&MetricsQuery {
        tenant_id: "user-1".into(),
        limit: 2,
        ascending: false,
    }))
    .unwrap();

    let dates: Vec<_> = rows.iter().map(|row| row.metric_date).collect();
    assert_eq!(dates, vec![date!(2024 - 01 - 03), date!(2024 - 01 - 02)]);
}
