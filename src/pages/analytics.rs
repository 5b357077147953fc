//! Analytics page: six aggregate fetches issued together.

use futures_util::future::{try_join, try_join3};
use serde::Serialize;

use crate::context::ConsoleContext;
use crate::models::{
    AnalyticsSummary, CategoryCount, MonthlyRating, StatusCount, TopVendor, VendorSpending,
};
use crate::render::{
    category_chart, performance_chart, spending_chart, status_chart, summary_tiles,
    top_vendor_rows, ChartSeries, MetricTile, TopVendorRow,
};
use crate::state::{Loadable, Observable, RequestTracker};

/// Everything the analytics page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsData {
    pub summary: AnalyticsSummary,
    pub by_category: Vec<CategoryCount>,
    pub spending: Vec<VendorSpending>,
    pub status: Vec<StatusCount>,
    pub performance: Vec<MonthlyRating>,
    pub top_vendors: Vec<TopVendor>,
}

impl AnalyticsData {
    pub fn tiles(&self) -> Vec<MetricTile> {
        summary_tiles(&self.summary)
    }

    /// Category, spending, status, and rating series in display order
    pub fn charts(&self) -> Vec<ChartSeries> {
        vec![
            category_chart(&self.by_category),
            spending_chart(&self.spending),
            status_chart(&self.status),
            performance_chart(&self.performance),
        ]
    }

    pub fn top_rows(&self) -> Vec<TopVendorRow> {
        top_vendor_rows(&self.top_vendors)
    }
}

pub struct AnalyticsPage {
    ctx: ConsoleContext,
    pub data: Observable<Loadable<AnalyticsData>>,
    tracker: RequestTracker,
}

impl AnalyticsPage {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            ctx,
            data: Observable::default(),
            tracker: RequestTracker::new(),
        }
    }

    pub async fn activate(&self) {
        self.load().await;
    }

    /// All six calls run concurrently; the first failure fails the page.
    pub async fn load(&self) {
        let ticket = self.tracker.issue();
        self.data.update(|d| d.begin());

        let api = &self.ctx.api;
        let result = try_join(
            try_join3(
                api.analytics_summary(),
                api.vendors_by_category(),
                api.spending_by_vendor(),
            ),
            try_join3(
                api.contract_status(),
                api.vendor_performance(),
                api.top_performing_vendors(),
            ),
        )
        .await;

        if !self.tracker.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "Discarding stale analytics");
            return;
        }

        match result {
            Ok(((summary, by_category, spending), (status, performance, top_vendors))) => {
                self.data.update(|d| {
                    d.succeed(AnalyticsData {
                        summary,
                        by_category,
                        spending,
                        status,
                        performance,
                        top_vendors,
                    })
                });
            }
            Err(e) => {
                self.data.update(|d| d.fail(e.to_string()));
                self.ctx.report_load("analytics data", &e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::context;
    use crate::state::LoadPhase;

    fn script_all(transport: &crate::api::testing::ScriptedTransport) {
        transport.respond_to(
            "/analytics/summary",
            200,
            r#"{"active_vendors": 4, "total_contract_value": null, "expiring_soon": 1, "average_rating": 4.26}"#,
        );
        transport.respond_to(
            "/analytics/vendors-by-category",
            200,
            r#"[{"category": "IT", "count": 3}, {"category": null, "count": 1}]"#,
        );
        transport.respond_to(
            "/analytics/spending-by-vendor",
            200,
            r#"[{"vendor": "Acme", "total": 12000}]"#,
        );
        transport.respond_to(
            "/analytics/contract-status",
            200,
            r#"[{"status": "active", "count": 2}]"#,
        );
        transport.respond_to(
            "/analytics/vendor-performance",
            200,
            r#"[{"month": "2026-01", "average_rating": 4.5}]"#,
        );
        transport.respond_to(
            "/profiles/top-performing",
            200,
            r#"[{"id": 1, "name": "Acme", "category": "IT", "total_contract_value": 12000, "average_rating": 4.5}]"#,
        );
    }

    #[tokio::test]
    async fn test_loads_all_aggregates() {
        let (transport, ctx) = context(true);
        let page = AnalyticsPage::new(ctx);

        script_all(&transport);
        page.activate().await;

        assert_eq!(transport.requests().len(), 6);
        let data = page.data.with(|d| d.data().cloned()).unwrap();

        let tiles = data.tiles();
        assert_eq!(tiles[1].value, "$0");
        assert_eq!(tiles[3].value, "4.3");

        let charts = data.charts();
        assert_eq!(charts.len(), 4);
        assert_eq!(charts[0].labels, vec!["IT", "Unknown"]);
        assert_eq!(charts[2].labels, vec!["Active"]);
        assert_eq!(data.top_rows()[0].total_value, "$12,000");
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_page() {
        let (transport, ctx) = context(true);
        let page = AnalyticsPage::new(ctx.clone());

        transport.respond_to("/analytics/summary", 500, r#"{"error": "db down"}"#);
        page.load().await;

        assert_eq!(page.data.with(|d| d.phase), LoadPhase::LoadFailed);
        assert_eq!(
            ctx.notices.last_error().as_deref(),
            Some("Failed to load analytics data. Please try again.")
        );
    }
}
