//! Analytics tiles, chart series, and the top-vendors table.
//!
//! Chart drawing is left to the front end; these only shape the data.

use super::format::{capitalize, format_money, format_rating};
use crate::models::{
    AnalyticsSummary, CategoryCount, MonthlyRating, StatusCount, TopVendor, VendorSpending,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

/// Labels and values of one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(0.0, f64::max)
    }

    /// Value `i` as a percentage of the largest value
    pub fn share(&self, i: usize) -> f64 {
        let max = self.max();
        match self.values.get(i) {
            Some(v) if max > 0.0 => v / max * 100.0,
            _ => 0.0,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopVendorRow {
    pub name: String,
    pub category: String,
    pub total_value: String,
    pub rating: String,
    pub status: &'static str,
}

pub fn summary_tiles(summary: &AnalyticsSummary) -> Vec<MetricTile> {
    vec![
        MetricTile {
            label: "Active Vendors",
            value: summary.active_vendors.to_string(),
        },
        MetricTile {
            label: "Total Contract Value",
            value: format_money(summary.total_contract_value.unwrap_or(0.0)),
        },
        MetricTile {
            label: "Expiring Soon",
            value: summary.expiring_soon.to_string(),
        },
        MetricTile {
            label: "Average Rating",
            value: format_rating(summary.average_rating),
        },
    ]
}

pub fn category_chart(counts: &[CategoryCount]) -> ChartSeries {
    ChartSeries {
        title: "Vendors by Category",
        labels: counts
            .iter()
            .map(|c| c.category.clone().unwrap_or_else(|| "Unknown".to_string()))
            .collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
    }
}

pub fn spending_chart(spending: &[VendorSpending]) -> ChartSeries {
    ChartSeries {
        title: "Contract Value ($)",
        labels: spending.iter().map(|s| s.vendor.clone()).collect(),
        values: spending.iter().map(|s| s.total).collect(),
    }
}

pub fn status_chart(counts: &[StatusCount]) -> ChartSeries {
    ChartSeries {
        title: "Contract Status",
        labels: counts.iter().map(|c| capitalize(&c.status)).collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
    }
}

pub fn performance_chart(ratings: &[MonthlyRating]) -> ChartSeries {
    ChartSeries {
        title: "Average Vendor Rating",
        labels: ratings.iter().map(|r| r.month.clone()).collect(),
        values: ratings.iter().map(|r| r.average_rating).collect(),
    }
}

pub fn top_vendor_rows(vendors: &[TopVendor]) -> Vec<TopVendorRow> {
    vendors
        .iter()
        .map(|v| TopVendorRow {
            name: v.name.clone(),
            category: v
                .category
                .clone()
                .unwrap_or_else(|| "No category".to_string()),
            total_value: format_money(v.total_contract_value.unwrap_or(0.0)),
            rating: format_rating(v.average_rating),
            status: "Active",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tiles() {
        let tiles = summary_tiles(&AnalyticsSummary {
            active_vendors: 12,
            total_contract_value: Some(150000.0),
            expiring_soon: 3,
            average_rating: None,
        });

        assert_eq!(tiles[0].value, "12");
        assert_eq!(tiles[1].value, "$150,000");
        assert_eq!(tiles[2].value, "3");
        assert_eq!(tiles[3].value, "N/A");
    }

    #[test]
    fn test_chart_labels() {
        let chart = category_chart(&[
            CategoryCount {
                category: Some("IT".to_string()),
                count: 4,
            },
            CategoryCount {
                category: None,
                count: 1,
            },
        ]);
        assert_eq!(chart.labels, vec!["IT", "Unknown"]);
        assert_eq!(chart.share(0), 100.0);
        assert_eq!(chart.share(1), 25.0);
        assert_eq!(chart.share(5), 0.0);

        let status = status_chart(&[StatusCount {
            status: "expired".to_string(),
            count: 2,
        }]);
        assert_eq!(status.labels, vec!["Expired"]);
    }

    #[test]
    fn test_top_vendor_rows() {
        let rows = top_vendor_rows(&[TopVendor {
            id: Some(1),
            name: "Acme".to_string(),
            category: None,
            total_contract_value: Some(1200.5),
            average_rating: Some(4.76),
        }]);
        assert_eq!(rows[0].total_value, "$1,200.50");
        assert_eq!(rows[0].rating, "4.8");
        assert_eq!(rows[0].category, "No category");
    }
}
