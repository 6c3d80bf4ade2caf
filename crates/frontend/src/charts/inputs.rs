//! Pure dataset-to-chart mapping. Chart components take plain label/value
//! arrays; everything here is host-testable arithmetic.

use contracts::dataset::{AbcClassification, CategoryPerformance, SeasonalImpact, StorePerformance};

/// How many stores the ranking chart shows.
pub const STORE_CHART_LIMIT: usize = 10;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Labels and turnover ratios for the store ranking bar chart.
pub fn store_turnover(stores: &[StorePerformance]) -> (Vec<String>, Vec<f64>) {
    let top = &stores[..stores.len().min(STORE_CHART_LIMIT)];
    (
        top.iter().map(|s| s.store.clone()).collect(),
        top.iter().map(|s| s.turnover).collect(),
    )
}

/// Per-bar tooltip lines for the store chart.
pub fn store_tooltips(stores: &[StorePerformance]) -> Vec<String> {
    stores
        .iter()
        .take(STORE_CHART_LIMIT)
        .map(|s| {
            format!(
                "{}: {:.2}x · Revenue ${:.2} · {} · {}",
                s.store, s.turnover, s.revenue, s.region, s.rating
            )
        })
        .collect()
}

/// One doughnut slice of the ABC revenue-share chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AbcSlice {
    pub label: String,
    pub revenue_percent: f64,
    pub product_count: u32,
}

pub fn abc_slices(abc: &AbcClassification) -> Vec<AbcSlice> {
    [
        ("Class A", &abc.class_a),
        ("Class B", &abc.class_b),
        ("Class C", &abc.class_c),
    ]
    .into_iter()
    .map(|(label, class)| AbcSlice {
        label: label.to_string(),
        revenue_percent: class.revenue_percent,
        product_count: class.count,
    })
    .collect()
}

/// Category revenue scaled to thousands, one decimal.
pub fn category_revenue_thousands(categories: &[CategoryPerformance]) -> Vec<f64> {
    categories.iter().map(|c| round1(c.revenue / 1_000.0)).collect()
}

pub fn category_turnover(categories: &[CategoryPerformance]) -> Vec<f64> {
    categories.iter().map(|c| c.turnover_ratio).collect()
}

pub fn category_labels(categories: &[CategoryPerformance]) -> Vec<String> {
    categories.iter().map(|c| c.category.clone()).collect()
}

/// Seasonal revenue scaled to millions, one decimal.
pub fn seasonal_revenue_millions(seasons: &[SeasonalImpact]) -> Vec<f64> {
    seasons
        .iter()
        .map(|s| round1(s.revenue / 1_000_000.0))
        .collect()
}

pub fn seasonal_index(seasons: &[SeasonalImpact]) -> Vec<f64> {
    seasons.iter().map(|s| s.index).collect()
}

pub fn seasonal_labels(seasons: &[SeasonalImpact]) -> Vec<String> {
    seasons.iter().map(|s| s.season.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dataset::DashboardData;

    #[test]
    fn store_chart_takes_at_most_ten() {
        let data = DashboardData::sample();
        let (labels, values) = store_turnover(&data.store_performance);
        assert_eq!(labels.len(), 10);
        assert_eq!(values.len(), 10);
        assert_eq!(labels[0], "S005 South");
        assert_eq!(values[0], 66.22);
    }

    #[test]
    fn abc_slices_preserve_order_and_sum() {
        let data = DashboardData::sample();
        let slices = abc_slices(&data.abc_classification);
        assert_eq!(
            slices.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            ["Class A", "Class B", "Class C"]
        );
        let total: f64 = slices.iter().map(|s| s.revenue_percent).sum();
        assert!((total - 100.0).abs() < 0.01);
        assert_eq!(slices[0].product_count, 440);
    }

    #[test]
    fn category_revenue_scaled_to_thousands() {
        let data = DashboardData::sample();
        let revenue = category_revenue_thousands(&data.category_performance);
        // 30_443.29 / 1_000 rounded to one decimal
        assert_eq!(revenue[0], 30.4);
        assert_eq!(revenue[4], 4.4);
    }

    #[test]
    fn seasonal_revenue_scaled_to_millions() {
        let data = DashboardData::sample();
        let revenue = seasonal_revenue_millions(&data.seasonal_impact);
        assert_eq!(revenue[0], 0.1); // 98_321.73 / 1e6
        let index = seasonal_index(&data.seasonal_impact);
        assert_eq!(index, vec![103.7, 102.7, 97.0, 96.6]);
    }
}
