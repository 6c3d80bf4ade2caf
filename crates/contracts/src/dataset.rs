use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Executive KPIs
// ---------------------------------------------------------------------------

/// Headline metrics shown as the KPI card row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveKpis {
    pub total_stores: u32,
    pub total_products: u32,
    pub total_inventory_value: f64,
    pub avg_turnover_ratio: f64,
    pub fill_rate: f64,
    pub total_alerts: u32,
    pub critical_items: u32,
    pub fast_moving_products: u32,
    pub slow_moving_products: u32,
}

// ---------------------------------------------------------------------------
// Store / category / seasonal performance
// ---------------------------------------------------------------------------

/// One store's ranking entry (top-10 list, ordered by turnover).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePerformance {
    pub store: String,
    pub region: String,
    pub turnover: f64,
    pub revenue: f64,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category: String,
    pub revenue: f64,
    pub turnover_ratio: f64,
    pub status: String,
}

/// Seasonal performance index relative to the yearly baseline (100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalImpact {
    pub season: String,
    pub index: f64,
    pub revenue: f64,
    pub classification: String,
}

// ---------------------------------------------------------------------------
// ABC classification
// ---------------------------------------------------------------------------

/// One ABC class bucket (A = highest revenue contribution).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcClass {
    pub count: u32,
    pub revenue_percent: f64,
    pub strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcClassification {
    pub class_a: AbcClass,
    pub class_b: AbcClass,
    pub class_c: AbcClass,
}

// ---------------------------------------------------------------------------
// Critical stock alerts
// ---------------------------------------------------------------------------

/// Low-stock alert row. `days_supply` = current stock / daily sales rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalAlert {
    pub store: String,
    pub region: String,
    pub product: String,
    pub category: String,
    pub current_stock: u32,
    pub daily_sales: f64,
    pub alert_level: String,
    pub days_supply: f64,
}

// ---------------------------------------------------------------------------
// Full dataset
// ---------------------------------------------------------------------------

/// The complete in-memory dashboard dataset. All numbers are static
/// analytics output baked into the binary; nothing is fetched or computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub executive_kpis: ExecutiveKpis,
    pub store_performance: Vec<StorePerformance>,
    pub abc_classification: AbcClassification,
    pub category_performance: Vec<CategoryPerformance>,
    pub seasonal_impact: Vec<SeasonalImpact>,
    pub critical_alerts: Vec<CriticalAlert>,
}

impl DashboardData {
    /// The Urban Retail Co. snapshot rendered by the dashboard.
    pub fn sample() -> Self {
        fn store(store: &str, region: &str, turnover: f64, revenue: f64) -> StorePerformance {
            StorePerformance {
                store: store.to_string(),
                region: region.to_string(),
                turnover,
                revenue,
                rating: "EXCELLENT".to_string(),
            }
        }

        fn category(name: &str, revenue: f64, turnover_ratio: f64) -> CategoryPerformance {
            CategoryPerformance {
                category: name.to_string(),
                revenue,
                turnover_ratio,
                status: "EXCELLENT".to_string(),
            }
        }

        fn season(name: &str, index: f64, revenue: f64, class: &str) -> SeasonalImpact {
            SeasonalImpact {
                season: name.to_string(),
                index,
                revenue,
                classification: class.to_string(),
            }
        }

        fn alert(
            store: &str,
            region: &str,
            product: &str,
            current_stock: u32,
            daily_sales: f64,
            days_supply: f64,
        ) -> CriticalAlert {
            CriticalAlert {
                store: store.to_string(),
                region: region.to_string(),
                product: product.to_string(),
                category: "Clothing".to_string(),
                current_stock,
                daily_sales,
                alert_level: "CRITICAL".to_string(),
                days_supply,
            }
        }

        Self {
            executive_kpis: ExecutiveKpis {
                total_stores: 20,
                total_products: 30,
                total_inventory_value: 9_519_914.11,
                avg_turnover_ratio: 62.31,
                fill_rate: 100.0,
                total_alerts: 8,
                critical_items: 0,
                fast_moving_products: 150,
                slow_moving_products: 150,
            },
            store_performance: vec![
                store("S005 South", "South", 66.22, 42_011.49),
                store("S001 North", "North", 64.84, 40_389.39),
                store("S003 West", "West", 64.60, 38_748.00),
                store("S005 North", "North", 64.13, 40_671.04),
                store("S002 North", "North", 63.96, 39_931.42),
                store("S004 West", "West", 63.87, 37_666.08),
                store("S003 South", "South", 63.81, 38_051.13),
                store("S002 East", "East", 62.84, 39_235.33),
                store("S001 West", "West", 62.55, 39_419.62),
                store("S002 South", "South", 62.36, 39_968.35),
            ],
            abc_classification: AbcClassification {
                class_a: AbcClass {
                    count: 440,
                    revenue_percent: 78.6,
                    strategy: "TIGHT_CONTROL".to_string(),
                },
                class_b: AbcClass {
                    count: 105,
                    revenue_percent: 14.6,
                    strategy: "MODERATE_CONTROL".to_string(),
                },
                class_c: AbcClass {
                    count: 55,
                    revenue_percent: 6.8,
                    strategy: "BASIC_CONTROL".to_string(),
                },
            },
            category_performance: vec![
                category("Clothing", 30_443.29, 65.48),
                category("Electronics", 16_546.54, 59.66),
                category("Furniture", 12_713.31, 60.96),
                category("Toys", 6_518.86, 61.34),
                category("Groceries", 4_370.12, 60.91),
            ],
            seasonal_impact: vec![
                season("Winter", 103.7, 98_321.73, "PEAK"),
                season("Summer", 102.7, 66_363.14, "HIGH"),
                season("Spring", 97.0, 43_443.94, "LOW"),
                season("Autumn", 96.6, 64_856.68, "MODERATE"),
            ],
            critical_alerts: vec![
                alert("S003", "West", "P0016", 32, 116.8, 0.3),
                alert("S002", "South", "P0126", 90, 110.16, 0.8),
                alert("S005", "South", "P0046", 123, 120.63, 1.0),
                alert("S002", "East", "P0066", 127, 121.33, 1.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dataset_shape() {
        let data = DashboardData::sample();
        assert_eq!(data.store_performance.len(), 10);
        assert_eq!(data.category_performance.len(), 5);
        assert_eq!(data.seasonal_impact.len(), 4);
        assert_eq!(data.critical_alerts.len(), 4);
        assert_eq!(data.executive_kpis.total_stores, 20);
    }

    #[test]
    fn stores_ordered_by_turnover() {
        let data = DashboardData::sample();
        let turnovers: Vec<f64> = data.store_performance.iter().map(|s| s.turnover).collect();
        assert!(turnovers.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn abc_revenue_percents_cover_whole() {
        let abc = DashboardData::sample().abc_classification;
        let total = abc.class_a.revenue_percent
            + abc.class_b.revenue_percent
            + abc.class_c.revenue_percent;
        assert!((total - 100.0).abs() < 0.01);
    }

    #[test]
    fn serde_round_trip_preserves_field_names() {
        let data = DashboardData::sample();
        let json = serde_json::to_value(&data).unwrap();
        // camelCase field names are part of the export contract
        assert!(json.get("executiveKpis").is_some());
        assert!(json.get("storePerformance").is_some());
        assert!(json["abcClassification"].get("classA").is_some());
        let back: DashboardData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
