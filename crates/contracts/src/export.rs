use crate::dataset::{
    AbcClassification, CategoryPerformance, CriticalAlert, DashboardData, ExecutiveKpis,
    SeasonalImpact, StorePerformance,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot written to the downloaded JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// RFC 3339 export instant.
    pub timestamp: DateTime<Utc>,
    pub kpis: ExecutiveKpis,
    pub store_performance: Vec<StorePerformance>,
    pub abc_classification: AbcClassification,
    pub category_performance: Vec<CategoryPerformance>,
    pub seasonal_impact: Vec<SeasonalImpact>,
    pub critical_alerts: Vec<CriticalAlert>,
}

impl ExportPayload {
    pub fn new(data: &DashboardData, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            kpis: data.executive_kpis.clone(),
            store_performance: data.store_performance.clone(),
            abc_classification: data.abc_classification.clone(),
            category_performance: data.category_performance.clone(),
            seasonal_impact: data.seasonal_impact.clone(),
            critical_alerts: data.critical_alerts.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Download file name: `urban-retail-dashboard-<YYYY-MM-DD>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "urban-retail-dashboard-{}.json",
            self.timestamp.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_uses_iso_date() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 14, 16, 30, 0).unwrap();
        let payload = ExportPayload::new(&DashboardData::sample(), ts);
        assert_eq!(payload.file_name(), "urban-retail-dashboard-2025-07-14.json");
    }

    #[test]
    fn payload_serializes_all_sections() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 14, 16, 30, 0).unwrap();
        let payload = ExportPayload::new(&DashboardData::sample(), ts);
        let json: serde_json::Value =
            serde_json::from_str(&payload.to_json_pretty().unwrap()).unwrap();
        for key in [
            "timestamp",
            "kpis",
            "storePerformance",
            "abcClassification",
            "categoryPerformance",
            "seasonalImpact",
            "criticalAlerts",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["storePerformance"].as_array().unwrap().len(), 10);
    }
}
