use crate::dataset::ExecutiveKpis;
use serde::{Deserialize, Serialize};

/// Display unit for a KPI value. The card model carries `(raw value, unit)`
/// pairs and derives text through [`UnitKind::render`]; rendered text is
/// never the source of truth for the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    PlainInteger,
    DollarMillions,
    DollarThousands,
    Percent,
    Multiplier,
}

impl UnitKind {
    /// Renders `value` in this unit's display form.
    pub fn render(&self, value: f64) -> String {
        match self {
            UnitKind::DollarMillions => format!("${:.2}M", value / 1_000_000.0),
            UnitKind::DollarThousands => format!("${:.0}K", value / 1_000.0),
            UnitKind::Percent => format!("{:.1}%", value),
            UnitKind::Multiplier => format!("{:.2}x", value),
            UnitKind::PlainInteger => format!("{}", value.floor() as i64),
        }
    }

    /// Formats a value already expressed in this unit's display scale
    /// (e.g. `9.52` for a `$9.52M` card). Unlike [`UnitKind::render`],
    /// no rescaling happens; used for intermediate animation frames whose
    /// accumulator was parsed out of rendered text.
    pub fn render_display(&self, value: f64) -> String {
        match self {
            UnitKind::DollarMillions => format!("${:.2}M", value),
            UnitKind::DollarThousands => format!("${:.0}K", value),
            UnitKind::Percent => format!("{:.1}%", value),
            UnitKind::Multiplier => format!("{:.2}x", value),
            UnitKind::PlainInteger => format!("{}", value.floor() as i64),
        }
    }

    /// Infers the unit from already-rendered text. Checks are mutually
    /// exclusive and ordered; `$`+`M` must win over `$`+`K` since both
    /// contain the dollar sign. First match wins.
    pub fn infer(text: &str) -> UnitKind {
        if text.contains('$') && text.contains('M') {
            UnitKind::DollarMillions
        } else if text.contains('$') && text.contains('K') {
            UnitKind::DollarThousands
        } else if text.contains('%') {
            UnitKind::Percent
        } else if text.contains('x') {
            UnitKind::Multiplier
        } else {
            UnitKind::PlainInteger
        }
    }
}

/// Static metadata for one KPI card: label, raw value and display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: f64,
    pub unit: UnitKind,
}

impl KpiCard {
    fn new(label: &str, value: f64, unit: UnitKind) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit,
        }
    }

    /// Text shown once the card settles (and the count-up target).
    pub fn display_text(&self) -> String {
        self.unit.render(self.value)
    }
}

/// The executive summary card row, in page order.
pub fn kpi_cards(kpis: &ExecutiveKpis) -> Vec<KpiCard> {
    vec![
        KpiCard::new(
            "Total Inventory Value",
            kpis.total_inventory_value,
            UnitKind::DollarMillions,
        ),
        KpiCard::new(
            "Avg Turnover Ratio",
            kpis.avg_turnover_ratio,
            UnitKind::Multiplier,
        ),
        KpiCard::new("Fill Rate", kpis.fill_rate, UnitKind::Percent),
        KpiCard::new("Total Stores", kpis.total_stores as f64, UnitKind::PlainInteger),
        KpiCard::new(
            "Total Products",
            kpis.total_products as f64,
            UnitKind::PlainInteger,
        ),
        KpiCard::new(
            "Fast-Moving Products",
            kpis.fast_moving_products as f64,
            UnitKind::PlainInteger,
        ),
        KpiCard::new(
            "Slow-Moving Products",
            kpis.slow_moving_products as f64,
            UnitKind::PlainInteger,
        ),
        KpiCard::new("Active Alerts", kpis.total_alerts as f64, UnitKind::PlainInteger),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DashboardData;

    #[test]
    fn render_forms() {
        assert_eq!(UnitKind::DollarMillions.render(9_519_914.11), "$9.52M");
        assert_eq!(UnitKind::DollarThousands.render(42_011.49), "$42K");
        assert_eq!(UnitKind::Percent.render(100.0), "100.0%");
        assert_eq!(UnitKind::Multiplier.render(62.31), "62.31x");
        assert_eq!(UnitKind::PlainInteger.render(150.9), "150");
    }

    #[test]
    fn render_display_keeps_scale() {
        // value is already in display units; no division happens
        assert_eq!(UnitKind::DollarMillions.render_display(0.16), "$0.16M");
        assert_eq!(UnitKind::DollarThousands.render_display(41.3), "$41K");
        assert_eq!(UnitKind::Percent.render_display(3.33), "3.3%");
        assert_eq!(UnitKind::Multiplier.render_display(62.31), "62.31x");
        assert_eq!(UnitKind::PlainInteger.render_display(2.5), "2");
    }

    #[test]
    fn infer_priority_order() {
        assert_eq!(UnitKind::infer("$9.52M"), UnitKind::DollarMillions);
        assert_eq!(UnitKind::infer("$42K"), UnitKind::DollarThousands);
        assert_eq!(UnitKind::infer("100.0%"), UnitKind::Percent);
        assert_eq!(UnitKind::infer("62.31x"), UnitKind::Multiplier);
        assert_eq!(UnitKind::infer("150"), UnitKind::PlainInteger);
        // "$" + "M" beats the multiplier check even if an "x" sneaks in
        assert_eq!(UnitKind::infer("$9.52Mx"), UnitKind::DollarMillions);
    }

    #[test]
    fn infer_round_trips_rendered_text() {
        for unit in [
            UnitKind::DollarMillions,
            UnitKind::Percent,
            UnitKind::Multiplier,
            UnitKind::PlainInteger,
        ] {
            assert_eq!(UnitKind::infer(&unit.render(62.31)), unit);
        }
        // DollarThousands renders without an "M", so it survives inference too
        assert_eq!(
            UnitKind::infer(&UnitKind::DollarThousands.render(42_011.49)),
            UnitKind::DollarThousands
        );
    }

    #[test]
    fn card_row_matches_dataset() {
        let kpis = DashboardData::sample().executive_kpis;
        let cards = kpi_cards(&kpis);
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].display_text(), "$9.52M");
        assert_eq!(cards[1].display_text(), "62.31x");
        assert_eq!(cards[2].display_text(), "100.0%");
        assert_eq!(cards[5].display_text(), "150");
    }
}
