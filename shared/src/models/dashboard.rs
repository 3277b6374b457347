//! Dashboard view objects

use serde::{Deserialize, Serialize};

use super::ConsumableOverview;
use crate::projection::{project, Projection};

/// One consumable as shown on the dashboard, with its restock projection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardItem {
    #[serde(flatten)]
    pub overview: ConsumableOverview,
    pub effective_usage_rate: f64,
    pub days_until_empty: Option<i64>,
    pub needs_purchase: bool,
    pub low_stock: bool,
}

impl DashboardItem {
    pub fn from_overview(overview: ConsumableOverview) -> Self {
        let effective_usage_rate = overview.effective_usage_rate();
        let Projection {
            days_until_empty,
            needs_purchase,
            low_stock,
            ..
        } = project(
            overview.current_quantity,
            effective_usage_rate,
            overview.consumable.usage_rate_period,
            overview.consumable.min_stock_level,
        );

        Self {
            overview,
            effective_usage_rate,
            days_until_empty,
            needs_purchase,
            low_stock,
        }
    }
}

/// Sort dashboard items: needs-purchase first, then soonest to run out.
/// Items that never run out go last.
pub fn sort_dashboard(items: &mut [DashboardItem]) {
    items.sort_by(|a, b| {
        b.needs_purchase
            .cmp(&a.needs_purchase)
            .then_with(|| match (a.days_until_empty, b.days_until_empty) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .then_with(|| a.overview.category_name.cmp(&b.overview.category_name))
            .then_with(|| a.overview.consumable.name.cmp(&b.overview.consumable.name))
    });
}

/// Headline counts for the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryStats {
    pub needs_purchase: i64,
    pub total_items: i64,
    pub recent_purchases: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConsumableType;
    use crate::types::UsagePeriod;
    use chrono::NaiveDate;

    fn overview(name: &str, quantity: f64, rate: f64, min: f64) -> ConsumableOverview {
        ConsumableOverview {
            consumable: ConsumableType {
                id: 1,
                category_id: 1,
                name: name.to_string(),
                unit: "units".to_string(),
                default_usage_rate: rate,
                usage_rate_period: UsagePeriod::Day,
                min_stock_level: min,
                notes: None,
                created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            },
            category_name: "Household".to_string(),
            category_icon: "🏠".to_string(),
            current_quantity: Some(quantity),
            custom_usage_rate: None,
        }
    }

    #[test]
    fn test_custom_rate_overrides_default() {
        let mut o = overview("Milk", 10.0, 1.0, 0.0);
        o.custom_usage_rate = Some(5.0);
        let item = DashboardItem::from_overview(o);
        assert_eq!(item.effective_usage_rate, 5.0);
        assert_eq!(item.days_until_empty, Some(2));
        assert!(item.low_stock);
    }

    #[test]
    fn test_sort_puts_needs_purchase_first_and_no_horizon_last() {
        let mut items = vec![
            DashboardItem::from_overview(overview("Never", 5.0, 0.0, 1.0)),
            DashboardItem::from_overview(overview("Later", 100.0, 1.0, 1.0)),
            DashboardItem::from_overview(overview("Soon", 3.0, 1.0, 1.0)),
            DashboardItem::from_overview(overview("Out", 0.0, 1.0, 1.0)),
        ];
        sort_dashboard(&mut items);
        let names: Vec<&str> = items
            .iter()
            .map(|i| i.overview.consumable.name.as_str())
            .collect();
        assert_eq!(names, vec!["Out", "Soon", "Later", "Never"]);
    }

    #[test]
    fn test_dashboard_json_is_flat() {
        let item = DashboardItem::from_overview(overview("Bread", 2.0, 1.0, 1.0));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Bread");
        assert_eq!(json["category_icon"], "🏠");
        assert_eq!(json["usage_rate_period"], "day");
        assert_eq!(json["days_until_empty"], 2);
        assert_eq!(json["needs_purchase"], false);
        assert_eq!(json["low_stock"], true);
    }
}
