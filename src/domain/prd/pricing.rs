//! Monetization entities: pricing plans and revenue projections.

use serde::Serialize;

use crate::domain::content::{BulletGroup, ChartPoint, MetaField, PartialBadge, PartialContentRecord, Trend};
use crate::domain::format::format_currency;

/// One subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    /// Monthly price in USD. `None` means custom/contact pricing.
    pub price: Option<f64>,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub limitations: Vec<String>,
    pub popular: bool,
}

impl PricingPlan {
    /// Display price, e.g. `"$15.00/month"` or `"Custom pricing"`.
    pub fn display_price(&self) -> String {
        match self.price {
            Some(amount) => format!("{}/{}", format_currency(amount, "USD"), self.period),
            None => "Custom pricing".to_string(),
        }
    }

    pub fn record(&self) -> PartialContentRecord {
        let mut badges = Vec::new();
        if self.popular {
            badges.push(PartialBadge::plain("Most Popular"));
        }
        let mut children = vec![BulletGroup::new("Included", self.features.clone())];
        if !self.limitations.is_empty() {
            children.push(BulletGroup::new("Limitations", self.limitations.clone()));
        }
        PartialContentRecord {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            badges: if badges.is_empty() { None } else { Some(badges) },
            metadata: Some(vec![MetaField::new("Price", self.display_price())]),
            children: Some(children),
        }
    }
}

/// One month of projected revenue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueProjection {
    pub month: String,
    pub revenue: f64,
}

impl RevenueProjection {
    /// Chart point for the revenue series. Projections trend upward by
    /// definition; the chart colors by value, not direction.
    pub fn point(&self) -> ChartPoint {
        ChartPoint::new(&self.month, self.revenue, Trend::Stable)
    }
}
