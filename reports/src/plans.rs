//! Static subscription plan catalog.

use serde::Serialize;

/// A subscription tier offered on the pricing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Identifier sent to `/checkout`.
    pub id: &'static str,
    pub name: &'static str,
    /// Whole US dollars per interval.
    pub price: u32,
    pub interval: &'static str,
    /// `-1` means unlimited.
    pub reports_per_month: i32,
    pub features: &'static [&'static str],
    /// Highlighted as the recommended tier.
    pub featured: bool,
}

impl Plan {
    /// Price label such as `$149/mo`.
    #[must_use]
    pub fn price_label(&self) -> String {
        let suffix = match self.interval {
            "month" => "mo",
            "year" => "yr",
            other => other,
        };
        format!("${}/{suffix}", self.price)
    }

    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.reports_per_month < 0
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: 49,
        interval: "month",
        reports_per_month: 10,
        features: &["10 reports/month", "Domain overview", "Keyword research", "PDF export", "Email support"],
        featured: false,
    },
    Plan {
        id: "professional",
        name: "Professional",
        price: 149,
        interval: "month",
        reports_per_month: 50,
        features: &["50 reports/month", "Site audit", "Competitor analysis", "API access", "Priority support"],
        featured: true,
    },
    Plan {
        id: "agency",
        name: "Agency",
        price: 499,
        interval: "month",
        reports_per_month: -1,
        features: &["Unlimited reports", "White-label", "Team seats (10)", "Custom branding", "Dedicated support"],
        featured: false,
    },
];

/// Look up a plan by id, case-insensitively.
#[must_use]
pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id.eq_ignore_ascii_case(id.trim()))
}

#[cfg(test)]
#[path = "plans_test.rs"]
mod tests;
