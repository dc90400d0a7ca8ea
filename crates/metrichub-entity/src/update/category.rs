//! Live update categories and their fixed message/value pools.

use serde::{Deserialize, Serialize};

/// Category of a simulated live update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateCategory {
    /// Revenue events (sales, payments, renewals).
    Revenue,
    /// User lifecycle events (signups, onboarding).
    Users,
    /// Conversion events.
    Conversions,
    /// Campaign performance events.
    Campaign,
}

impl UpdateCategory {
    /// All categories, in pick order for the generator.
    pub const ALL: [UpdateCategory; 4] = [
        Self::Revenue,
        Self::Users,
        Self::Conversions,
        Self::Campaign,
    ];

    /// The fixed message pool for this category.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Revenue => &[
                "New sale completed",
                "Revenue milestone reached",
                "Payment processed",
                "Subscription renewed",
            ],
            Self::Users => &[
                "New user registered",
                "User completed onboarding",
                "Active user milestone",
                "User engagement increased",
            ],
            Self::Conversions => &[
                "Lead converted to customer",
                "Conversion rate improved",
                "New conversion milestone",
                "Campaign conversion success",
            ],
            Self::Campaign => &[
                "Campaign performance improved",
                "New campaign launched",
                "Campaign budget updated",
                "Campaign target reached",
            ],
        }
    }

    /// The fixed display-value pool for this category.
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Self::Revenue => &["$1,234", "$5,678", "$12,345", "$2,500"],
            Self::Users => &["+15", "+23", "+8", "+45"],
            Self::Conversions => &["+2.3%", "+1.8%", "+5.2%", "+3.1%"],
            Self::Campaign => &["+12%", "+8%", "+15%", "+22%"],
        }
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Users => "users",
            Self::Conversions => "conversions",
            Self::Campaign => "campaign",
        }
    }
}

impl std::fmt::Display for UpdateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_four_messages_and_values() {
        for category in UpdateCategory::ALL {
            assert_eq!(category.messages().len(), 4, "{category}");
            assert_eq!(category.values().len(), 4, "{category}");
        }
    }
}
