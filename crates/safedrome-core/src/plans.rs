//! Subscription plan catalog.

/// A subscription tier shown on the Subscription page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Display price, e.g. "$9.99"
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted with a "Most Popular" badge
    pub popular: bool,
}

/// A marketing highlight shown under "Why Choose SafeDrome?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic",
            name: "Basic",
            price: "$9.99",
            period: "month",
            features: &["5GB Storage", "Basic Security", "Email Support"],
            popular: false,
        },
        Plan {
            id: "pro",
            name: "Pro",
            price: "$19.99",
            period: "month",
            features: &[
                "50GB Storage",
                "Advanced Security",
                "Priority Support",
                "Cloud Sync",
            ],
            popular: true,
        },
        Plan {
            id: "enterprise",
            name: "Enterprise",
            price: "$49.99",
            period: "month",
            features: &[
                "Unlimited Storage",
                "Enterprise Security",
                "24/7 Support",
                "Custom Integration",
            ],
            popular: false,
        },
    ]
}

/// Feature cards on the Home page
pub fn features() -> Vec<Highlight> {
    vec![
        Highlight {
            icon: "🔒",
            title: "Secure Storage",
            blurb: "Keep your files safe with advanced encryption",
        },
        Highlight {
            icon: "📁",
            title: "File Management",
            blurb: "Organize and manage your files efficiently",
        },
        Highlight {
            icon: "☁️",
            title: "Cloud Sync",
            blurb: "Access your files from anywhere, anytime",
        },
        Highlight {
            icon: "🔄",
            title: "Auto Backup",
            blurb: "Never lose your important files again",
        },
    ]
}

pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            icon: "🔒",
            title: "Secure",
            blurb: "Bank-level encryption keeps your files completely safe",
        },
        Highlight {
            icon: "⚡",
            title: "Fast",
            blurb: "Lightning-fast upload and download speeds",
        },
        Highlight {
            icon: "🌍",
            title: "Global",
            blurb: "Access your files from anywhere in the world",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_catalog() {
        let plans = plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].name, "Basic");
        assert_eq!(plans[0].price, "$9.99");
        assert_eq!(plans[1].id, "pro");
        assert_eq!(plans[2].features.len(), 4);
    }

    #[test]
    fn test_only_pro_is_popular() {
        let popular: Vec<_> = plans().into_iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, "pro");
    }

    #[test]
    fn test_feature_cards() {
        let cards = features();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Secure Storage");
        assert_eq!(cards[3].icon, "🔄");
    }

    #[test]
    fn test_highlights() {
        let hl = highlights();
        assert_eq!(hl.len(), 3);
        assert_eq!(hl[0].title, "Secure");
        assert_eq!(hl[1].icon, "⚡");
    }
}
