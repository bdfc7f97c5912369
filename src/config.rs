// 🗂️ Static Reference Configuration
// Immutable label/color tables for categories, quadrants, and threat
// levels. Loaded once as constants; no runtime mutation.

use crate::entities::{Category, Quadrant};

// ============================================================================
// CATEGORY CONFIG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryConfig {
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub static CATEGORY_CONFIG: [CategoryConfig; 6] = [
    CategoryConfig {
        category: Category::A,
        label: "Direct competitor",
        description: "Listed disability-welfare-services operators",
        color: "#EF4444",
    },
    CategoryConfig {
        category: Category::B,
        label: "Adjacent competitor",
        description: "Disability employment support and welfare periphery",
        color: "#F59E0B",
    },
    CategoryConfig {
        category: Category::C,
        label: "SaaS competitor",
        description: "Welfare SaaS and system vendors",
        color: "#3B82F6",
    },
    CategoryConfig {
        category: Category::D,
        label: "Major healthcare",
        description: "Large care and healthcare groups",
        color: "#8B5CF6",
    },
    CategoryConfig {
        category: Category::E,
        label: "Key private company",
        description: "Unlisted companies with industry presence",
        color: "#6B7280",
    },
    CategoryConfig {
        category: Category::F,
        label: "Technology benchmark",
        description: "DX and AI adoption reference companies",
        color: "#10B981",
    },
];

pub fn category_config(category: Category) -> &'static CategoryConfig {
    // CATEGORY_CONFIG covers every enum value, in declaration order
    &CATEGORY_CONFIG[Category::ALL.iter().position(|c| *c == category).unwrap_or(0)]
}

// ============================================================================
// QUADRANT CONFIG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantConfig {
    pub quadrant: Quadrant,
    pub slug: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub static QUADRANT_CONFIG: [QuadrantConfig; 4] = [
    QuadrantConfig {
        quadrant: Quadrant::Q1,
        slug: "direct-competitor",
        label: "Direct competition",
        color: "#EF4444",
        description: "Same services in the disability-welfare industry",
    },
    QuadrantConfig {
        quadrant: Quadrant::Q2,
        slug: "market-explorer",
        label: "Market exploration",
        color: "#F59E0B",
        description: "Same industry, different value proposition",
    },
    QuadrantConfig {
        quadrant: Quadrant::Q3,
        slug: "ops-deepdive",
        label: "Operations deep-dive",
        color: "#3B82F6",
        description: "Adjacent industries with the same value model",
    },
    QuadrantConfig {
        quadrant: Quadrant::Q4,
        slug: "tech-catchup",
        label: "Technology catch-up",
        color: "#8B5CF6",
        description: "Different industry and value, technology reference",
    },
];

pub fn quadrant_config(quadrant: Quadrant) -> &'static QuadrantConfig {
    &QUADRANT_CONFIG[Quadrant::ALL.iter().position(|q| *q == quadrant).unwrap_or(0)]
}

/// Slug lookup for routing. Unknown slugs resolve to None (a 404 at the
/// presentation boundary), never a panic.
pub fn quadrant_for_slug(slug: &str) -> Option<Quadrant> {
    QUADRANT_CONFIG
        .iter()
        .find(|c| c.slug == slug)
        .map(|c| c.quadrant)
}

// ============================================================================
// THREAT LEVEL CONFIG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatLevelConfig {
    pub level: u8,
    pub label: &'static str,
    pub color: &'static str,
}

pub static THREAT_LEVEL_CONFIG: [ThreatLevelConfig; 5] = [
    ThreatLevelConfig { level: 1, label: "Low", color: "#10B981" },
    ThreatLevelConfig { level: 2, label: "Somewhat low", color: "#6EE7B7" },
    ThreatLevelConfig { level: 3, label: "Medium", color: "#F59E0B" },
    ThreatLevelConfig { level: 4, label: "High", color: "#F87171" },
    ThreatLevelConfig { level: 5, label: "Highest", color: "#EF4444" },
];

pub fn threat_config(level: u8) -> Option<&'static ThreatLevelConfig> {
    THREAT_LEVEL_CONFIG.iter().find(|c| c.level == level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_config() {
        for category in Category::ALL {
            assert_eq!(category_config(category).category, category);
        }
    }

    #[test]
    fn test_slug_quadrant_bijection() {
        for quadrant in Quadrant::ALL {
            let slug = quadrant_config(quadrant).slug;
            assert_eq!(quadrant_for_slug(slug), Some(quadrant));
        }

        // All slugs distinct
        let mut slugs: Vec<&str> = QUADRANT_CONFIG.iter().map(|c| c.slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), QUADRANT_CONFIG.len());
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert_eq!(quadrant_for_slug("no-such-quadrant"), None);
        assert_eq!(quadrant_for_slug(""), None);
    }

    #[test]
    fn test_threat_levels_cover_one_to_five() {
        for level in 1..=5u8 {
            assert!(threat_config(level).is_some());
        }
        assert!(threat_config(0).is_none());
        assert!(threat_config(6).is_none());
    }
}
