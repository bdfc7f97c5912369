// 🏢 Company Entity - Tracked competitors and reference companies
// Every company carries exactly one category and one quadrant, both
// drawn from closed enumerations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY
// ============================================================================

/// Competitor classification group, orthogonal to quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Listed disability-welfare-services operators
    A,
    /// Adjacent: employment support and welfare periphery
    B,
    /// Welfare SaaS and system vendors
    C,
    /// Major care and healthcare groups
    D,
    /// Key private (unlisted) companies
    E,
    /// Technology benchmarks (DX / AI)
    F,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
        Category::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
            Category::E => "E",
            Category::F => "F",
        }
    }
}

// ============================================================================
// QUADRANT
// ============================================================================

/// Strategic positioning on the industry x provided-value matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Same industry, same value
    Q1,
    /// Same industry, different value
    Q2,
    /// Different industry, same value
    Q3,
    /// Different industry, different value
    Q4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Q1 => "Q1",
            Quadrant::Q2 => "Q2",
            Quadrant::Q3 => "Q3",
            Quadrant::Q4 => "Q4",
        }
    }
}

// ============================================================================
// COMPANY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Stable identifier (URL-safe slug, e.g. "litalico")
    pub id: String,

    /// Display name, the sort key for all listed views
    pub name: String,

    pub category: Category,
    pub quadrant: Quadrant,

    /// Monitoring threat level, 1 (low) to 5 (highest)
    pub threat_level: u8,

    /// Brand color hex for charts (e.g. "#00A5E3")
    pub brand_color: String,

    /// Whether financials, history, and strategy data are all present
    pub has_full_data: bool,

    pub last_updated: NaiveDate,
}
