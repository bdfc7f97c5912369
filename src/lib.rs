// Market Lens - Core Library
// Derivation core behind the competitor/market dashboard: fiscal-year
// resolution, quadrant classification, P&L plan simulation, and the
// read views the presentation layer consumes.

pub mod config;
pub mod entities;
pub mod error;
pub mod facade;
pub mod fiscal;
pub mod format;
pub mod quadrant;
pub mod simulator;
pub mod store;

// Re-export commonly used types
pub use config::{
    category_config, quadrant_config, quadrant_for_slug, threat_config, CategoryConfig,
    QuadrantConfig, ThreatLevelConfig,
};
pub use entities::{
    Assumption, BusinessPlan, Category, Company, CompanyFinancials, FiscalYear, PlanCell,
    PlanRow, PlanSection, Quadrant, RowKind,
};
pub use error::{CoreError, CoreResult};
pub use facade::{
    ComparisonEntry, ComparisonMetrics, Dashboard, QuadrantView, MAX_COMPARE_COMPANIES,
};
pub use fiscal::{calc_yoy, latest_by_year, FiscalResolver};
pub use quadrant::QuadrantClassifier;
pub use simulator::{
    sensitivity, simulate, summarize, MonthlyProjection, PlanSummary, ProjectedLine,
    SensitivityImpact,
};
pub use store::{EntityStore, Snapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
