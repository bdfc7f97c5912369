// Entity Models
// Immutable snapshot records: companies, per-company fiscal years,
// and business plans. Loaded once per session, never mutated.

pub mod company;
pub mod fiscal;
pub mod plan;

pub use company::{Category, Company, Quadrant};
pub use fiscal::{CompanyFinancials, FiscalYear};
pub use plan::{Assumption, BusinessPlan, PlanCell, PlanRow, PlanSection, RowKind};
