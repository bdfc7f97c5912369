// 🧭 Quadrant Classifier
// Membership queries over the fixed category/quadrant taxonomy. The
// slug mapping itself lives in `config` and is a pure bijection.

use crate::config::{quadrant_config, QuadrantConfig};
use crate::entities::{Category, Company, Quadrant};
use crate::error::CoreResult;
use crate::store::EntityStore;

pub struct QuadrantClassifier<'a> {
    store: &'a EntityStore,
}

impl<'a> QuadrantClassifier<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        QuadrantClassifier { store }
    }

    /// Members of one quadrant, stable-ordered by display name.
    pub fn companies_in_quadrant(&self, quadrant: Quadrant) -> Vec<&'a Company> {
        let mut members: Vec<&Company> = self
            .store
            .companies()
            .iter()
            .filter(|c| c.quadrant == quadrant)
            .collect();

        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    /// Members of one category, stable-ordered by display name.
    pub fn companies_in_category(&self, category: Category) -> Vec<&'a Company> {
        let mut members: Vec<&Company> = self
            .store
            .companies()
            .iter()
            .filter(|c| c.category == category)
            .collect();

        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn category_of(&self, company_id: &str) -> CoreResult<Category> {
        Ok(self.store.company(company_id)?.category)
    }

    pub fn quadrant_of(&self, company_id: &str) -> CoreResult<Quadrant> {
        Ok(self.store.company(company_id)?.quadrant)
    }

    /// Static display config for a company's quadrant.
    pub fn quadrant_config_of(&self, company_id: &str) -> CoreResult<&'static QuadrantConfig> {
        Ok(quadrant_config(self.quadrant_of(company_id)?))
    }
}

// ============================================================================
// TESTS
// ============================================================================
