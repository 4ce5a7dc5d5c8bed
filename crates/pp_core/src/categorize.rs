//! Keyword decision table for press-release titles.
//!
//! Rules are evaluated in order and the first rule with any keyword found
//! in the lower-cased title wins; titles matching nothing are `Other`.

use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn categorize(&self, title: &str) -> Category {
        let lowered = title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }

    /// The body is accepted for call-site compatibility; only the title decides.
    pub fn categorize_with_body(&self, title: &str, _body: Option<&str>) -> Category {
        self.categorize(title)
    }
}

pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::RegulatoryApproval,
            &["approval", "approve", "authorized", "fda"],
        ),
        CategoryRule::new(
            Category::ClinicalTrialUpdate,
            &["clinical trial", "phase", "study"],
        ),
        CategoryRule::new(
            Category::FinancialNews,
            &["financial", "dividend", "finance", "earnings", "q1", "q2"],
        ),
        CategoryRule::new(
            Category::ManagementUpdate,
            &["appoint", "ceo", "executive", "board of directors"],
        ),
        CategoryRule::new(
            Category::CommercializedDrugUpdate,
            &["launch", "commercial"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        let c = Categorizer::default();
        assert_eq!(c.categorize("FDA Approves New Treatment"), Category::RegulatoryApproval);
        assert_eq!(c.categorize("Positive Phase 3 Results"), Category::ClinicalTrialUpdate);
        assert_eq!(c.categorize("Company Declares Quarterly Dividend"), Category::FinancialNews);
        assert_eq!(c.categorize("Board Appoints New Chief Scientist"), Category::ManagementUpdate);
        assert_eq!(c.categorize("Company Launches Inhaler in Japan"), Category::CommercializedDrugUpdate);
        assert_eq!(c.categorize("Company to Host Webcast"), Category::Other);
    }

    #[test]
    fn test_priority_order() {
        let c = Categorizer::default();
        assert_eq!(
            c.categorize("FDA approval follows pivotal clinical trial"),
            Category::RegulatoryApproval
        );
        assert_eq!(
            c.categorize("CEO comments on Phase 2 study"),
            Category::ClinicalTrialUpdate
        );
        assert_eq!(
            c.categorize("Commercial launch drives Q2 earnings"),
            Category::FinancialNews
        );
    }

    #[test]
    fn test_substring_and_case() {
        let c = Categorizer::default();
        // "q1" is a plain substring match, it does not need word boundaries
        assert_eq!(c.categorize("Reports Q1 2025 Results"), Category::FinancialNews);
        assert_eq!(c.categorize("EXECUTIVE CHANGES"), Category::ManagementUpdate);
        assert_eq!(c.categorize(""), Category::Other);
    }

    #[test]
    fn test_always_one_of_six() {
        let c = Categorizer::default();
        for title in ["", "x", "Phase", "FDA", "dividend", "appointed", "launch", "???"] {
            assert!(Category::ALL.contains(&c.categorize(title)));
        }
    }

    #[test]
    fn test_body_is_ignored() {
        let c = Categorizer::default();
        assert_eq!(
            c.categorize_with_body("Company to Host Webcast", Some("FDA approval")),
            Category::Other
        );
    }

    #[test]
    fn test_custom_rules() {
        let c = Categorizer::new(vec![CategoryRule::new(Category::FinancialNews, &["Webcast"])]);
        assert_eq!(c.categorize("Company to Host Webcast"), Category::FinancialNews);
        assert_eq!(c.categorize("FDA Approves"), Category::Other);
    }
}
