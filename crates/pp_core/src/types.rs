use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One press release as it appears on a listing page, after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRelease {
    pub date: NaiveDate,
    pub company: String,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub category: Category,
}

impl PressRelease {
    /// Tags joined the way they appear in the spreadsheet column.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Regulatory Approval")]
    RegulatoryApproval,
    #[serde(rename = "Clinical Trial Update")]
    ClinicalTrialUpdate,
    #[serde(rename = "Financial News")]
    FinancialNews,
    #[serde(rename = "Management Update")]
    ManagementUpdate,
    #[serde(rename = "Commercialized Drug Update")]
    CommercializedDrugUpdate,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every label, in the order the categorizer tests them.
    pub const ALL: [Category; 6] = [
        Category::RegulatoryApproval,
        Category::ClinicalTrialUpdate,
        Category::FinancialNews,
        Category::ManagementUpdate,
        Category::CommercializedDrugUpdate,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::RegulatoryApproval => "Regulatory Approval",
            Category::ClinicalTrialUpdate => "Clinical Trial Update",
            Category::FinancialNews => "Financial News",
            Category::ManagementUpdate => "Management Update",
            Category::CommercializedDrugUpdate => "Commercialized Drug Update",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Describes a press-release source for logs, CLI selection and link resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    pub cli_name: &'static str,
    pub base_url: &'static str,
}

impl fmt::Display for SourceMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}
