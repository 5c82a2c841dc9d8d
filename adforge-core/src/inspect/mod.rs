//! Fact extraction from a design snapshot.

mod extract;
mod readability;

pub use extract::{dominant_color, extract_colors, extract_fonts};
pub use readability::{contrast_issues, hierarchy_report, ContrastIssue, HierarchyReport};

use serde::Serialize;

use crate::config::RuleConfig;
use crate::model::Design;

/// Everything the consistency rules need, gathered in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFacts {
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub contrast_issues: Vec<ContrastIssue>,
    pub hierarchy: HierarchyReport,
}

/// Inspect a design with the thresholds and scope from `config`.
pub fn inspect_design(design: &Design, config: &RuleConfig) -> DesignFacts {
    DesignFacts {
        colors: extract_colors(design, config.scope),
        fonts: extract_fonts(design, config.scope),
        contrast_issues: contrast_issues(design, config.scope, config.min_contrast),
        hierarchy: hierarchy_report(design, config.scope, config.min_hierarchy_range),
    }
}
