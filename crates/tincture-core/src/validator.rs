// ABOUTME: Palette validation sweep that flags colors unsuitable for large surfaces
// ABOUTME: Walks every scale and shade in a fixed order and collects advisory issues

use crate::config::{EngineConfig, ValidationRules};
use crate::tone::ToneClassifier;
use serde::Serialize;
use std::fmt;
use tincture_logging::{PerfTimer, debug, info, trace};
use tincture_types::{Color, ColorScale, Palette, ScaleId, ShadeKey};

/// The shade tier that is allowed to be very dark
pub const DARK_AREA_EXEMPT_SHADE: ShadeKey = ShadeKey::S950;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    PureBlack,
    TooDarkForLargeAreas,
}

/// Position of a finding: `primary.500`, `semantic.success.500`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueLocator {
    pub scale: ScaleId,
    pub shade: ShadeKey,
}

impl fmt::Display for IssueLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.scale, self.shade)
    }
}

impl Serialize for IssueLocator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub locator: IssueLocator,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    fn new(locator: IssueLocator, kind: IssueKind) -> Self {
        let message = match kind {
            IssueKind::PureBlack => format!("Pure black detected in {locator}"),
            IssueKind::TooDarkForLargeAreas => {
                format!("Very dark color in {locator} may not be suitable for large areas")
            }
        };
        Self {
            locator,
            kind,
            message,
        }
    }
}

/// Outcome of one validation sweep. Issues are in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    pub fn issues_for_scale(&self, scale: ScaleId) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.locator.scale == scale)
    }

    pub fn issues_of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    pub fn summary(&self) -> String {
        format!(
            "Palette validation: {} | {} issues ({} pure black, {} too dark for large areas)",
            if self.is_valid { "PASS" } else { "FAIL" },
            self.issues.len(),
            self.issues_of_kind(IssueKind::PureBlack).count(),
            self.issues_of_kind(IssueKind::TooDarkForLargeAreas).count(),
        )
    }
}

/// Sweeps a palette with a [`ToneClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteValidator {
    classifier: ToneClassifier,
    rules: ValidationRules,
}

impl PaletteValidator {
    pub fn new(classifier: ToneClassifier, rules: ValidationRules) -> Self {
        Self { classifier, rules }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(ToneClassifier::from_config(&config.tone), config.validation)
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn configure_rules<F>(&mut self, configurator: F)
    where
        F: FnOnce(&mut ValidationRules),
    {
        configurator(&mut self.rules);
    }

    /// Check every shade of every scale.
    ///
    /// Order: primary, secondary, neutral, then the semantic roles (success,
    /// warning, error, info), each scale from 50 to 950. A pure-black shade
    /// yields a single `PureBlack` issue, even at the exempt shade.
    pub fn validate(&self, palette: &Palette) -> ValidationReport {
        let timer = PerfTimer::new("palette_validation");
        let _guard = timer.span().enter();

        debug!(
            dark_area_threshold = self.classifier.dark_area_threshold(),
            exempt_shade = %self.rules.dark_area_exempt_shade,
            "Starting palette validation"
        );

        let mut issues = Vec::new();
        for (id, scale) in palette.scales() {
            self.check_scale(id, scale, &mut issues);
        }

        let report = ValidationReport::from_issues(issues);
        info!(
            is_valid = report.is_valid,
            issues_count = report.issues.len(),
            "Palette validation completed"
        );
        report
    }

    fn check_scale(&self, id: ScaleId, scale: &ColorScale, issues: &mut Vec<ValidationIssue>) {
        for (shade, color) in scale.iter() {
            let locator = IssueLocator { scale: id, shade };
            if let Some(kind) = self.classify(shade, color) {
                let issue = ValidationIssue::new(locator, kind);
                trace!(locator = %issue.locator, kind = ?issue.kind, "Palette issue found");
                issues.push(issue);
            }
        }
    }

    fn classify(&self, shade: ShadeKey, color: Color) -> Option<IssueKind> {
        if self.rules.check_pure_black && self.classifier.is_pure_black(color) {
            return Some(IssueKind::PureBlack);
        }

        let flag_dark = self.rules.check_dark_areas
            && shade != self.rules.dark_area_exempt_shade
            && self.classifier.is_too_dark_for_large_areas(color);
        flag_dark.then_some(IssueKind::TooDarkForLargeAreas)
    }
}
