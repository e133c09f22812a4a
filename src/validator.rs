use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;
use crate::data::ALL_MODULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind { Error, Warning }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Screen, module or setting the issue is about
    pub subject: String,
    pub message: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ConfigIssue>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.kind == IssueKind::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.kind == IssueKind::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.kind == IssueKind::Warning)
    }
}

fn check_pager_settings(config: &Config) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let pager = &config.pager;

    if pager.swipe_threshold.is_nan() || pager.swipe_threshold <= 0.0 {
        issues.push(ConfigIssue { subject: "swipe_threshold".into(), message: format!("must be positive, got {}", pager.swipe_threshold), kind: IssueKind::Error });
    }
    if pager.auto_rotate && pager.auto_rotate_delay == 0 {
        issues.push(ConfigIssue { subject: "auto_rotate_delay".into(), message: "must be non-zero when auto_rotate is on".into(), kind: IssueKind::Error });
    }

    issues
}

fn check_screens(config: &Config) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let modules = &config.modules;

    // Every name, tag and position a selector could match
    let mut selectors: HashSet<&str> = HashSet::new();
    for m in modules {
        selectors.insert(m.name.as_str());
        selectors.extend(m.tags.iter().map(String::as_str));
        if let Some(pos) = m.position.as_deref() { selectors.insert(pos); }
    }

    let mut seen = HashSet::new();
    for screen in &config.pager.screens {
        if !seen.insert(screen.name.as_str()) {
            issues.push(ConfigIssue { subject: screen.name.clone(), message: "duplicate screen name".into(), kind: IssueKind::Warning });
        }
        if screen.members.is_empty() {
            issues.push(ConfigIssue { subject: screen.name.clone(), message: "screen has no modules and will always be empty".into(), kind: IssueKind::Warning });
        }
        for member in &screen.members {
            if member == ALL_MODULES { continue; }
            if !selectors.contains(member.as_str()) {
                issues.push(ConfigIssue { subject: screen.name.clone(), message: format!("'{}' matches no module name, tag or position", member), kind: IssueKind::Warning });
            }
        }
    }

    issues
}

fn check_modules(config: &Config) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for m in &config.modules {
        if !seen.insert(m.name.as_str()) && reported.insert(m.name.as_str()) {
            issues.push(ConfigIssue { subject: m.name.clone(), message: "duplicate module name".into(), kind: IssueKind::Warning });
        }
    }

    issues
}

pub fn validate(config: &Config) -> ValidationResult {
    let mut issues = check_pager_settings(config);
    issues.extend(check_screens(config));
    issues.extend(check_modules(config));
    ValidationResult { issues }
}

pub fn validate_config_path(path: &Path) -> Result<(Config, ValidationResult)> {
    let config = Config::load_from_path(path, None)?;
    let result = validate(&config);
    Ok((config, result))
}
