//! Maps the active screen onto module visibility.

use crate::core::host::ModuleRegistry;
use crate::data::{ModuleInfo, ScreenDefinition, ALL_MODULES};
use std::time::Duration;

/// Whether `module` belongs to `screen`.
///
/// Matches on the `"all"` wildcard, then name, then any tag, then position.
/// A screen without members owns nothing.
pub fn is_member(module: &ModuleInfo, screen: &ScreenDefinition) -> bool {
    if screen.members.is_empty() {
        return false;
    }

    if screen.has_member(ALL_MODULES) || screen.has_member(&module.name) {
        return true;
    }

    if module.tags.iter().any(|tag| screen.has_member(tag)) {
        return true;
    }

    module
        .position
        .as_deref()
        .map(|position| screen.has_member(position))
        .unwrap_or(false)
}

/// Counts of host requests issued by one sync pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    pub shown: usize,
    pub hidden: usize,
}

/// Show members of `screen` that are hidden and hide visible non-members.
///
/// Modules already in the desired state are left alone.
pub fn sync_visibility(
    screen: &ScreenDefinition,
    modules: &mut dyn ModuleRegistry,
    duration: Duration,
) -> VisibilityReport {
    let mut report = VisibilityReport::default();

    for (slot, module) in modules.modules().into_iter().enumerate() {
        let should_show = is_member(&module, screen);

        if should_show && module.hidden {
            modules.show_module(slot, duration);
            tracing::info!("Showed module {} (slot {})", module.name, slot);
            report.shown += 1;
        } else if !should_show && !module.hidden {
            modules.hide_module(slot, duration);
            tracing::info!("Hid module {} (slot {})", module.name, slot);
            report.hidden += 1;
        }
    }

    report
}
