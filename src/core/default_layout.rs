//! Default screen layout for configurations that define no screens.
//!
//! Modules are chunked in host order, four per screen. With no modules at all
//! a single empty "Home" screen is produced so the registry is never empty.

use crate::data::{ModuleInfo, ScreenDefinition};

pub const MODULES_PER_SCREEN: usize = 4;

pub fn generate_default_screens(modules: &[ModuleInfo]) -> Vec<ScreenDefinition> {
    let mut screens: Vec<ScreenDefinition> = modules
        .chunks(MODULES_PER_SCREEN)
        .enumerate()
        .map(|(i, chunk)| {
            ScreenDefinition::new(
                format!("Screen {}", i + 1),
                chunk.iter().map(|m| m.name.clone()).collect(),
            )
        })
        .collect();

    if screens.is_empty() {
        screens.push(ScreenDefinition::new("Home", Vec::new()));
    }

    screens
}
