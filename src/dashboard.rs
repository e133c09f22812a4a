//! Terminal dashboard host
//!
//! Owns the module set loaded from `[[modules]]` and lends it to the pager
//! through [`ModuleRegistry`]. Show/hide requests address a module by its
//! host-order slot and start a fade transition the renderer reads back
//! through [`DashboardModule::opacity`].

use crate::config::{Config, ModuleDef};
use crate::core::ModuleRegistry;
use crate::data::ModuleInfo;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Module names that render live content instead of their `text`
const CLOCK_MODULE: &str = "clock";

/// Fade in or out started by a show/hide request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub started: Instant,
    pub duration: Duration,
    pub showing: bool,
}

impl Transition {
    /// Fraction complete in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardModule {
    pub def: ModuleDef,
    pub hidden: bool,
    pub transition: Option<Transition>,
}

impl DashboardModule {
    fn new(def: ModuleDef) -> Self {
        Self {
            def,
            hidden: false,
            transition: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// 1.0 fully shown, 0.0 fully hidden
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.transition {
            Some(t) if t.showing => t.progress(now),
            Some(t) => 1.0 - t.progress(now),
            None if self.hidden => 0.0,
            None => 1.0,
        }
    }

    /// Lines to draw inside the module's panel
    pub fn body(&self, now: DateTime<Local>) -> Vec<String> {
        if self.def.name == CLOCK_MODULE && self.def.text.is_none() {
            return vec![
                now.format("%H:%M:%S").to_string(),
                now.format("%A, %B %-d").to_string(),
            ];
        }

        match &self.def.text {
            Some(text) => text.lines().map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    fn set_hidden(&mut self, hidden: bool, duration: Duration) {
        self.hidden = hidden;
        self.transition = Some(Transition {
            started: Instant::now(),
            duration,
            showing: !hidden,
        });
    }
}

/// The host's module set
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    modules: Vec<DashboardModule>,
}

impl Dashboard {
    pub fn new(defs: Vec<ModuleDef>) -> Self {
        Self {
            modules: defs.into_iter().map(DashboardModule::new).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        tracing::info!("Loaded {} dashboard modules", config.modules.len());
        Self::new(config.modules.clone())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module at a host-order slot
    pub fn get(&self, slot: usize) -> Option<&DashboardModule> {
        self.modules.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DashboardModule> {
        self.modules.iter()
    }

    /// Drop transitions that have run to completion
    pub fn settle(&mut self, now: Instant) {
        for module in &mut self.modules {
            if module.transition.is_some_and(|t| t.progress(now) >= 1.0) {
                module.transition = None;
            }
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.modules.iter().any(|m| m.transition.is_some())
    }

    fn apply(&mut self, slot: usize, hidden: bool, duration: Duration) {
        match self.modules.get_mut(slot) {
            Some(module) if module.hidden != hidden => module.set_hidden(hidden, duration),
            Some(_) => {}
            None => tracing::warn!("Visibility request for unknown module slot {}", slot),
        }
    }
}

impl ModuleRegistry for Dashboard {
    fn modules(&self) -> Vec<ModuleInfo> {
        self.modules
            .iter()
            .map(|m| ModuleInfo {
                hidden: m.hidden,
                ..m.def.info()
            })
            .collect()
    }

    fn show_module(&mut self, slot: usize, duration: Duration) {
        self.apply(slot, false, duration);
    }

    fn hide_module(&mut self, slot: usize, duration: Duration) {
        self.apply(slot, true, duration);
    }
}
