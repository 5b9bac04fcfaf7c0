// File: crates/chart-hooks/src/registry.rs
// Summary: Name -> hook definition mapping handed to the host runtime.

use std::collections::BTreeMap;
use std::rc::Rc;

use chart_core::{ChartFactory, PresentationConfig};
use tracing::warn;

use crate::hook::ChartHook;

/// Hook name for the Remaining/Spent/Pending doughnut.
pub const SEGMENTED_HOOK: &str = "ChartJSDoughnut";
/// Hook name for the quarterly bar chart.
pub const BUCKETED_HOOK: &str = "ChartJSBarChart";

/// Presentation plus backend; spawns one controller per bound element.
#[derive(Clone)]
pub struct HookDefinition {
    config: Rc<PresentationConfig>,
    factory: Rc<dyn ChartFactory>,
}

impl HookDefinition {
    pub fn new(config: PresentationConfig, factory: Rc<dyn ChartFactory>) -> Self {
        Self { config: Rc::new(config), factory }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Fresh, detached controller named `name`.
    pub fn spawn(&self, name: &str) -> ChartHook {
        ChartHook::new(name, Rc::clone(&self.config), Rc::clone(&self.factory))
    }
}

#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: BTreeMap<String, HookDefinition>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the segmented and bucketed hooks, both drawing through `factory`.
    pub fn with_defaults(factory: Rc<dyn ChartFactory>) -> Self {
        let mut registry = Self::new();
        registry.register(SEGMENTED_HOOK, HookDefinition::new(PresentationConfig::segmented(), Rc::clone(&factory)));
        registry.register(BUCKETED_HOOK, HookDefinition::new(PresentationConfig::bucketed(), factory));
        registry
    }

    /// Register `definition` under `name`, returning the definition it replaces.
    pub fn register(&mut self, name: impl Into<String>, definition: HookDefinition) -> Option<HookDefinition> {
        let name = name.into();
        let previous = self.hooks.insert(name.clone(), definition);
        if previous.is_some() {
            warn!(hook = %name, "hook registered twice, replacing previous definition");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&HookDefinition> {
        self.hooks.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Detached controller for the hook registered as `name`.
    pub fn spawn(&self, name: &str) -> Option<ChartHook> {
        self.get(name).map(|def| def.spawn(name))
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
