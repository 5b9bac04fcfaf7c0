// File: crates/chart-hooks/src/host.rs
// Summary: Minimal host-side dispatcher routing lifecycle events to per-element hooks by name.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::element::HookElement;
use crate::hook::{ChartHook, Hook};
use crate::registry::HookRegistry;

/// Tracks one live hook per element id and dispatches mount/update/destroy to it.
pub struct HookHost {
    registry: HookRegistry,
    mounted: HashMap<String, ChartHook>,
}

impl HookHost {
    pub fn new(registry: HookRegistry) -> Self {
        Self { registry, mounted: HashMap::new() }
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Bind `element` to the hook registered as `hook_name` and mount it.
    /// Remounting an id re-attaches its existing hook when the name matches.
    /// Returns `false` for unknown hook names.
    pub fn mount(&mut self, hook_name: &str, element: &dyn HookElement) -> bool {
        let id = element.id();
        if let Some(hook) = self.mounted.get_mut(id) {
            if hook.name() == hook_name {
                hook.mounted(Some(element));
                return true;
            }
        }

        let Some(mut hook) = self.registry.spawn(hook_name) else {
            warn!(hook = hook_name, element = id, "unknown hook, element left unbound");
            return false;
        };
        if let Some(mut old) = self.mounted.remove(id) {
            debug!(hook = old.name(), element = id, "element rebound to another hook");
            old.destroyed();
        }
        hook.mounted(Some(element));
        self.mounted.insert(id.to_string(), hook);
        true
    }

    /// Dispatch an attribute change. Returns `false` when the element is not bound.
    pub fn update(&mut self, element: &dyn HookElement) -> bool {
        match self.mounted.get_mut(element.id()) {
            Some(hook) => {
                hook.updated(element);
                true
            }
            None => {
                debug!(element = element.id(), "update for unbound element ignored");
                false
            }
        }
    }

    /// Tear down the hook bound to `element_id`. Returns `false` when nothing was bound.
    pub fn destroy(&mut self, element_id: &str) -> bool {
        match self.mounted.remove(element_id) {
            Some(mut hook) => {
                hook.destroyed();
                true
            }
            None => false,
        }
    }

    /// Hook bound to `element_id`, if any.
    pub fn hook(&self, element_id: &str) -> Option<&ChartHook> {
        self.mounted.get(element_id)
    }

    /// Bound element ids, sorted.
    pub fn mounted_ids(&self) -> Vec<&str> {
        let mut ids = self.mounted.keys().map(String::as_str).collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Destroy every bound hook.
    pub fn destroy_all(&mut self) {
        for (_, mut hook) in self.mounted.drain() {
            hook.destroyed();
        }
    }
}
