// File: crates/chart-hooks/src/lib.rs
// Summary: Chart lifecycle hooks for host-managed elements: controller, registry and dispatcher.
// Notes:
// - DOM bindings live behind the `web` feature, so the workspace builds and tests
//   natively without fetching wasm crates.

pub mod element;
pub mod hook;
pub mod host;
pub mod registry;

#[cfg(feature = "web")]
pub mod web;

pub use element::{HookElement, MemoryElement, POINTS_ATTR};
pub use hook::{ChartHook, Hook, HookState};
pub use host::HookHost;
pub use registry::{HookDefinition, HookRegistry, BUCKETED_HOOK, SEGMENTED_HOOK};
