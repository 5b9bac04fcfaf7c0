// File: crates/demo/src/main.rs
// Summary: Replays a CSV lifecycle script through the default hooks, writing one PNG per chart element.

mod script;

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use chart_hooks::{HookHost, HookRegistry, MemoryElement, POINTS_ATTR};
use chart_render_skia::{RenderOptions, SkiaChartFactory};
use tracing::info;
use tracing_subscriber::EnvFilter;

use script::{load_script, Lifecycle, ScriptEvent};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept script path and output dir from CLI, falling back to the bundled sample.
    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/replay.csv"));
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let events = load_script(&script_path)
        .with_context(|| format!("failed to load script '{}'", script_path.display()))?;
    println!("Loaded {} lifecycle events from {}", events.len(), script_path.display());

    let factory = Rc::new(SkiaChartFactory::new(RenderOptions::default().with_output_dir(&out_dir)));
    let mut host = HookHost::new(HookRegistry::with_defaults(factory));
    let mut elements: HashMap<String, MemoryElement> = HashMap::new();

    for event in &events {
        replay(&mut host, &mut elements, event);
    }

    println!("Live charts: {:?}", host.mounted_ids());
    println!("Frames written to {}", out_dir.display());
    host.destroy_all();
    Ok(())
}

fn replay(host: &mut HookHost, elements: &mut HashMap<String, MemoryElement>, event: &ScriptEvent) {
    info!(event = ?event.event, hook = %event.hook, element = %event.element, "replaying");
    match event.event {
        Lifecycle::Mounted => {
            let el = sync_element(elements, event);
            host.mount(&event.hook, el);
        }
        Lifecycle::Updated => {
            let el = sync_element(elements, event);
            host.update(el);
        }
        Lifecycle::Destroyed => {
            host.destroy(&event.element);
            elements.remove(&event.element);
        }
    }
}

/// Element for `event.element`, with its points attribute set to the event's payload.
fn sync_element<'a>(elements: &'a mut HashMap<String, MemoryElement>, event: &ScriptEvent) -> &'a MemoryElement {
    let el = elements
        .entry(event.element.clone())
        .or_insert_with(|| MemoryElement::canvas(event.element.clone(), CANVAS_WIDTH, CANVAS_HEIGHT));
    match &event.points {
        Some(raw) => el.set_points(raw.clone()),
        None => {
            el.remove_data(POINTS_ATTR);
        }
    }
    el
}
