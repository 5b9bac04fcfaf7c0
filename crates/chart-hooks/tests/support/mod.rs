// File: crates/chart-hooks/tests/support/mod.rs
// Purpose: Recording chart backend and log capture shared by the hook tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chart_core::{CanvasContext, ChartFactory, ChartHandle, PresentationConfig, RenderError, SeriesData};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Arguments of one `create` call.
#[derive(Clone, Debug)]
pub struct Created {
    pub id: usize,
    pub element_id: String,
    pub type_tag: &'static str,
    pub labels: Vec<&'static str>,
    pub data: SeriesData,
}

#[derive(Debug, Default)]
pub struct Record {
    pub created: Vec<Created>,
    pub destroyed: Vec<usize>,
    /// (handle id, series at redraw time)
    pub redraws: Vec<(usize, SeriesData)>,
}

impl Record {
    /// Handles created and not yet destroyed.
    pub fn live(&self) -> Vec<usize> {
        self.created
            .iter()
            .map(|c| c.id)
            .filter(|id| !self.destroyed.contains(id))
            .collect()
    }
}

/// Backend that records every call and can be told to fail.
#[derive(Default)]
pub struct MockFactory {
    pub record: Rc<RefCell<Record>>,
    pub fail_create: Cell<bool>,
    pub fail_redraw: Rc<Cell<bool>>,
    pub fail_destroy: Rc<Cell<bool>>,
}

impl MockFactory {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn created(&self) -> usize {
        self.record.borrow().created.len()
    }

    pub fn live(&self) -> Vec<usize> {
        self.record.borrow().live()
    }

    pub fn last_created(&self) -> Option<Created> {
        self.record.borrow().created.last().cloned()
    }

    pub fn last_redraw(&self) -> Option<(usize, SeriesData)> {
        self.record.borrow().redraws.last().cloned()
    }
}

impl ChartFactory for MockFactory {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn create(
        &self,
        ctx: CanvasContext,
        config: &PresentationConfig,
        data: &SeriesData,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        if self.fail_create.get() {
            return Err(RenderError::Backend("create refused".into()));
        }
        let mut record = self.record.borrow_mut();
        let id = record.created.len() + 1;
        record.created.push(Created {
            id,
            element_id: ctx.element_id,
            type_tag: config.type_tag(),
            labels: config.labels().to_vec(),
            data: data.clone(),
        });
        Ok(Box::new(MockHandle {
            id,
            data: data.clone(),
            record: Rc::clone(&self.record),
            fail_redraw: Rc::clone(&self.fail_redraw),
            fail_destroy: Rc::clone(&self.fail_destroy),
        }))
    }
}

pub struct MockHandle {
    id: usize,
    data: SeriesData,
    record: Rc<RefCell<Record>>,
    fail_redraw: Rc<Cell<bool>>,
    fail_destroy: Rc<Cell<bool>>,
}

impl ChartHandle for MockHandle {
    fn set_data(&mut self, data: SeriesData) {
        self.data = data;
    }

    fn data(&self) -> &SeriesData {
        &self.data
    }

    fn redraw(&mut self) -> Result<(), RenderError> {
        if self.fail_redraw.get() {
            return Err(RenderError::Backend("redraw refused".into()));
        }
        self.record.borrow_mut().redraws.push((self.id, self.data.clone()));
        Ok(())
    }

    fn destroy(self: Box<Self>) -> Result<(), RenderError> {
        self.record.borrow_mut().destroyed.push(self.id);
        if self.fail_destroy.get() {
            return Err(RenderError::Backend("destroy refused".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct LevelCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        } else if level == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Log events emitted while running a closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logged {
    pub errors: usize,
    pub warnings: usize,
}

pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Logged) {
    let counter = LevelCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let logged = Logged {
        errors: counter.errors.load(Ordering::SeqCst),
        warnings: counter.warnings.load(Ordering::SeqCst),
    };
    (out, logged)
}
