#![allow(dead_code)]

use async_trait::async_trait;
use course_activity_core::capabilities::UnloadHandler;
use course_activity_core::{
    BeaconRequest, Capabilities, Clock, Spawner, Timestamp, Transport, TransportError,
    UnloadSource,
};
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::layer::{Context, Layer};

/// Clock the test moves by hand
#[derive(Default)]
pub struct FakeClock {
    millis: Cell<u64>,
}

impl FakeClock {
    pub fn at(millis: u64) -> Rc<Self> {
        Rc::new(Self {
            millis: Cell::new(millis),
        })
    }

    pub fn advance_millis(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.get())
    }
}

/// Transport that records every request and optionally rejects them
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<BeaconRequest>>,
    reject_with: Option<String>,
}

impl RecordingTransport {
    pub fn accepting() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn rejecting(reason: &str) -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::default(),
            reject_with: Some(reason.to_string()),
        })
    }

    pub fn requests(&self) -> Vec<BeaconRequest> {
        self.requests.borrow().clone()
    }

    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.requests
            .borrow()
            .iter()
            .map(|r| serde_json::from_str(&r.body).expect("body is JSON"))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn post(&self, request: BeaconRequest) -> Result<(), TransportError> {
        self.requests.borrow_mut().push(request);
        match &self.reject_with {
            Some(reason) => Err(TransportError::SendFailed(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Spawns onto a `LocalPool` the test drives explicitly
pub struct PoolSpawner(LocalSpawner);

impl Spawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("pool is alive");
    }
}

/// Unload source fired by the test
#[derive(Default)]
pub struct ManualUnload {
    handlers: Vec<UnloadHandler>,
}

impl ManualUnload {
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn fire(&mut self) {
        for handler in self.handlers.iter_mut() {
            handler();
        }
    }
}

impl UnloadSource for ManualUnload {
    fn on_unload(&mut self, handler: UnloadHandler) {
        self.handlers.push(handler);
    }
}

/// One simulated page load
pub struct Harness {
    pub clock: Rc<FakeClock>,
    pub transport: Rc<RecordingTransport>,
    pub unload: ManualUnload,
    pub pool: LocalPool,
}

impl Harness {
    pub fn new(transport: Rc<RecordingTransport>) -> Self {
        Self {
            clock: FakeClock::at(1_700_000_000_000),
            transport,
            unload: ManualUnload::default(),
            pool: LocalPool::new(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::new(
            self.clock.clone(),
            self.transport.clone(),
            Rc::new(PoolSpawner(self.pool.spawner())),
        )
    }

    /// Fire unload and let spawned sends finish
    pub fn unload_and_settle(&mut self) {
        self.unload.fire();
        self.pool.run_until_stalled();
    }
}

/// Counts error-level events
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
