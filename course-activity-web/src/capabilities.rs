use async_trait::async_trait;
use course_activity_core::capabilities::UnloadHandler;
use course_activity_core::{BeaconRequest, Spawner, Transport, TransportError, UnloadSource};
use futures::future::LocalBoxFuture;
use gloo::events::EventListener;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;

/// `fetch` through gloo-net
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: BeaconRequest) -> Result<(), TransportError> {
        let pending = Request::post(&request.path)
            .header("Content-Type", request.content_type)
            .body(request.body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = pending
            .send()
            .await
            .map_err(|e| TransportError::SendFailed(e.to_string()))?;

        tracing::trace!(status = response.status(), "Beacon response ignored");
        Ok(())
    }
}

/// Spawns onto the browser microtask queue
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

/// `beforeunload` on the window
pub struct BeforeUnload {
    window: Window,
}

impl BeforeUnload {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl UnloadSource for BeforeUnload {
    fn on_unload(&mut self, mut handler: UnloadHandler) {
        EventListener::new(&self.window, "beforeunload", move |_| handler()).forget();
    }
}
