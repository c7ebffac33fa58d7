use futures::future::LocalBoxFuture;

/// Runs a task to completion in the background without the caller awaiting it
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
