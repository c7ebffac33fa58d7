pub type UnloadHandler = Box<dyn FnMut()>;

/// Source of the "page is being unloaded" signal
pub trait UnloadSource {
    /// Register `handler` to run whenever the page starts unloading.
    ///
    /// The handler stays registered for the rest of the page lifetime.
    fn on_unload(&mut self, handler: UnloadHandler);
}
