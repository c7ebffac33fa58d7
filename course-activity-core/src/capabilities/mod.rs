//! Browser facilities the recorder needs, as injectable traits.

mod clock;
mod spawner;
mod transport;
mod unload;

use std::rc::Rc;

pub use clock::{Clock, InstantClock};
pub use spawner::Spawner;
pub use transport::{BeaconRequest, Transport, TransportError, JSON_CONTENT_TYPE};
pub use unload::{UnloadHandler, UnloadSource};

/// Everything a recorder runs on, except the unload source which is only
/// needed at registration time
#[derive(Clone)]
pub struct Capabilities {
    pub clock: Rc<dyn Clock>,
    pub transport: Rc<dyn Transport>,
    pub spawner: Rc<dyn Spawner>,
}

impl Capabilities {
    pub fn new(
        clock: Rc<dyn Clock>,
        transport: Rc<dyn Transport>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        Self {
            clock,
            transport,
            spawner,
        }
    }
}
