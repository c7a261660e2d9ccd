//! Controller registry
//!
//! One controller per host container, owned explicitly and keyed by the
//! host's identity. Also the fan-out point for environment lifecycle
//! signals, which replaces per-controller notification subscriptions:
//! controllers opt in while following and the registry forwards signals
//! only to subscribed ones.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use shybar_core::{LifecycleSignal, SharedChrome, SharedContainer};

use crate::controller::HeaderScrollController;

new_key_type! {
    /// Unique identifier for a registered controller
    pub struct ControllerId;
}

/// Identity of a host container, supplied by the embedding application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostId(pub u64);

/// Owns the controllers of all live host containers.
pub struct ControllerRegistry {
    controllers: SlotMap<ControllerId, HeaderScrollController>,
    by_host: FxHashMap<HostId, ControllerId>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self {
            controllers: SlotMap::with_key(),
            by_host: FxHashMap::default(),
        }
    }

    /// Controller for a host, created lazily on first use.
    pub fn controller_for(
        &mut self,
        host: HostId,
        chrome: &SharedChrome,
        container: &SharedContainer,
    ) -> &mut HeaderScrollController {
        let id = match self.by_host.get(&host) {
            Some(&id) => id,
            None => {
                let id = self
                    .controllers
                    .insert(HeaderScrollController::new(chrome, container));
                self.by_host.insert(host, id);
                id
            }
        };
        &mut self.controllers[id]
    }

    pub fn get(&self, host: HostId) -> Option<&HeaderScrollController> {
        self.by_host
            .get(&host)
            .and_then(|&id| self.controllers.get(id))
    }

    pub fn get_mut(&mut self, host: HostId) -> Option<&mut HeaderScrollController> {
        self.by_host
            .get(&host)
            .and_then(|&id| self.controllers.get_mut(id))
    }

    /// Tear down a host's controller (restoring the header) and drop it.
    ///
    /// Returns false if the host had no controller.
    pub fn remove(&mut self, host: HostId) -> bool {
        let Some(id) = self.by_host.remove(&host) else {
            return false;
        };
        if let Some(mut controller) = self.controllers.remove(id) {
            controller.stop_following(true);
        }
        true
    }

    /// Forward an environment signal; subscribed controllers force their
    /// headers fully visible.
    pub fn dispatch_lifecycle(&mut self, signal: LifecycleSignal) {
        for (_, controller) in self.controllers.iter_mut() {
            controller.handle_lifecycle(signal);
        }
    }

    /// Advance every in-flight snap animation.
    ///
    /// Returns true while any controller is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;
        for (_, controller) in self.controllers.iter_mut() {
            animating |= controller.tick(dt);
        }
        animating
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
