/// Screen-space input listeners.
///
/// Any number of listeners may be registered per event type. The host
/// forwards raw input through [`EventEmitter::emit`]; listeners run in
/// registration order.

use glam::DVec2;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

/// Screen-space input event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEventType {
    LeftDown,
    LeftUp,
    Click,
    DoubleClick,
    RightDown,
    RightUp,
    RightClick,
    MiddleDown,
    MiddleUp,
    MiddleClick,
    MouseMove,
    Wheel,
    PinchStart,
    PinchEnd,
    PinchMove,
}

impl ScreenEventType {
    pub const ALL: [ScreenEventType; 15] = [
        ScreenEventType::LeftDown,
        ScreenEventType::LeftUp,
        ScreenEventType::Click,
        ScreenEventType::DoubleClick,
        ScreenEventType::RightDown,
        ScreenEventType::RightUp,
        ScreenEventType::RightClick,
        ScreenEventType::MiddleDown,
        ScreenEventType::MiddleUp,
        ScreenEventType::MiddleClick,
        ScreenEventType::MouseMove,
        ScreenEventType::Wheel,
        ScreenEventType::PinchStart,
        ScreenEventType::PinchEnd,
        ScreenEventType::PinchMove,
    ];

    /// Short event name (`"click"`, `"dblclick"`, `"mousemove"`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            ScreenEventType::LeftDown => "leftdown",
            ScreenEventType::LeftUp => "leftup",
            ScreenEventType::Click => "click",
            ScreenEventType::DoubleClick => "dblclick",
            ScreenEventType::RightDown => "rightdown",
            ScreenEventType::RightUp => "rightup",
            ScreenEventType::RightClick => "rightclick",
            ScreenEventType::MiddleDown => "middledown",
            ScreenEventType::MiddleUp => "middleup",
            ScreenEventType::MiddleClick => "middleclick",
            ScreenEventType::MouseMove => "mousemove",
            ScreenEventType::Wheel => "wheel",
            ScreenEventType::PinchStart => "pinchstart",
            ScreenEventType::PinchEnd => "pinchend",
            ScreenEventType::PinchMove => "pinchmove",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.name() == name)
    }
}

/// Payload passed to listeners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenEvent {
    /// Pointer position in window pixels
    pub position: Option<DVec2>,
    /// End position for move and pinch events
    pub end_position: Option<DVec2>,
    /// Wheel delta for wheel events
    pub delta: Option<f64>,
}

type Listener = Box<dyn FnMut(&ScreenEvent) + Send>;

#[derive(Default)]
pub struct EventEmitter {
    listeners: SlotMap<ListenerId, Listener>,
    /// Registration order per event type
    subscriptions: FxHashMap<ScreenEventType, Vec<ListenerId>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`
    pub fn on<F>(&mut self, event: ScreenEventType, listener: F) -> ListenerId
    where
        F: FnMut(&ScreenEvent) + Send + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        self.subscriptions.entry(event).or_default().push(id);
        id
    }

    /// Remove one listener of `event`, or all of them when `listener` is `None`
    ///
    /// Returns false if nothing was removed.
    pub fn off(&mut self, event: ScreenEventType, listener: Option<ListenerId>) -> bool {
        match listener {
            Some(id) => {
                let Some(ids) = self.subscriptions.get_mut(&event) else {
                    return false;
                };
                let Some(index) = ids.iter().position(|other| *other == id) else {
                    return false;
                };
                ids.remove(index);
                if ids.is_empty() {
                    self.subscriptions.remove(&event);
                }
                self.listeners.remove(id);
                true
            }
            None => match self.subscriptions.remove(&event) {
                Some(ids) => {
                    for id in ids {
                        self.listeners.remove(id);
                    }
                    true
                }
                None => false,
            },
        }
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.subscriptions.clear();
    }

    /// Call every listener of `event` in registration order
    ///
    /// Returns the number of listeners called.
    pub fn emit(&mut self, event: ScreenEventType, payload: &ScreenEvent) -> usize {
        let Some(ids) = self.subscriptions.get(&event) else {
            return 0;
        };
        let mut called = 0;
        for id in ids {
            if let Some(listener) = self.listeners.get_mut(*id) {
                listener(payload);
                called += 1;
            }
        }
        called
    }

    pub fn listener_count(&self, event: ScreenEventType) -> usize {
        self.subscriptions.get(&event).map_or(0, Vec::len)
    }

    /// Event types with at least one listener (the inputs a host must forward)
    pub fn subscribed(&self) -> Vec<ScreenEventType> {
        ScreenEventType::ALL
            .iter()
            .copied()
            .filter(|event| self.subscriptions.contains_key(event))
            .collect()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
