/// Key code for Enter.
pub const KEY_ENTER: u32 = 13;
/// Key code for Space.
pub const KEY_SPACE: u32 = 32;

/// Input events a loop can react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at surface coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// The host asked the loop to dismiss itself (no physical input).
    Dismiss,
}

impl InputEvent {
    /// Whether this event counts as a splash dismiss action
    /// (click, Enter, Space, or an explicit host request).
    pub fn is_dismiss(&self) -> bool {
        match self {
            InputEvent::PointerDown { .. } | InputEvent::Dismiss => true,
            InputEvent::KeyDown { key_code } => {
                *key_code == KEY_ENTER || *key_code == KEY_SPACE
            }
        }
    }
}

/// A queue of input events.
/// The host pushes events between frames; the runner drains them once a
/// fixed step has seen them. Events may carry the host time they happened at.
pub struct InputQueue {
    events: Vec<(InputEvent, Option<f64>)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push((event, None));
    }

    /// Push an event stamped with the host time (ms) it happened at.
    pub fn push_at(&mut self, event: InputEvent, at_ms: f64) {
        self.events.push((event, Some(at_ms)));
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
            .into_iter()
            .map(|(event, _)| event)
            .collect()
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter().map(|(event, _)| event)
    }

    /// Host time of the first pending dismiss, falling back to `now_ms`
    /// when that event was pushed without a timestamp.
    pub fn first_dismiss(&self, now_ms: f64) -> Option<f64> {
        self.events
            .iter()
            .find(|(event, _)| event.is_dismiss())
            .map(|(_, at)| at.unwrap_or(now_ms))
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: KEY_SPACE });
        assert_eq!(q.iter().count(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::KeyDown { key_code: KEY_SPACE });
        assert_eq!(q.iter().count(), 0);
    }

    #[test]
    fn first_dismiss_uses_event_time() {
        let mut q = InputQueue::new();
        assert_eq!(q.first_dismiss(50.0), None);

        q.push_at(InputEvent::KeyDown { key_code: 27 }, 10.0);
        assert_eq!(q.first_dismiss(50.0), None);

        q.push_at(InputEvent::PointerDown { x: 1.0, y: 1.0 }, 20.0);
        q.push_at(InputEvent::Dismiss, 30.0);
        assert_eq!(q.first_dismiss(50.0), Some(20.0));
    }

    #[test]
    fn untimed_dismiss_falls_back_to_now() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_ENTER });
        assert_eq!(q.first_dismiss(50.0), Some(50.0));
    }

    #[test]
    fn dismiss_keys() {
        assert!(InputEvent::PointerDown { x: 0.0, y: 0.0 }.is_dismiss());
        assert!(InputEvent::KeyDown { key_code: KEY_ENTER }.is_dismiss());
        assert!(InputEvent::KeyDown { key_code: KEY_SPACE }.is_dismiss());
        assert!(InputEvent::Dismiss.is_dismiss());
        // Escape
        assert!(!InputEvent::KeyDown { key_code: 27 }.is_dismiss());
    }
}
