use crate::assets::catalog::BodyFilter;

/// `KeyDown` code that closes whichever modal is open.
pub const KEY_ESCAPE: u32 = 27;

// Custom event kinds sent by the control panel and info panels.
pub const CUSTOM_ADJUST_SPEED: u32 = 1;
pub const CUSTOM_ADJUST_ZOOM: u32 = 2;
pub const CUSTOM_RESET_VIEW: u32 = 3;
pub const CUSTOM_SET_SCALE: u32 = 4;
pub const CUSTOM_SET_FILTER: u32 = 5;
pub const CUSTOM_OPEN_DETAILS: u32 = 6;
pub const CUSTOM_BACK: u32 = 7;
pub const CUSTOM_CLOSE_MODAL: u32 = 8;
pub const CUSTOM_SELECT_SATELLITE: u32 = 9;
pub const CUSTOM_ORBIT_CAMERA: u32 = 10;
pub const CUSTOM_RESIZE: u32 = 99;

/// A UI command, decoded from a `Custom` event or pushed directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Change the rotation multiplier by this many speed steps (sign = direction).
    AdjustSpeed(f32),
    /// Zoom by this many zoom steps; positive moves the camera closer.
    AdjustZoom(f32),
    ResetView,
    SetProportionalScale(bool),
    SetFilter(BodyFilter),
    /// "View details" on the open body modal.
    OpenDetails,
    Back,
    CloseModal,
    /// Select a satellite by position in the full satellite list.
    SelectSatellite(usize),
    /// Rotate the camera around the scope center, in radians.
    OrbitCamera { yaw: f32, pitch: f32 },
    Resize { width: f32, height: f32 },
}

impl Command {
    /// Decode a custom event. Unknown kinds and malformed arguments yield `None`.
    pub fn from_custom(kind: u32, a: f32, b: f32, _c: f32) -> Option<Self> {
        match kind {
            CUSTOM_ADJUST_SPEED => a.is_finite().then_some(Command::AdjustSpeed(a)),
            CUSTOM_ADJUST_ZOOM => a.is_finite().then_some(Command::AdjustZoom(a)),
            CUSTOM_RESET_VIEW => Some(Command::ResetView),
            CUSTOM_SET_SCALE => Some(Command::SetProportionalScale(a > 0.5)),
            CUSTOM_SET_FILTER => index_arg(a)
                .and_then(BodyFilter::from_index)
                .map(Command::SetFilter),
            CUSTOM_OPEN_DETAILS => Some(Command::OpenDetails),
            CUSTOM_BACK => Some(Command::Back),
            CUSTOM_CLOSE_MODAL => Some(Command::CloseModal),
            CUSTOM_SELECT_SATELLITE => index_arg(a).map(Command::SelectSatellite),
            CUSTOM_ORBIT_CAMERA if a.is_finite() && b.is_finite() => {
                Some(Command::OrbitCamera { yaw: a, pitch: b })
            }
            CUSTOM_RESIZE => Some(Command::Resize { width: a, height: b }),
            _ => None,
        }
    }
}

fn index_arg(a: f32) -> Option<usize> {
    (a.is_finite() && a >= 0.0).then(|| a as usize)
}

/// Input event types the orrery understands.
/// Pointer coordinates are normalized device coordinates (x right, y up, [-1, 1]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// The pointer left the canvas; clears hover.
    PointerLeave,
    /// Mouse wheel; only the sign of `delta_y` matters (positive = zoom out).
    Wheel { delta_y: f32 },
    KeyDown { key_code: u32 },
    Command(Command),
    /// A custom event from the UI layer, decoded with `Command::from_custom`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// The command carried by this event, if any.
    pub fn command(&self) -> Option<Command> {
        match *self {
            InputEvent::Command(cmd) => Some(cmd),
            InputEvent::Custom { kind, a, b, c } => Command::from_custom(kind, a, b, c),
            _ => None,
        }
    }
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
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
        q.push(InputEvent::PointerDown { x: 0.1, y: 0.2 });
        q.push(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_events_decode_to_commands() {
        assert_eq!(
            Command::from_custom(CUSTOM_ADJUST_SPEED, -1.0, 0.0, 0.0),
            Some(Command::AdjustSpeed(-1.0))
        );
        assert_eq!(
            Command::from_custom(CUSTOM_SET_FILTER, 2.0, 0.0, 0.0),
            Some(Command::SetFilter(BodyFilter::GasGiants))
        );
        assert_eq!(
            Command::from_custom(CUSTOM_SET_SCALE, 1.0, 0.0, 0.0),
            Some(Command::SetProportionalScale(true))
        );
        assert_eq!(
            Command::from_custom(CUSTOM_SELECT_SATELLITE, 12.0, 0.0, 0.0),
            Some(Command::SelectSatellite(12))
        );
        assert_eq!(
            Command::from_custom(CUSTOM_RESIZE, 800.0, 600.0, 0.0),
            Some(Command::Resize { width: 800.0, height: 600.0 })
        );
    }

    #[test]
    fn malformed_custom_events_are_dropped() {
        assert_eq!(Command::from_custom(1234, 0.0, 0.0, 0.0), None);
        assert_eq!(Command::from_custom(CUSTOM_SET_FILTER, 9.0, 0.0, 0.0), None);
        assert_eq!(Command::from_custom(CUSTOM_SELECT_SATELLITE, -1.0, 0.0, 0.0), None);
        assert_eq!(Command::from_custom(CUSTOM_ADJUST_ZOOM, f32::NAN, 0.0, 0.0), None);
        assert_eq!(Command::from_custom(CUSTOM_ORBIT_CAMERA, 0.1, f32::INFINITY, 0.0), None);
    }

    #[test]
    fn event_command_accessor() {
        let custom = InputEvent::Custom { kind: CUSTOM_BACK, a: 0.0, b: 0.0, c: 0.0 };
        assert_eq!(custom.command(), Some(Command::Back));
        assert_eq!(InputEvent::Command(Command::ResetView).command(), Some(Command::ResetView));
        assert_eq!(InputEvent::PointerLeave.command(), None);
    }
}
