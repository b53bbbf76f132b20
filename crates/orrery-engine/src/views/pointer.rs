use glam::Vec2;

use crate::input::queue::InputEvent;

/// What a pointer event means once press/drag/release are told apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Hover(Vec2),
    /// Movement since the previous drag step, in NDC units.
    Drag(Vec2),
    /// Press and release without crossing the drag threshold.
    Click(Vec2),
    Leave,
}

/// Tells clicks from drags. Shared by both views.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    press: Option<Vec2>,
    last: Vec2,
    dragging: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed one input event. Non-pointer events return `None`.
    pub fn handle(&mut self, event: &InputEvent, drag_threshold: f32) -> Option<PointerAction> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let p = Vec2::new(x, y);
                self.press = Some(p);
                self.last = p;
                self.dragging = false;
                None
            }
            InputEvent::PointerMove { x, y } => {
                let p = Vec2::new(x, y);
                let Some(press) = self.press else {
                    return Some(PointerAction::Hover(p));
                };
                if !self.dragging && p.distance(press) > drag_threshold {
                    self.dragging = true;
                }
                if self.dragging {
                    let delta = p - self.last;
                    self.last = p;
                    Some(PointerAction::Drag(delta))
                } else {
                    None
                }
            }
            InputEvent::PointerUp { x, y } => {
                let was_click = self.press.is_some() && !self.dragging;
                self.press = None;
                self.dragging = false;
                was_click.then_some(PointerAction::Click(Vec2::new(x, y)))
            }
            InputEvent::PointerLeave => {
                self.press = None;
                self.dragging = false;
                Some(PointerAction::Leave)
            }
            _ => None,
        }
    }
}
