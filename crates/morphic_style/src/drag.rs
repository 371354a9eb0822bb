//! Drag-to-set light angle
//!
//! A [`DragSession`] exists for as long as the pointer is held on the light
//! handle. It borrows the controller mutably, so no other edit can interleave
//! with a drag, and the session is released when it is dropped, including
//! when its owner is torn down mid-drag.

use morphic_core::{light_angle_from_pointer, Point};
use tracing::{debug, trace};

use crate::controller::ParameterController;
use crate::params::Field;

/// Pointer input delivered while a drag is active
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Up,
}

/// An active light drag
pub struct DragSession<'a> {
    controller: &'a mut ParameterController,
    target: Point,
    moves: u32,
}

impl<'a> DragSession<'a> {
    pub(crate) fn new(controller: &'a mut ParameterController, target: Point) -> Self {
        debug!(x = target.x, y = target.y, "light drag started");
        Self {
            controller,
            target,
            moves: 0,
        }
    }

    /// Center of the element the light orbits
    pub fn target(&self) -> Point {
        self.target
    }

    /// Update the light angle from a pointer position, returning the new angle
    pub fn pointer_moved(&mut self, pointer: Point) -> f64 {
        let raw = light_angle_from_pointer(self.target, pointer);
        let angle = self.controller.set(Field::Angle, raw);
        self.moves += 1;
        trace!(angle, x = pointer.x, y = pointer.y, "light drag moved");
        angle
    }

    /// Feed one pointer event; returns false once the drag has ended
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Move(pointer) => {
                self.pointer_moved(pointer);
                true
            }
            PointerEvent::Up => false,
        }
    }

    /// Current parameters as seen through the session
    pub fn controller(&self) -> &ParameterController {
        &*self.controller
    }

    /// End the drag, returning the final light angle
    pub fn release(self) -> f64 {
        self.controller.params().light_angle_degrees
    }
}

impl Drop for DragSession<'_> {
    fn drop(&mut self) {
        debug!(moves = self.moves, "light drag released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphic_core::Rect;

    #[test]
    fn test_drag_updates_angle() {
        let mut controller = ParameterController::default();
        let target = Rect::new(50.0, 50.0, 150.0, 150.0);
        {
            let mut drag = controller.begin_drag(target);
            assert_eq!(drag.target(), Point::new(100.0, 100.0));
            assert_eq!(drag.pointer_moved(Point::new(0.0, 100.0)), 180.0);
            assert_eq!(drag.pointer_moved(Point::new(100.0, 200.0)), 90.0);
        }
        assert_eq!(controller.params().light_angle_degrees, 90.0);
    }

    #[test]
    fn test_events_until_pointer_up() {
        let mut controller = ParameterController::default();
        let mut drag = controller.begin_drag(Rect::new(0.0, 0.0, 200.0, 200.0));
        let events = [
            PointerEvent::Move(Point::new(100.0, 0.0)),
            PointerEvent::Move(Point::new(0.0, 100.0)),
            PointerEvent::Up,
            PointerEvent::Move(Point::new(100.0, 200.0)),
        ];
        let handled = events.iter().take_while(|&&event| drag.handle(event)).count();
        assert_eq!(handled, 2);
        assert_eq!(drag.release(), 180.0);
    }
}
