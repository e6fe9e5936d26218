use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// Bitmask value of the primary (left) pointer button.
pub const PRIMARY_BUTTON: u16 = 1;

/// A drag must move strictly more than this many pixels on both axes to
/// count as a selection rather than a click.
pub const MIN_DRAG_DISTANCE_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
    Click,
    Leave,
}

/// Pointer input as delivered by the host after its own event handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: PixelPoint,
    /// Pressed-buttons bitmask. Some platforms omit it.
    pub buttons: Option<u16>,
    /// Legacy single-button code used when `buttons` is missing.
    pub which: Option<u16>,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerEventKind, x: f64, y: f64, buttons: u16) -> Self {
        Self {
            kind,
            position: PixelPoint::new(x, y),
            buttons: Some(buttons),
            which: None,
        }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y, PRIMARY_BUTTON)
    }

    #[must_use]
    pub fn drag_to(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y, PRIMARY_BUTTON)
    }

    #[must_use]
    pub fn hover(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y, 0)
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y, 0)
    }

    /// Event without a `buttons` bitmask, carrying only the legacy code.
    #[must_use]
    pub fn legacy(kind: PointerEventKind, x: f64, y: f64, which: u16) -> Self {
        Self {
            kind,
            position: PixelPoint::new(x, y),
            buttons: None,
            which: Some(which),
        }
    }

    /// Effective pressed-buttons bitmask.
    ///
    /// A release always reads as no buttons, whatever the platform reported.
    #[must_use]
    pub fn pressed_buttons(&self) -> u16 {
        if self.kind == PointerEventKind::Up {
            return 0;
        }
        self.buttons.or(self.which).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging { start: PixelPoint },
}

/// Pixel endpoints of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletedDrag {
    pub start: PixelPoint,
    pub end: PixelPoint,
}

impl CompletedDrag {
    #[must_use]
    pub fn exceeds_min_distance(self) -> bool {
        (self.start.x - self.end.x).abs() > MIN_DRAG_DISTANCE_PX
            && (self.start.y - self.end.y).abs() > MIN_DRAG_DISTANCE_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTransition {
    None,
    Started { start: PixelPoint },
    Ended(CompletedDrag),
}

/// Two-state drag machine fed by pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
    pointer: Option<PixelPoint>,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            pointer: None,
        }
    }
}

impl DragTracker {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    #[must_use]
    pub fn drag_start(self) -> Option<PixelPoint> {
        match self.phase {
            DragPhase::Dragging { start } => Some(start),
            DragPhase::Idle => None,
        }
    }

    /// Last pointer position recorded by `track_pointer`.
    #[must_use]
    pub fn pointer(self) -> Option<PixelPoint> {
        self.pointer
    }

    /// Evaluates the transition for one event.
    ///
    /// Does not touch the stored pointer; callers record it with
    /// `track_pointer` once the transition has been handled.
    pub fn apply(&mut self, position: PixelPoint, buttons: u16, select_enabled: bool) -> DragTransition {
        match self.phase {
            DragPhase::Idle if buttons == PRIMARY_BUTTON && select_enabled => {
                self.phase = DragPhase::Dragging { start: position };
                DragTransition::Started { start: position }
            }
            DragPhase::Dragging { start } if buttons == 0 => {
                self.phase = DragPhase::Idle;
                DragTransition::Ended(CompletedDrag {
                    start,
                    end: position,
                })
            }
            _ => DragTransition::None,
        }
    }

    pub fn track_pointer(&mut self, position: PixelPoint) {
        self.pointer = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_reads_as_no_buttons() {
        let event = PointerEvent::new(PointerEventKind::Up, 4.0, 4.0, PRIMARY_BUTTON);
        assert_eq!(event.pressed_buttons(), 0);
    }

    #[test]
    fn missing_bitmask_falls_back_to_legacy_code() {
        let event = PointerEvent::legacy(PointerEventKind::Move, 0.0, 0.0, 1);
        assert_eq!(event.pressed_buttons(), PRIMARY_BUTTON);

        let bare = PointerEvent {
            buttons: None,
            which: None,
            ..PointerEvent::hover(0.0, 0.0)
        };
        assert_eq!(bare.pressed_buttons(), 0);
    }

    #[test]
    fn secondary_button_does_not_start_drag() {
        let mut tracker = DragTracker::default();
        let transition = tracker.apply(PixelPoint::new(1.0, 1.0), 2, true);
        assert_eq!(transition, DragTransition::None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn disabled_select_does_not_start_drag() {
        let mut tracker = DragTracker::default();
        tracker.apply(PixelPoint::new(1.0, 1.0), PRIMARY_BUTTON, false);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn drag_ends_at_release_position() {
        let mut tracker = DragTracker::default();
        let start = PixelPoint::new(10.0, 20.0);
        assert_eq!(
            tracker.apply(start, PRIMARY_BUTTON, true),
            DragTransition::Started { start }
        );
        assert_eq!(tracker.drag_start(), Some(start));
        assert_eq!(
            tracker.apply(PixelPoint::new(30.0, 40.0), PRIMARY_BUTTON, true),
            DragTransition::None
        );

        let end = PixelPoint::new(50.0, 60.0);
        assert_eq!(
            tracker.apply(end, 0, true),
            DragTransition::Ended(CompletedDrag { start, end })
        );
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.drag_start(), None);
    }

    #[test]
    fn min_distance_is_strict_on_both_axes() {
        let drag = |dx: f64, dy: f64| CompletedDrag {
            start: PixelPoint::new(0.0, 0.0),
            end: PixelPoint::new(dx, dy),
        };
        assert!(!drag(1.0, 50.0).exceeds_min_distance());
        assert!(!drag(50.0, -1.0).exceeds_min_distance());
        assert!(drag(1.5, -1.5).exceeds_min_distance());
    }
}
