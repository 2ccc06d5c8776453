//! Pointer handling for the canvas: picking, dragging and corner scaling.
//!
//! Positions are in surface coordinates; the canvas panel converts from
//! screen space before calling in.

use egui::{Pos2, Vec2};

use super::Surface;
use crate::element::{Drawable, Element, MIN_SCALED_EXTENT, ObjectId, Placement};
use crate::widgets::{Corner, ResizeHandle};

/// Side length of the square resize handles
pub const HANDLE_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    /// Moving the selection with the pointer
    Dragging { last: Pos2, moved: bool },
    /// Resizing one object from a corner handle
    Scaling {
        id: ObjectId,
        corner: Corner,
        anchor: Pos2,
        /// Pointer offset from the dragged corner at press time
        grab: Vec2,
        last: Pos2,
        scaled: bool,
    },
}

#[derive(Debug)]
pub struct CanvasInteraction {
    state: Interaction,
    handle_size: f32,
}

impl Default for CanvasInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasInteraction {
    pub fn new() -> Self {
        Self {
            state: Interaction::Idle,
            handle_size: HANDLE_SIZE,
        }
    }

    pub fn state(&self) -> &Interaction {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, Interaction::Idle)
    }

    /// Handles drawn around the active object
    pub fn handles(&self, object: &Drawable) -> [ResizeHandle; 4] {
        let bounds = object.bounds();
        Corner::ALL.map(|corner| ResizeHandle::new(corner, corner.position(bounds), self.handle_size))
    }

    /// The handle of the active object under `pos`, if any
    pub fn handle_at(&self, surface: &Surface, pos: Pos2) -> Option<(ObjectId, Corner)> {
        let id = surface.active_object()?;
        let object = surface.object(id)?;
        self.handles(object)
            .iter()
            .find(|handle| handle.contains(pos))
            .map(|handle| (id, handle.corner()))
    }

    pub fn pointer_pressed(&mut self, pos: Pos2, additive: bool, surface: &mut Surface) {
        if let Some((id, corner)) = self.handle_at(surface, pos) {
            if let Some(object) = surface.object(id) {
                let bounds = object.bounds();
                let anchor = corner.opposite().position(bounds);
                log::debug!("scaling {} from {}", id, corner.as_str());
                self.state = Interaction::Scaling {
                    id,
                    corner,
                    anchor,
                    grab: pos - corner.position(bounds),
                    last: pos,
                    scaled: false,
                };
                return;
            }
        }

        match surface.object_at(pos) {
            Some(id) => {
                if additive {
                    if let Err(err) = surface.add_to_selection(id) {
                        log::warn!("could not extend selection: {err}");
                    }
                } else if !surface.is_selected(id) {
                    surface.set_selection(vec![id]);
                }
                self.state = Interaction::Dragging {
                    last: pos,
                    moved: false,
                };
            }
            None => {
                if !additive {
                    surface.clear_selection();
                }
                self.state = Interaction::Idle;
            }
        }
    }

    pub fn pointer_moved(&mut self, pos: Pos2, surface: &mut Surface) {
        match self.state {
            Interaction::Idle => {}
            Interaction::Dragging { last, .. } => {
                let delta: Vec2 = pos - last;
                if delta != Vec2::ZERO {
                    surface.translate_selection(delta);
                    self.state = Interaction::Dragging {
                        last: pos,
                        moved: true,
                    };
                }
            }
            Interaction::Scaling {
                id,
                corner,
                anchor,
                grab,
                last,
                ..
            } => {
                if pos == last {
                    return;
                }
                let Some(object) = surface.object(id) else {
                    self.state = Interaction::Idle;
                    return;
                };
                let placement = scaled_placement(object, corner, anchor, pos - grab);
                match surface.scale_object(id, placement) {
                    Ok(()) => {
                        self.state = Interaction::Scaling {
                            id,
                            corner,
                            anchor,
                            grab,
                            last: pos,
                            scaled: true,
                        };
                    }
                    Err(err) => {
                        log::warn!("scaling stopped: {err}");
                        self.state = Interaction::Idle;
                    }
                }
            }
        }
    }

    pub fn pointer_released(&mut self, surface: &mut Surface) {
        let finished = match std::mem::replace(&mut self.state, Interaction::Idle) {
            Interaction::Dragging { moved: true, .. } => surface.active_object(),
            Interaction::Scaling {
                id, scaled: true, ..
            } => Some(id),
            _ => None,
        };

        if let Some(id) = finished {
            if let Err(err) = surface.commit_modification(id) {
                log::warn!("modification of {id} not committed: {err}");
            }
        }
    }
}

/// Placement that makes `object` span from `anchor` to `target`, the new
/// position of the dragged corner.
///
/// The anchor corner stays fixed. Rectangles scale each axis independently,
/// circles and text by the larger of the two factors. Extents never drop
/// below [`MIN_SCALED_EXTENT`].
pub fn scaled_placement(object: &Drawable, corner: Corner, anchor: Pos2, target: Pos2) -> Placement {
    let base = object.base_size();
    let current = *object.placement();

    let width = if corner.is_left() {
        anchor.x - target.x
    } else {
        target.x - anchor.x
    }
    .max(MIN_SCALED_EXTENT);
    let height = if corner.is_top() {
        anchor.y - target.y
    } else {
        target.y - anchor.y
    }
    .max(MIN_SCALED_EXTENT);

    let mut scale_x = if base.x > 0.0 { width / base.x } else { current.scale_x };
    let mut scale_y = if base.y > 0.0 { height / base.y } else { current.scale_y };
    if object.kind().scales_uniformly() {
        let uniform = scale_x.max(scale_y);
        scale_x = uniform;
        scale_y = uniform;
    }

    let size = Vec2::new(base.x * scale_x, base.y * scale_y);
    let min_x = if corner.is_left() { anchor.x - size.x } else { anchor.x };
    let min_y = if corner.is_top() { anchor.y - size.y } else { anchor.y };

    Placement {
        position: Pos2::new(min_x, min_y),
        scale_x,
        scale_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::surface::{Dimensions, SurfaceEvent};

    fn surface() -> Surface {
        Surface::new(Dimensions::new(500.0, 500.0))
    }

    #[test]
    fn press_on_object_selects_and_drag_moves_it() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_rectangle(Pos2::new(100.0, 100.0), 100.0, 100.0, "#d9d9d9"))
            .unwrap();
        let mut events = surface.subscribe();
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(150.0, 150.0), false, &mut surface);
        interaction.pointer_moved(Pos2::new(160.0, 170.0), &mut surface);
        interaction.pointer_released(&mut surface);

        assert_eq!(
            surface.object(id).unwrap().placement().position,
            Pos2::new(110.0, 120.0)
        );
        assert_eq!(
            events.drain(),
            vec![
                SurfaceEvent::SelectionCreated { selected: vec![id] },
                SurfaceEvent::ObjectModified { target: id },
            ]
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn click_without_motion_does_not_modify() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_circle(Pos2::new(0.0, 0.0), 50.0, "#000"))
            .unwrap();
        let mut events = surface.subscribe();
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(50.0, 50.0), false, &mut surface);
        interaction.pointer_released(&mut surface);

        assert_eq!(
            events.drain(),
            vec![SurfaceEvent::SelectionCreated { selected: vec![id] }]
        );
    }

    #[test]
    fn press_on_empty_canvas_clears_unless_additive() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_rectangle(Pos2::new(0.0, 0.0), 10.0, 10.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(300.0, 300.0), true, &mut surface);
        assert_eq!(surface.selection(), &[id]);

        interaction.pointer_pressed(Pos2::new(300.0, 300.0), false, &mut surface);
        assert!(surface.selection().is_empty());
    }

    #[test]
    fn bottom_right_handle_scales_rectangle_around_top_left() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_rectangle(Pos2::new(100.0, 100.0), 100.0, 50.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        let mut events = surface.subscribe();
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(200.0, 150.0), false, &mut surface);
        assert!(matches!(
            interaction.state(),
            Interaction::Scaling {
                corner: Corner::BottomRight,
                ..
            }
        ));
        interaction.pointer_moved(Pos2::new(300.0, 250.0), &mut surface);
        interaction.pointer_released(&mut surface);

        let placement = *surface.object(id).unwrap().placement();
        assert_eq!(placement.position, Pos2::new(100.0, 100.0));
        assert_eq!(placement.scale_x, 2.0);
        assert_eq!(placement.scale_y, 3.0);
        assert_eq!(
            events.drain(),
            vec![
                SurfaceEvent::ObjectScaling { target: id },
                SurfaceEvent::ObjectModified { target: id },
            ]
        );
    }

    #[test]
    fn handle_click_without_motion_leaves_object_alone() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_rectangle(Pos2::new(100.0, 100.0), 100.0, 100.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        let mut events = surface.subscribe();
        let mut interaction = CanvasInteraction::new();

        // inside the bottom-right handle, off its exact corner
        interaction.pointer_pressed(Pos2::new(203.0, 204.0), false, &mut surface);
        interaction.pointer_moved(Pos2::new(203.0, 204.0), &mut surface);
        interaction.pointer_moved(Pos2::new(203.0, 204.0), &mut surface);
        interaction.pointer_released(&mut surface);

        let bounds = surface.object(id).unwrap().bounds();
        assert_eq!(bounds.min, Pos2::new(100.0, 100.0));
        assert_eq!(bounds.max, Pos2::new(200.0, 200.0));
        assert!(events.drain().is_empty());
    }

    #[test]
    fn scaling_keeps_the_grab_offset() {
        let mut surface = surface();
        let id = surface
            .add(factory::create_rectangle(Pos2::new(100.0, 100.0), 100.0, 100.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(203.0, 204.0), false, &mut surface);
        interaction.pointer_moved(Pos2::new(253.0, 254.0), &mut surface);

        let bounds = surface.object(id).unwrap().bounds();
        assert_eq!(bounds.max, Pos2::new(250.0, 250.0));
    }

    #[test]
    fn shift_press_adds_object_and_makes_it_active() {
        let mut surface = surface();
        let a = surface
            .add(factory::create_rectangle(Pos2::new(0.0, 0.0), 50.0, 50.0, "#000"))
            .unwrap();
        let b = surface
            .add(factory::create_rectangle(Pos2::new(200.0, 200.0), 50.0, 50.0, "#000"))
            .unwrap();
        surface.set_selection(vec![a]);
        let mut events = surface.subscribe();
        let mut interaction = CanvasInteraction::new();

        interaction.pointer_pressed(Pos2::new(225.0, 225.0), true, &mut surface);
        assert_eq!(surface.selection(), &[a, b]);
        assert_eq!(surface.active_object(), Some(b));

        interaction.pointer_moved(Pos2::new(235.0, 225.0), &mut surface);
        interaction.pointer_released(&mut surface);

        assert_eq!(
            events.drain(),
            vec![
                SurfaceEvent::SelectionUpdated {
                    selected: vec![b],
                    deselected: vec![],
                },
                SurfaceEvent::ObjectModified { target: b },
            ]
        );
        assert_eq!(
            surface.object(a).unwrap().placement().position,
            Pos2::new(10.0, 0.0)
        );
    }

    #[test]
    fn circles_scale_uniformly_from_top_left() {
        let circle = factory::create_circle(Pos2::new(100.0, 100.0), 50.0, "#000");
        let anchor = Pos2::new(200.0, 200.0);

        let placement = scaled_placement(&circle, Corner::TopLeft, anchor, Pos2::new(50.0, 150.0));

        assert_eq!(placement.scale_x, 1.5);
        assert_eq!(placement.scale_y, 1.5);
        assert_eq!(placement.position, Pos2::new(50.0, 50.0));
    }

    #[test]
    fn crossing_the_anchor_clamps_to_minimum_extent() {
        let rect = factory::create_rectangle(Pos2::new(0.0, 0.0), 10.0, 10.0, "#000");
        let placement =
            scaled_placement(&rect, Corner::BottomRight, Pos2::new(0.0, 0.0), Pos2::new(-20.0, -20.0));
        assert_eq!(placement.scale_x, 0.1);
        assert_eq!(placement.scale_y, 0.1);
        assert_eq!(placement.position, Pos2::new(0.0, 0.0));
    }
}
