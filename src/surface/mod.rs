//! The drawing surface: an ordered collection of drawables, the current
//! selection, and the event stream the panels subscribe to.
//!
//! A surface is created by [`SurfaceHost`] and shared with sibling
//! components through a [`SurfaceHandle`]. All mutation happens on the UI
//! thread, each frame taking the write lock for the duration of a panel.

mod bus;
mod events;
mod host;
pub mod interaction;

use std::sync::Arc;

use egui::{Pos2, Vec2};
use parking_lot::RwLock;

use crate::element::{Drawable, Element, ObjectId, Placement};
use crate::error::{SurfaceError, SurfaceResult};

pub use bus::{EventBus, EventStream};
pub use events::SurfaceEvent;
pub use host::SurfaceHost;
pub use interaction::CanvasInteraction;

/// Shared, lockable reference to the one surface of the editor
pub type SurfaceHandle = Arc<RwLock<Surface>>;

/// Background used when none is configured
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Pixel size of the surface.
///
/// Values are stored exactly as parsed from the size fields, so they may be
/// negative or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bitwise equality, so NaN dimensions compare equal to themselves
    pub fn same_as(&self, other: &Dimensions) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }

    /// Size usable for laying out the canvas: non-finite or negative axes become 0
    pub fn sanitized(&self) -> Vec2 {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Vec2::new(clean(self.width), clean(self.height))
    }
}

#[derive(Debug)]
pub struct Surface {
    dimensions: Dimensions,
    background: String,
    objects: Vec<Drawable>,
    selection: Vec<ObjectId>,
    /// Most recently selected object, always a member of `selection`
    active: Option<ObjectId>,
    bus: EventBus,
    render_requested: bool,
    disposed: bool,
}

impl Surface {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            background: DEFAULT_BACKGROUND.to_owned(),
            objects: Vec::new(),
            selection: Vec::new(),
            active: None,
            bus: EventBus::new(),
            render_requested: false,
            disposed: false,
        }
    }

    pub fn into_handle(self) -> SurfaceHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> f32 {
        self.dimensions.width
    }

    pub fn height(&self) -> f32 {
        self.dimensions.height
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        log::debug!(
            "surface resized to {}x{}",
            dimensions.width,
            dimensions.height
        );
        self.dimensions = dimensions;
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    /// Open a stream of every event emitted from now on
    pub fn subscribe(&mut self) -> EventStream {
        self.bus.subscribe()
    }

    /// Place a new object on top of all others
    pub fn add(&mut self, object: impl Into<Drawable>) -> SurfaceResult<ObjectId> {
        if self.disposed {
            return Err(SurfaceError::Disposed);
        }
        let object = object.into();
        let id = object.id();
        log::debug!("adding {} {}", object.kind().label(), id);
        self.objects.push(object);
        self.bus.emit(SurfaceEvent::ObjectAdded { target: id });
        self.request_render();
        Ok(id)
    }

    /// Objects in paint order (bottom first)
    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.object(id).is_some()
    }

    pub fn object(&self, id: ObjectId) -> Option<&Drawable> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Drawable> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    fn try_object_mut(&mut self, id: ObjectId) -> SurfaceResult<&mut Drawable> {
        self.object_mut(id).ok_or(SurfaceError::UnknownObject(id))
    }

    /// Topmost object covering the given surface position
    pub fn object_at(&self, pos: Pos2) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .find(|object| object.hit_test(pos))
            .map(Element::id)
    }

    /// Selected object ids, in selection order
    pub fn selection(&self) -> &[ObjectId] {
        &self.selection
    }

    /// The object that carries the resize handles and that the inspector
    /// shows: the first of the ids that most recently joined the selection.
    pub fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }

    /// Replace the selection, emitting the matching selection event.
    ///
    /// Unknown ids and duplicates are dropped. An empty set clears.
    pub fn set_selection(&mut self, ids: Vec<ObjectId>) {
        let mut next: Vec<ObjectId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.contains(id) && !next.contains(&id) {
                next.push(id);
            }
        }

        if next.is_empty() {
            self.clear_selection();
            return;
        }
        if next == self.selection {
            return;
        }

        let previous = std::mem::replace(&mut self.selection, next);
        let joined: Vec<ObjectId> = self
            .selection
            .iter()
            .filter(|id| !previous.contains(id))
            .copied()
            .collect();
        self.active = match joined.first() {
            Some(id) => Some(*id),
            None => self
                .active
                .filter(|id| self.selection.contains(id))
                .or_else(|| self.selection.first().copied()),
        };

        let event = if previous.is_empty() {
            SurfaceEvent::SelectionCreated { selected: joined }
        } else {
            SurfaceEvent::SelectionUpdated {
                selected: joined,
                deselected: previous
                    .iter()
                    .filter(|id| !self.selection.contains(id))
                    .copied()
                    .collect(),
            }
        };
        self.bus.emit(event);
        self.request_render();
    }

    /// Add one object to the current selection
    pub fn add_to_selection(&mut self, id: ObjectId) -> SurfaceResult<()> {
        if !self.contains(id) {
            return Err(SurfaceError::UnknownObject(id));
        }
        if self.is_selected(id) {
            return Ok(());
        }
        let mut next = self.selection.clone();
        next.push(id);
        self.set_selection(next);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let deselected = std::mem::take(&mut self.selection);
        self.active = None;
        self.bus.emit(SurfaceEvent::SelectionCleared { deselected });
        self.request_render();
    }

    /// Move every selected object by `delta`
    pub fn translate_selection(&mut self, delta: Vec2) {
        let selection = self.selection.clone();
        for id in selection {
            if let Some(object) = self.object_mut(id) {
                object.translate(delta);
            }
        }
        self.request_render();
    }

    /// Apply an in-progress interactive resize
    pub fn scale_object(&mut self, id: ObjectId, placement: Placement) -> SurfaceResult<()> {
        *self.try_object_mut(id)?.placement_mut() = placement;
        self.bus.emit(SurfaceEvent::ObjectScaling { target: id });
        self.request_render();
        Ok(())
    }

    /// Announce that an interactive move or resize has finished
    pub fn commit_modification(&mut self, id: ObjectId) -> SurfaceResult<()> {
        if !self.contains(id) {
            return Err(SurfaceError::UnknownObject(id));
        }
        self.bus.emit(SurfaceEvent::ObjectModified { target: id });
        self.request_render();
        Ok(())
    }

    /// Ask for the surface to be repainted on the next frame
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Consume the pending render request, if any
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Release all objects and close every event stream.
    ///
    /// Returns `false` if the surface was already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.objects.clear();
        self.selection.clear();
        self.active = None;
        self.bus.close();
        self.disposed = true;
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;

    fn surface_with_two() -> (Surface, ObjectId, ObjectId) {
        let mut surface = Surface::new(Dimensions::new(500.0, 500.0));
        let a = surface
            .add(factory::create_rectangle(Pos2::new(0.0, 0.0), 50.0, 50.0, "#000"))
            .unwrap();
        let b = surface
            .add(factory::create_circle(Pos2::new(25.0, 25.0), 25.0, "#000"))
            .unwrap();
        (surface, a, b)
    }

    #[test]
    fn topmost_object_wins_hit_test() {
        let (surface, a, b) = surface_with_two();
        assert_eq!(surface.object_at(Pos2::new(50.0, 50.0)), Some(b));
        assert_eq!(surface.object_at(Pos2::new(5.0, 5.0)), Some(a));
        assert_eq!(surface.object_at(Pos2::new(400.0, 400.0)), None);
    }

    #[test]
    fn selection_events_follow_transitions() {
        let (mut surface, a, b) = surface_with_two();
        let mut events = surface.subscribe();

        surface.set_selection(vec![a]);
        surface.add_to_selection(b).unwrap();
        surface.set_selection(vec![b]);
        surface.clear_selection();
        surface.clear_selection();

        assert_eq!(
            events.drain(),
            vec![
                SurfaceEvent::SelectionCreated { selected: vec![a] },
                SurfaceEvent::SelectionUpdated {
                    selected: vec![b],
                    deselected: vec![],
                },
                SurfaceEvent::SelectionUpdated {
                    selected: vec![],
                    deselected: vec![a],
                },
                SurfaceEvent::SelectionCleared {
                    deselected: vec![b],
                },
            ]
        );
    }

    #[test]
    fn active_object_follows_the_latest_addition() {
        let (mut surface, a, b) = surface_with_two();

        surface.set_selection(vec![a]);
        assert_eq!(surface.active_object(), Some(a));

        surface.add_to_selection(b).unwrap();
        assert_eq!(surface.active_object(), Some(b));

        surface.set_selection(vec![a]);
        assert_eq!(surface.active_object(), Some(a));

        surface.clear_selection();
        assert_eq!(surface.active_object(), None);
    }

    #[test]
    fn unknown_ids_never_enter_the_selection() {
        let (mut surface, a, _) = surface_with_two();
        let stranger = ObjectId::new();
        surface.set_selection(vec![stranger, a, a]);
        assert_eq!(surface.selection(), &[a]);
        assert_eq!(
            surface.add_to_selection(stranger),
            Err(SurfaceError::UnknownObject(stranger))
        );
    }

    #[test]
    fn dispose_runs_once_and_rejects_new_objects() {
        let (mut surface, _, _) = surface_with_two();
        let mut events = surface.subscribe();

        assert!(surface.dispose());
        assert!(!surface.dispose());
        assert!(surface.is_empty());
        assert_eq!(events.next_event(), None);
        assert!(events.is_closed());
        assert_eq!(
            surface.add(factory::create_circle(Pos2::ZERO, 1.0, "#000")),
            Err(SurfaceError::Disposed)
        );
    }

    #[test]
    fn render_requests_are_consumed() {
        let mut surface = Surface::new(Dimensions::new(10.0, 10.0));
        assert!(!surface.take_render_request());
        surface.request_render();
        assert!(surface.take_render_request());
        assert!(!surface.take_render_request());
    }

    #[test]
    fn sanitized_dimensions_never_go_negative_or_nan() {
        let dims = Dimensions::new(f32::NAN, -20.0);
        assert_eq!(dims.sanitized(), Vec2::ZERO);
        assert!(dims.same_as(&Dimensions::new(f32::NAN, -20.0)));
        assert!(!dims.same_as(&Dimensions::new(f32::NAN, 20.0)));
    }
}
