//! Property inspector: keeps a form in step with the selected object and
//! writes edits back to it.
//!
//! Each frame the inspector first drains the surface events it subscribed
//! to, then applies whatever the user typed. When the two race, the later
//! one wins.

mod form;

use crate::element::{Drawable, Element, ObjectId, ObjectKind};
use crate::surface::{Dimensions, EventStream, Surface, SurfaceEvent};

pub use form::{FormState, MAX_EXACT_INTEGER, format_number, parse_int, round_half_up};

/// What the inspector is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorState {
    #[default]
    Unselected,
    Selected { id: ObjectId, kind: ObjectKind },
    /// The selected object could not be resolved to a known kind
    Unsupported { id: ObjectId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorTab {
    #[default]
    Settings,
    Styles,
}

impl InspectorTab {
    pub const ALL: [InspectorTab; 2] = [InspectorTab::Settings, InspectorTab::Styles];

    pub fn label(self) -> &'static str {
        match self {
            InspectorTab::Settings => "Settings",
            InspectorTab::Styles => "Styles",
        }
    }
}

/// Raw text of the canvas size fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionFields {
    pub width: String,
    pub height: String,
}

#[derive(Debug)]
pub struct Inspector {
    state: InspectorState,
    form: FormState,
    tab: InspectorTab,
    dimensions: Dimensions,
    dimension_fields: DimensionFields,
    /// Last dimensions pushed to the surface
    applied: Option<Dimensions>,
    events: Option<EventStream>,
}

impl Inspector {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            state: InspectorState::Unselected,
            form: FormState::default(),
            tab: InspectorTab::default(),
            dimensions,
            dimension_fields: DimensionFields {
                width: format_number(dimensions.width),
                height: format_number(dimensions.height),
            },
            applied: None,
            events: None,
        }
    }

    pub fn state(&self) -> InspectorState {
        self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn tab(&self) -> InspectorTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: InspectorTab) {
        self.tab = tab;
    }

    /// Canvas size as last parsed from the size fields
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn dimension_fields(&self) -> &DimensionFields {
        &self.dimension_fields
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        match self.state {
            InspectorState::Selected { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Whether a live event stream is connected
    pub fn is_attached(&self) -> bool {
        self.events.as_ref().is_some_and(|events| !events.is_closed())
    }

    /// Subscribe to a surface and push the current size to it on next sync
    pub fn attach(&mut self, surface: &mut Surface) {
        self.events = Some(surface.subscribe());
        self.applied = None;
        log::debug!("inspector attached");
    }

    /// Process pending surface events, then apply the canvas size if it changed
    pub fn sync(&mut self, surface: &mut Surface) {
        let pending = match self.events.as_mut() {
            Some(events) => events.drain(),
            None => Vec::new(),
        };
        for event in &pending {
            self.handle_event(event, surface);
        }
        self.apply_dimensions(surface);
    }

    pub fn handle_event(&mut self, event: &SurfaceEvent, surface: &Surface) {
        log::trace!("inspector received {}", event.name());
        match event {
            SurfaceEvent::SelectionCreated { selected }
            | SurfaceEvent::SelectionUpdated { selected, .. } => {
                self.select(selected.first().copied(), surface);
            }
            SurfaceEvent::SelectionCleared { .. } => {
                self.state = InspectorState::Unselected;
                self.form.clear();
            }
            SurfaceEvent::ObjectModified { target } | SurfaceEvent::ObjectScaling { target } => {
                self.select(Some(*target), surface);
            }
            SurfaceEvent::ObjectAdded { .. } => {}
        }
    }

    fn select(&mut self, id: Option<ObjectId>, surface: &Surface) {
        let Some(id) = id else {
            return;
        };
        match surface.object(id) {
            Some(object) => {
                self.state = InspectorState::Selected {
                    id,
                    kind: object.kind(),
                };
                self.form.read_from(object);
            }
            None => {
                log::warn!("selected object {id} is not inspectable");
                self.state = InspectorState::Unsupported { id };
                self.form.clear();
            }
        }
    }

    /// Run `apply` on the selected object; a render is requested if it reports a change
    fn write_back(&self, surface: &mut Surface, apply: impl FnOnce(&mut Drawable) -> bool) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let applied = surface.object_mut(id).is_some_and(apply);
        if applied {
            surface.request_render();
        }
        applied
    }

    pub fn edit_text(&mut self, value: &str, surface: &mut Surface) -> bool {
        self.form.text = value.to_owned();
        self.write_back(surface, |object| match object.as_text_mut() {
            Some(text) => {
                text.content = value.to_owned();
                true
            }
            None => false,
        })
    }

    pub fn edit_width(&mut self, value: &str, surface: &mut Surface) -> bool {
        self.form.width = value.to_owned();
        let Some(width) = non_negative(value) else {
            return false;
        };
        self.write_back(surface, |object| match object.as_rectangle_mut() {
            Some(rect) => {
                rect.width = width / rect.placement.scale_x;
                true
            }
            None => false,
        })
    }

    pub fn edit_height(&mut self, value: &str, surface: &mut Surface) -> bool {
        self.form.height = value.to_owned();
        let Some(height) = non_negative(value) else {
            return false;
        };
        self.write_back(surface, |object| match object.as_rectangle_mut() {
            Some(rect) => {
                rect.height = height / rect.placement.scale_y;
                true
            }
            None => false,
        })
    }

    pub fn edit_diameter(&mut self, value: &str, surface: &mut Surface) -> bool {
        self.form.diameter = value.to_owned();
        let Some(diameter) = non_negative(value) else {
            return false;
        };
        self.write_back(surface, |object| match object.as_circle_mut() {
            Some(circle) => {
                circle.radius = diameter / 2.0 / circle.placement.scale_x;
                true
            }
            None => false,
        })
    }

    /// Colors are applied as typed, even when empty or unparsable
    pub fn edit_color(&mut self, value: &str, surface: &mut Surface) -> bool {
        self.form.color = value.to_owned();
        self.write_back(surface, |object| {
            object.set_fill(value.to_owned());
            true
        })
    }

    pub fn edit_canvas_width(&mut self, value: &str) {
        self.dimension_fields.width = value.to_owned();
        self.dimensions.width = parse_int(value);
    }

    pub fn edit_canvas_height(&mut self, value: &str) {
        self.dimension_fields.height = value.to_owned();
        self.dimensions.height = parse_int(value);
    }

    /// Push the canvas size to the surface when it differs from the last one pushed.
    ///
    /// Returns whether the surface was resized.
    pub fn apply_dimensions(&mut self, surface: &mut Surface) -> bool {
        let dimensions = self.dimensions;
        if self
            .applied
            .is_some_and(|applied| applied.same_as(&dimensions))
        {
            return false;
        }
        surface.set_dimensions(dimensions);
        surface.request_render();
        self.applied = Some(dimensions);
        true
    }
}

fn non_negative(value: &str) -> Option<f32> {
    let parsed = parse_int(value);
    (parsed >= 0.0).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::Pos2;

    fn attached() -> (Surface, Inspector) {
        let mut surface = Surface::new(Dimensions::new(500.0, 500.0));
        let mut inspector = Inspector::new(Dimensions::new(500.0, 500.0));
        inspector.attach(&mut surface);
        (surface, inspector)
    }

    #[test]
    fn starts_unselected_with_default_size_fields() {
        let inspector = Inspector::new(Dimensions::new(500.0, 500.0));
        assert_eq!(inspector.state(), InspectorState::Unselected);
        assert!(inspector.form().is_empty());
        assert_eq!(inspector.dimension_fields().width, "500");
        assert_eq!(inspector.dimension_fields().height, "500");
        assert!(!inspector.is_attached());
    }

    #[test]
    fn selecting_a_circle_reads_scaled_diameter() {
        let (mut surface, mut inspector) = attached();
        let id = surface
            .add(factory::create_circle(Pos2::new(0.0, 0.0), 50.0, "#d9d9d9"))
            .unwrap();
        surface.object_mut(id).unwrap().placement_mut().scale_x = 1.25;
        surface.set_selection(vec![id]);

        inspector.sync(&mut surface);

        assert_eq!(
            inspector.state(),
            InspectorState::Selected {
                id,
                kind: ObjectKind::Circle
            }
        );
        assert_eq!(inspector.form().diameter, "125");
        assert_eq!(inspector.form().color, "#d9d9d9");
        assert!(inspector.form().width.is_empty());
    }

    #[test]
    fn negative_or_unparsable_sizes_are_not_applied() {
        let (mut surface, mut inspector) = attached();
        let id = surface
            .add(factory::create_rectangle(Pos2::ZERO, 100.0, 100.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        inspector.sync(&mut surface);

        assert!(!inspector.edit_width("-5", &mut surface));
        assert!(!inspector.edit_height("abc", &mut surface));
        assert_eq!(inspector.form().width, "-5");

        let rect = surface.object(id).unwrap().as_rectangle().unwrap();
        assert_eq!((rect.width, rect.height), (100.0, 100.0));
    }

    #[test]
    fn text_edits_ignore_other_kinds() {
        let (mut surface, mut inspector) = attached();
        let id = surface
            .add(factory::create_rectangle(Pos2::ZERO, 10.0, 10.0, "#000"))
            .unwrap();
        surface.set_selection(vec![id]);
        inspector.sync(&mut surface);
        surface.take_render_request();

        assert!(!inspector.edit_text("hello", &mut surface));
        assert!(!surface.take_render_request());
    }

    #[test]
    fn dimension_watcher_applies_only_changes() {
        let (mut surface, mut inspector) = attached();
        assert!(inspector.apply_dimensions(&mut surface));
        assert!(!inspector.apply_dimensions(&mut surface));

        inspector.edit_canvas_height("abc");
        assert!(inspector.apply_dimensions(&mut surface));
        assert!(surface.height().is_nan());
        assert!(!inspector.apply_dimensions(&mut surface));
    }
}
