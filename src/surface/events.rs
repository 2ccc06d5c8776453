use crate::element::ObjectId;

/// Events broadcast by a [`Surface`](super::Surface) to its subscribers.
///
/// Selection events carry id sets; modification events carry the single
/// object they concern. Subscribers read the current object state back from
/// the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Something became selected while nothing was selected before
    SelectionCreated { selected: Vec<ObjectId> },
    /// The selection changed from one non-empty set to another
    SelectionUpdated {
        /// Objects that joined the selection
        selected: Vec<ObjectId>,
        /// Objects that left the selection
        deselected: Vec<ObjectId>,
    },
    /// The selection became empty
    SelectionCleared { deselected: Vec<ObjectId> },
    ObjectAdded { target: ObjectId },
    /// An interactive move or resize finished
    ObjectModified { target: ObjectId },
    /// An interactive resize is in progress
    ObjectScaling { target: ObjectId },
}

impl SurfaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceEvent::SelectionCreated { .. } => "selection:created",
            SurfaceEvent::SelectionUpdated { .. } => "selection:updated",
            SurfaceEvent::SelectionCleared { .. } => "selection:cleared",
            SurfaceEvent::ObjectAdded { .. } => "object:added",
            SurfaceEvent::ObjectModified { .. } => "object:modified",
            SurfaceEvent::ObjectScaling { .. } => "object:scaling",
        }
    }
}
