use futures::channel::mpsc::{self, TryRecvError, UnboundedReceiver, UnboundedSender};

use super::SurfaceEvent;

/// A simple event bus broadcasting surface events to every open stream
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<UnboundedSender<SurfaceEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &format!("<{} streams>", self.subscribers.len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stream receiving every event emitted from now on
    pub fn subscribe(&mut self) -> EventStream {
        let (sender, receiver) = mpsc::unbounded();
        self.subscribers.push(sender);
        EventStream {
            receiver,
            closed: false,
        }
    }

    /// Emit an event to all streams, forgetting the ones that were dropped
    pub fn emit(&mut self, event: SurfaceEvent) {
        log::debug!("surface event {}", event.name());
        self.subscribers
            .retain(|sender| sender.unbounded_send(event.clone()).is_ok());
    }

    /// Close every stream; pending events can still be drained
    pub fn close(&mut self) {
        for sender in self.subscribers.drain(..) {
            sender.close_channel();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Receiving end of a surface subscription
#[derive(Debug)]
pub struct EventStream {
    receiver: UnboundedReceiver<SurfaceEvent>,
    closed: bool,
}

impl EventStream {
    /// Take the next pending event without blocking
    pub fn next_event(&mut self) -> Option<SurfaceEvent> {
        if self.closed {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Closed) => {
                self.closed = true;
                None
            }
            // Nothing pending right now
            Err(TryRecvError::Empty) => None,
        }
    }

    /// Take every pending event
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::iter::from_fn(|| self.next_event()).collect()
    }

    /// True once the surface was disposed and `next_event` reached the end
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
