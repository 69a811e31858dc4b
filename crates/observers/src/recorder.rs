use contour_core::Observer;

/// An observer that keeps a copy of every event.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Recorder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Observer<E> for Recorder<E> {
    fn observe(&mut self, event: &E) {
        self.events.push(event.clone());
    }
}

/// Allows `&mut Recorder<E>` to be passed to solvers that take an observer
/// by value, so the events can be inspected after the solve completes.
impl<E: Clone> Observer<E> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) {
        (*self).observe(event);
    }
}
