use std::fmt;

use contour_core::Observer;
use log::Level;

use crate::traits::HasObjective;

/// Forwards events to the [`log`] facade.
///
/// Each event is logged as one line with a running event number, the
/// objective value, and the event's `Debug` representation. Nothing is
/// formatted when the level is disabled.
#[derive(Debug, Clone)]
pub struct Logger {
    level: Level,
    label: String,
    seen: usize,
}

impl Logger {
    /// Creates a logger that writes at `level`, prefixing lines with `label`.
    pub fn new(level: Level, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
            seen: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Debug, "contour")
    }
}

impl<E> Observer<E> for Logger
where
    E: HasObjective + fmt::Debug,
{
    fn observe(&mut self, event: &E) {
        self.seen += 1;
        if log::log_enabled!(self.level) {
            log::log!(
                self.level,
                "{} #{}: f = {} {:?}",
                self.label,
                self.seen,
                event.objective(),
                event
            );
        }
    }
}

/// Allows `&mut Logger` to be passed to solvers that take an observer by value.
impl<E> Observer<E> for &mut Logger
where
    E: HasObjective + fmt::Debug,
{
    fn observe(&mut self, event: &E) {
        (*self).observe(event);
    }
}
