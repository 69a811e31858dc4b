//! Reusable observers and objective wrappers for Contour.
//!
//! The solvers report progress through [`Observer`]; this crate collects the
//! common ways of consuming those reports.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasPoint`])
//!
//! # Observers
//!
//! - [`Recorder`] — keeps every event
//! - [`SearchPath`] — keeps the sequence of visited points
//! - [`Logger`] — forwards events to the `log` facade
//!
//! # Objective wrappers
//!
//! - [`Counted`] — counts objective evaluations
//!
//! [`Observer`]: contour_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasPoint`]: traits::HasPoint

mod counter;
mod logger;
mod path;
mod recorder;

pub mod traits;

pub use counter::Counted;
pub use logger::Logger;
pub use path::SearchPath;
pub use recorder::Recorder;
