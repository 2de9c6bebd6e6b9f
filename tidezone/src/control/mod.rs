//! Interactive baseline entry.
//!
//! The rendering layer converts its own input events (mouse clicks on the chart, an undo button) into
//! [`SessionEvent`]s and gives them to an [`InputSession`]. The session keeps the click buffer and the preview
//! geometry, runs the zone pipeline when a baseline is complete and answers with a [`SessionResponse`] describing
//! what should be redrawn.

use crate::render::LinePrimitives;
use crate::zone::ZoneCollection;
use tidezone_types::cartesian::Point2d;
use tidezone_types::geo::GeoPoint2d;

mod session;

pub use session::InputSession;

/// Input event in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A point of the chart was selected (clicked).
    PointSelected(Point2d),
    /// The last perpendicular line should be removed.
    Undo,
}

/// State of the click buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No station selected yet.
    #[default]
    AwaitingFirstClick,
    /// The first station is selected, the next click completes the baseline.
    AwaitingSecondClick,
    /// A baseline was completed and its zones are available.
    LineComplete,
}

/// Result of a successfully handled event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionResponse {
    /// The first station of a new baseline was recorded.
    FirstStationSelected(GeoPoint2d),
    /// A baseline was completed.
    LineCompleted {
        /// Baseline and perpendiculars to draw on the chart.
        lines: LinePrimitives,
        /// Newly generated zones.
        zones: ZoneCollection,
    },
    /// The last perpendicular was removed.
    PerpendicularRemoved {
        /// Perpendiculars still shown.
        remaining: usize,
    },
    /// Undo was requested but there was no perpendicular to remove.
    NothingToUndo,
}
