//! Attendance classification logic.
//!
//! This module turns raw clock data into derived attendance facts: worked
//! hours, punctuality flags, the overtime split, half-day reclassification,
//! the day rollover for dates with no clock events, and the display-only
//! leave overlay.

mod classify;
mod leave_overlay;
mod overtime;
mod punctuality;
mod rollover;
mod worked_hours;

pub use classify::classify;
pub use leave_overlay::{LeaveOverlay, overlay};
pub use overtime::{OvertimeSplit, split_overtime};
pub use punctuality::{Punctuality, check_punctuality};
pub use rollover::{is_weekend, rollover};
pub use worked_hours::worked_hours;
