//! Pure data layer: aggregate reshaping, risk scoring, chart geometry, and the
//! backend client. Everything here is view-independent and unit tested.

pub mod chart;
pub mod fetch;
pub mod format;
pub mod risk;
pub mod stats;
pub mod summary;
pub mod variables;
