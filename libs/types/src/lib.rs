//! Types library for CAD risk scoring
//!
//! This library provides the core type definitions shared by the risk engine
//! and the gateway: the input record a collector hands to the scorer, the
//! assessment it gets back, and the static reference tables a presentation
//! layer shows next to it.
//!
//! # Modules
//! - `ids`: Identifiers stamped on emitted assessments and reports
//! - `profile`: Input record (`HealthProfile`) and the measures rules read
//! - `factor`: Risk factors and their display labels
//! - `risk`: Risk categories and the assessment output record
//! - `reference`: Advisory input bounds and normal physiological ranges
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod profile;
pub mod factor;
pub mod risk;
pub mod reference;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::profile::*;
    pub use crate::factor::*;
    pub use crate::risk::*;
    pub use crate::reference::*;
    pub use crate::errors::*;
}
