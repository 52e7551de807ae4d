//! sf-core: shared foundation for shockflow.
//!
//! Contains:
//! - units (uom pressure, temperature and angle helpers; sea-level constants)
//! - numeric (tolerances and scalar guards used to validate solver inputs)
//! - error (the validation error those guards raise)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
