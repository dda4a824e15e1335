// Decorative background motion.
// Placement is a pure function of (index, bounds) so that every render of a
// page produces identical particle coordinates.

pub mod placement;
pub mod presets;

pub use placement::{drift_field, Bounds, DriftParticle, Particle};
