// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = Vec3;
