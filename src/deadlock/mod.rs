/*!
 * Deadlock Module
 * Matrix-based deadlock detection over a static snapshot
 */

pub mod detector;
pub mod matrix;
pub mod types;

pub use detector::{detect_deadlock, DeadlockDetector};
pub use matrix::ResourceMatrix;
pub use types::{DeadlockInput, DeadlockReport, ResourceSnapshot};
