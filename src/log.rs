//! Debug logging behind the `tracing` cargo feature.
//!
//! The renderer emits a handful of structured debug events (the padded
//! viewport, rasterizer exit status). With the feature off, `debug!`
//! expands to nothing and the crate pulls in no logging dependency at all;
//! with it on, the events flow into whatever `tracing` subscriber the
//! caller installed.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
