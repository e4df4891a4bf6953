//! # Player Module
//!
//! The playback queue state machine. [`PlayerQueue`] owns the ordered list
//! of track descriptors and the cursor; it performs no I/O and never fetches
//! anything itself. The CLI layer populates it from catalog results and
//! renders whatever descriptor a transition returns.

mod queue;

pub use queue::PlayerQueue;
