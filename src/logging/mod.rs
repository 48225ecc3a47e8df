//! Console logging for the `gitconfig` binary.
//!
//! The library only emits [`tracing`] events; installing a subscriber is
//! left to the binary.

mod subscriber;

pub use subscriber::init_subscriber;
