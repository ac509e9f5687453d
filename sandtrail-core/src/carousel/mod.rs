//! Carousel rotation: which banner or gallery image is showing, and when it
//! advances on its own.
//!
//! [`CarouselState`] is a pure two-state machine (idle / rotating). Every
//! transition returns a [`TimerCommand`] telling the owner what to do with
//! the single pending timer. [`CarouselController`] is the tokio driver that
//! owns that timer for views that rotate automatically.

pub mod controller;
pub mod state;

use thiserror::Error;

pub use controller::CarouselController;
pub use state::{
    CarouselState, DEFAULT_ROTATION_INTERVAL, Rotation, TimerCommand,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}
