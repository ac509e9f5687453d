use std::time::Duration;

use tracing::trace;

use super::CarouselError;

/// Cadence of automatic advancement.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Whether an automatic-rotation timer is expected to be pending.
///
/// `epoch` identifies the timer armed most recently; a tick carrying any
/// other epoch belongs to a cancelled timer and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Idle,
    Rotating { epoch: u64 },
}

/// What the owner must do with its pending timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel whatever is pending and fire `tick(epoch)` after `after`.
    Arm { epoch: u64, after: Duration },
    /// Cancel whatever is pending.
    Disarm,
    /// Leave the pending timer alone.
    Keep,
}

/// Current position over a sequence of media items.
#[derive(Debug, Clone)]
pub struct CarouselState<T> {
    items: Vec<T>,
    index: usize,
    rotation: Rotation,
    interval: Duration,
    auto_rotate: bool,
    epochs: u64,
}

impl<T> Default for CarouselState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_INTERVAL)
    }
}

impl<T> CarouselState<T> {
    /// Rotating carousel advancing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            rotation: Rotation::Idle,
            interval,
            auto_rotate: true,
            epochs: 0,
        }
    }

    /// Gallery that only moves on manual navigation. Never arms a timer.
    pub fn manual() -> Self {
        Self {
            auto_rotate: false,
            ..Self::new(DEFAULT_ROTATION_INTERVAL)
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current index. Always `0` while the sequence is empty.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.rotation, Rotation::Rotating { .. })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Replace the item sequence and restart from the first item.
    pub fn start(&mut self, items: Vec<T>) -> TimerCommand {
        self.items = items;
        self.index = 0;
        self.rearm()
    }

    /// Cancel automatic rotation. Idempotent.
    pub fn stop(&mut self) -> TimerCommand {
        self.rotation = Rotation::Idle;
        TimerCommand::Disarm
    }

    pub fn next(&mut self) -> TimerCommand {
        if self.items.is_empty() {
            return TimerCommand::Keep;
        }
        self.index = (self.index + 1) % self.items.len();
        self.rearm()
    }

    pub fn previous(&mut self) -> TimerCommand {
        if self.items.is_empty() {
            return TimerCommand::Keep;
        }
        self.index = if self.index == 0 {
            self.items.len() - 1
        } else {
            self.index - 1
        };
        self.rearm()
    }

    pub fn go_to(&mut self, index: usize) -> Result<TimerCommand, CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.index = index;
        Ok(self.rearm())
    }

    /// Automatic advancement for the timer armed with `epoch`.
    ///
    /// Returns `Arm` with the same epoch when the carousel advanced and wants
    /// the next tick, `Keep` when the tick is stale and must be dropped.
    pub fn tick(&mut self, epoch: u64) -> TimerCommand {
        match self.rotation {
            Rotation::Rotating { epoch: current }
                if current == epoch && self.items.len() > 1 =>
            {
                self.index = (self.index + 1) % self.items.len();
                trace!(index = self.index, epoch, "carousel auto-advanced");
                TimerCommand::Arm {
                    epoch,
                    after: self.interval,
                }
            }
            _ => {
                trace!(epoch, rotation = ?self.rotation, "dropping stale carousel tick");
                TimerCommand::Keep
            }
        }
    }

    /// Manual navigation and restarts discard the pending timer and, when
    /// there is something to rotate through, arm a fresh one.
    fn rearm(&mut self) -> TimerCommand {
        if self.auto_rotate && self.items.len() > 1 {
            self.epochs += 1;
            self.rotation = Rotation::Rotating { epoch: self.epochs };
            TimerCommand::Arm {
                epoch: self.epochs,
                after: self.interval,
            }
        } else {
            self.rotation = Rotation::Idle;
            TimerCommand::Disarm
        }
    }
}
