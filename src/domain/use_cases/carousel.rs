use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use serde::Serialize;

use crate::{
    constants::{CAROUSEL_TRANSITION, MAX_WINDOW_RADIUS},
    infrastructure::scheduler::TaskScheduler,
};

const UNLOCK_SLOT: &str = "carousel-unlock";

/// Index into a fixed-length list with wraparound and a transition lock. Movement is
/// refused while a transition is in flight; the owner clears the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub current_index: usize,
    pub len: usize,
    pub transitioning: bool,
}

/// One slot of the rendered window: which element, and how far from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSlot {
    pub index: usize,
    pub offset: isize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        CarouselState::starting_at(len, 0)
    }

    /// Starts at `index`, clamped into range.
    pub fn starting_at(len: usize, index: usize) -> Self {
        CarouselState {
            current_index: if len == 0 { 0 } else { index.min(len - 1) },
            len,
            transitioning: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn can_move(&self) -> bool {
        !self.transitioning && self.len > 0
    }

    /// Returns whether the move happened; if so the lock is now held.
    pub fn next(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.len;
        self.transitioning = true;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.current_index = (self.current_index + self.len - 1) % self.len;
        self.transitioning = true;
        true
    }

    /// Out-of-range targets are refused.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.can_move() || index >= self.len {
            return false;
        }
        self.current_index = index;
        self.transitioning = true;
        true
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    /// `2 * radius + 1` slots centred on the current index, offsets `-radius..=radius`.
    /// The radius is clamped to [`MAX_WINDOW_RADIUS`]. Empty when the list is empty; a
    /// single element fills every slot.
    pub fn window(&self, radius: usize) -> Vec<WindowSlot> {
        if self.len == 0 {
            return Vec::new();
        }
        let span = isize::try_from(radius.min(MAX_WINDOW_RADIUS)).unwrap_or(0);
        (-span..=span)
            .map(|offset| {
                let step = offset.unsigned_abs() % self.len;
                let index = if offset < 0 {
                    (self.current_index + self.len - step) % self.len
                } else {
                    (self.current_index + step) % self.len
                };
                WindowSlot { index, offset }
            })
            .collect()
    }
}

/// A carousel over owned items whose transition lock clears itself after a delay.
/// Dropping it cancels a pending unlock.
pub struct Carousel<T> {
    items: Vec<T>,
    state: Arc<Mutex<CarouselState>>,
    scheduler: TaskScheduler,
    transition: Duration,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Carousel::starting_at(items, 0)
    }

    pub fn starting_at(items: Vec<T>, index: usize) -> Self {
        let state = CarouselState::starting_at(items.len(), index);
        Carousel {
            items,
            state: Arc::new(Mutex::new(state)),
            scheduler: TaskScheduler::new(),
            transition: CAROUSEL_TRANSITION,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn state(&self) -> CarouselState {
        *self.state.lock()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(self.state.lock().current_index)
    }

    pub fn next(&self) -> bool {
        self.step(CarouselState::next)
    }

    pub fn previous(&self) -> bool {
        self.step(CarouselState::previous)
    }

    pub fn jump_to(&self, index: usize) -> bool {
        self.step(|state| state.jump_to(index))
    }

    pub fn window(&self, radius: usize) -> Vec<(WindowSlot, &T)> {
        self.state
            .lock()
            .window(radius)
            .into_iter()
            .filter_map(|slot| self.items.get(slot.index).map(|item| (slot, item)))
            .collect()
    }

    fn step(&self, apply: impl FnOnce(&mut CarouselState) -> bool) -> bool {
        let moved = apply(&mut self.state.lock());
        if moved {
            let state = Arc::clone(&self.state);
            self.scheduler.schedule(UNLOCK_SLOT, self.transition, move || {
                state.lock().finish_transition();
            });
        }
        moved
    }
}
