use std::collections::VecDeque;

use rand::Rng;

/// Decision source for [`Tree::insert`](crate::Tree::insert).
///
/// Keeping the randomness behind a trait makes insertion deterministic in
/// tests: production callers wrap a `rand` generator in [`UniformSource`],
/// tests script the answers with [`ScriptedRng`].
pub trait InsertRng {
    /// Draw from {1, 2, 3}: 3 means "append a new child here", anything
    /// else means "descend into an existing child".
    fn draw_choice(&mut self) -> u8;

    /// Index of the child to descend into. `len` is always at least 1 and
    /// the result must be in `0..len`.
    fn pick_child(&mut self, len: usize) -> usize;
}

/// Drives insertion decisions uniformly from any `rand` generator.
///
/// Pass `rand::rng()` for ambient randomness or a seeded
/// `StdRng` for reproducible shapes.
#[derive(Debug)]
pub struct UniformSource<R>(pub R);

impl<R: Rng> InsertRng for UniformSource<R> {
    fn draw_choice(&mut self) -> u8 {
        self.0.random_range(1..=3)
    }

    fn pick_child(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Scripted decision source for deterministic insertion tests.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    choice: u8,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Answers `choice` for every descend-or-append draw.
    pub fn always(choice: u8) -> Self {
        Self {
            choice,
            picks: VecDeque::new(),
        }
    }

    /// Queues child indices for [`InsertRng::pick_child`]; once exhausted,
    /// index 0 is used.
    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks = picks.iter().copied().collect();
        self
    }
}

impl InsertRng for ScriptedRng {
    fn draw_choice(&mut self) -> u8 {
        self.choice
    }

    fn pick_child(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .map(|pick| pick.min(len - 1))
            .unwrap_or(0)
    }
}
