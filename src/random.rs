use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness used to break ties between equally good moves.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks an element uniformly, or `None` if the slice is empty.
    fn get_random_from_slice<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        let index = usize::try_from(self.next_range(0, len)).ok()?;
        items.get(index)
    }
}

/// Thread-local generator from the `rand` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seedable linear congruential generator, for reproducible searches.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER_A)
            .wrapping_add(INCREMENT_C)
            % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}
