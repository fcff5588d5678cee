//! Seedable source of random draws for the maze generator

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{MazeError, Result};

/// Uniform integer generator.
///
/// With a seed the sequence of draws is reproducible within one build of
/// this crate; without a seed it is drawn from OS entropy.
pub struct RandomSource {
    random: StdRng,
}

impl RandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Uniformly distributed integer in `[0, bound)`
    ///
    /// # Examples
    /// ```
    /// use maze_solver::RandomSource;
    ///
    /// let mut random = RandomSource::new(Some(7));
    /// assert!(random.next_int(3).unwrap() < 3);
    /// assert!(random.next_int(0).is_err());
    /// ```
    pub fn next_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(MazeError::InvalidArgument(
                "random bound must be positive".to_string(),
            ));
        }
        Ok(self.random.gen_range(0..bound))
    }
}
