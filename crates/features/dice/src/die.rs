use crate::error::DieError;
use crate::sides::Sides;
use kata_domain::config::DiceConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// A fair die with `n` faces numbered `1..=n`.
///
/// Each die owns its generator. With a seed the sequence of rolls is fully
/// reproducible; without one the generator is seeded from OS entropy, so two
/// unseeded dice never share state.
///
/// Rolling takes `&mut self`: a die shared between threads has to be wrapped
/// in a lock by the caller.
#[derive(Debug)]
pub struct Die {
    sides: Sides,
    last_roll: Option<u64>,
    rng: StdRng,
}

impl Die {
    /// Constructs a die with `sides` faces.
    ///
    /// # Arguments
    /// * `sides` - Number of faces. Zero is accepted, but such a die cannot be rolled.
    /// * `seed` - `Some` for a deterministic sequence, `None` for OS entropy.
    ///
    /// # Errors
    /// Returns [`DieError::NegativeSides`] if `sides` is negative.
    ///
    /// # Example
    /// ```rust
    /// use kata_dice::Die;
    ///
    /// let mut a = Die::new(6, Some(42)).unwrap();
    /// let mut b = Die::new(6, Some(42)).unwrap();
    /// assert_eq!(a.roll().unwrap(), b.roll().unwrap());
    /// ```
    pub fn new(sides: i64, seed: Option<u64>) -> Result<Self, DieError> {
        match Sides::try_from(sides) {
            Ok(sides) => Ok(Self::from_sides(sides, seed)),
            Err(e) => {
                warn!(sides, "Rejected die construction");
                Err(e)
            },
        }
    }

    /// Constructs a die from an already validated side count.
    #[must_use]
    pub fn from_sides(sides: Sides, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        debug!(sides = sides.get(), seeded = seed.is_some(), "Die created");

        Self { sides, last_roll: None, rng }
    }

    /// Constructs a die from the `[dice]` configuration section.
    ///
    /// # Errors
    /// Returns [`DieError::NegativeSides`] if the configured side count is negative.
    pub fn from_config(config: &DiceConfig) -> Result<Self, DieError> {
        Self::new(config.sides, config.seed)
    }

    /// Number of faces, as given at construction.
    #[must_use]
    pub const fn sides(&self) -> u64 {
        self.sides.get()
    }

    /// Value of the most recent roll, `None` until the die has been rolled.
    #[must_use]
    pub const fn last_roll(&self) -> Option<u64> {
        self.last_roll
    }

    /// Rolls the die and returns a value drawn uniformly from `1..=sides`.
    ///
    /// The value is also kept as [`Die::last_roll`].
    ///
    /// # Errors
    /// Returns [`DieError::NoSides`] for a zero-sided die; `last_roll` is left untouched.
    pub fn roll(&mut self) -> Result<u64, DieError> {
        if self.sides.is_empty() {
            warn!("Attempted to roll a die with no sides");
            return Err(DieError::NoSides { context: None });
        }

        let value = self.rng.random_range(1..=self.sides.get());
        self.last_roll = Some(value);
        trace!(sides = self.sides.get(), value, "Die rolled");

        Ok(value)
    }
}

impl Default for Die {
    /// A six-sided die seeded from OS entropy.
    fn default() -> Self {
        Self::from_sides(Sides::D6, None)
    }
}
