use crate::{error::LayoutError, order::SortMode};

/// Every tunable parameter of a collage run.
///
/// A `LayoutConfig` is built once and then only ever borrowed, so each trial
/// sees exactly the same parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Size the final composite must fit inside. Half of it is the center
    /// that nodes are attracted to.
    pub target_size: (u32, u32),

    /// Extra distance added around every box before testing for overlap.
    pub margin: f64,

    /// Distance from the center that non-anchor nodes are seeded at.
    pub initial_radius: f64,

    /// Images larger than this in either axis are scaled down before layout.
    pub max_initial_dim: u32,

    pub sort_mode: SortMode,

    /// Number of independent outputs to produce. Only used by
    /// `SortMode::Random`.
    pub trial_count: u32,

    /// Multiplier applied to a node's scale every time it shrinks.
    pub scale_factor: f64,

    /// Smallest scale the overlap rescaler may shrink a node to.
    pub min_scale: f64,

    /// Upper bound on rescale passes per periodic rescale.
    pub max_rescale_attempts: u32,

    /// Largest distance a node may move in one relaxation iteration.
    pub max_movement: f64,

    pub repulsion_strength: f64,

    /// Per-axis base rate that nodes are pulled toward the center at.
    pub attraction_rate: (f64, f64),

    /// Extra attraction per unit of (length-normalized) node area.
    pub attraction_weight: f64,

    pub relaxation_iterations: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_size: (4096, 4096),
            margin: 8.0,
            initial_radius: 512.0,
            max_initial_dim: 512,
            sort_mode: SortMode::Random,
            trial_count: 25,
            scale_factor: 0.95,
            min_scale: 0.75,
            max_rescale_attempts: 16,
            max_movement: 128.0,
            repulsion_strength: 10.0,
            attraction_rate: (0.0001, 0.001),
            attraction_weight: 0.0001,
            relaxation_iterations: 4096,
        }
    }
}

impl LayoutConfig {
    /// The point nodes are attracted to and the anchor is placed at.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.target_size.0 / 2),
            f64::from(self.target_size.1 / 2),
        )
    }

    /// How many outputs a run with this config produces.
    pub fn trials(&self) -> u32 {
        if self.sort_mode.is_random() {
            self.trial_count
        } else {
            1
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        fn invalid(message: &str) -> Result<(), LayoutError> {
            Err(LayoutError::InvalidConfig(message.to_owned()))
        }

        if self.target_size.0 == 0 || self.target_size.1 == 0 {
            return invalid("target size must be non-zero in both axes");
        }

        if self.max_initial_dim == 0 {
            return invalid("maximum initial dimension must be non-zero");
        }

        if !(self.scale_factor > 0.0 && self.scale_factor < 1.0) {
            return invalid("scale factor must be between 0 and 1");
        }

        if !(self.min_scale > 0.0 && self.min_scale < 1.0) {
            return invalid("minimum scale must be between 0 and 1");
        }

        let non_negative = [
            ("margin", self.margin),
            ("initial radius", self.initial_radius),
            ("maximum movement", self.max_movement),
            ("repulsion strength", self.repulsion_strength),
            ("attraction rate", self.attraction_rate.0),
            ("attraction rate", self.attraction_rate.1),
            ("attraction weight", self.attraction_weight),
        ];

        for (name, value) in non_negative.iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number",
                    name
                )));
            }
        }

        if self.sort_mode.is_random() && self.trial_count == 0 {
            return invalid("random sorting needs at least one trial");
        }

        Ok(())
    }
}
