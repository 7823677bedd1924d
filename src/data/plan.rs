use std::path::{Path, PathBuf};

use driftpack::Arrangement;
use serde::{Deserialize, Serialize};

/// The placements computed for every trial of a run, without any pixels.
///
/// This is what `plan` prints, so that another tool can do its own
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Plan {
    pub sort: String,
    pub trials: Vec<TrialPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrialPlan {
    /// The file name `compose` would write this trial to.
    pub output: String,

    pub seed: u64,

    /// Size of the canvas that `images` are positioned on.
    pub canvas_size: (u32, u32),

    /// Size the canvas is resampled to after compositing.
    pub output_size: (u32, u32),

    /// Images in drawing order.
    pub images: Vec<ImagePlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImagePlan {
    pub path: PathBuf,
    pub position: (i64, i64),
    pub size: (u32, u32),
}

impl TrialPlan {
    pub fn new(output: String, seed: u64, arrangement: &Arrangement, paths: &[&Path]) -> Self {
        let images = arrangement
            .placements()
            .iter()
            .map(|placement| ImagePlan {
                path: paths[placement.source()].to_owned(),
                position: placement.position(),
                size: placement.size(),
            })
            .collect();

        Self {
            output,
            seed,
            canvas_size: arrangement.canvas_size(),
            output_size: arrangement.output_size(),
            images,
        }
    }
}
