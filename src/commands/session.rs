use std::{env, path::PathBuf};

use driftpack::{trial_seeds, LayoutConfig};

use crate::{
    data::Config,
    inputs::discover_images,
    options::GlobalOptions,
    output_name::output_file_name,
};

/// Holds everything shared by the trials of a single run: the resolved
/// config and the input images that were found.
#[derive(Debug)]
pub(super) struct CollageSession {
    pub config: Config,
    pub layout_config: LayoutConfig,

    /// Input image paths in load order.
    pub paths: Vec<PathBuf>,

    /// Seed that every trial's seed is derived from.
    pub master_seed: u64,
}

/// One output of a run.
#[derive(Debug, Clone)]
pub(super) struct Trial {
    pub seed: u64,
    pub output: String,
}

impl CollageSession {
    pub fn new(global: &GlobalOptions) -> anyhow::Result<Self> {
        log::trace!("Starting new collage session");

        let current_dir = env::current_dir()?;
        let mut config = Config::load(global.config.as_deref(), &current_dir)?;

        if let Some(path) = &config.file_path {
            log::debug!("Using config from {}", path.display());
        }

        if let Some(input) = &global.input {
            config.input_directory = input.clone();
        }
        if let Some(sort) = global.sort {
            config.sort = sort;
        }
        if let Some(trials) = global.trials {
            config.trial_count = trials;
        }
        if let Some(seed) = global.seed {
            config.seed = Some(seed);
        }

        let layout_config = config.layout_config();
        layout_config.validate()?;

        let paths = discover_images(&config.input_directory)?;

        let master_seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("Using seed {}", master_seed);

        Ok(Self {
            config,
            layout_config,
            paths,
            master_seed,
        })
    }

    pub fn trials(&self) -> Vec<Trial> {
        let count = self.layout_config.trials();

        trial_seeds(self.master_seed, count)
            .into_iter()
            .zip(0..)
            .map(|(seed, index)| Trial {
                seed,
                output: output_file_name(
                    &self.config.output_file,
                    self.layout_config.sort_mode,
                    index,
                    count,
                ),
            })
            .collect()
    }
}
