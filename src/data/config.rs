use std::{
    io,
    path::{Path, PathBuf},
};

use driftpack::{LayoutConfig, SortMode};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CONFIG_FILENAME: &str = "collage.toml";

/// Configuration for a collage run, contained in a collage.toml file.
///
/// Every key is optional. Missing keys, or a missing file, fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The folder that images are read from. Only the top level is searched.
    pub input_directory: PathBuf,

    /// Template for output file names. Every `#` is replaced with the sort
    /// mode, followed by the trial number when more than one collage is
    /// generated.
    pub output_file: String,

    /// The size that the finished collage must fit inside.
    pub target_size: (u32, u32),

    /// Minimum gap to leave between images, in pixels.
    pub margin_distance: f64,

    /// How far from the center images start out, in pixels.
    pub initial_radius: f64,

    /// Images larger than this in either axis are scaled down before layout.
    pub max_initial_dim: u32,

    #[serde(with = "sort_mode")]
    pub sort: SortMode,

    /// How many collages to generate. Only used when `sort` is random.
    pub trial_count: u32,

    /// How much an image is shrunk each time it's found overlapping another.
    pub scale_factor: f64,

    /// The smallest scale overlap resolution may shrink an image to.
    pub max_scale_down: f64,

    pub max_rescale_attempts: u32,

    pub max_movement_per_iter: f64,

    pub repulsion_strength: f64,

    /// Rate that images are pulled toward the center, per axis.
    pub attraction_rate: (f64, f64),

    /// Extra pull toward the center given to larger images.
    pub attraction_weight: f64,

    pub relaxation_iterations: u32,

    /// Seed for random mode. When absent, a new seed is drawn every run.
    pub seed: Option<u64>,

    /// The path that this config came from, if any.
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let layout = LayoutConfig::default();

        Self {
            input_directory: PathBuf::from("collage"),
            output_file: String::from("collage-#.png"),
            target_size: layout.target_size,
            margin_distance: layout.margin,
            initial_radius: layout.initial_radius,
            max_initial_dim: layout.max_initial_dim,
            sort: layout.sort_mode,
            trial_count: layout.trial_count,
            scale_factor: layout.scale_factor,
            max_scale_down: layout.min_scale,
            max_rescale_attempts: layout.max_rescale_attempts,
            max_movement_per_iter: layout.max_movement,
            repulsion_strength: layout.repulsion_strength,
            attraction_rate: layout.attraction_rate,
            attraction_weight: layout.attraction_weight,
            relaxation_iterations: layout.relaxation_iterations,
            seed: None,
            file_path: None,
        }
    }
}

impl Config {
    /// Reads the config at `path` if one is given, otherwise looks for a
    /// collage.toml in `fallback_folder` and uses defaults if there isn't one.
    pub fn load(path: Option<&Path>, fallback_folder: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read_from_folder_or_file(path),
            None => match Self::read_from_folder(fallback_folder) {
                Ok(config) => Ok(config),
                Err(err) if err.is_not_found() => {
                    log::debug!("No {} found, using default config", CONFIG_FILENAME);
                    Ok(Self::default())
                }
                Err(err) => Err(err),
            },
        }
    }

    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read(path)?;

        let mut config: Self = toml::from_slice(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = Some(path.to_owned());

        log::trace!("Read config from {}", path.display());

        Ok(config)
    }

    /// The parameters handed to the layout engine.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            target_size: self.target_size,
            margin: self.margin_distance,
            initial_radius: self.initial_radius,
            max_initial_dim: self.max_initial_dim,
            sort_mode: self.sort,
            trial_count: self.trial_count,
            scale_factor: self.scale_factor,
            min_scale: self.max_scale_down,
            max_rescale_attempts: self.max_rescale_attempts,
            max_movement: self.max_movement_per_iter,
            repulsion_strength: self.repulsion_strength,
            attraction_rate: self.attraction_rate,
            attraction_weight: self.attraction_weight,
            relaxation_iterations: self.relaxation_iterations,
        }
    }
}

// SortMode lives in driftpack, which knows nothing about serde. It's stored
// as its case-insensitive name.
mod sort_mode {
    use driftpack::SortMode;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &SortMode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.name().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SortMode, D::Error> {
        let name = String::deserialize(deserializer)?;

        name.parse().map_err(D::Error::custom)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
