use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Cannot lay out an empty set of images")]
    Empty,

    #[error("Image {index} has a zero width or height")]
    ZeroSizedImage { index: usize },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}
