//! Driftpack arranges rectangles into a tight cluster around a center point.
//! It was built to lay out images for a weighted collage, where bigger images
//! gravitate toward the middle and smaller ones fill in around them.
//!
//! Instead of a bin-packing algorithm, Driftpack uses a small pseudo-physics
//! simulation:
//!
//! 1. Oversized rectangles are scaled down to a maximum dimension.
//! 2. Rectangles are ordered (by area, width, height, randomly, or not at all)
//!    and the first one becomes the fixed *anchor* at the center.
//! 3. The rest are seeded on a ring around the anchor.
//! 4. For a fixed number of iterations, overlapping rectangles push each other
//!    apart while everything is pulled toward the center. Every 20th
//!    iteration, rectangles that still overlap are shrunk a little, down to a
//!    configurable floor.
//!
//! The result is best-effort: the layout may still contain some overlap, and
//! no claim is made about the area it covers.
//!
//! ## Example
//! ```
//! use driftpack::{export, generate_layout, LayoutConfig, SortMode};
//!
//! let config = LayoutConfig {
//!     sort_mode: SortMode::Area,
//!     relaxation_iterations: 64,
//!     ..LayoutConfig::default()
//! };
//!
//! // The sizes of the images to arrange. Results refer back to them by index.
//! let sizes = [(800, 600), (300, 300), (120, 400)];
//!
//! let layout = generate_layout(&config, &sizes, 0)?;
//! let arrangement = export(&layout, &config);
//!
//! assert_eq!(arrangement.placements().len(), 3);
//! # Ok::<(), driftpack::LayoutError>(())
//! ```

mod config;
mod error;
mod export;
mod forces;
mod generate;
mod geometry;
mod id;
mod node;
mod order;
mod placement;
mod relax;
mod rescale;

pub use config::*;
pub use error::*;
pub use export::*;
pub use forces::*;
pub use generate::*;
pub use geometry::*;
pub use id::*;
pub use node::*;
pub use order::*;
pub use placement::*;
pub use relax::*;
pub use rescale::*;
