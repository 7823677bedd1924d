use driftpack::Arrangement;

use ::image::Rgba;

use crate::image::{Image, Pixel};

/// Transparent white, matching what most viewers show behind a PNG.
const BACKGROUND: Pixel = Rgba([255, 255, 255, 0]);

/// Renders an arrangement. `sources` are the decoded input images, indexed
/// the same way as the sizes the layout was generated from.
pub(crate) fn render(arrangement: &Arrangement, sources: &[Image]) -> Image {
    let mut canvas = Image::new_filled_rgba8(arrangement.canvas_size(), BACKGROUND);

    for placement in arrangement.placements() {
        let source = &sources[placement.source()];
        let resized = source.resized(placement.size());

        canvas.composite(&resized, placement.position());
    }

    if arrangement.needs_fit() {
        log::debug!(
            "Fitting {}x{} canvas into {}x{}",
            arrangement.canvas_size().0,
            arrangement.canvas_size().1,
            arrangement.output_size().0,
            arrangement.output_size().1
        );

        canvas = canvas.resized(arrangement.output_size());
    }

    canvas
}
