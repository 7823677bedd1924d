use crate::{config::LayoutConfig, geometry::Aabb, node::Layout};

/// Final transform for one image, relative to the top-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub(crate) source: usize,
    pub(crate) position: (i64, i64),
    pub(crate) size: (u32, u32),
}

impl Placement {
    /// Index of the image in the list the layout was built from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Top-left corner of the image on the canvas.
    #[inline]
    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    /// Size the image should be resampled to before compositing.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

/// Everything a compositor needs to render a finished layout.
///
/// Placements are in processing order; later placements draw over earlier
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub(crate) canvas_size: (u32, u32),
    pub(crate) output_size: (u32, u32),
    pub(crate) placements: Vec<Placement>,
}

impl Arrangement {
    /// Size of the tight canvas the placements are positioned on.
    #[inline]
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Size of the final image after it has been fit inside the target size.
    /// Equal to `canvas_size` when the canvas already fits.
    #[inline]
    pub fn output_size(&self) -> (u32, u32) {
        self.output_size
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn needs_fit(&self) -> bool {
        self.output_size != self.canvas_size
    }
}

/// Smallest box containing every node.
pub fn bounds(layout: &Layout) -> Aabb {
    let mut nodes = layout.nodes().iter();

    // Layouts are never empty.
    let first = match nodes.next() {
        Some(node) => node.aabb(),
        None => {
            return Aabb {
                min: (0.0, 0.0),
                max: (0.0, 0.0),
            }
        }
    };

    nodes.fold(first, |acc, node| acc.union(&node.aabb()))
}

/// Freezes a layout into canvas-relative placements.
pub fn export(layout: &Layout, config: &LayoutConfig) -> Arrangement {
    let bounds = bounds(layout);
    let canvas_size = (bounds.width() as u32, bounds.height() as u32);

    let placements = layout
        .nodes()
        .iter()
        .map(|node| {
            let (x, y) = node.position();
            let (width, height) = node.size();

            Placement {
                source: node.source(),
                position: (
                    (x - f64::from(width) / 2.0 - bounds.min.0) as i64,
                    (y - f64::from(height) / 2.0 - bounds.min.1) as i64,
                ),
                size: (width, height),
            }
        })
        .collect();

    let output_size = fit_to_target(canvas_size, config.target_size);

    log::debug!(
        "Exported canvas {}x{} (output {}x{})",
        canvas_size.0,
        canvas_size.1,
        output_size.0,
        output_size.1
    );

    Arrangement {
        canvas_size,
        output_size,
        placements,
    }
}

/// Uniformly shrinks `size` to fit inside `target`. Never enlarges.
pub fn fit_to_target(size: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    if size.0 == 0 || size.1 == 0 {
        return size;
    }

    let scale = (f64::from(target.0) / f64::from(size.0))
        .min(f64::from(target.1) / f64::from(size.1));

    if scale < 1.0 {
        (
            ((f64::from(size.0) * scale) as u32).max(1),
            ((f64::from(size.1) * scale) as u32).max(1),
        )
    } else {
        size
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{id::NodeId, node::downscale_initial, placement::place_initial};

    #[test]
    fn single_image_canvas() {
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(800, 600)]).unwrap();
        downscale_initial(&mut layout, config.max_initial_dim);
        place_initial(&mut layout, &config);

        let arrangement = export(&layout, &config);

        assert_eq!(arrangement.canvas_size(), (512, 384));
        assert_eq!(arrangement.output_size(), (512, 384));
        assert!(!arrangement.needs_fit());
        assert_eq!(arrangement.placements()[0].position(), (0, 0));
        assert_eq!(arrangement.placements()[0].size(), (512, 384));
    }

    #[test]
    fn placements_relative_to_bounds() {
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(100, 50), (20, 20)]).unwrap();
        layout.node_mut(NodeId::new(0)).set_position((1000.0, 1000.0));
        layout.node_mut(NodeId::new(1)).set_position((1100.0, 900.0));

        let arrangement = export(&layout, &config);

        // x spans 950..1110, y spans 890..1025
        assert_eq!(arrangement.canvas_size(), (160, 135));

        let placements = arrangement.placements();
        assert_eq!(placements[0].position(), (0, 85));
        assert_eq!(placements[1].position(), (140, 0));
        assert_eq!(placements[1].source(), 1);
    }

    #[test]
    fn fits_inside_target() {
        assert_eq!(fit_to_target((8000, 2000), (4096, 4096)), (4096, 1024));
        assert_eq!(fit_to_target((1000, 3000), (1500, 1500)), (500, 1500));
        assert_eq!(fit_to_target((100, 100), (4096, 4096)), (100, 100));
    }

    #[test]
    fn oversized_canvas_is_fit() {
        let config = LayoutConfig {
            target_size: (300, 300),
            ..LayoutConfig::default()
        };
        let mut layout = Layout::new(vec![(400, 200), (400, 200)]).unwrap();
        layout.node_mut(NodeId::new(0)).set_position((0.0, 0.0));
        layout.node_mut(NodeId::new(1)).set_position((400.0, 0.0));

        let arrangement = export(&layout, &config);

        assert_eq!(arrangement.canvas_size(), (800, 200));
        assert_eq!(arrangement.output_size(), (300, 75));
        assert!(arrangement.needs_fit());
    }
}
