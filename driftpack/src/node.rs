use crate::{error::LayoutError, geometry::Aabb, id::NodeId};

/// Placement state for a single image.
///
/// Nodes never see pixels. `source` is the index of the image in the list the
/// layout was built from, which callers use to find their image again.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    source: usize,
    original_size: (u32, u32),
    size: (u32, u32),
    scale: f64,
    position: (f64, f64),
    anchor: bool,
}

impl Node {
    fn new(source: usize, original_size: (u32, u32)) -> Self {
        Self {
            source,
            original_size,
            size: original_size,
            scale: 1.0,
            position: (0.0, 0.0),
            anchor: false,
        }
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    /// Current size, derived from the original size and `scale`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Center of the node in canvas space.
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }

    // Only the initial downscale and the overlap rescaler change scale.
    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.size = (
            scaled_dimension(self.original_size.0, scale),
            scaled_dimension(self.original_size.1, scale),
        );
    }

    // Only initial placement and the force solver move nodes.
    pub(crate) fn set_position(&mut self, position: (f64, f64)) {
        self.position = position;
    }

    pub(crate) fn set_anchor(&mut self, anchor: bool) {
        self.anchor = anchor;
    }
}

// Never collapses a dimension to zero, even for extreme aspect ratios.
fn scaled_dimension(original: u32, scale: f64) -> u32 {
    ((f64::from(original) * scale).round() as u32).max(1)
}

/// The working set of one run: every node in processing order, sharing one
/// coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    nodes: Vec<Node>,
}

impl Layout {
    /// Creates an unplaced layout from image sizes. Node `i` gets source `i`.
    pub fn new<I>(sizes: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let nodes = sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| {
                if size.0 == 0 || size.1 == 0 {
                    Err(LayoutError::ZeroSizedImage { index })
                } else {
                    Ok(Node::new(index, size))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if nodes.is_empty() {
            return Err(LayoutError::Empty);
        }

        Ok(Self { nodes })
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn anchor(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(Node::is_anchor)
            .map(NodeId::new)
    }

    /// Number of unordered node pairs whose margined boxes overlap.
    pub fn overlapping_pairs(&self, margin: f64) -> usize {
        let mut count = 0;

        for (i, a) in self.nodes.iter().enumerate() {
            let a_box = a.aabb();

            for b in &self.nodes[i + 1..] {
                if a_box.overlaps(&b.aabb(), margin) {
                    count += 1;
                }
            }
        }

        count
    }
}

/// Caps every node at `max_dim` pixels in both axes, preserving aspect ratio.
///
/// Nodes that already fit are left untouched.
pub fn downscale_initial(layout: &mut Layout, max_dim: u32) {
    let max_dim = f64::from(max_dim);

    for node in layout.nodes_mut() {
        let (width, height) = node.original_size;

        if f64::from(width) > max_dim || f64::from(height) > max_dim {
            let scale = (max_dim / f64::from(width)).min(max_dim / f64::from(height));

            log::trace!(
                "Downscaling image {} from {}x{} by {}",
                node.source,
                width,
                height,
                scale
            );

            node.set_scale(scale);
        }
    }
}
