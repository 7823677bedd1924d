use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom, Rng};

use crate::node::{Layout, Node};

/// How nodes are ordered before placement. The first node in the resulting
/// order becomes the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Keep the order images were loaded in.
    None,

    /// Largest area first.
    Area,

    /// Widest first.
    Width,

    /// Tallest first.
    Height,

    /// A fresh uniform shuffle for every trial. Random mode also makes a run
    /// produce several independent outputs instead of one.
    Random,
}

impl SortMode {
    pub fn name(self) -> &'static str {
        match self {
            SortMode::None => "NONE",
            SortMode::Area => "AREA",
            SortMode::Width => "WIDTH",
            SortMode::Height => "HEIGHT",
            SortMode::Random => "RANDOM",
        }
    }

    #[inline]
    pub fn is_random(self) -> bool {
        self == SortMode::Random
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(value: &str) -> Result<SortMode, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Ok(SortMode::None),
            "area" => Ok(SortMode::Area),
            "width" => Ok(SortMode::Width),
            "height" => Ok(SortMode::Height),
            "random" => Ok(SortMode::Random),

            _ => Err(format!(
                "Invalid sort mode '{}'. Valid options are 'none', 'area', 'width', 'height' and 'random'.",
                value
            )),
        }
    }
}

/// Reorders the layout's nodes in place. `rng` is only drawn from in random
/// mode.
pub fn order_nodes<R: Rng + ?Sized>(layout: &mut Layout, mode: SortMode, rng: &mut R) {
    let nodes = layout.nodes_mut();

    match mode {
        SortMode::None => {}
        SortMode::Area => nodes.sort_by(|a, b| b.area().cmp(&a.area())),
        SortMode::Width => nodes.sort_by_key(|node| std::cmp::Reverse(node.size().0)),
        SortMode::Height => nodes.sort_by_key(|node| std::cmp::Reverse(node.size().1)),
        SortMode::Random => nodes.shuffle(rng),
    }

    log::trace!(
        "Processing order for {}: {:?}",
        mode,
        nodes.iter().map(Node::source).collect::<Vec<_>>()
    );
}
