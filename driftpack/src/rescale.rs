use crate::{config::LayoutConfig, node::Layout};

/// Sweeps every unordered pair of nodes once. For each pair whose margined
/// boxes overlap, the node with the smaller area is shrunk by
/// `config.scale_factor`, unless that would take it below `config.min_scale`.
///
/// Sizes are updated as the sweep goes, so later pairs see earlier shrinks.
/// Returns whether any node changed.
pub fn rescale_pass(layout: &mut Layout, config: &LayoutConfig) -> bool {
    let mut changed = false;
    let count = layout.len();
    let nodes = layout.nodes_mut();

    for i in 0..count {
        for j in (i + 1)..count {
            if !nodes[i].aabb().overlaps(&nodes[j].aabb(), config.margin) {
                continue;
            }

            // Ties shrink the later node.
            let smaller = if nodes[i].area() < nodes[j].area() {
                i
            } else {
                j
            };

            let node = &mut nodes[smaller];
            let new_scale = node.scale() * config.scale_factor;

            if new_scale >= config.min_scale {
                node.set_scale(new_scale);
                changed = true;
            }
        }
    }

    changed
}

/// Repeats [`rescale_pass`] until a pass changes nothing or
/// `config.max_rescale_attempts` passes have run. Returns the number of passes
/// that changed something.
pub fn rescale(layout: &mut Layout, config: &LayoutConfig) -> u32 {
    let mut productive = 0;

    for attempt in 0..config.max_rescale_attempts {
        if !rescale_pass(layout, config) {
            log::trace!("Rescale settled after {} passes", attempt);
            break;
        }

        productive += 1;
    }

    productive
}
