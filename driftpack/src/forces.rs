use crate::{config::LayoutConfig, id::NodeId, node::Layout};

/// Added to the distance between two nodes so coincident nodes still get a
/// finite repulsion.
pub const REPULSION_EPSILON: f64 = 0.1;

/// Computes the movement `id` would make this iteration: repulsion from every
/// node its margined box overlaps, plus attraction toward the center, clamped
/// to `config.max_movement`.
///
/// The anchor never moves, so its force is always zero.
pub fn net_force(layout: &Layout, id: NodeId, config: &LayoutConfig) -> (f64, f64) {
    let node = layout.node(id);

    if node.is_anchor() {
        return (0.0, 0.0);
    }

    let (x, y) = node.position();
    let node_box = node.aabb();
    let mut force = (0.0, 0.0);

    for other_id in layout.ids() {
        if other_id == id {
            continue;
        }

        let other = layout.node(other_id);
        if !node_box.overlaps(&other.aabb(), config.margin) {
            continue;
        }

        let (other_x, other_y) = other.position();
        let dx = x - other_x;
        let dy = y - other_y;
        let factor = config.repulsion_strength / ((dx * dx + dy * dy).sqrt() + REPULSION_EPSILON);

        force.0 += dx * factor;
        force.1 += dy * factor;
    }

    // Area divided by a length, so bigger nodes sink toward the middle faster.
    let area_scale = node_box.width() * node_box.height() / f64::from(config.target_size.0);
    let center = config.center();

    force.0 += (center.0 - x) * (config.attraction_rate.0 + area_scale * config.attraction_weight);
    force.1 += (center.1 - y) * (config.attraction_rate.1 + area_scale * config.attraction_weight);

    let magnitude = (force.0 * force.0 + force.1 * force.1).sqrt();
    if magnitude > config.max_movement {
        let clamp = config.max_movement / magnitude;
        force.0 *= clamp;
        force.1 *= clamp;
    }

    force
}

/// Runs one relaxation step, moving every non-anchor node by its net force.
///
/// Nodes are moved one at a time in processing order, so a node sees the
/// already-updated positions of the nodes before it.
pub fn apply_forces(layout: &mut Layout, config: &LayoutConfig) {
    for id in layout.ids() {
        if layout.node(id).is_anchor() {
            continue;
        }

        let force = net_force(layout, id, config);
        let node = layout.node_mut(id);
        let (x, y) = node.position();
        node.set_position((x + force.0, y + force.1));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{node::downscale_initial, placement::place_initial};

    fn placed(sizes: Vec<(u32, u32)>, config: &LayoutConfig) -> Layout {
        let mut layout = Layout::new(sizes).unwrap();
        downscale_initial(&mut layout, config.max_initial_dim);
        place_initial(&mut layout, config);
        layout
    }

    #[test]
    fn anchor_feels_nothing() {
        let config = LayoutConfig::default();
        let mut layout = placed(vec![(300, 300), (300, 300), (300, 300)], &config);
        let anchor = layout.anchor().unwrap();
        let before = layout.node(anchor).position();

        assert_eq!(net_force(&layout, anchor, &config), (0.0, 0.0));

        for _ in 0..50 {
            apply_forces(&mut layout, &config);
        }

        assert_eq!(layout.node(anchor).position(), before);
    }

    #[test]
    fn overlapping_pair_separates() {
        let config = LayoutConfig {
            initial_radius: 256.0,
            ..LayoutConfig::default()
        };
        let mut layout = placed(vec![(600, 600), (600, 600)], &config);
        assert_eq!(layout.nodes()[1].size(), (512, 512));

        let mover = NodeId::new(1);
        let before = layout.node(mover).position();
        let force = net_force(&layout, mover, &config);

        // Repulsion (about 10) outweighs the pull toward the center (about
        // 1.7), pushing the node further out along +x.
        assert!(force.0 > 5.0, "{:?}", force);
        assert!(force.1.abs() < 1e-9);

        apply_forces(&mut layout, &config);
        let after = layout.node(mover).position();
        assert!(after.0 > before.0);
    }

    #[test]
    fn isolated_node_is_attracted() {
        let config = LayoutConfig::default();
        let mut layout = placed(vec![(10, 10), (10, 10)], &config);

        let mover = NodeId::new(1);
        let force = net_force(&layout, mover, &config);
        assert!(force.0 < 0.0);

        apply_forces(&mut layout, &config);
        assert!(layout.node(mover).position().0 < 2048.0 + 512.0);
    }

    #[test]
    fn coincident_nodes_stay_finite() {
        let config = LayoutConfig {
            initial_radius: 0.0,
            ..LayoutConfig::default()
        };
        let mut layout = placed(vec![(50, 50), (50, 50)], &config);

        apply_forces(&mut layout, &config);

        let (x, y) = layout.node(NodeId::new(1)).position();
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn movement_is_clamped() {
        let config = LayoutConfig {
            repulsion_strength: 10_000.0,
            max_movement: 16.0,
            initial_radius: 40.0,
            ..LayoutConfig::default()
        };
        let mut layout = placed(vec![(200, 120); 12], &config);

        for _ in 0..40 {
            let before: Vec<_> = layout.nodes().iter().map(|node| node.position()).collect();
            apply_forces(&mut layout, &config);

            for (node, old) in layout.nodes().iter().zip(before) {
                let (x, y) = node.position();
                let moved = ((x - old.0).powi(2) + (y - old.1).powi(2)).sqrt();
                assert!(moved <= config.max_movement + 1e-9, "moved {}", moved);
            }
        }
    }

    #[test]
    fn clamp_keeps_direction() {
        let config = LayoutConfig {
            repulsion_strength: 1_000.0,
            max_movement: 2.0,
            initial_radius: 10.0,
            ..LayoutConfig::default()
        };
        let layout = placed(vec![(100, 100), (100, 100)], &config);

        let force = net_force(&layout, NodeId::new(1), &config);
        let magnitude = (force.0 * force.0 + force.1 * force.1).sqrt();

        assert!((magnitude - 2.0).abs() < 1e-9);
        assert!(force.0 > 0.0);
    }
}
