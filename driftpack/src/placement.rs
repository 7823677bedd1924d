use std::f64::consts::PI;

use crate::{config::LayoutConfig, node::Layout};

/// Total angle the non-anchor nodes are spread over: three full turns.
pub const SEED_ANGLE_SPAN: f64 = 6.0 * PI;

/// Seeds every node's position.
///
/// The first node becomes the anchor and sits on the center. The rest are
/// spread at `initial_radius` from the center, stepping `SEED_ANGLE_SPAN /
/// (n - 1)` radians at a time.
pub fn place_initial(layout: &mut Layout, config: &LayoutConfig) {
    let center = config.center();
    let radius = config.initial_radius;
    let others = layout.len().saturating_sub(1).max(1);
    let angle_step = SEED_ANGLE_SPAN / others as f64;

    for (i, node) in layout.nodes_mut().iter_mut().enumerate() {
        if i == 0 {
            node.set_anchor(true);
            node.set_position(center);
            continue;
        }

        node.set_anchor(false);

        let angle = angle_step * (i - 1) as f64;
        node.set_position((
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::node::Node;

    fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn single_node_is_anchor_at_center() {
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(64, 64)]).unwrap();
        place_initial(&mut layout, &config);

        let node = &layout.nodes()[0];
        assert!(node.is_anchor());
        assert_eq!(node.position(), (2048.0, 2048.0));
    }

    #[test]
    fn exactly_one_anchor() {
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(10, 10); 9]).unwrap();
        place_initial(&mut layout, &config);

        let anchors = layout.nodes().iter().filter(|node| node.is_anchor()).count();
        assert_eq!(anchors, 1);
        assert_eq!(layout.anchor().map(|id| id.index()), Some(0));
    }

    #[test]
    fn others_on_the_ring() {
        let config = LayoutConfig {
            initial_radius: 300.0,
            ..LayoutConfig::default()
        };
        let mut layout = Layout::new(vec![(10, 10); 7]).unwrap();
        place_initial(&mut layout, &config);

        for node in layout.nodes().iter().filter(|node| !node.is_anchor()) {
            assert!((distance(node.position(), config.center()) - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn two_nodes_are_collinear() {
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(512, 512), (512, 512)]).unwrap();
        place_initial(&mut layout, &config);

        let positions: Vec<_> = layout.nodes().iter().map(Node::position).collect();
        assert_eq!(positions[0], (2048.0, 2048.0));
        assert_eq!(positions[1], (2048.0 + 512.0, 2048.0));
    }

    #[test]
    fn angles_span_three_turns() {
        // With 4 non-anchor nodes the step is 6π/4, so the third node lands
        // at 3π, opposite the first.
        let config = LayoutConfig::default();
        let mut layout = Layout::new(vec![(10, 10); 5]).unwrap();
        place_initial(&mut layout, &config);

        let center = config.center();
        let third = layout.nodes()[3].position();
        assert!((third.0 - (center.0 - 512.0)).abs() < 1e-9);
        assert!((third.1 - center.1).abs() < 1e-9);
    }
}
