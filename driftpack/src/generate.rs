use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::LayoutConfig,
    error::LayoutError,
    node::{downscale_initial, Layout},
    order::order_nodes,
    placement::place_initial,
    relax::relax,
};

/// Runs one complete trial: downscale, order, place, and relax.
///
/// The result depends only on the arguments. `seed` is only consumed when
/// the config's sort mode is random, so the other modes give identical
/// layouts for any seed.
pub fn generate_layout(
    config: &LayoutConfig,
    sizes: &[(u32, u32)],
    seed: u64,
) -> Result<Layout, LayoutError> {
    config.validate()?;

    let mut layout = Layout::new(sizes.iter().copied())?;
    let mut rng = StdRng::seed_from_u64(seed);

    downscale_initial(&mut layout, config.max_initial_dim);
    order_nodes(&mut layout, config.sort_mode, &mut rng);
    place_initial(&mut layout, config);
    relax(&mut layout, config);

    Ok(layout)
}

/// Derives one independent seed per trial from a single master seed.
pub fn trial_seeds(master_seed: u64, count: u32) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(master_seed);

    (0..count).map(|_| rng.random()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{export::export, node::Node, order::SortMode};

    fn quick_config(sort_mode: SortMode) -> LayoutConfig {
        LayoutConfig {
            sort_mode,
            relaxation_iterations: 120,
            trial_count: 4,
            ..LayoutConfig::default()
        }
    }

    fn sizes() -> Vec<(u32, u32)> {
        vec![(640, 480), (300, 300), (1024, 200), (90, 160), (250, 400)]
    }

    #[test]
    fn deterministic_without_randomness() {
        let config = quick_config(SortMode::None);

        let first = generate_layout(&config, &sizes(), 1).unwrap();
        let second = generate_layout(&config, &sizes(), 99).unwrap();

        assert_eq!(first, second);
        assert_eq!(export(&first, &config), export(&second, &config));
    }

    #[test]
    fn random_trials_use_every_image_once() {
        let config = quick_config(SortMode::Random);
        let seeds = trial_seeds(5, config.trials());
        assert_eq!(seeds.len(), 4);

        for seed in seeds {
            let layout = generate_layout(&config, &sizes(), seed).unwrap();
            let mut sources: Vec<_> = layout.nodes().iter().map(Node::source).collect();
            sources.sort();

            assert_eq!(sources, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn trial_seeds_are_reproducible() {
        assert_eq!(trial_seeds(3, 6), trial_seeds(3, 6));

        let seeds = trial_seeds(3, 6);
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn single_image_scenario() {
        let config = quick_config(SortMode::Area);
        let layout = generate_layout(&config, &[(800, 600)], 0).unwrap();

        let node = &layout.nodes()[0];
        assert!(node.is_anchor());
        assert_eq!(node.size(), (512, 384));
        assert_eq!(node.position(), config.center());
        assert_eq!(export(&layout, &config).canvas_size(), (512, 384));
    }

    #[test]
    fn output_fits_target() {
        let config = LayoutConfig {
            target_size: (600, 500),
            ..quick_config(SortMode::Height)
        };
        let layout = generate_layout(&config, &sizes(), 0).unwrap();
        let arrangement = export(&layout, &config);

        let (width, height) = arrangement.output_size();
        assert!(width <= 600 && height <= 500);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = LayoutConfig {
            scale_factor: 2.0,
            ..LayoutConfig::default()
        };

        assert!(matches!(
            generate_layout(&config, &sizes(), 0),
            Err(LayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let config = quick_config(SortMode::None);

        assert!(matches!(
            generate_layout(&config, &[], 0),
            Err(LayoutError::Empty)
        ));
    }
}
