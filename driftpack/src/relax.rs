use crate::{
    config::LayoutConfig,
    forces::apply_forces,
    node::Layout,
    rescale::rescale,
};

/// The overlap rescaler runs on every iteration that is a multiple of this.
pub const RESCALE_INTERVAL: u32 = 20;

/// Runs the full relaxation: `config.relaxation_iterations` force steps, with
/// a bounded rescale on every `RESCALE_INTERVAL`th iteration starting at the
/// first.
///
/// There's no early exit. Whatever overlap is left after the last iteration
/// is kept.
pub fn relax(layout: &mut Layout, config: &LayoutConfig) {
    log::trace!(
        "Relaxing {} nodes for {} iterations",
        layout.len(),
        config.relaxation_iterations
    );

    for iteration in 0..config.relaxation_iterations {
        apply_forces(layout, config);

        if iteration % RESCALE_INTERVAL == 0 {
            let passes = rescale(layout, config);

            if passes > 0 {
                log::trace!("Iteration {}: {} rescale passes", iteration, passes);
            }
        }
    }

    let residual = layout.overlapping_pairs(config.margin);
    if residual > 0 {
        log::debug!(
            "Relaxation finished with {} overlapping pairs remaining",
            residual
        );
    }
}
