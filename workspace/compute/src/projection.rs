use model::{Cycle, EventProjection};
use tracing::{instrument, trace};

/// Stacks the events of the allocated cycles on top of a baseline forecast.
///
/// `allocation[i]` is the number of entities given to `cycles[i]`; a missing
/// entry counts as zero. Each cycle contributes `structure[d] * entities` to
/// day `d` for every day present in both its structure and `base`. Days are
/// matched by position, never by their `day` ordinal.
///
/// The returned vector is a fresh copy: `base` and the cycles are only read.
#[instrument(skip_all, fields(days = base.len(), num_cycles = cycles.len()))]
pub fn calculate_projection(
    base: &[EventProjection],
    cycles: &[Cycle],
    allocation: &[u32],
) -> Vec<EventProjection> {
    let mut result = base.to_vec();

    if base.is_empty() || cycles.is_empty() {
        trace!("Nothing to project, returning a copy of the baseline");
        return result;
    }

    for (cycle, &entities) in cycles.iter().zip(allocation) {
        if entities == 0 {
            continue;
        }

        trace!("Adding cycle '{}' with {} entities", cycle.name, entities);
        for (projection, structure) in result.iter_mut().zip(&cycle.structure) {
            projection.events.add_scaled(structure, entities);
        }
    }

    result
}
