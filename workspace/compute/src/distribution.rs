use std::fmt;
use std::str::FromStr;

use model::{Cycle, Priority};
use tracing::{debug, instrument, trace};

use crate::error::ComputeError;

/// What the distributor does with cycles whose priority carries no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrankedPolicy {
    /// Unranked cycles never receive entities.
    #[default]
    Exclude,
    /// Unranked cycles form one more tier, processed after `Low`.
    LastTier,
}

impl fmt::Display for UnrankedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnrankedPolicy::Exclude => f.write_str("exclude"),
            UnrankedPolicy::LastTier => f.write_str("last-tier"),
        }
    }
}

impl FromStr for UnrankedPolicy {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude" => Ok(UnrankedPolicy::Exclude),
            "last-tier" | "last_tier" | "lasttier" => Ok(UnrankedPolicy::LastTier),
            other => Err(ComputeError::Configuration(format!(
                "unknown unranked policy '{}', expected 'exclude' or 'last-tier'",
                other
            ))),
        }
    }
}

/// Hands out a pool of entities across prioritized cycles.
///
/// Tiers are visited from the highest priority down. Inside a tier every
/// cycle with spare capacity gets an equal share, the first cycles in input
/// order absorb the remainder one unit each, and every share is clamped to
/// the cycle's capacity. Whatever a tier cannot absorb rolls to the next
/// tier; nothing is handed back to the tier it came from. Entities left after
/// the last tier are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Distributor {
    unranked_policy: UnrankedPolicy,
}

impl Distributor {
    pub fn new(unranked_policy: UnrankedPolicy) -> Self {
        Self { unranked_policy }
    }

    pub fn unranked_policy(&self) -> UnrankedPolicy {
        self.unranked_policy
    }

    /// Tiers in the order they are served.
    fn tiers(&self) -> Vec<Priority> {
        let mut tiers = Priority::RANKED.to_vec();
        if self.unranked_policy == UnrankedPolicy::LastTier {
            tiers.push(Priority::Neutral);
        }
        tiers
    }

    /// Distributes `total` entities over `cycles`.
    ///
    /// The result has one entry per cycle, in input order. A non-positive
    /// total or an empty cycle list yields all zeros.
    #[instrument(skip(self, cycles), fields(num_cycles = cycles.len()))]
    pub fn distribute(&self, total: i64, cycles: &[Cycle]) -> Vec<u32> {
        let mut result = vec![0u32; cycles.len()];

        if total <= 0 || cycles.is_empty() {
            trace!("Nothing to distribute");
            return result;
        }

        let mut remaining = total.unsigned_abs();

        for tier in self.tiers() {
            if remaining == 0 {
                break;
            }

            let members: Vec<usize> = cycles
                .iter()
                .enumerate()
                .filter(|(_, cycle)| cycle.priority == tier && cycle.available_entities > 0)
                .map(|(idx, _)| idx)
                .collect();

            if members.is_empty() {
                continue;
            }

            let before = remaining;
            remaining = distribute_tier(remaining, cycles, &members, &mut result);
            debug!(
                "Tier {} with {} cycles absorbed {} entities, {} remaining",
                tier,
                members.len(),
                before - remaining,
                remaining
            );
        }

        if remaining > 0 {
            debug!("{} entities could not be placed and are dropped", remaining);
        }

        result
    }
}

/// Splits `remaining` over the cycles at `members` and returns what is left.
fn distribute_tier(remaining: u64, cycles: &[Cycle], members: &[usize], result: &mut [u32]) -> u64 {
    let count = members.len() as u64;
    let share = remaining / count;
    let mut leftover = remaining % count;
    let mut remaining = remaining;

    for &idx in members {
        let extra = if leftover > 0 {
            leftover -= 1;
            1
        } else {
            0
        };
        let capacity = u64::from(cycles[idx].available_entities);
        let assigned = (share + extra).min(capacity);

        // assigned never exceeds a u32 capacity
        result[idx] = result[idx].saturating_add(u32::try_from(assigned).unwrap_or(u32::MAX));
        remaining -= assigned;
    }

    remaining
}

/// Distributes `total` entities over `cycles` with the default distributor.
pub fn distribute_entities(total: i64, cycles: &[Cycle]) -> Vec<u32> {
    Distributor::default().distribute(total, cycles)
}
