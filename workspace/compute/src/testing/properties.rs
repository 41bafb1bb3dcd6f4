use model::{Cycle, CycleDay, EventCounts, EventProjection, Priority};
use proptest::prelude::*;

use crate::distribution::{Distributor, UnrankedPolicy, distribute_entities};
use crate::projection::calculate_projection;

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
        Just(Priority::Neutral),
    ]
}

fn arb_ranked_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
}

fn arb_day() -> impl Strategy<Value = CycleDay> {
    (0u64..10, 0u64..10, 0u64..10, 0u64..10)
        .prop_map(|(meetings, emails, calls, follows)| CycleDay::new(0, meetings, emails, calls, follows))
}

fn arb_cycles(max: usize) -> impl Strategy<Value = Vec<Cycle>> {
    prop::collection::vec(
        (0u32..15, arb_priority(), prop::collection::vec(arb_day(), 0..7)),
        0..max,
    )
    .prop_map(|cycles| {
        cycles
            .into_iter()
            .enumerate()
            .map(|(idx, (available, priority, structure))| {
                Cycle::with_structure(format!("cycle-{}", idx), available, priority, structure)
            })
            .collect()
    })
}

fn arb_base() -> impl Strategy<Value = Vec<EventProjection>> {
    prop::collection::vec((0u64..20, 0u64..20, 0u64..20, 0u64..20), 0..7).prop_map(|days| {
        days.into_iter()
            .enumerate()
            .map(|(idx, (m, e, c, f))| EventProjection::new(idx as u32 + 1, EventCounts::new(m, e, c, f)))
            .collect()
    })
}

fn subtract(lhs: EventCounts, rhs: EventCounts) -> EventCounts {
    EventCounts::new(
        lhs.meetings - rhs.meetings,
        lhs.emails - rhs.emails,
        lhs.calls - rhs.calls,
        lhs.follows - rhs.follows,
    )
}

fn add(lhs: EventCounts, rhs: EventCounts) -> EventCounts {
    EventCounts::new(
        lhs.meetings + rhs.meetings,
        lhs.emails + rhs.emails,
        lhs.calls + rhs.calls,
        lhs.follows + rhs.follows,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: non-positive totals distribute nothing.
    #[test]
    fn prop_non_positive_total_gives_zeros(cycles in arb_cycles(8), total in -50i64..=0) {
        let result = distribute_entities(total, &cycles);
        prop_assert_eq!(result.len(), cycles.len());
        prop_assert!(result.iter().all(|&a| a == 0));
    }

    /// Property: the distribution never exceeds the total nor any capacity.
    #[test]
    fn prop_distribution_respects_bounds(cycles in arb_cycles(8), total in 0i64..80) {
        let result = distribute_entities(total, &cycles);

        prop_assert_eq!(result.len(), cycles.len());
        prop_assert!(result.iter().map(|&a| i64::from(a)).sum::<i64>() <= total);
        for (cycle, &allocated) in cycles.iter().zip(&result) {
            prop_assert!(allocated <= cycle.available_entities);
            if cycle.available_entities == 0 || cycle.priority == Priority::Neutral {
                prop_assert_eq!(allocated, 0);
            }
        }
    }

    /// Property: when one tier has room for everything, shares differ by at
    /// most one and add up to the total.
    #[test]
    fn prop_single_tier_is_fair(
        (total, capacities, priority) in (1usize..6, 0u32..50).prop_flat_map(|(n, total)| {
            (Just(total), prop::collection::vec(total..total + 10, n), arb_ranked_priority())
        })
    ) {
        let cycles: Vec<Cycle> = capacities
            .iter()
            .enumerate()
            .map(|(idx, &available)| Cycle::new(format!("cycle-{}", idx), available, priority))
            .collect();

        let result = distribute_entities(i64::from(total), &cycles);
        let max = result.iter().copied().max().unwrap_or(0);
        let min = result.iter().copied().min().unwrap_or(0);

        prop_assert!(max - min <= 1);
        prop_assert_eq!(result.iter().sum::<u32>(), total);
    }

    /// Property: a lower tier only receives entities after every higher tier
    /// with participants had at least one cycle filled to capacity.
    #[test]
    fn prop_higher_tiers_served_first(cycles in arb_cycles(8), total in 1i64..80) {
        let result = distribute_entities(total, &cycles);

        for lower in 1u8..3 {
            let lower_received = cycles
                .iter()
                .zip(&result)
                .any(|(c, &a)| c.priority.rank() == Some(lower) && a > 0);
            if !lower_received {
                continue;
            }

            for higher in 0..lower {
                let participants: Vec<(&Cycle, u32)> = cycles
                    .iter()
                    .zip(result.iter().copied())
                    .filter(|(c, _)| c.priority.rank() == Some(higher) && c.available_entities > 0)
                    .collect();
                if participants.is_empty() {
                    continue;
                }
                prop_assert!(participants.iter().any(|(c, a)| *a == c.available_entities));
            }
        }
    }

    /// Property: placing unranked cycles last never changes what ranked cycles get.
    #[test]
    fn prop_last_tier_only_adds_to_neutral(cycles in arb_cycles(8), total in 0i64..80) {
        let excluded = Distributor::new(UnrankedPolicy::Exclude).distribute(total, &cycles);
        let last = Distributor::new(UnrankedPolicy::LastTier).distribute(total, &cycles);

        for ((cycle, &a), &b) in cycles.iter().zip(&excluded).zip(&last) {
            if cycle.priority == Priority::Neutral {
                prop_assert!(b >= a);
            } else {
                prop_assert_eq!(a, b);
            }
        }
        prop_assert!(last.iter().map(|&a| i64::from(a)).sum::<i64>() <= total);
    }

    /// Property: a zero allocation leaves the baseline unchanged.
    #[test]
    fn prop_zero_allocation_is_identity(base in arb_base(), cycles in arb_cycles(6)) {
        let zeros = vec![0u32; cycles.len()];
        let result = calculate_projection(&base, &cycles, &zeros);
        prop_assert_eq!(result, base);
    }

    /// Property: projecting two disjoint parts of an allocation separately
    /// and summing them, minus one baseline, equals projecting the whole.
    #[test]
    fn prop_projection_is_additive(
        base in arb_base(),
        cycles in arb_cycles(6),
        total in 0i64..40,
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let allocation = distribute_entities(total, &cycles);
        let part_a: Vec<u32> = allocation.iter().enumerate().map(|(i, &a)| if mask[i] { a } else { 0 }).collect();
        let part_b: Vec<u32> = allocation.iter().enumerate().map(|(i, &a)| if mask[i] { 0 } else { a }).collect();

        let whole = calculate_projection(&base, &cycles, &allocation);
        let only_a = calculate_projection(&base, &cycles, &part_a);
        let only_b = calculate_projection(&base, &cycles, &part_b);

        prop_assert_eq!(whole.len(), base.len());
        for idx in 0..base.len() {
            let combined = subtract(add(only_a[idx].events, only_b[idx].events), base[idx].events);
            prop_assert_eq!(combined, whole[idx].events);
        }
    }
}
