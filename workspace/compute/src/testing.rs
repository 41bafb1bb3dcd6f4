mod properties;

use chrono::NaiveDate;
use model::{Cycle, CycleDay, EventCounts, EventProjection, ForecastDocument, Priority};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::forecast::Forecast;

/// Cycle without a structure.
pub fn cycle(name: &str, available: u32, priority: Priority) -> Cycle {
    Cycle::new(name, available, priority)
}

/// Cycle with the given per-day structure.
pub fn cycle_with_days(name: &str, available: u32, priority: Priority, days: Vec<CycleDay>) -> Cycle {
    Cycle::with_structure(name, available, priority, days)
}

/// `days` baseline days without events, numbered from 1.
pub fn zero_days(days: u32) -> Vec<EventProjection> {
    (1..=days).map(EventProjection::empty).collect()
}

/// 2024-06-05, a Wednesday.
pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
}

/// Installs a stderr subscriber for the current test, level from RUST_LOG
/// (WARN when unset).
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// A week of sales work: four cycles, one per priority, listed out of
/// priority order, and a sparse baseline.
///
/// With 9 entities HIGH takes 2 (its capacity), MEDIUM 4 (its capacity) and
/// LOW the remaining 3. The NEUTRAL cycle gets nothing.
pub struct ScenarioSalesWeek {
    pub document: ForecastDocument,
    pub entity_count: u32,
}

impl ScenarioSalesWeek {
    pub fn new() -> Self {
        let baseline = vec![
            EventProjection::new(1, EventCounts::new(1, 0, 0, 0)),
            EventProjection::new(2, EventCounts::new(0, 1, 0, 0)),
            EventProjection::new(3, EventCounts::default()),
            EventProjection::new(4, EventCounts::new(0, 0, 2, 0)),
            EventProjection::new(5, EventCounts::new(0, 0, 0, 1)),
        ];

        let cycles = vec![
            cycle_with_days(
                "Prospecting",
                10,
                Priority::Low,
                vec![CycleDay::new(1, 0, 3, 1, 0), CycleDay::new(2, 0, 1, 0, 0)],
            ),
            cycle_with_days("Parked", 5, Priority::Neutral, vec![CycleDay::new(1, 5, 5, 5, 5)]),
            cycle_with_days(
                "Onboarding",
                2,
                Priority::High,
                vec![
                    CycleDay::new(1, 2, 1, 0, 0),
                    CycleDay::new(2, 0, 2, 1, 0),
                    CycleDay::new(3, 1, 0, 0, 1),
                ],
            ),
            cycle_with_days(
                "Follow-up",
                4,
                Priority::Medium,
                (1..=5).map(|day| CycleDay::new(day, 0, 1, 0, 1)).collect(),
            ),
        ];

        Self {
            document: ForecastDocument::new(baseline, cycles),
            entity_count: 9,
        }
    }

    pub fn assert_forecast(&self, forecast: &Forecast) {
        let allocations: Vec<(&str, u32)> = forecast
            .allocations
            .iter()
            .map(|a| (a.name.as_str(), a.allocated))
            .collect();
        assert_eq!(
            allocations,
            vec![("Onboarding", 2), ("Follow-up", 4), ("Prospecting", 3), ("Parked", 0)]
        );
        assert_eq!(forecast.distributed(), 9);
        assert_eq!(forecast.undistributed(), 0);

        let events: Vec<EventCounts> = forecast.days.iter().map(|d| d.events).collect();
        assert_eq!(
            events,
            vec![
                EventCounts::new(5, 15, 3, 4),
                EventCounts::new(0, 12, 2, 4),
                EventCounts::new(2, 4, 0, 6),
                EventCounts::new(0, 4, 2, 4),
                EventCounts::new(0, 4, 0, 5),
            ]
        );
        assert_eq!(forecast.day_totals(), vec![27, 18, 12, 10, 9]);
        assert_eq!(forecast.today_events(), 27);

        let dates: Vec<NaiveDate> = forecast.days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 6).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
            ]
        );
    }
}
