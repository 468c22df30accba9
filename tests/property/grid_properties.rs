// Property-based tests for grid mappings and hiding
// Random timetables and random removal sequences

use proptest::prelude::*;
use timetable_grid::models::event::Event;
use timetable_grid::models::week_reference::WeekReference;
use timetable_grid::services::timetable::{
    day_mapping, hour_mapping, resolve_exceptions, GridAction, GridState,
};

const BASE: u32 = 2;

fn arb_event() -> impl Strategy<Value = Event> {
    (1u8..=7, 0u8..23, 1u8..=4).prop_map(|(day, start, length)| {
        let end = start.saturating_add(length).min(24);
        Event::new(day, start, end).unwrap()
    })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 1..20)
}

/// Hide actions whose label indices come from the current state, like the UI produces
fn arb_actions() -> impl Strategy<Value = Vec<(u8, usize)>> {
    prop::collection::vec((0u8..3, 0usize..32), 0..16)
}

fn to_action(state: &GridState, kind: u8, pick: usize, event_count: usize) -> GridAction {
    match kind {
        0 => GridAction::HideEvent(pick % event_count),
        1 => {
            let label_index = pick % state.days.sequence.len();
            GridAction::HideDay { label_index, day: state.days.sequence[label_index] }
        }
        _ => {
            let label_index = pick % state.hours.sequence.len();
            GridAction::HideHour { label_index, hour: state.hours.sequence[label_index] }
        }
    }
}

fn assert_gapless(positions: impl Iterator<Item = u32>) -> Result<(), TestCaseError> {
    for (offset, position) in positions.enumerate() {
        prop_assert_eq!(position, BASE + offset as u32);
    }
    Ok(())
}

proptest! {
    /// Property: day sequences cover min..=max and positions start at the base without gaps
    #[test]
    fn prop_day_mapping_is_contiguous(events in arb_events()) {
        let days = day_mapping(&events, BASE).unwrap();

        prop_assert_eq!(days.sequence.len(), usize::from(days.max - days.min) + 1);
        prop_assert_eq!(days.min, events.iter().map(|e| e.day).min().unwrap());
        prop_assert_eq!(days.max, events.iter().map(|e| e.day).max().unwrap());
        assert_gapless(days.positions().values().copied())?;
    }

    /// Property: hour sequences stop before max, but max keeps a boundary position
    #[test]
    fn prop_hour_mapping_is_contiguous(events in arb_events()) {
        let hours = hour_mapping(&events, BASE).unwrap();

        prop_assert_eq!(hours.sequence.len(), usize::from(hours.max - hours.min));
        prop_assert_eq!(hours.position(hours.max), Some(BASE + u32::from(hours.max - hours.min)));
        assert_gapless(hours.positions().values().copied())?;
    }

    /// Property: hiding the leading day shifts every position by one; other days shift nothing
    #[test]
    fn prop_day_hiding_shifts_only_at_boundary(events in arb_events(), pick in 0usize..8) {
        let state = GridState::initialize(&events, BASE).unwrap();
        let label_index = pick % state.days.sequence.len();
        let day = state.days.sequence[label_index];

        let next = state.clone().apply(GridAction::HideDay { label_index, day });

        if day == state.days.min {
            prop_assert_eq!(next.days.min, state.days.min + 1);
            for (value, position) in state.days.positions() {
                prop_assert_eq!(next.days.position(*value), Some(position - 1));
            }
        } else {
            prop_assert_eq!(&next.days, &state.days);
        }
        prop_assert!(next.is_day_hidden(label_index));
    }

    /// Property: the minimum never advances beyond the labelled range
    #[test]
    fn prop_minimum_stays_bounded(events in arb_events(), actions in arb_actions()) {
        let mut state = GridState::initialize(&events, BASE).unwrap();
        for (kind, pick) in actions {
            let action = to_action(&state, kind, pick, events.len());
            state = state.apply(action);
        }

        prop_assert!(state.days.min <= state.days.max + 1);
        prop_assert!(state.hours.min <= state.hours.max);
    }

    /// Property: unhiding after any removals restores the initial mappings
    #[test]
    fn prop_rebuild_matches_fresh_state(events in arb_events(), actions in arb_actions()) {
        let fresh = GridState::initialize(&events, BASE).unwrap();
        let mut state = fresh.clone();
        for (kind, pick) in actions {
            let action = to_action(&state, kind, pick, events.len());
            state = state.apply(action);
        }

        let rebuilt = state.rebuild(&events, BASE).unwrap();
        prop_assert_eq!(&rebuilt.days, &fresh.days);
        prop_assert_eq!(&rebuilt.hours, &fresh.hours);
        prop_assert!(rebuilt.hidden.is_empty());
    }

    /// Property: a single week is always reported as "Only <label>"
    #[test]
    fn prop_single_week_is_only(week in 1u32..13) {
        let reference: WeekReference = (1u32..13).map(|w| (w, format!("W{}", w))).collect();
        let event = Event::builder().day(1).hours(9, 10).weeks([week]).build().unwrap();

        prop_assert_eq!(
            resolve_exceptions(&event, Some(&reference)),
            vec!["Only".to_string(), format!("W{}", week)]
        );
    }

    /// Property: covering every non-break week leaves nothing to report
    #[test]
    fn prop_full_coverage_has_no_exceptions(break_week in 1u32..13) {
        let reference: WeekReference = (1u32..13)
            .map(|w| (w, if w == break_week { "Break".to_string() } else { format!("W{}", w) }))
            .collect();
        let weeks = (1u32..13).filter(|w| *w != break_week);
        let event = Event::builder().day(1).hours(9, 10).weeks(weeks).build().unwrap();

        prop_assert!(resolve_exceptions(&event, Some(&reference)).is_empty());
    }
}
