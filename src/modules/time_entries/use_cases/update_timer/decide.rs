// Pure decision for changing the running entry's description.
//
// An absent description is accepted and changes nothing.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::timer_description_updated::TimerDescriptionUpdatedV1;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::update_timer::command::UpdateTimer;

pub fn decide_update(state: &TimeSheetState, command: UpdateTimer) -> Decision {
    let Some(running) = &state.running else {
        return Decision::Rejected {
            reason: DecideError::NoRunningTimer,
        };
    };
    match command.description {
        Some(description) if running.description.as_ref() != Some(&description) => {
            Decision::Accepted {
                events: vec![TimeEntryEvent::TimerDescriptionUpdatedV1(
                    TimerDescriptionUpdatedV1 {
                        time_entry_id: running.time_entry_id.clone(),
                        user_id: command.user_id,
                        description,
                        updated_at: command.updated_at,
                    },
                )],
                intents: vec![],
            }
        }
        _ => Decision::unchanged(),
    }
}

#[cfg(test)]
mod update_timer_decide_tests {
    use super::*;
    use crate::modules::time_entries::core::evolve::evolve;
    use crate::tests::fixtures::events::make_timer_started_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn running_state() -> TimeSheetState {
        evolve(
            TimeSheetState::default(),
            TimeEntryEvent::TimerStartedV1(make_timer_started_v1_event()),
        )
    }

    fn update(description: Option<&str>) -> UpdateTimer {
        UpdateTimer {
            user_id: "user-fixed-0001".into(),
            description: description.map(str::to_string),
            updated_at: 1_700_000_030_000,
        }
    }

    #[rstest]
    fn it_should_update_the_description(running_state: TimeSheetState) {
        let Decision::Accepted { events, .. } =
            decide_update(&running_state, update(Some("Pairing")))
        else {
            panic!("expected the update to be accepted");
        };
        assert!(matches!(
            &events[..],
            [TimeEntryEvent::TimerDescriptionUpdatedV1(e)] if e.description == "Pairing"
        ));
    }

    #[rstest]
    fn it_should_accept_an_absent_or_identical_description_without_events(
        running_state: TimeSheetState,
    ) {
        let current = running_state.running.as_ref().unwrap().description.clone();
        assert_eq!(decide_update(&running_state, update(None)), Decision::unchanged());
        assert_eq!(
            decide_update(&running_state, update(current.as_deref())),
            Decision::unchanged()
        );
    }

    #[rstest]
    fn it_should_reject_when_no_timer_is_running() {
        assert_eq!(
            decide_update(&TimeSheetState::default(), update(Some("Pairing"))),
            Decision::Rejected {
                reason: DecideError::NoRunningTimer
            }
        );
    }
}
