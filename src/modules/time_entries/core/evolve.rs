use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::{ClosedEntry, RunningEntry, TimeSheetState};

pub fn evolve(mut state: TimeSheetState, event: TimeEntryEvent) -> TimeSheetState {
    match event {
        TimeEntryEvent::TimerStartedV1(e) => {
            state.running = Some(RunningEntry {
                time_entry_id: e.time_entry_id,
                task_id: e.task_id,
                project_id: e.project_id,
                description: e.description,
                is_billable: e.is_billable,
                started_at: e.started_at,
            });
        }
        TimeEntryEvent::TimerStoppedV1(e) => {
            if let Some(running) = state
                .running
                .take_if(|r| r.time_entry_id == e.time_entry_id)
            {
                state.closed.insert(
                    e.time_entry_id,
                    ClosedEntry {
                        start_time: running.started_at,
                        end_time: e.stopped_at,
                        is_validated: false,
                    },
                );
            }
        }
        TimeEntryEvent::TimerDescriptionUpdatedV1(e) => {
            if let Some(running) = state
                .running
                .as_mut()
                .filter(|r| r.time_entry_id == e.time_entry_id)
            {
                running.description = Some(e.description);
            }
        }
        TimeEntryEvent::TimeEntryRegisteredV1(e) => {
            state.closed.entry(e.time_entry_id).or_insert(ClosedEntry {
                start_time: e.start_time,
                end_time: e.end_time,
                is_validated: false,
            });
        }
        TimeEntryEvent::TimeEntryValidatedV1(e) => {
            if let Some(closed) = state.closed.get_mut(&e.time_entry_id) {
                closed.is_validated = true;
            }
        }
        TimeEntryEvent::TimeEntryEditedV1(e) => {
            if let Some(closed) = state.closed.get_mut(&e.time_entry_id) {
                closed.start_time = e.start_time;
                closed.end_time = e.end_time;
            }
        }
        TimeEntryEvent::TimeEntryDeletedV1(e) => {
            state.closed.remove(&e.time_entry_id);
            if state
                .running
                .as_ref()
                .is_some_and(|r| r.time_entry_id == e.time_entry_id)
            {
                state.running = None;
            }
        }
    }
    state
}
