use crate::modules::tasks::core::ports::TaskRepository;
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::stop_timer::command::StopTimer;
use crate::modules::time_entries::use_cases::stop_timer::decide::decide_stop;
use crate::shell::state::test_support::{USER, make_state_with_task};
use crate::tests::fixtures::commands::RegisterTimeEntryBuilder;
use crate::tests::fixtures::tasks::make_task;

const T0: i64 = 1_700_000_000_000;

fn stop_at(stopped_at: i64) -> StopTimer {
    StopTimer {
        user_id: USER.to_string(),
        description: None,
        notes: Some("Done for today".into()),
        stopped_at,
    }
}

#[tokio::test]
async fn tracks_a_working_session_across_a_task_switch() {
    let (state, _) = make_state_with_task("task-1").await;
    state.tasks.save(make_task("task-2", USER)).await.unwrap();

    let first = state
        .start_handler
        .handle(USER, "task-1", Some("Planning".into()), T0)
        .await
        .unwrap();
    let second = state
        .start_handler
        .handle(USER, "task-2", None, T0 + 600_000)
        .await
        .unwrap();
    assert_eq!(second.events.len(), 2);

    state
        .time_sheets
        .handle(USER, |s| decide_stop(s, stop_at(T0 + 1_200_000)))
        .await
        .unwrap();

    let manual = RegisterTimeEntryBuilder::new()
        .time_entry_id("te-manual")
        .start_time(T0 - 3_600_000)
        .end_time(T0 - 3_240_000)
        .build();
    state
        .time_sheets
        .handle(USER, |s| decide_register(s, manual))
        .await
        .unwrap();

    let list = state.queries.list_by_user_id(USER, 0, 10, true).await.unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].task_id, "task-2");
    assert_eq!(list[0].duration, Some(600));
    assert_eq!(list[0].notes.as_deref(), Some("Done for today"));
    assert_eq!(list[1].time_entry_id, first.touched_entry_id().unwrap());
    assert_eq!(list[1].duration, Some(600));
    assert_eq!(list[2].time_entry_id, "te-manual");
    assert!(list.iter().all(|entry| !entry.is_running));

    let total = state
        .queries
        .total_duration(USER, T0 - 86_400_000, T0 + 86_400_000)
        .await
        .unwrap();
    assert_eq!(total, 1_560);

    let by_task = state.queries.time_by_task(USER).await.unwrap();
    assert_eq!(by_task["task-1"].total_time, 600);
    assert_eq!(by_task["task-2"].entries_count, 1);

    // two stops and one registration reach the outbox
    assert_eq!(state.outbox.rows.lock().await.len(), 3);

    let idle = state
        .time_sheets
        .handle(USER, |s| decide_stop(s, stop_at(T0 + 1_800_000)))
        .await;
    assert!(matches!(
        idle,
        Err(ApplicationError::Domain(DecideError::NoRunningTimer))
    ));
}
