use super::*;

fn run_to_completion(state: &mut DemoState) -> Vec<TickOutcome> {
    let mut outcomes = Vec::new();
    loop {
        let outcome = state.tick();
        outcomes.push(outcome);
        if outcome != TickOutcome::Advanced(state.current_index) {
            break;
        }
    }
    outcomes
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle_at_first_step() {
    let state = DemoState::default();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.current_index, 0);
    assert!(!state.results_visible);
    assert!(!state.can_download());
}

#[test]
fn first_step_reads_completed_before_any_run() {
    let state = DemoState::default();
    assert_eq!(state.step_status(0), StepStatus::Completed);
    for position in 1..STEP_COUNT {
        assert_eq!(state.step_status(position), StepStatus::Pending);
    }
}

// =============================================================
// Start
// =============================================================

#[test]
fn start_resets_and_runs() {
    let mut state = DemoState { current_index: 4, running: false, results_visible: true };
    assert!(state.start());
    assert_eq!(state, DemoState { current_index: 0, running: true, results_visible: false });
    assert_eq!(state.phase(), Phase::Running(0));
}

#[test]
fn start_while_running_is_noop() {
    let mut state = DemoState::default();
    state.start();
    state.tick();
    let before = state;

    assert!(!state.start());
    assert_eq!(state, before);
}

// =============================================================
// Ticks
// =============================================================

#[test]
fn indices_advance_in_order_and_finish_at_terminal() {
    let mut state = DemoState::default();
    state.start();

    let mut seen = vec![state.current_index];
    for expected in 1..TERMINAL_INDEX {
        assert_eq!(state.tick(), TickOutcome::Advanced(expected));
        assert!(state.running);
        assert!(!state.results_visible, "results hidden at index {expected}");
        seen.push(state.current_index);
    }
    assert_eq!(state.tick(), TickOutcome::Finished);
    seen.push(state.current_index);

    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert!(!state.running);
    assert!(state.results_visible);
    assert_eq!(state.phase(), Phase::Complete);
}

#[test]
fn run_takes_exactly_four_ticks() {
    let mut state = DemoState::default();
    state.start();
    let outcomes = run_to_completion(&mut state);
    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes.last(), Some(&TickOutcome::Finished));
}

#[test]
fn ticks_after_finish_change_nothing() {
    let mut state = DemoState::default();
    state.start();
    run_to_completion(&mut state);
    let done = state;

    for _ in 0..3 {
        assert_eq!(state.tick(), TickOutcome::Ignored);
    }
    assert_eq!(state, done);
}

#[test]
fn tick_when_idle_is_ignored() {
    let mut state = DemoState::default();
    assert_eq!(state.tick(), TickOutcome::Ignored);
    assert_eq!(state, DemoState::default());
}

#[test]
fn tick_observing_terminal_index_finishes_without_overflow() {
    let mut state = DemoState { current_index: TERMINAL_INDEX, running: true, results_visible: false };
    assert_eq!(state.tick(), TickOutcome::Finished);
    assert_eq!(state.current_index, TERMINAL_INDEX);
    assert!(state.results_visible);
}

#[test]
fn results_become_visible_once_per_run() {
    let mut state = DemoState::default();
    for _ in 0..2 {
        state.start();
        let mut flips = 0;
        let mut was_visible = state.results_visible;
        while state.running {
            state.tick();
            if state.results_visible && !was_visible {
                flips += 1;
            }
            was_visible = state.results_visible;
        }
        assert_eq!(flips, 1);
    }
}

// =============================================================
// Rendering rules
// =============================================================

#[test]
fn completion_is_monotonic_in_index() {
    let mut state = DemoState::default();
    state.start();
    let mut completed = 1;
    while state.running {
        state.tick();
        let now = (0..STEP_COUNT)
            .filter(|&p| state.step_status(p) == StepStatus::Completed)
            .count();
        assert!(now > completed);
        completed = now;
    }
    assert_eq!(completed, STEP_COUNT);
}

#[test]
fn active_step_is_both_completed_and_in_progress() {
    let mut state = DemoState::default();
    state.start();
    state.tick();

    assert!(state.is_in_progress(1));
    assert_eq!(state.step_status(1), StepStatus::Completed);
    assert!(!state.is_in_progress(0));
    assert!(!state.is_in_progress(2));
}

#[test]
fn nothing_in_progress_after_completion() {
    let mut state = DemoState::default();
    state.start();
    run_to_completion(&mut state);
    assert!((0..STEP_COUNT).all(|p| !state.is_in_progress(p)));
}

#[test]
fn specialist_panels_reveal_after_their_step() {
    let mut state = DemoState::default();
    state.start();

    assert_eq!(state.specialist_panel(1), PanelState::Hidden);

    state.tick(); // index 1
    assert_eq!(state.specialist_panel(1), PanelState::Working);
    assert_eq!(state.specialist_panel(2), PanelState::Hidden);

    state.tick(); // index 2
    assert_eq!(state.specialist_panel(1), PanelState::Ready);
    assert_eq!(state.specialist_panel(2), PanelState::Working);

    state.tick(); // index 3
    assert_eq!(state.specialist_panel(2), PanelState::Ready);
    assert_eq!(state.specialist_panel(3), PanelState::Working);
    assert!(!state.results_visible);

    state.tick(); // index 4
    for k in 1..=SPECIALIST_COUNT {
        assert_eq!(state.specialist_panel(k), PanelState::Ready);
    }
    assert!(state.can_download());
}

#[test]
fn restart_hides_previous_results() {
    let mut state = DemoState::default();
    state.start();
    run_to_completion(&mut state);
    state.start();

    assert!(!state.results_visible);
    assert!(!state.can_download());
    assert_eq!(state.specialist_panel(1), PanelState::Hidden);
}
