use super::*;

#[test]
fn run_button_label_follows_phase() {
    assert_eq!(run_button_label(Phase::Idle), "Run Demo");
    assert_eq!(run_button_label(Phase::Running(0)), "Running Analysis...");
    assert_eq!(run_button_label(Phase::Running(3)), "Running Analysis...");
    assert_eq!(run_button_label(Phase::Complete), "Run Demo");
}

#[test]
fn label_reads_phase_of_live_state() {
    let mut state = DemoState::default();
    assert_eq!(run_button_label(state.phase()), "Run Demo");
    assert!(state.start());
    assert_eq!(run_button_label(state.phase()), "Running Analysis...");
}

#[test]
fn timer_continues_only_while_advancing() {
    assert!(continue_after_tick(TickOutcome::Advanced(2)));
    assert!(!continue_after_tick(TickOutcome::Finished));
    assert!(!continue_after_tick(TickOutcome::Ignored));
}

#[test]
fn driving_ticks_until_stop_completes_a_run() {
    let mut state = DemoState::default();
    assert!(state.start());
    let mut ticks = 0;
    while continue_after_tick(state.tick()) {
        ticks += 1;
    }
    assert_eq!(ticks + 1, 4);
    assert!(state.can_download());
    assert_eq!(state.phase(), Phase::Complete);
    assert_eq!(run_button_label(state.phase()), "Run Demo");
}
