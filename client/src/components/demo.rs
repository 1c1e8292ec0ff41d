//! Scripted multi-agent demo.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Run Demo" starts a `DemoState` run and a periodic tick on a
//! component-scoped timer. Each tick reveals the next step; specialist panels
//! show a working placeholder while their step is active and the full report
//! once it has passed. The tick that reaches the last step also ends the timer
//! loop and unlocks the final report and its download.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::case_study::{DEMO_CASE, SpecialistReport};
use crate::content::demo::{DEMO_STEPS, DemoStep};
use crate::state::demo::{DemoState, PanelState, Phase, StepStatus, TICK_INTERVAL_MS, TickOutcome};
use crate::util::alert::notify_error;
use crate::util::download::save_text_file;
use crate::util::report::{render_report, report_file_name, today};
use crate::util::scroll::{SectionId, use_scroll_targets};
use crate::util::timer::{Liveness, every};

/// Label of the run trigger.
pub fn run_button_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running(_) => "Running Analysis...",
        Phase::Idle | Phase::Complete => "Run Demo",
    }
}

/// Apply one tick and report whether the timer should keep going.
pub fn continue_after_tick(outcome: TickOutcome) -> bool {
    match outcome {
        TickOutcome::Advanced(step) => {
            log::debug!("demo advanced to step {step}");
            true
        }
        TickOutcome::Finished => {
            log::info!("demo run finished");
            false
        }
        TickOutcome::Ignored => false,
    }
}

#[component]
pub fn Demo() -> impl IntoView {
    let targets = use_scroll_targets();
    let demo = RwSignal::new(DemoState::default());
    let liveness = Liveness::scoped();

    let on_run = move |_| {
        if !demo.try_update(DemoState::start).unwrap_or(false) {
            return;
        }
        log::info!("demo run started");
        every(TICK_INTERVAL_MS, &liveness, move || {
            demo.try_update(DemoState::tick).is_some_and(continue_after_tick)
        });
    };

    let running = move || demo.with(|d| d.running);

    view! {
        <section id=SectionId::Demo.anchor() node_ref=targets.node(SectionId::Demo) class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title gradient-text">"See It In Action"</h2>
                    <p class="section-description">
                        "Watch our AI agents collaborate to diagnose a real medical case"
                    </p>
                    <button class="btn btn--primary btn--large" disabled=running on:click=on_run>
                        <span aria-hidden="true">"▶"</span>
                        <span>{move || run_button_label(demo.with(DemoState::phase))}</span>
                    </button>
                </div>

                <div class="demo-panel border-gradient">
                    <ol class="demo-steps">
                        {DEMO_STEPS
                            .into_iter()
                            .enumerate()
                            .map(|(position, step)| view! { <DemoStepRow position step demo/> })
                            .collect_view()}
                    </ol>

                    <div class="specialist-panels">
                        {DEMO_CASE
                            .specialists()
                            .into_iter()
                            .enumerate()
                            .map(|(i, report)| {
                                let step = i + 1;
                                view! { <SpecialistPanel step report demo/> }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || demo.with(|d| d.results_visible)>
                        <FinalReport demo/>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DemoStepRow(position: usize, step: DemoStep, demo: RwSignal<DemoState>) -> impl IntoView {
    let completed = move || demo.with(|d| d.step_status(position) == StepStatus::Completed);
    let active = move || demo.with(|d| d.is_in_progress(position));

    view! {
        <li class="demo-step" class:demo-step--completed=completed class:demo-step--active=active>
            <span class="demo-step__icon" aria-hidden="true">
                {move || if completed() { "✔" } else { step.icon }}
            </span>
            <div class="demo-step__body">
                <h3 class="demo-step__title">{step.title}</h3>
                <p class="demo-step__description">{step.description}</p>
                <Show when=completed>
                    <p class="demo-step__detail">{step.detail}</p>
                </Show>
            </div>
            <Show when=active>
                <span class="typing-dots" aria-label="in progress">
                    <span></span>
                    <span></span>
                    <span></span>
                </span>
            </Show>
        </li>
    }
}

#[component]
fn SpecialistPanel(step: usize, report: &'static SpecialistReport, demo: RwSignal<DemoState>) -> impl IntoView {
    let title = format!("{} ANALYSIS", report.specialist);
    move || match demo.with(|d| d.specialist_panel(step)) {
        PanelState::Hidden => ().into_any(),
        PanelState::Working => view! {
            <div class="specialist-panel specialist-panel--working">
                <h4 class="specialist-panel__title">{title.clone()}</h4>
                <p class="specialist-panel__status">"Analyzing findings..."</p>
            </div>
        }
        .into_any(),
        PanelState::Ready => view! {
            <div class="specialist-panel">
                <h4 class="specialist-panel__title">{title.clone()}</h4>
                <h5>"Findings"</h5>
                <ul>{report.findings.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
                <p class="specialist-panel__assessment">
                    <strong>"Assessment: "</strong>
                    {report.assessment}
                </p>
                <h5>"Recommendations"</h5>
                <ul>{report.recommendations.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}</ul>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn FinalReport(demo: RwSignal<DemoState>) -> impl IntoView {
    let summary = &DEMO_CASE.final_diagnosis;

    let on_download = move |_| {
        if !demo.with_untracked(DemoState::can_download) {
            return;
        }
        let text = render_report(&DEMO_CASE, &today());
        let file_name = report_file_name(DEMO_CASE.patient.name);
        if let Err(err) = save_text_file(&file_name, &text) {
            notify_error(&err);
        }
    };

    view! {
        <div class="final-report">
            <h4 class="final-report__title">"Final Diagnosis Complete"</h4>
            <ul class="final-report__diagnoses">
                {summary
                    .diagnoses
                    .iter()
                    .map(|d| {
                        view! {
                            <li>
                                <span>{d.condition}</span>
                                <span class="final-report__confidence">{format!("{}%", d.confidence)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h5>"Contributing Factors"</h5>
            <ul>{summary.contributing_factors.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
            <h5>"Treatment Plan"</h5>
            <ol>{summary.treatment_plan.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}</ol>
            <h5>"Prognosis"</h5>
            <p>{summary.prognosis}</p>
            <button
                class="btn btn--primary"
                disabled=move || !demo.with(DemoState::can_download)
                on:click=on_download
            >
                "Download Full Report"
            </button>
        </div>
    }
}
