//! Four-step process overview.

use leptos::prelude::*;

use crate::content::landing::PROCESS_STEPS;
use crate::util::scroll::{SectionId, use_scroll_targets};

#[component]
pub fn HowItWorks() -> impl IntoView {
    let targets = use_scroll_targets();
    let last = PROCESS_STEPS.len() - 1;

    view! {
        <section id=SectionId::HowItWorks.anchor() node_ref=targets.node(SectionId::HowItWorks) class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title gradient-text">"How It Works"</h2>
                    <p class="section-description">
                        "Our streamlined process delivers comprehensive medical insights in four simple steps"
                    </p>
                </div>
                <ol class="process-steps">
                    {PROCESS_STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="process-step">
                                    <span class="process-step__number">{step.number}</span>
                                    <span class="process-step__icon" aria-hidden="true">{step.icon}</span>
                                    <h3 class="process-step__title">{step.title}</h3>
                                    <p class="process-step__description">{step.description}</p>
                                    <Show when=move || i < last>
                                        <span class="process-step__connector" aria-hidden="true"></span>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
