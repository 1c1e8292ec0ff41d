//! Landing hero with the primary call to action.

use leptos::prelude::*;

use crate::content::landing::HERO_SPECIALTIES;
use crate::util::scroll::{SectionId, use_scroll_targets};

#[component]
pub fn Hero() -> impl IntoView {
    let targets = use_scroll_targets();
    let start_diagnosis = move |_| {
        targets.scroll_to(SectionId::Upload);
    };

    view! {
        <section class="hero">
            <div class="hero__glow hero__glow--left" aria-hidden="true"></div>
            <div class="hero__glow hero__glow--right" aria-hidden="true"></div>
            <div class="container hero__content">
                <h1 class="hero__title">
                    <span class="gradient-text">"AI-Powered"</span>
                    <br/>
                    "Medical Diagnostics"
                </h1>
                <p class="hero__subtitle">
                    "Revolutionary multi-agent system combining specialized medical expertise "
                    "for comprehensive patient diagnosis and treatment recommendations."
                </p>
                <button class="btn btn--primary btn--large" on:click=start_diagnosis>
                    "Start Diagnosis"
                </button>
                <div class="hero__specialties">
                    {HERO_SPECIALTIES
                        .into_iter()
                        .map(|specialty| {
                            view! {
                                <div class="hero__specialty">
                                    <span class=format!("hero__badge pulse-ring {}", specialty.accent)>
                                        {specialty.icon}
                                    </span>
                                    <span class="hero__specialty-label">{specialty.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
