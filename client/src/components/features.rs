//! Feature grid.

use leptos::prelude::*;

use crate::content::landing::FEATURES;
use crate::util::scroll::{SectionId, use_scroll_targets};

#[component]
pub fn Features() -> impl IntoView {
    let targets = use_scroll_targets();

    view! {
        <section id=SectionId::Features.anchor() node_ref=targets.node(SectionId::Features) class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title gradient-text">"Advanced AI Capabilities"</h2>
                    <p class="section-description">
                        "Our multi-agent system brings together specialized expertise for comprehensive medical analysis"
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card border-gradient">
            <div class="feature-card__icon" aria-hidden="true">{icon}</div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}
