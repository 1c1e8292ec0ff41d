//! Dashboard home page with mock platform metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is read from the static tables in `content::dashboard`.
//! Quick actions link to tool routes that are not built; the router's
//! not-found fallback answers them.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::stats_card::StatsCard;
use crate::content::dashboard::{
    ALL_DIAGNOSES_PATH, BANNER_INDICATORS, KNOWLEDGE_STATS, QUICK_ACTIONS, QuickAction, RECENT_DIAGNOSES,
    RecentDiagnosis, SYSTEM_METRICS, SYSTEM_STATUS, ServiceStatus,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <header class="dashboard__banner">
                <div>
                    <h1 class="dashboard__title">"Medical Diagnostics AI Platform"</h1>
                    <p class="dashboard__subtitle">
                        "Intelligent agents for medical diagnostics using LLMs and structured knowledge bases"
                    </p>
                    <div class="dashboard__indicators">
                        {BANNER_INDICATORS
                            .into_iter()
                            .map(|(label, tone)| {
                                view! {
                                    <span class="dashboard__indicator">
                                        <span class=format!("dot {}", tone.class())></span>
                                        {label}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="dashboard__emblem" aria-hidden="true">"🩺"</div>
            </header>

            <div class="dashboard__metrics">
                {SYSTEM_METRICS
                    .into_iter()
                    .map(|m| {
                        view! { <StatsCard title=m.label value=m.value change=m.change icon=m.icon tone=m.tone/> }
                    })
                    .collect_view()}
            </div>

            <section class="card">
                <h2 class="card__title">"Core Diagnostic Features"</h2>
                <div class="quick-actions">
                    {QUICK_ACTIONS.into_iter().map(|action| view! { <QuickActionCard action/> }).collect_view()}
                </div>
            </section>

            <div class="dashboard__columns">
                <section class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Recent Diagnoses"</h3>
                        <A href=ALL_DIAGNOSES_PATH attr:class="card__link">
                            "View All"
                        </A>
                    </div>
                    {RECENT_DIAGNOSES.into_iter().map(|d| view! { <RecentDiagnosisRow diagnosis=d/> }).collect_view()}
                </section>

                <section class="card">
                    <h3 class="card__title">"System Status"</h3>
                    {SYSTEM_STATUS.into_iter().map(|s| view! { <ServiceStatusRow status=s/> }).collect_view()}
                </section>
            </div>

            <section class="card">
                <h3 class="card__title">"Medical Knowledge Base"</h3>
                <div class="knowledge-stats">
                    {KNOWLEDGE_STATS
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="knowledge-stat">
                                    <span class=format!("knowledge-stat__icon {}", stat.tone.class())>
                                        {stat.icon}
                                    </span>
                                    <p class="knowledge-stat__value">{stat.value}</p>
                                    <p class="knowledge-stat__label">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn QuickActionCard(action: QuickAction) -> impl IntoView {
    view! {
        <A href=action.path attr:class="quick-action">
            <span class=format!("quick-action__icon {}", action.tone.class())>{action.icon}</span>
            <h3 class="quick-action__title">{action.title}</h3>
            <p class="quick-action__description">{action.description}</p>
            <ul class="quick-action__features">
                {action.features.iter().map(|f| view! { <li>"✔ " {*f}</li> }).collect_view()}
            </ul>
        </A>
    }
}

#[component]
fn RecentDiagnosisRow(diagnosis: RecentDiagnosis) -> impl IntoView {
    view! {
        <div class="diagnosis-row" data-id=diagnosis.id data-status=diagnosis.status>
            <span class="diagnosis-row__icon" aria-hidden="true">"🩺"</span>
            <div class="diagnosis-row__body">
                <p class="diagnosis-row__patient">{diagnosis.patient}</p>
                <p class="diagnosis-row__condition">{diagnosis.condition}</p>
            </div>
            <div class="diagnosis-row__meta">
                <span class="diagnosis-row__confidence">{format!("{}% ✔", diagnosis.confidence)}</span>
                <span class="diagnosis-row__time">{diagnosis.timestamp}</span>
            </div>
        </div>
    }
}

#[component]
fn ServiceStatusRow(status: ServiceStatus) -> impl IntoView {
    let tone = status.state.tone().class();
    view! {
        <div class=format!("status-row {tone}")>
            <div>
                <p class="status-row__name">{status.name}</p>
                <p class="status-row__detail">{status.detail}</p>
            </div>
            <span class="status-row__state">{status.state.label()}</span>
        </div>
    }
}
