//! Fixed site header with section navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header turns opaque once the page scrolls past a threshold and
//! collapses its links into a toggle menu on narrow screens. Links carry real
//! `#anchor` hrefs and upgrade to smooth scrolling when the target section is
//! mounted.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::content::landing::NAV_ITEMS;
use crate::util::scroll::{ScrollTargets, use_scroll_targets};

/// Vertical scroll offset, in CSS pixels, after which the header is opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

#[component]
pub fn Header() -> impl IntoView {
    let targets = use_scroll_targets();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            let next = is_scrolled(y);
            if scrolled.get_untracked() != next {
                scrolled.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <header class="site-header" class:site-header--scrolled=move || scrolled.get()>
            <div class="site-header__bar">
                <a class="site-header__brand" href="/">
                    <span class="site-header__logo" aria-hidden="true">"✚"</span>
                    <span class="gradient-text">"MedAI"</span>
                </a>
                <nav class="site-header__nav">{nav_links(targets, menu_open, "site-header__link")}</nav>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile">{nav_links(targets, menu_open, "site-header__mobile-link")}</nav>
            </Show>
        </header>
    }
}

fn nav_links(targets: ScrollTargets, menu_open: RwSignal<bool>, class: &'static str) -> impl IntoView {
    NAV_ITEMS
        .into_iter()
        .map(|id| {
            view! {
                <a
                    class=class
                    href=id.href()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        menu_open.set(false);
                        if targets.scroll_to(id) {
                            ev.prevent_default();
                        }
                    }
                >
                    {id.label()}
                </a>
            }
        })
        .collect_view()
}
