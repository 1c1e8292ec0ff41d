//! Site footer. The brand block doubles as the "About" scroll target.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::landing::{BRAND_BLURB, COPYRIGHT, FOOTER_GROUPS, SOCIAL_LINKS};
use crate::util::scroll::{SectionId, use_scroll_targets};

/// Footer links point at a landing section when one shares their label.
pub fn footer_href(label: &str) -> String {
    SectionId::from_label(label).map_or_else(|| "#".to_owned(), SectionId::href)
}

#[component]
pub fn Footer() -> impl IntoView {
    let targets = use_scroll_targets();

    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <section
                    id=SectionId::About.anchor()
                    node_ref=targets.node(SectionId::About)
                    class="site-footer__brand"
                >
                    <div class="site-footer__logo">
                        <span aria-hidden="true">"✚"</span>
                        <span class="gradient-text">"MedAI Diagnostics"</span>
                    </div>
                    <p class="site-footer__blurb">{BRAND_BLURB}</p>
                    <div class="site-footer__social">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(label, glyph)| {
                                view! {
                                    <a class="site-footer__social-link" href="#" aria-label=label>
                                        {glyph}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
                {FOOTER_GROUPS
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="site-footer__group">
                                <h3 class="site-footer__heading">{group.heading}</h3>
                                <ul class="site-footer__links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|&label| {
                                            view! {
                                                <li>
                                                    <a class="site-footer__link" href=footer_href(label)>
                                                        {label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="site-footer__copyright">{COPYRIGHT}</p>
        </footer>
    }
}
