//! Named scroll targets for the landing page.
//!
//! DESIGN
//! ======
//! Sections attach the `NodeRef` handed out by `ScrollTargets` instead of
//! being looked up by DOM id. Callers (hero, upload, header) ask the context
//! to scroll; a target that is not mounted is a silent miss. Anchor ids are
//! still rendered so plain `#upload` links keep working without script.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::html;
use leptos::prelude::*;

/// Landing-page sections that can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Features,
    HowItWorks,
    Upload,
    Demo,
    About,
}

impl SectionId {
    pub const ALL: [Self; 5] = [Self::Features, Self::HowItWorks, Self::Upload, Self::Demo, Self::About];

    /// DOM id rendered on the section element.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::HowItWorks => "how-it-works",
            Self::Upload => "upload",
            Self::Demo => "demo",
            Self::About => "about",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::HowItWorks => "How It Works",
            Self::Upload => "Upload",
            Self::Demo => "Demo",
            Self::About => "About",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Reverse of [`SectionId::label`], used by footer links that share copy
    /// with the header.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.label() == label)
    }
}

/// One `NodeRef` per scrollable section, shared through context.
#[derive(Clone, Copy)]
pub struct ScrollTargets {
    features: NodeRef<html::Section>,
    how_it_works: NodeRef<html::Section>,
    upload: NodeRef<html::Section>,
    demo: NodeRef<html::Section>,
    about: NodeRef<html::Section>,
}

impl ScrollTargets {
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: NodeRef::new(),
            how_it_works: NodeRef::new(),
            upload: NodeRef::new(),
            demo: NodeRef::new(),
            about: NodeRef::new(),
        }
    }

    /// The ref a section must attach with `node_ref=`.
    #[must_use]
    pub fn node(&self, id: SectionId) -> NodeRef<html::Section> {
        match id {
            SectionId::Features => self.features,
            SectionId::HowItWorks => self.how_it_works,
            SectionId::Upload => self.upload,
            SectionId::Demo => self.demo,
            SectionId::About => self.about,
        }
    }

    /// Smooth-scroll to a section. Returns `false` when it is not mounted.
    pub fn scroll_to(&self, id: SectionId) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(section) = self.node(id).get_untracked() else {
                log::debug!("scroll target {} not mounted", id.anchor());
                return false;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("scroll to {} skipped outside the browser", id.anchor());
            false
        }
    }
}

impl Default for ScrollTargets {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the landing page's scroll targets and provide them as context.
pub fn provide_scroll_targets() -> ScrollTargets {
    let targets = ScrollTargets::new();
    provide_context(targets);
    targets
}

/// Fetch the scroll targets provided by the landing page.
pub fn use_scroll_targets() -> ScrollTargets {
    expect_context::<ScrollTargets>()
}
