//! Marketing landing page.

use leptos::prelude::*;

use crate::components::demo::Demo;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::upload::Upload;
use crate::util::scroll::provide_scroll_targets;

/// Landing page: header, hero, content sections, footer.
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_scroll_targets();

    view! {
        <div class="landing medical-grid">
            <Header/>
            <main>
                <Hero/>
                <Features/>
                <HowItWorks/>
                <Upload/>
                <Demo/>
            </main>
            <Footer/>
        </div>
    }
}
