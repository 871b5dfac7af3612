//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{footer::RoomanFooter, iaiso_nav::IaisoNav, rooman_nav::RoomanNav};
use crate::pages::{
    about::AboutPage, ai_solutions::AiSolutionsPage, blog::BlogPage, certifications::CertificationsPage,
    events::EventsPage, iaiso_home::IaisoHomePage, membership::MembershipPage, not_found::NotFound,
    program::ProgramPage, rooman_home::RoomanHomePage, services::ServicesPage, shop::ShopPage,
};
use crate::state::ui::UiState;
use crate::util::certifications::CertificationTrack;
use crate::util::site_map::{Site, site_for_path};
use crate::util::{browser, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site-wide UI state, restores the stored theme once the page
/// hydrates and tracks the scroll offset for the navigation bar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    Effect::new(move |_| {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|s| s.theme = theme);
    });

    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let mut next = ui.get_untracked();
        if next.set_scroll_y(browser::scroll_y()) {
            ui.set(next);
        }
    });
    on_cleanup(move || scroll.remove());

    view! {
        <Stylesheet id="leptos" href="/pkg/iaiso-site.css"/>
        <Title text="IAISO"/>

        <Router>
            <SiteNav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=IaisoHomePage/>
                    <Route
                        path=StaticSegment("system-certifications")
                        view=|| view! { <CertificationsPage track=CertificationTrack::System/> }
                    />
                    <Route
                        path=StaticSegment("organizational-certifications")
                        view=|| view! { <CertificationsPage track=CertificationTrack::Organizational/> }
                    />
                    <Route
                        path=StaticSegment("professional-certifications")
                        view=|| view! { <CertificationsPage track=CertificationTrack::Professional/> }
                    />
                    <Route
                        path=(StaticSegment("learning"), ParamSegment("category"), ParamSegment("slug"))
                        view=ProgramPage
                    />
                    <Route path=StaticSegment("membership") view=MembershipPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("rooman-ai-solutions") view=AiSolutionsPage/>

                    <Route path=StaticSegment("rooman") view=RoomanHomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("shop") view=ShopPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

/// Current site, derived from the path; drives which chrome is shown.
fn use_site() -> Memo<Site> {
    let location = use_location();
    Memo::new(move |_| location.pathname.with(|path| site_for_path(path)))
}

#[component]
fn SiteNav() -> impl IntoView {
    let site = use_site();
    move || match site.get() {
        Site::Iaiso => view! { <IaisoNav/> }.into_any(),
        Site::Rooman => view! { <RoomanNav/> }.into_any(),
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let site = use_site();
    move || (site.get() == Site::Rooman).then(|| view! { <RoomanFooter/> })
}
