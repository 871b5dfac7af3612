//! Rooman navigation bar.
//!
//! Section links scroll the Rooman home page. From any other page they
//! navigate home first and scroll once the page has rendered.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::hover_menus::HoverMenus;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::browser;
use crate::util::site_map::{
    ROOMAN_HOME, ROOMAN_PAGES_MENU, ROOMAN_TOP_LINKS, RoomanLink, RoomanTarget, SECTION_SCROLL_DELAY_MS,
    needs_home_navigation,
};
use crate::util::timer::TimerSlot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoomanMenu {
    Pages,
}

#[component]
pub fn RoomanNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();
    let menus = HoverMenus::new([RoomanMenu::Pages]);
    let pending_scroll = TimerSlot::new();

    Effect::new(move || {
        location.pathname.track();
        menus.close_all();
        ui.update(UiState::route_changed);
    });

    let go = move |target: RoomanTarget| {
        ui.update(UiState::route_changed);
        match target {
            RoomanTarget::Page(href) => navigate(href, NavigateOptions::default()),
            RoomanTarget::Section(id) => {
                if needs_home_navigation(&location.pathname.get_untracked()) {
                    navigate(ROOMAN_HOME, NavigateOptions::default());
                    pending_scroll.schedule(SECTION_SCROLL_DELAY_MS, move || {
                        browser::scroll_to_id(id);
                    });
                } else {
                    browser::scroll_to_id(id);
                }
            }
        }
    };

    let entry = {
        let go = go.clone();
        move |link: RoomanLink, class: &'static str| {
            let go = go.clone();
            view! {
                <button class=class on:click=move |_| go(link.target)>
                    {link.label}
                </button>
            }
        }
    };

    let pages = ROOMAN_PAGES_MENU.into_iter().map({
        let entry = entry.clone();
        move |link| entry(link, "dropdown__link")
    });
    let top = ROOMAN_TOP_LINKS.into_iter().map({
        let entry = entry.clone();
        move |link| entry(link, "nav__link")
    });
    let mobile = ROOMAN_PAGES_MENU.into_iter().chain(ROOMAN_TOP_LINKS).map({
        let entry = entry.clone();
        move |link| entry(link, "mobile-menu__link")
    });
    let on_home = {
        let go = go.clone();
        move |_| go(RoomanTarget::Section("hero"))
    };
    let on_cta = {
        let go = go.clone();
        move |_| go(RoomanTarget::Section("contact"))
    };
    let pages = pages.collect_view();
    let top = top.collect_view();
    let mobile = mobile.collect_view();

    view! {
        <nav class="site-nav site-nav--rooman" class:site-nav--scrolled=move || ui.get().scrolled>
            <a href=ROOMAN_HOME class="site-nav__logo">"Rooman"</a>
            <div class="site-nav__links">
                <button class="nav__link" on:click=on_home>"Home"</button>
                <div
                    class="nav__item"
                    on:mouseenter=move |_| menus.enter(RoomanMenu::Pages)
                    on:mouseleave=move |_| menus.leave(RoomanMenu::Pages)
                >
                    <button
                        class="nav__trigger"
                        class:nav__trigger--open=move || menus.is_visible(RoomanMenu::Pages)
                        on:click=move |_| menus.toggle(RoomanMenu::Pages)
                    >
                        "Pages"
                        <span class="nav__caret">"▾"</span>
                    </button>
                    <div class="dropdown" class:dropdown--open=move || menus.is_visible(RoomanMenu::Pages)>
                        {pages}
                    </div>
                </div>
                {top}
            </div>
            <div class="site-nav__actions">
                <button class="btn btn--primary site-nav__cta" on:click=on_cta>"Get in touch"</button>
                <ThemeToggle/>
                <button
                    class="btn site-nav__burger"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    aria-label="Menu"
                >
                    {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            <div class="mobile-menu" class:mobile-menu--open=move || ui.get().mobile_menu_open>
                {mobile}
            </div>
        </nav>
    }
}
