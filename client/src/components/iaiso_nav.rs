//! IAISO navigation bar: certification, learning and solutions dropdowns,
//! top-level links, theme toggle and the mobile menu.
//!
//! Dropdowns open on hover (or tap) and linger briefly after the pointer
//! leaves. Every menu closes when the route changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::hover_menus::HoverMenus;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::site_map::{
    CERTIFICATION_LINKS, IAISO_TOP_LINKS, IaisoMenu, LearningCategory, NavLink, SOLUTION_LINKS, programs_in,
};

fn link_list(links: &'static [NavLink]) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            view! {
                <a href=link.href class="dropdown__link">
                    <span class="dropdown__label">{link.label}</span>
                    {link.description.map(|d| view! { <span class="dropdown__desc">{d}</span> })}
                </a>
            }
        })
        .collect_view()
}

fn learning_columns() -> impl IntoView {
    LearningCategory::ALL
        .into_iter()
        .map(|category| {
            view! {
                <div class="mega-menu__column">
                    <h4 class="mega-menu__heading">{category.label()}</h4>
                    {programs_in(category)
                        .map(|program| view! { <a href=program.href() class="mega-menu__link">{program.menu_label()}</a> })
                        .collect_view()}
                </div>
            }
        })
        .collect_view()
}

fn menu_panel(menu: IaisoMenu) -> AnyView {
    match menu {
        IaisoMenu::Certifications => view! { <div class="dropdown">{link_list(&CERTIFICATION_LINKS)}</div> }.into_any(),
        IaisoMenu::Learning => view! { <div class="mega-menu">{learning_columns()}</div> }.into_any(),
        IaisoMenu::Solutions => view! { <div class="dropdown">{link_list(&SOLUTION_LINKS)}</div> }.into_any(),
    }
}

#[component]
pub fn IaisoNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let menus = HoverMenus::new(IaisoMenu::ALL);

    Effect::new(move || {
        location.pathname.track();
        menus.close_all();
        ui.update(UiState::route_changed);
    });

    let dropdowns = IaisoMenu::ALL
        .into_iter()
        .map(|menu| {
            view! {
                <div
                    class="nav__item"
                    on:mouseenter=move |_| menus.enter(menu)
                    on:mouseleave=move |_| menus.leave(menu)
                >
                    <button
                        class="nav__trigger"
                        class:nav__trigger--open=move || menus.is_visible(menu)
                        on:click=move |_| menus.toggle(menu)
                    >
                        {menu.label()}
                        <span class="nav__caret">"▾"</span>
                    </button>
                    <Show when=move || menus.is_visible(menu)>{move || menu_panel(menu)}</Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <nav class="site-nav site-nav--iaiso" class:site-nav--scrolled=move || ui.get().scrolled>
            <a href="/" class="site-nav__logo">"IAISO"</a>
            <div class="site-nav__links">
                {dropdowns}
                {IAISO_TOP_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class="nav__link">{link.label}</a> })
                    .collect_view()}
            </div>
            <div class="site-nav__actions">
                <ThemeToggle/>
                <button
                    class="btn site-nav__burger"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    aria-label="Menu"
                >
                    {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.get().mobile_menu_open>
                <div class="mobile-menu">
                    <h4 class="mobile-menu__heading">"Certifications"</h4>
                    {link_list(&CERTIFICATION_LINKS)}
                    <h4 class="mobile-menu__heading">"Learning"</h4>
                    {LearningCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let href = programs_in(category).next().map(|p| p.href()).unwrap_or_default();
                            view! { <a href=href class="mobile-menu__link">{category.label()}</a> }
                        })
                        .collect_view()}
                    <h4 class="mobile-menu__heading">"Rooman AI Solutions"</h4>
                    {link_list(&SOLUTION_LINKS)}
                    {IAISO_TOP_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="mobile-menu__link">{link.label}</a> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
