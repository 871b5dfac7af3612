use leptos::prelude::*;

/// Calendar year for the copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

const COMPANY_LINKS: [(&str, &str); 2] = [("About", "/rooman#about"), ("Contact", "/rooman#contact")];
const RESOURCE_LINKS: [(&str, &str); 2] = [("Blog", "/blog"), ("Shop", "/shop")];
const SOCIALS: [&str; 4] = ["LinkedIn", "Twitter", "GitHub", "YouTube"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Settings"];

fn link_column(title: &'static str, links: [(&'static str, &'static str); 2]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h4 class="footer__heading">{title}</h4>
            {links.into_iter().map(|(label, href)| view! { <a href=href class="footer__link">{label}</a> }).collect_view()}
        </div>
    }
}

/// Footer shown on Rooman routes.
#[component]
pub fn RoomanFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__top">
                <div class="footer__brand">
                    <a href="/rooman" class="site-nav__logo">"Rooman"</a>
                    <p class="footer__tagline">
                        "Innovate. Integrate. Empower. We build AI systems, cloud infrastructure, and product engineering solutions for scale."
                    </p>
                    <div class="footer__socials">
                        {SOCIALS
                            .into_iter()
                            .map(|label| view! { <a href="#" class="footer__social" aria-label=label>{label}</a> })
                            .collect_view()}
                    </div>
                </div>
                {link_column("Company", COMPANY_LINKS)}
                {link_column("Resources", RESOURCE_LINKS)}
            </div>
            <div class="site-footer__bottom">
                <span>{format!("© {} Rooman Technologies. All rights reserved.", current_year())}</span>
                <div class="footer__legal">
                    {LEGAL_LINKS.into_iter().map(|label| view! { <a href="#" class="footer__link">{label}</a> }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
