use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::util::timelines::TimelineId;

struct Offer {
    title: &'static str,
    description: &'static str,
    href: &'static str,
    image_src: &'static str,
}

static OFFERS: [Offer; 4] = [
    Offer {
        title: "Industry Certifications",
        description: "Get certified in AI, cloud, cybersecurity, and emerging technologies with industry-recognized credentials.",
        href: "/system-certifications",
        image_src: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?q=80&w=2486&auto=format&fit=crop",
    },
    Offer {
        title: "Expert-Led Learning",
        description: "Access world-class courses and hands-on labs designed by industry experts and top educators.",
        href: "/learning/engineering/software",
        image_src: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?q=80&w=2486&auto=format&fit=crop",
    },
    Offer {
        title: "Professional Network",
        description: "Join India's largest community of AI and IT professionals. Connect, collaborate, and grow.",
        href: "/membership",
        image_src: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=2486&auto=format&fit=crop",
    },
    Offer {
        title: "Events & Conferences",
        description: "Attend conferences, workshops, hackathons, and networking events across India.",
        href: "/events",
        image_src: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2486&auto=format&fit=crop",
    },
];

const HIGHLIGHTS: [&str; 6] = [
    "Industry-recognized certifications",
    "Expert-led training programs",
    "Networking opportunities",
    "Career advancement support",
    "Access to latest technologies",
    "Community-driven learning",
];

const OFFICES: [(&str, &str); 5] = [
    ("Bangalore", "HQ"),
    ("Delhi NCR", "Regional Office"),
    ("Mumbai", "Regional Office"),
    ("Hyderabad", "Training Center"),
    ("Chennai", "Training Center"),
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Certifications", "/system-certifications"),
    ("Learning", "/learning/engineering/software"),
    ("Membership", "/membership"),
    ("Events", "/events"),
];

#[component]
pub fn IaisoHomePage() -> impl IntoView {
    view! {
        <div class="page iaiso-home">
            <AnimatedSection timeline=TimelineId::PageHero class="iaiso-hero">
                <div data-anim="page-hero" class="iaiso-hero__inner">
                    <h1 class="iaiso-hero__title">"IAISO"</h1>
                    <p class="page__sub">
                        "International Artificial Intelligence Standards Organisation brings together professionals, organizations, and assessors to build trusted AI standards and capabilities."
                    </p>
                    <a href="/membership" class="btn btn--primary">"JOIN IAISO"</a>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ListingHeader class="section">
                <div data-anim="header" class="center">
                    <h2 class="section__heading">"What We Offer"</h2>
                    <p>
                        "Comprehensive solutions for individuals and organizations looking to upskill in AI, cloud, cybersecurity, and emerging technologies."
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ListingGrid class="offer-rail">
                {OFFERS
                    .iter()
                    .map(|offer| {
                        view! {
                            <a href=offer.href class="offer-card" data-anim="grid-item">
                                <img src=offer.image_src alt=offer.title loading="lazy"/>
                                <div class="offer-card__reveal">
                                    <h3>{offer.title}</h3>
                                    <p>{offer.description}</p>
                                    <span class="link-arrow">"Learn more"</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section" class="grid grid--2">
                    <div>
                        <h2 class="section__heading">"Why Choose IAISO?"</h2>
                        <ul class="checklist">{HIGHLIGHTS.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}</ul>
                        <p class="muted">"Join " <span class="accent">"50,000+"</span> " professionals"</p>
                    </div>
                    <div class="card card--green">
                        <h3>"Pan-India Presence"</h3>
                        <p class="muted">"20+ cities across India"</p>
                        <dl class="offices">
                            {OFFICES
                                .into_iter()
                                .map(|(city, role)| view! { <dt>{city}</dt> <dd>{role}</dd> })
                                .collect_view()}
                        </dl>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section" class="card card--featured">
                    <span class="badge">"Enterprise Solutions"</span>
                    <h3>"Rooman AI Solutions"</h3>
                    <p>
                        "Enterprise-grade AI and cloud solutions for businesses. Transform your organization with cutting-edge technology."
                    </p>
                    <a href="/rooman-ai-solutions" class="btn btn--primary">"Explore Solutions"</a>
                    <span class="muted">"500+ Enterprise Clients"</span>
                </div>
            </AnimatedSection>

            <section class="section quick-links">
                <div>
                    <h4>"IAISO"</h4>
                    <p class="muted">"Indian AI & IT Solutions Organization"</p>
                </div>
                <nav>
                    {QUICK_LINKS.into_iter().map(|(label, href)| view! { <a href=href>{label}</a> }).collect_view()}
                </nav>
            </section>
        </div>
    }
}
