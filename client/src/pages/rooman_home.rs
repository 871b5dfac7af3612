//! Rooman landing page.
//!
//! Hero, Integrate and Empower are pinned while the visitor scrolls
//! through them; their spans are reported to the page's [`PinRegistry`]
//! and `ScrollSnap` settles idle scroll positions onto them. The rest of
//! the page scrubs or reveals in place.

use leptos::prelude::*;

use crate::components::animated_section::{AnimatedSection, PinRegistry};
use crate::components::contact_section::ContactSection;
use crate::components::logo_marquee::{CLIENTS, LogoMarquee, QUALITY_BODIES};
use crate::components::scroll_snap::ScrollSnap;
use crate::util::timelines::TimelineId;

struct Feature {
    id: &'static str,
    headline: &'static str,
    body: &'static str,
    cta: &'static str,
    video_src: &'static str,
    chips: [&'static str; 3],
}

static FEATURES: [Feature; 2] = [
    Feature {
        id: "integrate",
        headline: "Integrate",
        body: "Connect data, platforms and teams into one dependable system that is ready for AI.",
        cta: "See how we integrate",
        video_src: "/Integrate.mp4",
        chips: ["Data Platforms", "API Integration", "Legacy Modernization"],
    },
    Feature {
        id: "empower",
        headline: "Empower",
        body: "Turn complex technology into clear outcomes: faster decisions, lower risk, real growth.",
        cta: "Read client stories",
        video_src: "/Empower.mp4",
        chips: ["Product Strategy", "UX Engineering", "Growth Systems"],
    },
];

const SERVICES: [(&str, &str); 7] = [
    ("IT Infrastucture Technology", "Design, deploy, and manage core IT infrastructure end to end."),
    ("IT Consultancy & Solutions", "Advisory, architecture, and implementation for complex IT needs."),
    ("AI Product & Services", "AI-driven products and solutions tailored to your business."),
    ("Cloud Management Services", "Cloud operations, optimization, and governance across platforms."),
    ("Robotics", "Robotic solutions that automate and streamline operations."),
    ("BlockChain", "Secure, distributed applications built on blockchain technology."),
    ("Skill & Technology Trainings.", "Upskilling programs that empower teams with modern tech skills."),
];

const INDUSTRIES: [(&str, &str, &str); 4] = [
    ("Healthcare", "Compliance-first systems that protect patient data.", "/industry_healthcare.jpg"),
    ("Financial Services", "Secure platforms for payments, risk, and analytics.", "/industry_finance.jpg"),
    ("Retail & Logistics", "Real-time supply chain and customer experiences.", "/industry_retail.jpg"),
    ("Technology", "Scalable infrastructure for high-growth teams.", "/industry_tech.jpg"),
];

const ABOUT_STATS: [(&str, &str); 7] = [
    ("25+", "Years delivering platforms"),
    ("40+", "Projects shipped"),
    ("96%", "Client retention"),
    ("24", "Academic Partners"),
    ("198", "Centers"),
    ("52", "Cities"),
    ("1.2M+", "Students Empowered"),
];

const ROLES: [(&str, &str, &str); 4] = [
    ("Senior Cloud Engineer", "Remote", "Full-time"),
    ("ML Platform Engineer", "New York, NY", "Full-time"),
    ("Product Designer", "Remote", "Full-time"),
    ("Technical Program Manager", "San Francisco, CA", "Full-time"),
];

#[component]
pub fn RoomanHomePage() -> impl IntoView {
    provide_context(PinRegistry::new());

    view! {
        <div class="page rooman-home">
            <Hero/>
            {FEATURES.iter().map(|feature| view! { <FeatureBlock feature=feature/> }).collect_view()}
            <Capabilities/>
            <Industries/>
            <About/>
            <LogoMarquee title="Clients" logos=&CLIENTS/>
            <LogoMarquee title="Quality Assurance" logos=&QUALITY_BODIES reverse=true/>
            <Careers/>
            <ContactSection/>
            <ScrollSnap/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <AnimatedSection timeline=TimelineId::HeroScroll id="hero" class="hero">
            <video class="hero__video" src="/Innovate.mp4" autoplay muted loop playsinline></video>
            <AnimatedSection timeline=TimelineId::HeroLoad class="hero__content">
                <div class="hero__copy">
                    <span class="eyebrow">"Rooman Technologies"</span>
                    <div data-anim="hero-headline-line">
                        <h1 class="hero__headline" data-anim="hero-headline">"Innovate"</h1>
                    </div>
                    <div data-anim="hero-sub-reveal">
                        <p class="hero__sub" data-anim="hero-sub">
                            "AI systems, cloud infrastructure, and product engineering built for scale."
                        </p>
                    </div>
                    <div data-anim="hero-cta-reveal">
                        <div class="hero__cta" data-anim="hero-cta"></div>
                    </div>
                </div>
                <div data-anim="hero-image-reveal">
                    <div class="hexagon hexagon--lg" data-anim="hero-image">
                        <img src="/hero_innovate.jpg" alt="Innovation"/>
                    </div>
                </div>
                <div class="chips" data-anim="hero-chip-reveal">
                    {["Cloud-native", "AI/ML ready", "Secure by design"]
                        .into_iter()
                        .map(|label| view! { <span class="feature-chip" data-anim="hero-chip">{label}</span> })
                        .collect_view()}
                </div>
            </AnimatedSection>
        </AnimatedSection>
    }
}

#[component]
fn FeatureBlock(feature: &'static Feature) -> impl IntoView {
    view! {
        <AnimatedSection timeline=TimelineId::FeatureScroll id=feature.id class="hero feature">
            <video class="hero__video" src=feature.video_src autoplay muted loop playsinline data-anim="feature-image"></video>
            <div class="hero__content">
                <div class="hero__copy">
                    <h2 class="hero__headline" data-anim="feature-headline">{feature.headline}</h2>
                    <p class="hero__sub" data-anim="feature-body">{feature.body}</p>
                    <button class="btn btn--primary" data-anim="feature-cta">{feature.cta}</button>
                </div>
                <div class="chips">
                    {feature
                        .chips
                        .iter()
                        .map(|label| view! { <span class="feature-chip" data-anim="feature-chip">{*label}</span> })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn Capabilities() -> impl IntoView {
    view! {
        <section id="capabilities" class="section">
            <AnimatedSection timeline=TimelineId::HeadingScrub>
                <div data-anim="heading">
                    <span class="eyebrow">"Services"</span>
                    <h2 class="section__heading">"Services"</h2>
                    <p>"Explore the core services we offer across infrastructure, cloud, AI, and training."</p>
                </div>
            </AnimatedSection>
            <AnimatedSection timeline=TimelineId::CardsScrub class="grid grid--4">
                {SERVICES
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <a href="/services" class="card card--link" data-anim="card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>
        </section>
    }
}

#[component]
fn Industries() -> impl IntoView {
    view! {
        <AnimatedSection timeline=TimelineId::TilesScrub id="industries" class="section">
            <div data-anim="heading" class="center">
                <span class="eyebrow">"Our Expertise"</span>
                <h2 class="section__heading">"Industries"</h2>
                <p>"Deep expertise in regulated, data-rich environments."</p>
            </div>
            <div class="grid grid--4">
                {INDUSTRIES
                    .into_iter()
                    .map(|(title, description, image)| {
                        view! {
                            <div class="industry-tile" data-anim="tile">
                                <div class="hexagon" style=format!("background-image: url('{image}')")></div>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <AnimatedSection timeline=TimelineId::AboutScroll id="about" class="section about">
            <div class="about__image" data-anim="about-image">
                <div class="hexagon hexagon--lg">
                    <img src="/image.png" alt="About Rooman"/>
                </div>
                <a href="/about" class="btn">"Explore more"</a>
            </div>
            <div class="about__body">
                <div data-anim="about-text">
                    <span class="eyebrow">"Who We Are"</span>
                    <h2 class="section__heading">"About Rooman"</h2>
                    <p>
                        "We're a team of engineers, designers, and strategists helping organizations ship faster and safer. With over a decade of experience, we've built a reputation for delivering mission-critical systems that scale."
                    </p>
                    <p class="muted">
                        "Our approach combines deep technical expertise with a product-minded perspective. We don't just write code. We solve business problems through technology."
                    </p>
                </div>
                <div class="stats">
                    {ABOUT_STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat" data-anim="stat">
                                    <div class="stat__value">{value}</div>
                                    <div class="stat__label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn Careers() -> impl IntoView {
    view! {
        <AnimatedSection timeline=TimelineId::TilesScrub id="careers" class="section">
            <div data-anim="heading" class="center">
                <span class="eyebrow">"Join Us"</span>
                <h2 class="section__heading">"Join the team"</h2>
                <p>"Build challenging things with kind, brilliant people."</p>
            </div>
            <div class="grid grid--2">
                {ROLES
                    .into_iter()
                    .map(|(title, location, kind)| {
                        view! {
                            <div class="card role" data-anim="tile">
                                <h3>{title}</h3>
                                <p class="muted">{location} " · " {kind}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="center">
                <button class="btn">"View all roles"</button>
            </div>
        </AnimatedSection>
    }
}
