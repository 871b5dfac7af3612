use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::logo_marquee::{LogoMarquee, QUALITY_BODIES};
use crate::util::timelines::TimelineId;

const INTRO: [&str; 2] = [
    "Founded in 1999 in Bangalore, India, Rooman Technologies began as a group of technology enthusiasts with a clear intent: to build practical, scalable technology solutions that solve real-world problems.",
    "From the very beginning, Rooman focused on assembling strong technical teams and instilling a long-term vision around innovation, reliability, and impact. The founding team and board closely tracked global and Indian technology shifts, continuously evolving ideas and platforms to stay aligned with emerging industry needs. This approach allowed Rooman to grow from a single initiative into a multi-domain technology organization.",
];

const HISTORY: [&str; 3] = [
    "Over the years, Rooman has partnered extensively with government bodies and large institutions to design and deploy technology-led solutions at scale. These engagements span digital infrastructure, enterprise platforms, workforce systems, and large-scale deployment programs, enabling transformation across public and private sectors. Today, Rooman operates pan-India, delivering solutions that support operations, enable digital adoption, and create measurable impact.",
    "Technology and engineering excellence sit at the core of Rooman's culture. The company follows strong internal knowledge-sharing and capability-building practices to ensure its teams stay current with modern architectures, tools, and frameworks. Its development environments, innovation labs, and collaboration spaces are designed to support end-to-end solution building, from ideation and prototyping to deployment and support.",
    "Rooman has built a diverse portfolio of technology products and services across networking, software, and hardware domains. Its offerings include enterprise application development, IoT and ERP solutions, cybersecurity and data security services, data center support, and customized digital platforms tailored to industry and government needs. With a focus on scalability, security, and long-term value, Rooman continues to build technology solutions that power organizations and ecosystems across India.",
];

const VIDEO_SRC: &str = "https://www.youtube.com/embed/RbeSjpjhGWU?start=5";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <p class="eyebrow">"Rooman Technologies"</p>
                    <h1 class="page__title">"About Us"</h1>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section" class="grid grid--2">
                    <div class="prose">{INTRO.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}</div>
                    <div class="video-frame">
                        <iframe
                            src=VIDEO_SRC
                            title="Rooman Technologies"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>
                <div data-anim="section" class="prose">
                    {HISTORY.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </AnimatedSection>

            <LogoMarquee title="Quality Assurance" logos=&QUALITY_BODIES reverse=true/>
        </div>
    }
}
