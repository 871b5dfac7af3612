use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::logo_marquee::{CLIENTS, LogoMarquee};
use crate::util::timelines::TimelineId;

struct Service {
    title: &'static str,
    paragraphs: [&'static str; 3],
    /// Border accent, cycling through the brand colours.
    accent: &'static str,
}

static SERVICES: [Service; 7] = [
    Service {
        title: "IT Infrastucture Technology",
        paragraphs: [
            "End-to-end design, deployment, and management of core IT infrastructure: networks, data centers, security, and endpoints. We help you modernize legacy environments, standardize configurations, and build resilient foundations that keep your business online and performant.",
            "Our team audits your current landscape, identifies risk and performance gaps, and then designs a pragmatic roadmap that fits your budget and timelines. We work across on-prem, hybrid, and cloud-native environments so your infrastructure can evolve without disrupting day-to-day operations.",
            "Whether you are opening new locations, consolidating facilities, or preparing for the next wave of digital services, we ensure your infrastructure is secure, scalable, and ready for what comes next.",
        ],
        accent: "orange",
    },
    Service {
        title: "IT Consultancy & Solutions",
        paragraphs: [
            "Strategic advisory and solution architecture for organizations navigating complex technology decisions. From assessments and roadmaps to vendor selection and implementation oversight, we align your IT investments with measurable business outcomes.",
            "We translate business challenges into clear technology initiatives, helping you prioritize what to build, buy, or retire. Our consultants bring deep experience across industries and vendors so you get independent, practical recommendations, not generic slideware.",
            "From quick assessments to full transformation programs, we stay involved through execution to make sure your strategy turns into reliable, working systems for your teams and customers.",
        ],
        accent: "green",
    },
    Service {
        title: "AI Product & Services",
        paragraphs: [
            "Conceive, prototype, and operationalize AI products, from data pipelines and model development to inference APIs and monitoring. We focus on safe, explainable AI that enhances decision-making, automates repetitive work, and unlocks new experiences for your users.",
            "Our experts work with your domain teams to identify high-impact AI use cases, validate them through rapid pilots, and then harden them for production. We pay special attention to data quality, governance, and security so your solutions remain robust at scale.",
            "Whether you are building recommendation engines, intelligent assistants, or predictive analytics, we help you move from experimentation to reliable AI that your business can depend on.",
        ],
        accent: "blue",
    },
    Service {
        title: "Cloud Management Services",
        paragraphs: [
            "Ongoing management of your cloud environments across providers. We handle provisioning, observability, cost optimization, backups, and security hardening so your teams can ship features while we keep the platform healthy and compliant.",
            "Our cloud engineers design guardrails and automation around your environments, reducing manual work and minimizing the risk of misconfigurations. We monitor performance and costs in real time, continuously tuning your setup to match changing workloads.",
            "From initial cloud migration to long-term operations, we act as an extension of your internal team, bringing best practices, tools, and processes that keep your cloud fast, secure, and predictable.",
        ],
        accent: "orange",
    },
    Service {
        title: "Robotics",
        paragraphs: [
            "Design and integration of robotic solutions that streamline operations, whether in warehouses, campuses, or field environments. We bring together hardware, control systems, and software to create automations that are safe, reliable, and maintainable.",
            "We begin with detailed process studies to understand your workflows and identify where robotics can create real value. From there, we design and integrate systems that fit into your existing infrastructure, including connectivity, data collection, and monitoring.",
            "Our goal is not just to deploy robots, but to build sustainable robotic operations that your teams can control, scale, and evolve over time.",
        ],
        accent: "green",
    },
    Service {
        title: "BlockChain",
        paragraphs: [
            "Secure, distributed solutions built on blockchain platforms. We help you evaluate use cases, design smart contracts, and integrate ledgers with existing systems to increase transparency, traceability, and trust across your ecosystem.",
            "Our approach starts with clarifying when blockchain is truly the right fit, then choosing the right platforms and architectures for your requirements. We design and implement smart contracts, APIs, and user interfaces that make your solution usable in real-world environments.",
            "From proofs of concept to production-grade deployments, we focus on security, compliance, and performance so your blockchain initiatives can stand up to scrutiny.",
        ],
        accent: "blue",
    },
    Service {
        title: "Skill & Technology Trainings.",
        paragraphs: [
            "Structured upskilling programs for students and teams across cloud, AI, cybersecurity, and modern software engineering. From foundational curricula to advanced labs, we focus on hands-on learning that translates directly into employable skills.",
            "Our trainers blend real project experience with clear, practical instruction using labs, projects, and assessments rather than just slides. Programs can be tailored for academic institutions, corporate teams, or government initiatives.",
            "Whether you need a single workshop or a multi-month learning journey, we help you build talent pipelines that are aligned with today's technology landscape.",
        ],
        accent: "navy",
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page services-page">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <p class="eyebrow">"Rooman Technologies"</p>
                    <h1 class="page__title">"Services"</h1>
                    <p class="page__sub">
                        "Infrastructure, consultancy, AI, cloud, robotics, blockchain and training, delivered end to end by one team."
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ValueCards class="section service-list">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class=format!("card service service--{}", service.accent) data-anim="value-card">
                                <h3>{service.title}</h3>
                                {service.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                            </article>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>

            <LogoMarquee title="Clients" logos=&CLIENTS/>
        </div>
    }
}
