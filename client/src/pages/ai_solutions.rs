use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::util::timelines::TimelineId;

struct Product {
    name: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

static PRODUCTS: [Product; 6] = [
    Product {
        name: "Rooman AI Platform",
        description: "Enterprise-grade AI platform for building, deploying, and managing machine learning models at scale.",
        features: ["AutoML", "Model Monitoring", "MLOps Pipeline", "API Integration"],
    },
    Product {
        name: "Cloud Manager Pro",
        description: "Unified multi-cloud management solution for AWS, Azure, and GCP with cost optimization.",
        features: ["Cost Analytics", "Auto-scaling", "Security Scanning", "Compliance Reports"],
    },
    Product {
        name: "SecureShield AI",
        description: "AI-powered cybersecurity platform for threat detection and automated response.",
        features: ["Threat Intelligence", "Behavioral Analytics", "Auto-remediation", "SIEM Integration"],
    },
    Product {
        name: "DataFlow Engine",
        description: "Real-time data processing and analytics platform for big data workloads.",
        features: ["Stream Processing", "Data Lake", "ETL Automation", "Visual Analytics"],
    },
    Product {
        name: "DevOps Suite",
        description: "Complete CI/CD and infrastructure automation platform for modern development teams.",
        features: ["Pipeline Orchestration", "GitOps", "Container Management", "Observability"],
    },
    Product {
        name: "Edge Compute Hub",
        description: "Distributed edge computing platform for IoT and low-latency applications.",
        features: ["Edge Deployment", "Device Management", "Offline Capability", "5G Ready"],
    },
];

const STATS: [(&str, &str); 4] =
    [("50+", "Enterprise Products"), ("1000+", "Global Clients"), ("99.9%", "Uptime SLA"), ("24/7", "Expert Support")];

const RESOURCES: [(&str, &str); 3] = [
    ("Case Studies", "Success stories from our clients"),
    ("Documentation", "Technical docs and API references"),
    ("Support Portal", "Get help from our team"),
];

#[component]
pub fn AiSolutionsPage() -> impl IntoView {
    view! {
        <div class="page ai-solutions">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <span class="badge">"Powered by Rooman Technologies"</span>
                    <h1 class="page__title">"Rooman AI Solutions"</h1>
                    <p class="page__sub">
                        "Enterprise-grade AI and cloud solutions powered by Rooman Technologies. Transform your business with cutting-edge technology."
                    </p>
                </div>
            </AnimatedSection>

            <section class="section stats">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">{value}</div>
                                <div class="stat__label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <AnimatedSection timeline=TimelineId::ListingHeader class="section">
                <div data-anim="header">
                    <h2 class="section__heading">"Our Products"</h2>
                    <p>
                        "Comprehensive suite of AI and cloud solutions designed to accelerate digital transformation for enterprises of all sizes."
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ListingGrid class="section grid grid--3">
                {PRODUCTS
                    .iter()
                    .map(|product| {
                        view! {
                            <div class="card product-card" data-anim="grid-item">
                                <h3>{product.name}</h3>
                                <p>{product.description}</p>
                                <ul class="chip-list">
                                    {product.features.iter().map(|f| view! { <li class="chip">{*f}</li> }).collect_view()}
                                </ul>
                                <a href="#" class="btn">"Learn More"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section" class="grid grid--4">
                    <a href="/rooman" class="card card--link">
                        <h3>"About Rooman"</h3>
                        <p>"Visit parent company"</p>
                    </a>
                    {RESOURCES
                        .into_iter()
                        .map(|(title, blurb)| {
                            view! {
                                <a href="#" class="card card--link">
                                    <h3>{title}</h3>
                                    <p>{blurb}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>

            <section class="section cta">
                <h2>"Ready to Transform Your Business?"</h2>
                <p>"Get in touch with our team to learn how Rooman AI Solutions can help you achieve your digital transformation goals."</p>
                <div class="cta__actions">
                    <a href="/rooman" class="btn btn--primary">"Contact Sales"</a>
                    <a href="/membership" class="btn">"Join IAISO"</a>
                </div>
            </section>
        </div>
    }
}
