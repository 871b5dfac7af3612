use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::testimonials::{Testimonial, TestimonialsCarousel};
use crate::util::timelines::TimelineId;

struct Plan {
    badge: &'static str,
    title: &'static str,
    price: &'static str,
    description: &'static str,
    cta: &'static str,
    highlighted: bool,
    features: [&'static str; 4],
}

static PLANS: [Plan; 3] = [
    Plan {
        badge: "Observer (Free)",
        title: "Observer Membership",
        price: "Free",
        description: "Access to IAISO standards and public events. Ideal for students and first-time participants.",
        cta: "Join as Observer",
        highlighted: false,
        features: [
            "Access to published IAISO standards",
            "Access to public webinars & events",
            "Standards updates & release notes",
            "Community announcements & newsletter",
        ],
    },
    Plan {
        badge: "Contributor",
        title: "Contributor Membership",
        price: "$500",
        description: "For professionals who want to shape standards through feedback, draft reviews, and voting rights.",
        cta: "Become a Contributor",
        highlighted: true,
        features: [
            "Everything in Observer",
            "Access to draft standards & working groups",
            "Input on drafts and change proposals",
            "Voting rights on standards releases",
        ],
    },
    Plan {
        badge: "Corporate / Premium",
        title: "Corporate / Premium Membership",
        price: "$5,000+",
        description: "For organizations needing priority access, training pathways, and assessor enablement.",
        cta: "Contact for Premium",
        highlighted: false,
        features: [
            "Everything in Contributor",
            "Priority access to assessors & standards office hours",
            "Assessor training and enablement tracks",
            "Premium support for certification readiness",
        ],
    },
];

const STATS: [(&str, &str); 4] = [
    ("25,000+", "Active Members"),
    ("150+", "Events Per Year"),
    ("500+", "Learning Resources"),
    ("100%", "Certification Pass Rate"),
];

static MEMBER_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "IAISO membership transformed my career. The certifications and mentorship helped me land my dream role and build a stronger professional network.",
        name: "Priya Sharma",
        designation: "AI Engineer",
        image_src: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
    },
    Testimonial {
        quote: "The learning resources and events are world-class. I found mentors, collaborators, and practical guidance for building responsible AI systems.",
        name: "Rahul Verma",
        designation: "Technology Leader",
        image_src: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
    },
    Testimonial {
        quote: "As an enterprise member, IAISO helped us align teams on standards, assess readiness, and upskill faster with structured pathways.",
        name: "Anita Desai",
        designation: "VP Engineering",
        image_src: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
    },
];

#[component]
pub fn MembershipPage() -> impl IntoView {
    view! {
        <div class="page membership">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <p class="eyebrow">"IAISO - Indian AI & IT Solutions Organization"</p>
                    <h1 class="page__title">"Membership"</h1>
                    <p class="page__sub">
                        "Join India's largest community of AI and IT professionals. Access exclusive resources, certifications, and networking opportunities."
                    </p>
                </div>
            </AnimatedSection>

            <section class="section stats">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat__value accent">{value}</div>
                                <div class="stat__label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <AnimatedSection timeline=TimelineId::ValueCards class="section">
                <h2 class="section__heading center">"Choose Your Membership"</h2>
                <div class="grid grid--3 plans">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            view! {
                                <div class="card plan" class:plan--highlighted=plan.highlighted data-anim="value-card">
                                    <span class="badge">{plan.badge}</span>
                                    <h3>{plan.title}</h3>
                                    <p class="plan__price">{plan.price} <span class="muted">"/year"</span></p>
                                    <p>{plan.description}</p>
                                    <ul class="checklist">
                                        {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                    </ul>
                                    <button class="btn btn--block" class:btn--primary=plan.highlighted>{plan.cta}</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>

            <section class="section">
                <h2 class="section__heading center">"What Our Members Say"</h2>
                <div class="panel">
                    <TestimonialsCarousel testimonials=&MEMBER_TESTIMONIALS/>
                </div>
            </section>
        </div>
    }
}
