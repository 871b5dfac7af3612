//! Shared template for every `/learning/{category}/{slug}` page.
//!
//! The route params select a catalog entry; unknown entries render the
//! not-found view. Everything program-specific comes from the entry, the
//! rest of the copy is written against its audience.

#[cfg(test)]
#[path = "program_test.rs"]
mod program_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::animated_section::AnimatedSection;
use crate::pages::not_found::NotFound;
use crate::util::site_map::{PROGRAM_FEE, PROGRAM_HOURS, Program, find_program};
use crate::util::timelines::TimelineId;

const VALUE_ADDITIONS: [(&str, [&str; 2]); 3] = [
    (
        "International Credibility",
        [
            "Aligned with global best practices in AI, intelligent systems and automation frameworks",
            "Emphasis on reliability, explainability and ethical AI deployment",
        ],
    ),
    (
        "University Adoption & Integration",
        [
            "Discipline-first architecture preserving core fundamentals and academic rigor",
            "Modular design supports adoption as a specialization track, honours pathway or integrated degree program",
        ],
    ),
    (
        "Employability & Engineering Readiness",
        [
            "Graduates complete the program with applied AI portfolios and capstone projects",
            "Balanced emphasis on domain depth, applied intelligence and ethical responsibility",
        ],
    ),
];

fn objectives(program: &Program) -> [(&'static str, String); 6] {
    let audience = program.audience;
    [
        ("Applied AI", format!("Enable {audience} to design, build and deploy AI-powered solutions in their field")),
        ("Develop Competencies", "Develop competencies in data, machine learning integration and workflow automation".to_owned()),
        ("System Understanding", "Strengthen understanding of scalable, secure and production-grade AI systems".to_owned()),
        (
            "Ethical Awareness",
            "Instil ethical awareness around bias, transparency, reliability and responsible practice".to_owned(),
        ),
        ("Career Preparation", format!("Prepare {audience} for advanced, AI-driven roles")),
        ("Industry Readiness", "Bridge the gap between academic knowledge and industry requirements".to_owned()),
    ]
}

#[component]
pub fn ProgramPage() -> impl IntoView {
    let params = use_params_map();
    let program = move || {
        params.with(|p| find_program(&p.get("category").unwrap_or_default(), &p.get("slug").unwrap_or_default()))
    };

    move || match program() {
        Some(program) => view! { <ProgramBody program=program/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

fn vision_paragraph(program: &Program) -> String {
    format!(
        "The {} program integrates the foundations of the discipline with modern practice and artificial intelligence.",
        program.title()
    )
}

fn journey_heading(program: &Program) -> String {
    format!("Begin Your Journey: {}", program.title())
}

#[component]
fn ProgramBody(program: &'static Program) -> impl IntoView {
    let credential = program.credential();

    view! {
        <div class="page program">
            <AnimatedSection timeline=TimelineId::PageHero class="program__hero">
                <div data-anim="page-hero">
                    <span class="badge">{program.category.stream_label()}</span>
                    <h1 class="page__title">"AI for " <span class="accent">{program.audience}</span></h1>
                    <p class="page__sub">{program.subtitle()}</p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section">
                    <h2 class="section__heading">"Academic Vision"</h2>
                    <p>
                        {vision_paragraph(program)}
                    </p>
                    <p>
                        "AI is treated as a core capability of the profession while preserving rigor, reliability, security and ethical accountability."
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section">
                    <h2 class="section__heading">"Program Objectives"</h2>
                    <div class="grid grid--3">
                        {objectives(program)
                            .into_iter()
                            .map(|(heading, body)| {
                                view! {
                                    <div class="card">
                                        <h3>{heading}</h3>
                                        <p>{body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ValueCards class="section">
                <h2 class="section__heading">"Embedded Academic Value Additions"</h2>
                <div class="grid grid--3">
                    {VALUE_ADDITIONS
                        .into_iter()
                        .map(|(heading, points)| {
                            view! {
                                <div class="card" data-anim="value-card">
                                    <h3>{heading}</h3>
                                    <ul>{points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}</ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section" class="grid grid--2">
                    <div class="card">
                        <h3>"Delivery Model"</h3>
                        <p>"Project-based lectures integrated with labs and studio sessions."</p>
                        <h4>"IAISO Certification"</h4>
                        <p>"Awarded as " <strong>{credential}</strong></p>
                    </div>
                    <div class="card">
                        <h3>"Program Investment"</h3>
                        <p><strong>"Total Program Fee: "</strong> {PROGRAM_FEE}</p>
                        <p>"Inclusive of academic delivery, assessments, capstone evaluation, and IAISO certification issuance"</p>
                        <p>{format!("Total Program – {PROGRAM_HOURS} Hours")}</p>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::SectionReveal class="section">
                <div data-anim="section">
                    <h2 class="section__heading">"Value to University"</h2>
                    <div class="grid grid--2">
                        <div class="card">
                            <h3>{format!("For {}", program.audience)}</h3>
                            <p>"Expands career pathways into AI-first organizations and strengthens readiness for global roles."</p>
                        </div>
                        <div class="card">
                            <h3>"Institutional Impact"</h3>
                            <p>"Positions the university as a leader in AI-integrated education and encourages cross-department collaboration."</p>
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <section class="section cta">
                <h2>{journey_heading(program)}</h2>
                <div class="cta__actions">
                    <a href="/membership" class="btn btn--primary">"Enroll Now"</a>
                    <a href="#" class="btn">"Download Syllabus"</a>
                </div>
            </section>
        </div>
    }
}
