//! One page per certification track, with a dialog listing the levels of
//! the selected certification.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::util::certifications::{Certification, CertificationTrack};
use crate::util::timelines::TimelineId;

#[component]
pub fn CertificationsPage(track: CertificationTrack) -> impl IntoView {
    let selected = RwSignal::new(None::<&'static Certification>);

    view! {
        <div class="page certifications">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <span class="badge">{track.badge()}</span>
                    <h1 class="page__title">{track.headline()} " " <span class="accent">"Certifications"</span></h1>
                    <p class="page__sub">{track.intro()}</p>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::CertGrid class="grid grid--3 cert-grid">
                {track
                    .certifications()
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="card cert-card" data-anim="cert-card">
                                <h3>{cert.name}</h3>
                                <p>{cert.description}</p>
                                <button class="btn btn--block" on:click=move |_| selected.set(Some(cert))>
                                    "View Details"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>

            {move || selected.get().map(|cert| view! { <LevelDialog track=track cert=cert on_close=move || selected.set(None)/> })}
        </div>
    }
}

#[component]
fn LevelDialog(
    track: CertificationTrack,
    cert: &'static Certification,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=|ev| ev.stop_propagation()>
                <button class="modal__close" aria-label="Close" on:click=move |_| on_close()>
                    "×"
                </button>
                <span class="badge">{track.levels_label()}</span>
                <h2>{cert.name}</h2>
                <p>{cert.description}</p>
                <div class="level-grid">
                    {track
                        .levels()
                        .iter()
                        .map(|level| {
                            view! {
                                <div class="level-card">
                                    <span class="level-card__number">{level.number}</span>
                                    <span class="level-card__tag">{format!("L{}", level.number)}</span>
                                    <h3>{level.name}</h3>
                                    <p>{level.description}</p>
                                    <button class="btn btn--small">"Learn More"</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="modal__footer">{track.progression_note(cert)}</p>
            </div>
        </div>
    }
}
