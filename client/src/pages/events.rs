use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::state::events::{EVENT_FORMATS, EventType, EventsState, PAST_EVENTS, format_count};
use crate::util::timelines::TimelineId;

#[component]
pub fn EventsPage() -> impl IntoView {
    let state = RwSignal::new(EventsState::default());
    let featured = state.with_untracked(EventsState::featured);

    let tab = move |filter: Option<EventType>| {
        let label = filter.map_or("All", EventType::label);
        view! {
            <button
                class="tab"
                class:tab--active=move || state.with(|s| s.filter == filter)
                on:click=move |_| state.update(|s| s.filter = filter)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page events">
            <AnimatedSection timeline=TimelineId::PageHero class="page__hero">
                <div data-anim="page-hero">
                    <p class="eyebrow">"IAISO - Indian AI & IT Solutions Organization"</p>
                    <h1 class="page__title">"Events"</h1>
                    <p class="page__sub">
                        "Connect with the community through conferences, workshops, hackathons, and networking events. Learn from industry experts and grow your professional network."
                    </p>
                </div>
            </AnimatedSection>

            <section class="section stats">
                {EVENT_FORMATS
                    .into_iter()
                    .map(|(label, count)| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">{format!("{count}+")}</div>
                                <div class="stat__label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            {featured
                .map(|event| {
                    view! {
                        <AnimatedSection timeline=TimelineId::ListingFeatured class="section">
                            <div class="card card--featured" data-anim="featured">
                                <span class="badge badge--solid">"Featured Event"</span>
                                <h2>{event.title}</h2>
                                <p>{event.description}</p>
                                <ul class="meta">
                                    <li>{event.date}</li>
                                    <li>{event.time}</li>
                                    <li>{event.location}</li>
                                    <li>{format!("{} expected", format_count(event.attendees))}</li>
                                </ul>
                                <button class="btn btn--primary">"Register Now"</button>
                            </div>
                        </AnimatedSection>
                    }
                })}

            <section class="section">
                <div class="tabs">
                    {tab(None)}
                    {EventType::ALL.into_iter().map(|kind| tab(Some(kind))).collect_view()}
                </div>
                <h2 class="section__heading">"Upcoming Events"</h2>
                <div class="grid grid--3">
                    {move || {
                        state
                            .with(EventsState::listed)
                            .into_iter()
                            .map(|event| {
                                view! {
                                    <div class="card event-card">
                                        <div class="event-card__head">
                                            <span class="chip">{event.kind.label()}</span>
                                            <span class="muted">{event.date}</span>
                                        </div>
                                        <h3>{event.title}</h3>
                                        <p>{event.description}</p>
                                        <ul class="meta">
                                            <li>{event.time}</li>
                                            <li>{event.location}</li>
                                            <li>{format!("{} attending", event.attendees)}</li>
                                        </ul>
                                        <a href="#" class="link-arrow">"Learn more"</a>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <AnimatedSection timeline=TimelineId::ListingGrid class="section">
                <h2 class="section__heading">"Past Events"</h2>
                <div class="grid grid--3">
                    {PAST_EVENTS
                        .iter()
                        .map(|event| {
                            view! {
                                <div class="card card--muted" data-anim="grid-item">
                                    <span class="chip">{event.kind.label()}</span>
                                    <h3>{event.title}</h3>
                                    <p class="muted">{event.date}</p>
                                    <p class="muted">{format!("{} attendees", format_count(event.attendees))}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>
        </div>
    }
}
