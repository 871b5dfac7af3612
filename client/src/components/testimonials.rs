//! Circular testimonials carousel.
//!
//! DESIGN
//! ======
//! `CarouselDriver` owns the active index and the autoplay clock. The
//! component only turns its state into effects: one browser timeout armed
//! for the current autoplay deadline (re-armed whenever the deadline
//! moves, and tagged with the generation that armed it), arrow keys, and a
//! resize listener that re-measures the image stack.

use leptos::prelude::*;
use motion::autoplay::CarouselDriver;
use motion::carousel::{ItemTransform, NavKey, word_reveal_delays};

use crate::util::browser;
use crate::util::timer::TimerSlot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
    pub image_src: &'static str,
}

#[component]
pub fn TestimonialsCarousel(
    testimonials: &'static [Testimonial],
    #[prop(default = true)] autoplay: bool,
) -> impl IntoView {
    if testimonials.is_empty() {
        return ().into_any();
    }
    let mut initial = CarouselDriver::new(testimonials.len(), browser::viewport().width, browser::now_ms());
    if !autoplay {
        initial.stop();
    }
    let driver = RwSignal::new(initial);
    let layout = Memo::new(move |_| driver.with(|d| d.carousel().layout()));
    let active = move || testimonials.get(driver.with(CarouselDriver::active_index)).copied();
    let stack_ref = NodeRef::<leptos::html::Div>::new();
    let tick = TimerSlot::new();

    Effect::new(move || {
        let (generation, deadline) = driver.with(|d| (d.autoplay().generation(), d.autoplay().deadline_ms()));
        let Some(deadline) = deadline else {
            tick.cancel();
            return;
        };
        tick.schedule(deadline - browser::now_ms(), move || {
            driver.update(|d| {
                d.on_timer(generation, browser::now_ms());
            });
        });
    });

    let measure = move || {
        #[cfg(feature = "hydrate")]
        if let Some(stack) = stack_ref.get_untracked() {
            let width = f64::from(stack.offset_width());
            if width > 0.0 {
                driver.update(|d| d.set_viewport_width(width));
            }
        }
    };
    Effect::new(move || {
        if stack_ref.get().is_some() {
            measure();
        }
    });

    let on_resize = window_event_listener(leptos::ev::resize, move |_| measure());
    let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            driver.update(|d| d.navigate_manual(key, browser::now_ms()));
        }
    });
    on_cleanup(move || {
        on_resize.remove();
        on_key.remove();
        tick.cancel();
    });

    let images = testimonials
        .iter()
        .enumerate()
        .map(|(index, testimonial)| {
            let style = move || layout.with(|items| items.get(index).map(ItemTransform::to_css).unwrap_or_default());
            view! {
                <img
                    class="testimonials__image"
                    src=testimonial.image_src
                    alt=testimonial.name
                    style=style
                    on:click=move |_| driver.update(|d| d.go_to_manual(index, browser::now_ms()))
                />
            }
        })
        .collect_view();

    let quote = move || {
        active().map(|t| {
            word_reveal_delays(t.quote)
                .into_iter()
                .map(|(word, delay_ms)| {
                    view! {
                        <span class="testimonials__word" style=format!("animation-delay: {delay_ms}ms;")>
                            {word}
                            " "
                        </span>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="testimonials">
            <div class="testimonials__stack" node_ref=stack_ref>
                {images}
            </div>
            <div class="testimonials__content">
                <h3 class="testimonials__name">{move || active().map(|t| t.name)}</h3>
                <p class="testimonials__designation">{move || active().map(|t| t.designation)}</p>
                <p class="testimonials__quote">{quote}</p>
                <div class="testimonials__arrows">
                    <button
                        class="testimonials__arrow"
                        aria-label="Previous testimonial"
                        on:click=move |_| driver.update(|d| d.previous_manual(browser::now_ms()))
                    >
                        "←"
                    </button>
                    <button
                        class="testimonials__arrow"
                        aria-label="Next testimonial"
                        on:click=move |_| driver.update(|d| d.next_manual(browser::now_ms()))
                    >
                        "→"
                    </button>
                </div>
            </div>
        </div>
    }
    .into_any()
}
