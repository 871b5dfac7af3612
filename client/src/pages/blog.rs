//! Blog listing with a category filter, an in-page reader and a composer
//! for guest posts. Posts live only in page state.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::state::blog::{BlogCategory, BlogPost, BlogState, date_label};
use crate::util::timelines::TimelineId;

/// Publication date for a new post, in the listing's `Jan 20, 2026` form.
fn today_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        date_label(now.get_full_year(), now.get_month(), now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        date_label(
            u32::try_from(now.year()).unwrap_or_default(),
            u32::from(u8::from(now.month())) - 1,
            u32::from(now.day()),
        )
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let state = RwSignal::new(BlogState::default());
    let featured = state.with_untracked(|s| s.featured.clone());
    let featured_id = featured.id;

    let tab = move |filter: Option<BlogCategory>| {
        let label = filter.map_or("All", BlogCategory::label);
        view! {
            <button
                class="tab"
                class:tab--active=move || state.with(|s| s.filter == filter)
                on:click=move |_| state.update(|s| s.set_filter(filter))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page blog">
            <AnimatedSection timeline=TimelineId::ListingHeader class="page__hero">
                <div data-anim="header">
                    <span class="eyebrow">"Insights & Resources"</span>
                    <h1 class="page__title">"Blog"</h1>
                    <p class="page__sub">
                        "Practical guides, deep dives, and insights on AI, cloud infrastructure, and modern software engineering."
                    </p>
                </div>
                <div class="toolbar">
                    <input class="input" type="search" placeholder="Search articles..."/>
                    <div class="tabs">
                        {tab(None)}
                        {BlogCategory::ALL.into_iter().map(|c| tab(Some(c))).collect_view()}
                    </div>
                    <button class="btn" on:click=move |_| state.update(BlogState::toggle_composer)>
                        {move || if state.with(|s| s.composer_open) { "Close editor" } else { "Add blog post" }}
                    </button>
                </div>
            </AnimatedSection>

            <Show when=move || state.with(|s| s.composer_open)>
                <Composer state=state/>
            </Show>

            <AnimatedSection timeline=TimelineId::ListingFeatured class="section">
                <div class="card card--featured post-featured" data-anim="featured">
                    {featured.image.clone().map(|src| view! { <img src=src alt=featured.title.clone()/> })}
                    <div>
                        <PostMeta post=featured.clone()/>
                        <h2>{featured.title.clone()}</h2>
                        <p>{featured.description.clone()}</p>
                        <button class="btn btn--primary" on:click=move |_| state.update(|s| s.open_post(featured_id))>
                            "Read article"
                        </button>
                    </div>
                </div>
            </AnimatedSection>

            <section class="section">
                <h2 class="section__heading">"Latest Articles"</h2>
                <div class="grid grid--3">
                    {move || {
                        state
                            .with(|s| s.visible_posts().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|post| {
                                let id = post.id;
                                view! {
                                    <article class="card post-card" on:click=move |_| state.update(|s| s.open_post(id))>
                                        <span class="chip">{post.category.label()}</span>
                                        <h3>{post.title}</h3>
                                        <p>{post.description}</p>
                                        <p class="muted">{post.author} " · " {post.read_time}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="center">
                    <button class="btn">"Load more articles"</button>
                </div>
            </section>

            <section class="section newsletter center">
                <h2>"Subscribe to our newsletter"</h2>
                <p class="muted">
                    "Get the latest articles, guides, and insights delivered straight to your inbox. No spam, unsubscribe anytime."
                </p>
                <div class="newsletter__form">
                    <input class="input" type="email" placeholder="Enter your email"/>
                    <button class="btn btn--primary">"Subscribe"</button>
                </div>
            </section>

            {move || {
                state
                    .with(|s| s.active().cloned())
                    .map(|post| {
                        view! {
                            <div class="modal-backdrop" on:click=move |_| state.update(BlogState::close_post)>
                                <article class="modal" on:click=|ev| ev.stop_propagation()>
                                    <button class="modal__close" on:click=move |_| state.update(BlogState::close_post)>
                                        "Close"
                                    </button>
                                    <PostMeta post=post.clone()/>
                                    <h2>{post.title.clone()}</h2>
                                    <p class="chip">{post.category.label()}</p>
                                    <div class="prose">
                                        {post
                                            .content
                                            .split('\n')
                                            .map(|para| view! { <p>{para.to_owned()}</p> })
                                            .collect_view()}
                                    </div>
                                </article>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn PostMeta(post: BlogPost) -> impl IntoView {
    view! {
        <div class="meta">
            <span class="chip">{post.category.label()}</span>
            <span>{post.author}</span>
            <span>{post.read_time}</span>
            <span>{post.date}</span>
        </div>
    }
}

#[component]
fn Composer(state: RwSignal<BlogState>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_publish = move |_| {
        let date = today_label();
        match state.try_update(|s| s.publish(&date)) {
            Some(Ok(id)) => {
                leptos::logging::log!("published guest post {id}");
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <section class="section composer">
            <h2>"Add a new blog post"</h2>
            <label for="blog-title">"Title"</label>
            <input
                id="blog-title"
                class="input"
                type="text"
                placeholder="Enter blog title"
                prop:value=move || state.with(|s| s.draft.title.clone())
                on:input=move |ev| state.update(|s| s.draft.title = event_target_value(&ev))
            />
            <label for="blog-category">"Category"</label>
            <select
                id="blog-category"
                class="input"
                prop:value=move || state.with(|s| s.draft.category.label())
                on:change=move |ev| {
                    if let Some(category) = BlogCategory::from_label(&event_target_value(&ev)) {
                        state.update(|s| s.draft.category = category);
                    }
                }
            >
                {BlogCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                    .collect_view()}
            </select>
            <label for="blog-content">"Full content"</label>
            <textarea
                id="blog-content"
                class="input"
                rows="8"
                placeholder="Write the full content of your blog post here..."
                prop:value=move || state.with(|s| s.draft.content.clone())
                on:input=move |ev| state.update(|s| s.draft.content = event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
            <div class="composer__actions">
                <button class="btn" on:click=move |_| state.update(|s| s.composer_open = false)>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || !state.with(|s| s.draft.is_publishable())
                    on:click=on_publish
                >
                    "Publish post"
                </button>
            </div>
        </section>
    }
}
