use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::state::shop::{FEATURED_FEATURES, ProductCategory, ShopState, featured_product};
use crate::util::timelines::TimelineId;

const BENEFITS: [(&str, &str); 3] = [
    ("Instant Download", "Get immediate access to all purchased resources."),
    ("Lifetime Updates", "Free updates for life on all products."),
    ("Expert Support", "Get help from our team of experts."),
];

#[component]
pub fn ShopPage() -> impl IntoView {
    let state = RwSignal::new(ShopState::default());
    let featured = featured_product();
    let featured_name = featured.name;

    let add_to_cart = move |name: &'static str| {
        state.update(|s| {
            if !s.cart.add(name) {
                leptos::logging::log!("{name} is already in the cart");
            }
        });
    };
    let in_cart = move |name: &'static str| state.with(|s| s.cart.contains(name));

    let tab = move |filter: Option<ProductCategory>| {
        let label = filter.map_or("All", ProductCategory::label);
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
        <div class="page shop">
            <AnimatedSection timeline=TimelineId::ListingHeader class="page__hero">
                <div data-anim="header" class="shop__header">
                    <div>
                        <span class="eyebrow">"Resources & Tools"</span>
                        <h1 class="page__title">"Shop"</h1>
                        <p class="page__sub">"Professional templates, guides, and tools to accelerate your technology journey."</p>
                    </div>
                    <div class="cart-badge" aria-label="Cart">
                        "Cart"
                        <Show when=move || state.with(|s| !s.cart.is_empty())>
                            <span class="cart-badge__count">{move || state.with(|s| s.cart.len())}</span>
                        </Show>
                    </div>
                </div>
                <div class="toolbar">
                    <input class="input" type="search" placeholder="Search products..."/>
                    <span class="muted">"Filter by:"</span>
                    <div class="tabs">
                        {tab(None)}
                        {ProductCategory::ALL.into_iter().map(|c| tab(Some(c))).collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection timeline=TimelineId::ListingFeatured class="section">
                <div class="card card--featured product-featured" data-anim="featured">
                    {featured.badge.map(|badge| view! { <span class="badge badge--solid">{badge}</span> })}
                    <h2>{featured.name}</h2>
                    <p>{featured.description}</p>
                    <ul class="checklist">{FEATURED_FEATURES.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}</ul>
                    <p class="rating">
                        <strong>{featured.rating}</strong>
                        <span class="muted">{format!(" ({} reviews)", featured.reviews)}</span>
                    </p>
                    <p class="price">
                        <span class="price__now">{format!("${}", featured.price)}</span>
                        {featured.original_price.map(|p| view! { <s class="price__was">{format!("${p}")}</s> })}
                    </p>
                    <button class="btn btn--primary" on:click=move |_| add_to_cart(featured_name)>
                        {move || if in_cart(featured_name) { "Added to Cart" } else { "Add to Cart" }}
                    </button>
                </div>
            </AnimatedSection>

            <section class="section">
                <h2 class="section__heading">"All Products"</h2>
                <div class="grid grid--3">
                    {move || {
                        state
                            .with(|s| s.visible_products().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|product| {
                                let name = product.name;
                                view! {
                                    <div class="card product-card">
                                        {product.badge.map(|badge| view! { <span class="badge badge--solid">{badge}</span> })}
                                        <span class="chip">{product.category.label()}</span>
                                        <h3>{name}</h3>
                                        <p>{product.description}</p>
                                        <p class="rating">
                                            {product.rating}
                                            <span class="muted">{format!(" ({})", product.reviews)}</span>
                                        </p>
                                        <div class="product-card__foot">
                                            <span class="price__now">{format!("${}", product.price)}</span>
                                            <button
                                                class="btn btn--icon"
                                                class:btn--done=move || in_cart(name)
                                                aria-label="Add to cart"
                                                on:click=move |_| add_to_cart(name)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <AnimatedSection timeline=TimelineId::ValueCards class="section grid grid--3">
                {BENEFITS
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card center" data-anim="value-card">
                                <h3>{title}</h3>
                                <p class="muted">{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </AnimatedSection>

            <section class="section cta">
                <h2>"Need something custom?"</h2>
                <p>"We offer custom consulting and tailored solutions for your specific needs."</p>
                <a href="/rooman#contact" class="btn btn--primary">"Contact us"</a>
            </section>
        </div>
    }
}
