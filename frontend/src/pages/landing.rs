use yew::prelude::*;

use crate::components::cookie_banner::CookieBanner;
use crate::components::pricing_section::PricingSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config;
use crate::consent::Decision;
use crate::content::{Card, ABOUT_PILLARS, FEATURES, HERO_HIGHLIGHTS, STEPS, TESTIMONIALS};
use crate::controller::BrowserPage;
use crate::pricing::BillingCycle;
use crate::scroll::{anchor_click, Section};
use crate::state::use_observable;

fn section_heading(eyebrow: &'static str, title: &'static str, lead: Option<&'static str>) -> Html {
    html! {
        <div class="section-heading">
            <p class="eyebrow">{eyebrow}</p>
            <h2>{title}</h2>
            {
                if let Some(lead) = lead {
                    html! { <p class="lead">{lead}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn card(card: &Card) -> Html {
    html! {
        <div key={card.title} class="info-card">
            <p class="card-title">
                <span class="card-icon">{card.icon}</span>
                {card.title}
            </p>
            <p class="card-copy">{card.copy}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_memo(|_| BrowserPage::in_browser(), ());

    // Stored consent is read after the first paint, so the banner may show briefly.
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                page.start();
                || ()
            },
            (),
        );
    }

    let consent = use_observable(page.consent());
    let cycle = use_observable(page.billing());

    let navigate = {
        let page = page.clone();
        Callback::from(move |id: &'static str| {
            page.navigate(id);
        })
    };

    let on_decide = {
        let page = page.clone();
        Callback::from(move |decision: Decision| page.decide(decision))
    };

    let on_select = {
        let page = page.clone();
        Callback::from(move |cycle: BillingCycle| page.select_cycle(cycle))
    };

    html! {
        <div class="landing-page">
            <SiteHeader navigate={navigate.clone()} />

            <main class="landing-main">
                <section id={Section::Home.id()} class="hero">
                    <div class="hero-cta-group">
                        <a href={config::app_link("/signin")} class="app-link">{"Go to the app"}</a>
                    </div>
                    <h1>{"Hungry and uninspired?"}</h1>
                    <p class="hero-subtitle">
                        {"Let AI turn simple "}
                        <span class="gradient-text">{"on-hand ingredients"}</span>
                        {" into recipes "}
                        <span class="gradient-text">{"instantly"}</span>
                        {"."}
                    </p>
                    <div class="hero-actions">
                        <a href={Section::Pricing.href()} onclick={anchor_click(Section::Pricing, navigate.clone())}
                            class="hero-cta">
                            {"See our subscriptions"}
                        </a>
                        <a href={Section::Screenshots.href()} onclick={anchor_click(Section::Screenshots, navigate.clone())}
                            class="hero-secondary">
                            {"Explore the product →"}
                        </a>
                    </div>
                    <div class="hero-highlights">
                        {
                            for HERO_HIGHLIGHTS.iter().map(|item| html! {
                                <div key={item.label} class="highlight">
                                    <span>{item.icon}</span>
                                    {item.label}
                                </div>
                            })
                        }
                    </div>
                </section>

                <section id={Section::About.id()} class="about-section">
                    <div class="section-heading">
                        <p class="eyebrow">{"About us"}</p>
                        <h2>{"Built for people who stare at their fridge and think: “What now?”"}</h2>
                        <p class="lead">
                            {"EatoraAI™ was created to solve the most annoying daily problem: not knowing what to cook. We built a fast, smart AI that takes whatever ingredients you have and turns them into real meals—instantly. Simple, helpful, and made for everyday life."}
                        </p>
                    </div>
                    <div class="cards-grid three">
                        { for ABOUT_PILLARS.iter().map(card) }
                    </div>
                </section>

                <section id={Section::Features.id()} class="features-section">
                    {section_heading(
                        "Features",
                        "Everything you need to cook smarter, not harder.",
                        Some("EatoraAI™ helps you instantly turn your ingredients into meals, save time, reduce waste, and eat better — all with a simple, friendly experience anyone can use."),
                    )}
                    <div class="cards-grid two">
                        { for FEATURES.iter().map(card) }
                    </div>
                </section>

                <section id={Section::HowItWorks.id()} class="steps-section">
                    {section_heading(
                        "How it works",
                        "Cook smarter in three simple steps.",
                        Some("No planning, no stress — just instant meals from what you already have."),
                    )}
                    <div class="cards-grid three">
                        { for STEPS.iter().map(card) }
                    </div>
                </section>

                <section id={Section::Screenshots.id()} class="preview-section">
                    {section_heading(
                        "Product preview",
                        "Watch your ingredients turn into recipes in seconds.",
                        Some("See real examples of meals generated from everyday ingredients."),
                    )}
                    <div class="video-frame">
                        <iframe
                            src={config::WALKTHROUGH_VIDEO}
                            title="EatoraAI product walkthrough"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            referrerpolicy="strict-origin-when-cross-origin"
                            allowfullscreen=true
                        />
                    </div>
                    <p class="video-caption">{"Product walkthrough"}</p>
                    <p class="video-copy">{"Learn how EatoraAI™ turns your ingredients into ready-to-cook recipes."}</p>
                </section>

                <section id={Section::Testimonials.id()} class="testimonials-section">
                    {section_heading(
                        "Testimonials",
                        "Listen to our first users reviews. Real meals. Real people. Real results.",
                        Some("Instant recipes. Zero food waste. Maximum convenience."),
                    )}
                    <div class="cards-grid two">
                        {
                            for TESTIMONIALS.iter().map(|testimonial| html! {
                                <figure key={testimonial.name} class="testimonial">
                                    {
                                        if let Some(image) = testimonial.image {
                                            html! {
                                                <div class="testimonial-image">
                                                    <img src={image} alt={format!("Dish created by {}", testimonial.name)}
                                                        width="600" height="400" loading="lazy" />
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <blockquote>{format!("“{}”", testimonial.quote)}</blockquote>
                                    <figcaption>{format!("{} · {}", testimonial.name, testimonial.role)}</figcaption>
                                </figure>
                            })
                        }
                    </div>
                </section>

                <PricingSection cycle={cycle} prices={page.prices()} on_select={on_select} />

                <section id={Section::Contact.id()} class="contact-section">
                    {section_heading(
                        "Contact",
                        "Questions? We reply in under a day.",
                        Some("We’re here to support your cooking journey. Let us know how we can help."),
                    )}
                    <div class="contact-grid">
                        <div class="contact-details">
                            <p>{config::CONTACT_EMAIL}</p>
                            <p>
                                <a href={config::DISCORD_INVITE} target="_blank" rel="noopener noreferrer">
                                    {"Join our Discord"}
                                </a>
                            </p>
                        </div>
                        // Not wired to any backend
                        <form class="contact-form">
                            <input type="text" placeholder="Full name" />
                            <input type="email" placeholder="Email address" />
                            <textarea placeholder="What are you craving help with?" />
                            <button type="button">{"Send message"}</button>
                        </form>
                    </div>
                </section>
            </main>

            {
                if consent.banner_visible() {
                    html! { <CookieBanner on_decide={on_decide} /> }
                } else {
                    html! {}
                }
            }

            <SiteFooter navigate={navigate} />
        </div>
    }
}
