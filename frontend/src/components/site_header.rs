use yew::prelude::*;

use crate::config;
use crate::scroll::{anchor_click, Section};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub navigate: Callback<&'static str>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let link = |section: Section, label: &'static str| {
        html! {
            <a href={section.href()} onclick={anchor_click(section, props.navigate.clone())} class="nav-link">
                {label}
            </a>
        }
    };

    html! {
        <header class="site-header">
            <div class="nav-content">
                <div class="brand">
                    <div class="brand-row">
                        <img src="/EatoraAILogo.svg" alt="EatoraAI™ logo" width="48" height="48" />
                        <span class="brand-name">{"EatoraAI™"}</span>
                    </div>
                    <p class="brand-tagline">{"Your AI powered chef"}</p>
                </div>
                <nav class="nav-links">
                    {link(Section::Home, "Home")}
                    <a href={config::DISCORD_INVITE} target="_blank" rel="noopener noreferrer" class="nav-link">
                        {"Discord"}
                    </a>
                    {link(Section::About, "About us")}
                    {link(Section::Pricing, "Pricing")}
                    {link(Section::Contact, "Contact")}
                </nav>
                <a href={config::app_link("/register")} class="nav-cta">
                    {"Get started"}
                </a>
            </div>
        </header>
    }
}
