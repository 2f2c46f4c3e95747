use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::scroll::{anchor_click, Section};

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub navigate: Callback<&'static str>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let year = chrono::Local::now().year();
    let link = |section: Section, label: &'static str| {
        html! {
            <a href={section.href()} onclick={anchor_click(section, props.navigate.clone())}>
                {label}
            </a>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-main">
                <p>{format!("EatoraAI™ © {} · All rights reserved.", year)}</p>
                <div class="footer-links">
                    {link(Section::Features, "Product")}
                    {link(Section::Pricing, "Pricing")}
                    {link(Section::Testimonials, "Stories")}
                    <a href={config::app_link("/terms")} target="_blank" rel="noreferrer">{"Terms"}</a>
                    <a href={config::app_link("/privacy")} target="_blank" rel="noreferrer">{"Privacy"}</a>
                </div>
            </div>

            // Consumer protection badges
            <div class="footer-badges">
                <a href="https://anpc.ro/" target="_blank" rel="noopener noreferrer"
                    title="Autoritatea Națională pentru Protecția Consumatorilor">
                    <img src="/anpc.svg" alt="ANPC - Protecția Consumatorilor" />
                </a>
                <a href="https://ec.europa.eu/consumers/odr" target="_blank" rel="noopener noreferrer"
                    title="Soluționarea Online a Litigiilor - European Commission">
                    <img src="/EuCom.svg" alt="European Commission - ODR Platform" />
                </a>
            </div>
        </footer>
    }
}
