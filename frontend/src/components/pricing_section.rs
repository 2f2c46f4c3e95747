use yew::prelude::*;

use crate::config;
use crate::pricing::{BillingCycle, DisplayPrice, Plan};
use crate::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub cycle: BillingCycle,
    pub prices: Vec<(&'static Plan, DisplayPrice)>,
    pub on_select: Callback<BillingCycle>,
}

fn plan_card(plan: &Plan, price: &DisplayPrice) -> Html {
    html! {
        <div key={plan.name} class={classes!("plan-card", plan.highlighted.then(|| "highlighted"))}>
            <div class="plan-header">
                <h3>{plan.name}</h3>
                {
                    if let Some(badge) = plan.badge {
                        html! { <span class="plan-badge">{badge}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p class="plan-description">{plan.description}</p>
            <p class="plan-price">
                {price.label.clone()}
                <span class="plan-price-note">{price.suffix}</span>
            </p>
            <ul class="plan-perks">
                { for plan.perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
            </ul>
            <a href={config::app_link("/register")}
                class={if plan.highlighted { "plan-button primary" } else { "plan-button" }}>
                {plan.button_text()}
            </a>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section id={Section::Pricing.id()} class="pricing-section">
            <div class="section-heading">
                <p class="eyebrow">{"Pricing"}</p>
                <h2>{"Flexible plans for every concept."}</h2>
                <p class="lead">{"Upgrade or downgrade anytime."}</p>
            </div>
            <div class="billing-controls">
                <div class="billing-toggle">
                    {
                        for BillingCycle::ALL.iter().map(|&cycle| {
                            let on_select = props.on_select.clone();
                            html! {
                                <button type="button"
                                    class={classes!("toggle-option", (props.cycle == cycle).then(|| "active"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_select.emit(cycle))}>
                                    {cycle.label()}
                                </button>
                            }
                        })
                    }
                </div>
                <p class="billing-note">{"Switch to yearly billing for extra savings."}</p>
            </div>
            <div class="plans-grid">
                { for props.prices.iter().map(|(plan, price)| plan_card(plan, price)) }
            </div>
        </section>
    }
}
