use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Yearly];

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub perks: &'static [&'static str],
    /// Prices in euro cents.
    pub monthly_cents: u32,
    pub yearly_cents: u32,
    pub badge: Option<&'static str>,
    pub highlighted: bool,
    pub button_text: Option<&'static str>,
}

impl Plan {
    pub fn price_cents(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_cents,
            BillingCycle::Yearly => self.yearly_cents,
        }
    }

    pub fn button_text(&self) -> &'static str {
        self.button_text.unwrap_or("Choose plan")
    }
}

pub static PLAN_TIERS: [Plan; 4] = [
    Plan {
        name: "Free Plan",
        description: "Kick off with pantry basics and core recipes.",
        perks: &[
            "10 meals per week",
            "Up to 6 ingredients",
            "Basic recipes",
            "Save up to 3 meals",
            "GPT-4o-mini",
        ],
        monthly_cents: 0,
        yearly_cents: 0,
        badge: None,
        highlighted: false,
        button_text: None,
    },
    Plan {
        name: "Beginner Plan",
        description: "Unlock advanced recipes with unlimited ingredients.",
        perks: &[
            "40 meals per week",
            "Unlimited ingredients",
            "Advanced recipes",
            "Save up to 20 meals",
            "GPT-4o-mini",
        ],
        monthly_cents: 499,
        yearly_cents: 4990,
        badge: None,
        highlighted: false,
        button_text: Some("Free 15-day trial"),
    },
    Plan {
        name: "Chef Plan",
        description: "Personalized suggestions and unlimited saved meals.",
        perks: &[
            "80 meals per week",
            "Unlimited ingredients",
            "Personalized suggestions",
            "Unlimited saved meals",
            "GPT-4o",
        ],
        monthly_cents: 999,
        yearly_cents: 9990,
        badge: Some("Most popular"),
        highlighted: true,
        button_text: None,
    },
    Plan {
        name: "Unlimited Plan",
        description: "For power users who want limitless meals and themes.",
        perks: &[
            "500 meals per week",
            "Unlimited ingredients",
            "Unlimited saved meals",
            "Personalized themes",
            "GPT-4o",
        ],
        monthly_cents: 2999,
        yearly_cents: 29990,
        badge: None,
        highlighted: false,
        button_text: None,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPrice {
    pub amount_cents: u32,
    pub label: String,
    pub suffix: &'static str,
}

impl DisplayPrice {
    #[cfg(test)]
    pub fn amount(&self) -> f64 {
        f64::from(self.amount_cents) / 100.0
    }
}

/// Formats cents the way `Intl.NumberFormat("en-IE", EUR)` does: `€1,234.50`.
pub fn format_eur(cents: u32) -> String {
    let euros = (cents / 100).to_string();
    let mut grouped = String::with_capacity(euros.len() + euros.len() / 3);
    for (i, digit) in euros.chars().enumerate() {
        if i > 0 && (euros.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("€{}.{:02}", grouped, cents % 100)
}

pub fn display_price(cycle: BillingCycle, plan: &Plan) -> DisplayPrice {
    let amount_cents = plan.price_cents(cycle);
    if amount_cents == 0 {
        return DisplayPrice {
            amount_cents,
            label: "€0".to_string(),
            suffix: "",
        };
    }
    DisplayPrice {
        amount_cents,
        label: format_eur(amount_cents),
        suffix: cycle.suffix(),
    }
}

pub fn price_table(cycle: BillingCycle, plans: &'static [Plan]) -> Vec<(&'static Plan, DisplayPrice)> {
    plans.iter().map(|plan| (plan, display_price(cycle, plan))).collect()
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    #[error("expected 4 plans, found {0}")]
    WrongCount(usize),
    #[error("plan name {0:?} is used more than once")]
    DuplicateName(&'static str),
    #[error("plan {0:?} lists no perks")]
    NoPerks(&'static str),
    #[error("plan {0:?} is free on one cycle only")]
    PartlyFree(&'static str),
}

pub fn validate_catalogue(plans: &[Plan]) -> Result<(), CatalogueError> {
    if plans.len() != 4 {
        return Err(CatalogueError::WrongCount(plans.len()));
    }
    let mut names = HashSet::new();
    for plan in plans {
        if !names.insert(plan.name) {
            return Err(CatalogueError::DuplicateName(plan.name));
        }
        if plan.perks.is_empty() {
            return Err(CatalogueError::NoPerks(plan.name));
        }
        if (plan.monthly_cents == 0) != (plan.yearly_cents == 0) {
            return Err(CatalogueError::PartlyFree(plan.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str) -> &'static Plan {
        PLAN_TIERS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn shipped_catalogue_is_valid() {
        assert_eq!(validate_catalogue(&PLAN_TIERS), Ok(()));
        let names: Vec<_> = PLAN_TIERS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Free Plan", "Beginner Plan", "Chef Plan", "Unlimited Plan"]);
    }

    #[test]
    fn free_plan_shows_plain_zero_on_both_cycles() {
        for cycle in BillingCycle::ALL {
            let price = display_price(cycle, plan("Free Plan"));
            assert_eq!(price.label, "€0");
            assert_eq!(price.suffix, "");
            assert_eq!(price.amount(), 0.0);
        }
    }

    #[test]
    fn chef_plan_prices() {
        let monthly = display_price(BillingCycle::Monthly, plan("Chef Plan"));
        assert_eq!(monthly.amount(), 9.99);
        assert_eq!(monthly.label, "€9.99");
        assert_eq!(monthly.suffix, "/month");

        let yearly = display_price(BillingCycle::Yearly, plan("Chef Plan"));
        assert_eq!(yearly.amount(), 99.90);
        assert_eq!(yearly.label, "€99.90");
        assert_eq!(yearly.suffix, "/year");
    }

    #[test]
    fn amounts_are_never_negative() {
        for cycle in BillingCycle::ALL {
            for (_, price) in price_table(cycle, &PLAN_TIERS) {
                assert!(price.amount() >= 0.0);
            }
        }
    }

    #[test]
    fn table_follows_the_selected_cycle_for_every_plan() {
        let yearly = price_table(BillingCycle::Yearly, &PLAN_TIERS);
        let labels: Vec<_> = yearly.iter().map(|(_, p)| p.label.as_str()).collect();
        assert_eq!(labels, ["€0", "€49.90", "€99.90", "€299.90"]);
        assert!(yearly.iter().skip(1).all(|(_, p)| p.suffix == "/year"));
    }

    #[test]
    fn euro_formatting() {
        assert_eq!(format_eur(5), "€0.05");
        assert_eq!(format_eur(2999), "€29.99");
        assert_eq!(format_eur(100_000), "€1,000.00");
        assert_eq!(format_eur(123_456_789), "€1,234,567.89");
    }

    #[test]
    fn button_text_defaults() {
        assert_eq!(plan("Chef Plan").button_text(), "Choose plan");
        assert_eq!(plan("Beginner Plan").button_text(), "Free 15-day trial");
    }

    #[test]
    fn validation_rejects_broken_catalogues() {
        let mut plans = PLAN_TIERS.to_vec();
        plans[1].name = "Free Plan";
        assert_eq!(validate_catalogue(&plans), Err(CatalogueError::DuplicateName("Free Plan")));

        let mut plans = PLAN_TIERS.to_vec();
        plans[0].yearly_cents = 100;
        assert_eq!(validate_catalogue(&plans), Err(CatalogueError::PartlyFree("Free Plan")));

        let mut plans = PLAN_TIERS.to_vec();
        plans[3].perks = &[];
        assert_eq!(validate_catalogue(&plans), Err(CatalogueError::NoPerks("Unlimited Plan")));

        assert_eq!(validate_catalogue(&PLAN_TIERS[..3]), Err(CatalogueError::WrongCount(3)));
    }
}
