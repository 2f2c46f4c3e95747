use std::rc::Rc;

use crate::config::HEADER_OFFSET;
use crate::consent::{ConsentChoice, ConsentStore, Decision};
use crate::platform::{BrowserStorage, BrowserViewport, KeyValueStore, Viewport};
use crate::pricing::{price_table, BillingCycle, DisplayPrice, Plan, PLAN_TIERS};
use crate::scroll::ScrollNavigator;
use crate::state::Observable;

/// Ties the banner, the billing toggle and anchor links to the page state.
pub struct PageController<S: KeyValueStore, V: Viewport> {
    consent: ConsentStore<S>,
    billing: Rc<Observable<BillingCycle>>,
    navigator: ScrollNavigator<V>,
}

pub type BrowserPage = PageController<BrowserStorage, BrowserViewport>;

impl BrowserPage {
    pub fn in_browser() -> Self {
        Self::new(BrowserStorage, BrowserViewport)
    }
}

impl<S: KeyValueStore, V: Viewport> PageController<S, V> {
    pub fn new(storage: S, viewport: V) -> Self {
        Self {
            consent: ConsentStore::new(storage),
            billing: Rc::new(Observable::new(BillingCycle::default())),
            navigator: ScrollNavigator::new(viewport, HEADER_OFFSET),
        }
    }

    /// Deferred work that runs once after the first render.
    pub fn start(&self) -> ConsentChoice {
        self.consent.load()
    }

    pub fn consent(&self) -> Rc<Observable<ConsentChoice>> {
        self.consent.observable()
    }

    pub fn billing(&self) -> Rc<Observable<BillingCycle>> {
        self.billing.clone()
    }

    pub fn decide(&self, decision: Decision) {
        self.consent.set(decision);
    }

    pub fn select_cycle(&self, cycle: BillingCycle) {
        self.billing.set(cycle);
    }

    pub fn navigate(&self, anchor_id: &str) -> Option<f64> {
        self.navigator.scroll_to(anchor_id)
    }

    pub fn prices(&self) -> Vec<(&'static Plan, DisplayPrice)> {
        price_table(self.billing.get(), &PLAN_TIERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{FakeViewport, MemoryStore};
    use std::cell::Cell;

    fn page(storage: MemoryStore) -> (PageController<MemoryStore, FakeViewport>, FakeViewport) {
        let viewport = FakeViewport::default()
            .with_section("home", 0.0)
            .with_section("pricing", 1400.0);
        (PageController::new(storage, viewport.clone()), viewport)
    }

    #[test]
    fn fresh_visit_shows_banner_until_a_decision() {
        let (page, _) = page(MemoryStore::default());
        page.start();
        assert!(page.consent().get().banner_visible());

        page.decide(Decision::Declined);
        assert!(!page.consent().get().banner_visible());
    }

    #[test]
    fn returning_visitor_does_not_see_banner() {
        let (page, _) = page(MemoryStore::with_entry("cookie-consent", "accepted"));
        assert!(page.consent().get().banner_visible());
        assert_eq!(page.start(), ConsentChoice::Accepted);
        assert!(!page.consent().get().banner_visible());
    }

    #[test]
    fn toggle_reprices_every_plan_and_notifies_once() {
        let (page, _) = page(MemoryStore::default());
        let renders = Rc::new(Cell::new(0));
        page.billing().subscribe({
            let renders = renders.clone();
            move |_: &BillingCycle| renders.set(renders.get() + 1)
        });

        assert!(page.prices().iter().skip(1).all(|(_, p)| p.suffix == "/month"));

        page.select_cycle(BillingCycle::Yearly);
        page.select_cycle(BillingCycle::Yearly);

        let prices = page.prices();
        assert_eq!(prices.len(), 4);
        assert!(prices.iter().skip(1).all(|(_, p)| p.suffix == "/year"));
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn navigation_goes_through_the_viewport() {
        let (page, viewport) = page(MemoryStore::default());
        assert_eq!(page.navigate("pricing"), Some(1280.0));
        assert_eq!(page.navigate("contact"), None);
        assert_eq!(viewport.requests(), vec![1280.0]);
    }
}
