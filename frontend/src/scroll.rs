use log::debug;
use yew::prelude::*;

use crate::platform::Viewport;

/// In-page anchors rendered by the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Features,
    HowItWorks,
    Screenshots,
    Testimonials,
    Pricing,
    Contact,
}

impl Section {
    #[cfg(test)]
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Features,
        Section::HowItWorks,
        Section::Screenshots,
        Section::Testimonials,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Screenshots => "screenshots",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn scroll_target(element_top: f64, clearance: f64) -> f64 {
    element_top - clearance
}

pub struct ScrollNavigator<V: Viewport> {
    viewport: V,
    clearance: f64,
}

impl<V: Viewport> ScrollNavigator<V> {
    pub fn new(viewport: V, clearance: f64) -> Self {
        Self { viewport, clearance }
    }

    /// Smoothly scrolls so the anchor sits just below the sticky header.
    /// Missing anchors are ignored. Returns the requested offset, if any.
    pub fn scroll_to(&self, anchor_id: &str) -> Option<f64> {
        let Some(top) = self.viewport.element_top(anchor_id) else {
            debug!("No section #{} to scroll to", anchor_id);
            return None;
        };
        let target = scroll_target(top, self.clearance);
        self.viewport.smooth_scroll_to(target);
        Some(target)
    }
}

/// Click handler for `<a href="#id">` that replaces the native jump with `navigate(id)`.
pub fn anchor_click(section: Section, navigate: Callback<&'static str>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(section.id());
    })
}
