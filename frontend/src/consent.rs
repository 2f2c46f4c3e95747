use std::rc::Rc;
use log::{debug, warn};

use crate::config::CONSENT_STORAGE_KEY;
use crate::platform::KeyValueStore;
use crate::state::Observable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsentChoice {
    #[default]
    Unset,
    Accepted,
    Declined,
}

/// What the user can actually click on the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Declined,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accepted => "accepted",
            Decision::Declined => "declined",
        }
    }
}

impl From<Decision> for ConsentChoice {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => ConsentChoice::Accepted,
            Decision::Declined => ConsentChoice::Declined,
        }
    }
}

impl ConsentChoice {
    /// Anything but the two exact literals counts as no decision.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => ConsentChoice::Accepted,
            Some("declined") => ConsentChoice::Declined,
            _ => ConsentChoice::Unset,
        }
    }

    pub fn is_decided(self) -> bool {
        self != ConsentChoice::Unset
    }

    pub fn banner_visible(self) -> bool {
        !self.is_decided()
    }
}

pub struct ConsentStore<S: KeyValueStore> {
    storage: S,
    choice: Rc<Observable<ConsentChoice>>,
}

impl<S: KeyValueStore> ConsentStore<S> {
    /// Starts Unset. Call [`ConsentStore::load`] once the page has rendered.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            choice: Rc::new(Observable::new(ConsentChoice::Unset)),
        }
    }

    pub fn get(&self) -> ConsentChoice {
        self.choice.get()
    }

    pub fn observable(&self) -> Rc<Observable<ConsentChoice>> {
        self.choice.clone()
    }

    /// Reads the persisted decision. A decision already made this session wins.
    pub fn load(&self) -> ConsentChoice {
        if self.get().is_decided() {
            return self.get();
        }
        match self.storage.get(CONSENT_STORAGE_KEY) {
            Ok(stored) => {
                self.choice.set(ConsentChoice::from_stored(stored.as_deref()));
            }
            Err(e) => debug!("Consent not restored: {}", e),
        }
        self.get()
    }

    /// Records the banner decision. Returns true if the choice changed.
    pub fn set(&self, decision: Decision) -> bool {
        let current = self.get();
        if current.is_decided() {
            if current != ConsentChoice::from(decision) {
                debug!("Ignoring {} after consent was already given", decision.as_str());
            }
            return false;
        }

        self.choice.set(decision.into());
        if let Err(e) = self.storage.set(CONSENT_STORAGE_KEY, decision.as_str()) {
            warn!("Consent kept for this session only: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MemoryStore;
    use std::cell::RefCell;

    #[test]
    fn starts_unset_with_banner_visible() {
        let store = ConsentStore::new(MemoryStore::default());
        assert_eq!(store.load(), ConsentChoice::Unset);
        assert!(store.get().banner_visible());
    }

    #[test]
    fn decision_survives_reload() {
        for decision in [Decision::Accepted, Decision::Declined] {
            let storage = MemoryStore::default();
            let first = ConsentStore::new(storage.clone());
            first.load();
            assert!(first.set(decision));
            assert!(!first.get().banner_visible());

            let reloaded = ConsentStore::new(storage);
            assert_eq!(reloaded.get(), ConsentChoice::Unset);
            assert_eq!(reloaded.load(), ConsentChoice::from(decision));
            assert!(!reloaded.get().banner_visible());
        }
    }

    #[test]
    fn writes_the_literal_value_under_the_consent_key() {
        let storage = MemoryStore::default();
        ConsentStore::new(storage.clone()).set(Decision::Declined);
        assert_eq!(storage.raw("cookie-consent").as_deref(), Some("declined"));
    }

    #[test]
    fn accepting_twice_is_idempotent() {
        let storage = MemoryStore::default();
        let store = ConsentStore::new(storage.clone());
        let notifications = Rc::new(RefCell::new(Vec::new()));
        store.observable().subscribe({
            let notifications = notifications.clone();
            move |c: &ConsentChoice| notifications.borrow_mut().push(*c)
        });

        assert!(store.set(Decision::Accepted));
        assert!(!store.set(Decision::Accepted));

        assert_eq!(store.get(), ConsentChoice::Accepted);
        assert_eq!(storage.writes(), 1);
        assert_eq!(*notifications.borrow(), vec![ConsentChoice::Accepted]);
    }

    #[test]
    fn decision_is_terminal_for_the_session() {
        let storage = MemoryStore::default();
        let store = ConsentStore::new(storage.clone());
        store.set(Decision::Accepted);

        assert!(!store.set(Decision::Declined));
        assert_eq!(store.get(), ConsentChoice::Accepted);
        assert_eq!(storage.raw("cookie-consent").as_deref(), Some("accepted"));
    }

    #[test]
    fn only_unset_shows_the_banner() {
        assert!(ConsentChoice::Unset.banner_visible());
        assert!(!ConsentChoice::Accepted.banner_visible());
        assert!(!ConsentChoice::Declined.banner_visible());
    }

    #[test]
    fn unrecognised_stored_values_are_unset() {
        for raw in ["", "Accepted", "yes", "true", " accepted", "null"] {
            let store = ConsentStore::new(MemoryStore::with_entry("cookie-consent", raw));
            assert_eq!(store.load(), ConsentChoice::Unset, "value {:?}", raw);
            assert!(store.get().banner_visible());
        }
    }

    #[test]
    fn unavailable_storage_degrades_to_unset() {
        let store = ConsentStore::new(MemoryStore::disabled());
        assert_eq!(store.load(), ConsentChoice::Unset);

        assert!(store.set(Decision::Accepted));
        assert_eq!(store.get(), ConsentChoice::Accepted);

        let next_session = ConsentStore::new(MemoryStore::disabled());
        assert_eq!(next_session.load(), ConsentChoice::Unset);
        assert!(next_session.get().banner_visible());
    }

    #[test]
    fn click_before_deferred_read_is_not_overwritten() {
        let storage = MemoryStore::with_entry("cookie-consent", "declined");
        let store = ConsentStore::new(storage.clone());

        store.set(Decision::Accepted);
        assert_eq!(store.load(), ConsentChoice::Accepted);
        assert_eq!(storage.raw("cookie-consent").as_deref(), Some("accepted"));
    }
}
