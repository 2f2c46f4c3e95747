use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener<T> = Rc<dyn Fn(&T)>;

/// A value with change notification. Single-threaded; lives behind an `Rc`.
pub struct Observable<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(ListenerId, Listener<T>)>>,
    next_id: Cell<usize>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Stores `value` and notifies listeners. Returns false, without notifying,
    /// when the value is unchanged.
    pub fn set(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        *self.value.borrow_mut() = value.clone();

        // Snapshot so listeners can subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&value);
        }
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Pushes the current value to `sink`, then every later change.
///
/// Effects run after the first render, so the value read while rendering may
/// already be stale by the time this subscribes (the consent read is such an effect).
pub fn mirror<T, F>(observable: &Observable<T>, sink: F) -> ListenerId
where
    T: Clone + PartialEq,
    F: Fn(T) + 'static,
{
    sink(observable.get());
    observable.subscribe(move |next: &T| sink(next.clone()))
}

/// Mirrors an [`Observable`] into component state so the component re-renders on change.
#[hook]
pub fn use_observable<T>(observable: Rc<Observable<T>>) -> T
where
    T: Clone + PartialEq + 'static,
{
    let initial = observable.get();
    let value = use_state(move || initial);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let id = mirror(&observable, move |next| value.set(next));
                move || observable.unsubscribe(id)
            },
            (),
        );
    }

    (*value).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_only_on_change() {
        let observable = Observable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        observable.subscribe({
            let seen = seen.clone();
            move |v: &i32| seen.borrow_mut().push(*v)
        });

        assert!(observable.set(2));
        assert!(!observable.set(2));
        assert!(observable.set(3));

        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(observable.get(), 3);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let observable = Observable::new("monthly");
        let calls = Rc::new(Cell::new(0));
        let id = observable.subscribe({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });

        observable.set("yearly");
        observable.unsubscribe(id);
        observable.set("monthly");

        assert_eq!(calls.get(), 1);
        assert_eq!(observable.listener_count(), 0);
    }

    #[test]
    fn listener_can_unsubscribe_itself_during_notification() {
        let observable = Rc::new(Observable::new(0));
        let own_id = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let id = observable.subscribe({
            let observable = Rc::downgrade(&observable);
            let own_id = own_id.clone();
            let calls = calls.clone();
            move |_: &i32| {
                calls.set(calls.get() + 1);
                if let (Some(observable), Some(id)) = (observable.upgrade(), own_id.get()) {
                    observable.unsubscribe(id);
                }
            }
        });
        own_id.set(Some(id));

        observable.set(1);
        observable.set(2);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn mirror_catches_up_with_changes_made_before_subscribing() {
        let observable = Observable::new("unset");
        let rendered = observable.get();
        // Something else updates the value before the mirror is attached.
        observable.set("accepted");

        let seen = Rc::new(RefCell::new(vec![rendered]));
        let id = mirror(&observable, {
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(v)
        });
        observable.set("declined");
        observable.unsubscribe(id);
        observable.set("unset");

        assert_eq!(*seen.borrow(), vec!["unset", "accepted", "declined"]);
    }
}
