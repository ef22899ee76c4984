use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn every_listener_sees_the_value() {
    let mut registry = ListenerRegistry::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b"] {
        let seen = Rc::clone(&seen);
        registry.add(move |value: &f32| seen.borrow_mut().push((tag, *value)));
    }

    registry.snapshot().notify(&1.5);
    assert_eq!(seen.borrow().as_slice(), &[("a", 1.5), ("b", 1.5)]);
}

#[test]
fn removed_listener_is_not_notified() {
    let mut registry = ListenerRegistry::new();
    let count = Rc::new(Cell::new(0));
    let id = {
        let count = Rc::clone(&count);
        registry.add(move |_: &f32| count.set(count.get() + 1))
    };

    assert!(registry.remove(id));
    assert!(!registry.remove(id));
    assert!(registry.is_empty());
    registry.snapshot().notify(&0.0);
    assert_eq!(count.get(), 0);
}

#[test]
fn snapshot_is_unaffected_by_later_registration() {
    let registry = Rc::new(RefCell::new(ListenerRegistry::<f32>::new()));
    let count = Rc::new(Cell::new(0));
    {
        let registry_for_listener = Rc::clone(&registry);
        let count = Rc::clone(&count);
        registry.borrow_mut().add(move |_| {
            count.set(count.get() + 1);
            let count = Rc::clone(&count);
            registry_for_listener
                .borrow_mut()
                .add(move |_| count.set(count.get() + 100));
        });
    }

    let snapshot = registry.borrow().snapshot();
    snapshot.notify(&0.0);
    assert_eq!(count.get(), 1);
    assert_eq!(registry.borrow().len(), 2);
}
