use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn notifies_in_subscription_order_until_unsubscribed() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut obs = Observers::<u32>::default();

    let a = {
        let log = Rc::clone(&log);
        obs.subscribe(move |v| log.borrow_mut().push(("a", *v)))
    };
    {
        let log = Rc::clone(&log);
        obs.subscribe(move |v| log.borrow_mut().push(("b", *v)));
    }

    obs.notify(&1);
    assert!(obs.unsubscribe(a));
    assert!(!obs.unsubscribe(a));
    obs.notify(&2);

    assert_eq!(*log.borrow(), vec![("a", 1), ("b", 1), ("b", 2)]);
    assert_eq!(obs.len(), 1);
}
