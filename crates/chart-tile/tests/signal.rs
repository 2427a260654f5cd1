// File: crates/chart-tile/tests/signal.rs
// Purpose: Observable cells and channels: change filtering, RAII unsubscription,
//          cancellation during a dispatch, emits raised from inside a callback.

use std::cell::RefCell;
use std::rc::Rc;

use chart_tile::{Channel, Signal, Subscription};

#[test]
fn signal_notifies_only_on_change() {
    let signal = Signal::new(800u32);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = signal.subscribe(move |w| sink.borrow_mut().push(*w));

    assert!(!signal.set(800));
    assert!(signal.set(600));
    assert!(!signal.set(600));
    assert!(signal.set(700));
    assert_eq!(*seen.borrow(), vec![600, 700]);
    assert_eq!(signal.get(), 700);
}

#[test]
fn dropping_subscription_stops_delivery() {
    let channel = Channel::<u32>::new();
    let hits = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&hits);
    let sub = channel.subscribe(move |_| *sink.borrow_mut() += 1);

    channel.emit(&1);
    assert_eq!(channel.subscriber_count(), 1);
    drop(sub);
    channel.emit(&2);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(channel.subscriber_count(), 0);
}

#[test]
fn subscriber_cancelled_mid_dispatch_is_skipped() {
    let channel = Channel::<u32>::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();

    let first = {
        let order = Rc::clone(&order);
        let victim = Rc::clone(&victim);
        channel.subscribe(move |v| {
            order.borrow_mut().push(("first", *v));
            if let Some(sub) = victim.borrow_mut().take() {
                sub.unsubscribe();
            }
        })
    };
    let second = {
        let order = Rc::clone(&order);
        channel.subscribe(move |v| order.borrow_mut().push(("second", *v)))
    };
    *victim.borrow_mut() = Some(second);

    channel.emit(&1);
    channel.emit(&2);
    assert_eq!(*order.borrow(), vec![("first", 1), ("first", 2)]);
    assert_eq!(channel.subscriber_count(), 1);
    drop(first);
}

#[test]
fn subscription_added_mid_dispatch_starts_next_emit() {
    let channel = Channel::<u32>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();

    let _outer = {
        let channel_handle = channel.clone();
        let seen = Rc::clone(&seen);
        let late = Rc::clone(&late);
        channel.subscribe(move |_| {
            if late.borrow().is_empty() {
                let seen = Rc::clone(&seen);
                let sub = channel_handle.subscribe(move |v| seen.borrow_mut().push(*v));
                late.borrow_mut().push(sub);
            }
        })
    };

    channel.emit(&1);
    assert!(seen.borrow().is_empty());
    channel.emit(&2);
    assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn cloned_signal_shares_state() {
    let a = Signal::new("light".to_string());
    let b = a.clone();
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let _sub = b.subscribe(move |_| *sink.borrow_mut() += 1);
    a.set("dark".into());
    assert_eq!(b.get(), "dark");
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn nested_set_keeps_observers_in_step_with_value() {
    let theme = Signal::new("light");
    let relay = theme.clone();
    let _revert = theme.subscribe(move |v| {
        if *v == "dark" {
            relay.set("light");
        }
    });
    let last = Rc::new(RefCell::new(""));
    let sink = Rc::clone(&last);
    let _observer = theme.subscribe(move |v| *sink.borrow_mut() = *v);

    assert!(theme.set("dark"));
    assert_eq!(theme.get(), "light");
    assert_eq!(*last.borrow(), theme.get());
}

#[test]
fn nested_emits_arrive_in_emission_order() {
    let channel = Channel::<u32>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _chain = {
        let channel_handle = channel.clone();
        let seen = Rc::clone(&seen);
        channel.subscribe(move |v| {
            seen.borrow_mut().push(("chain", *v));
            if *v == 1 {
                channel_handle.emit(&2);
                channel_handle.emit(&3);
            }
        })
    };
    let _tail = {
        let seen = Rc::clone(&seen);
        channel.subscribe(move |v| seen.borrow_mut().push(("tail", *v)))
    };

    channel.emit(&1);
    assert_eq!(
        *seen.borrow(),
        vec![("chain", 1), ("tail", 1), ("chain", 2), ("tail", 2), ("chain", 3), ("tail", 3)]
    );

    channel.emit(&4);
    assert_eq!(seen.borrow().len(), 8);
}
