//! End-to-end dispatch flow: gate validation, namespaced dispatch, ordering
//! and accounting across a realistic deploy run.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use stagehand_core::{CallbackId, Error};
use stagehand_dispatch::{Dispatcher, GateOutcome, HookGate};
use std::sync::{Arc, Mutex};

#[test]
fn test_gated_deploy_run_in_priority_order() {
    let mut gate = HookGate::deploy_default();
    gate.extend_with(|names| {
        names.insert("nightly".to_string());
    });

    let executed: Arc<Mutex<Vec<String>>> = Arc::default();
    let mut dispatcher = Dispatcher::new();

    for (name, priority) in [("notify", 30), ("migrate", 10), ("warm-cache", 20)] {
        let sink = Arc::clone(&executed);
        dispatcher.register(
            "deploy/after",
            priority,
            1,
            CallbackId::named(name),
            Box::new(move |args| {
                sink.lock()
                    .unwrap()
                    .push(format!("{name}:{}", args[0].as_str().unwrap()));
                Ok(())
            }),
        );
    }

    // The CLI flow: gate first, then fire the namespaced tag
    assert_eq!(gate.check("after"), GateOutcome::Allowed);
    let count = dispatcher
        .run("deploy/after", &[json!("production"), json!("ignored")])
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        *executed.lock().unwrap(),
        vec![
            "migrate:production",
            "warm-cache:production",
            "notify:production"
        ]
    );
    assert_eq!(dispatcher.fired_count("deploy/after"), 1);
}

#[test]
fn test_disallowed_name_never_reaches_dispatch() {
    let gate = HookGate::deploy_default();
    assert_eq!(gate.check("deploy-typo"), GateOutcome::Disallowed);
    assert_eq!(gate.check(""), GateOutcome::Empty);
}

#[test]
fn test_deploy_failure_propagates_with_message() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        "deploy/before",
        10,
        0,
        CallbackId::named("precondition"),
        Box::new(|_args| Err(Error::deploy("maintenance window not open"))),
    );

    let err = dispatcher.run("deploy/before", &[]).unwrap_err();
    assert_eq!(err.to_string(), "maintenance window not open");
}

#[test]
fn test_unrelated_namespaces_do_not_collide() {
    let fired: Arc<Mutex<Vec<&'static str>>> = Arc::default();
    let mut dispatcher = Dispatcher::new();

    let sink = Arc::clone(&fired);
    dispatcher.register(
        "deploy/after",
        10,
        0,
        CallbackId::named("deploy-only"),
        Box::new(move |_args| {
            sink.lock().unwrap().push("deploy");
            Ok(())
        }),
    );
    let sink = Arc::clone(&fired);
    dispatcher.register(
        "backup/after",
        10,
        0,
        CallbackId::named("backup-only"),
        Box::new(move |_args| {
            sink.lock().unwrap().push("backup");
            Ok(())
        }),
    );

    assert_eq!(dispatcher.run("deploy/after", &[]).unwrap(), 1);
    assert_eq!(*fired.lock().unwrap(), vec!["deploy"]);
}
