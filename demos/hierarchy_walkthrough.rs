//! Hierarchy Walkthrough
//!
//! Drives a small machine where three child states share a parent that
//! owns the "problem" edge.
//!
//! Key concepts:
//! - Parent fallback (children inherit the parent's transitions)
//! - First-match-wins ordering
//! - Exit actions fire on the state whose transition was taken
//! - A guard with an observable side effect
//!
//! Run with: RUST_LOG=hsm=trace cargo run --example hierarchy_walkthrough

use hsm::builder::StateBuilder;
use hsm::core::{is_true, State};
use hsm::driver::Machine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Context {
    problem: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Hierarchy Walkthrough ===\n");

    let time_to_leave = Arc::new(AtomicBool::new(false));

    let terminal: State<Context> = State::new("terminal");
    let success = StateBuilder::new()
        .id("success")
        .on_update(|_: &Context| println!("  success"))
        .always(&terminal)
        .build()
        .unwrap();
    let failure = StateBuilder::new()
        .id("failure")
        .on_update(|_: &Context| println!("  failure"))
        .always(&terminal)
        .build()
        .unwrap();

    let supervisor = StateBuilder::new()
        .id("supervisor")
        .when(|ctx: &Context| ctx.problem, &failure)
        .build()
        .unwrap();

    let c = StateBuilder::new()
        .id("c")
        .parent(&supervisor)
        .when(is_true::<Context>, &success)
        .build()
        .unwrap();

    // First check answers "no" and arms the flag, so `b` lingers one tick.
    let flag = Arc::clone(&time_to_leave);
    let b = StateBuilder::new()
        .id("b")
        .parent(&supervisor)
        .on_update(|_: &Context| println!("  b: update"))
        .on_exit(|_: &Context| println!("  b: exit"))
        .when(move |_: &Context| flag.swap(true, Ordering::SeqCst), &c)
        .when(|ctx: &Context| ctx.problem, &success)
        .build()
        .unwrap();

    let a = StateBuilder::new()
        .id("a")
        .parent(&supervisor)
        .on_update(|_: &Context| println!("  a: entry"))
        .always(&b)
        .build()
        .unwrap();

    println!("Run without problems:");
    let mut machine = Machine::with_terminal(a.clone(), terminal.clone());
    match machine.run(&Context::default()) {
        Ok(ticks) => println!("  finished after {ticks} ticks"),
        Err(e) => eprintln!("  run failed: {e}"),
    }
    println!("  path: {:?}\n", machine.history().get_path());

    println!("Run with a problem from the first tick:");
    time_to_leave.store(false, Ordering::SeqCst);
    let mut machine = Machine::with_terminal(a.clone(), terminal.clone());
    match machine.run(&Context { problem: true }) {
        Ok(ticks) => println!("  finished after {ticks} ticks"),
        Err(e) => eprintln!("  run failed: {e}"),
    }
    println!("  path: {:?}", machine.history().get_path());

    for state in [&a, &b, &c, &supervisor, &success, &failure, &terminal] {
        state.disconnect();
    }

    println!("\n=== Example Complete ===");
}
