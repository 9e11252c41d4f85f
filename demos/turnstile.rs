//! Turnstile State Machine
//!
//! This example drives the classic coin-operated turnstile and plans action
//! sequences between its states.
//!
//! Key concepts:
//! - Building a rule graph from a transition table
//! - Extending a shared graph without mutating it
//! - First-match-wins dispatch, including self-loops
//! - Shortest action plans and replaying them
//!
//! Run with: RUST_LOG=rulegraph=debug cargo run --example turnstile

use rulegraph::builder::{table_graph, RuleGraphBuilder};
use rulegraph::machine::{replay, StateMachine};
use rulegraph::planner::{plan, plan_with};
use rulegraph::{action_enum, state_enum, Action, RuleGraph, State};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Alarm,
    }
}

action_enum! {
    enum Input {
        Coin,
        Pass,
        Cheat,
    }
}

fn show_plan(graph: &RuleGraph<Turnstile, Input>, from: Turnstile, to: Turnstile) {
    match plan_with(graph, &from, &to, &[Input::Coin, Input::Pass]) {
        Ok(found) => println!("  {} -> {}: {}", from.name(), to.name(), found),
        Err(err) => println!("  {} -> {}: {}", from.name(), to.name(), err),
    }
}

fn drive(machine: &mut StateMachine<Turnstile, Input>, inputs: &[Input]) {
    println!("  start: {}", machine.state().name());
    for input in inputs {
        match machine.act(input) {
            Ok(state) => println!("  {:<6} -> {}", input.name(), state.name()),
            Err(err) => println!("  {:<6} -> rejected ({})", input.name(), err),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let graph = Arc::new(table_graph(&[
        (Turnstile::Locked, Turnstile::Unlocked, Input::Coin),
        (Turnstile::Unlocked, Turnstile::Locked, Input::Pass),
        (Turnstile::Unlocked, Turnstile::Unlocked, Input::Coin),
        (Turnstile::Locked, Turnstile::Locked, Input::Pass),
    ]));

    println!("Driving the turnstile:");
    let mut turnstile = StateMachine::new(Arc::clone(&graph), Turnstile::Locked);
    drive(
        &mut turnstile,
        &[Input::Coin, Input::Pass, Input::Pass, Input::Coin, Input::Coin, Input::Cheat],
    );

    println!("\nPlans over [Coin, Pass]:");
    show_plan(&graph, Turnstile::Locked, Turnstile::Unlocked);
    show_plan(&graph, Turnstile::Unlocked, Turnstile::Locked);
    show_plan(&graph, Turnstile::Locked, Turnstile::Locked);
    show_plan(&graph, Turnstile::Unlocked, Turnstile::Unlocked);

    let with_alarm = Arc::new(
        RuleGraphBuilder::extend(&graph)
            .on(Turnstile::Locked, Turnstile::Alarm, Input::Cheat)
            .on(Turnstile::Unlocked, Turnstile::Alarm, Input::Cheat)
            .build(),
    );

    println!("\nDriving the turnstile with an alarm:");
    let mut guarded = StateMachine::new(Arc::clone(&with_alarm), Turnstile::Locked);
    drive(
        &mut guarded,
        &[Input::Coin, Input::Pass, Input::Pass, Input::Coin, Input::Coin, Input::Cheat],
    );

    println!("\nPlans with the alarm rules:");
    show_plan(&with_alarm, Turnstile::Locked, Turnstile::Alarm);
    match plan(&with_alarm, &Turnstile::Locked, &Turnstile::Alarm) {
        Ok(found) => println!("  Locked -> Alarm (full alphabet): {}", found),
        Err(err) => println!("  Locked -> Alarm (full alphabet): {}", err),
    }
    show_plan(&with_alarm, Turnstile::Alarm, Turnstile::Locked);

    println!("\nReplaying a plan:");
    let mut machine = StateMachine::new(Arc::clone(&with_alarm), Turnstile::Unlocked);
    match machine
        .plan_to(&Turnstile::Locked)
        .map_err(|e| e.to_string())
        .and_then(|found| replay(&mut machine, &found).map_err(|e| e.to_string()))
    {
        Ok(history) => {
            let path: Vec<_> = history.get_path().into_iter().map(|s| s.name()).collect();
            println!("  path: {}", path.join(" -> "));
        }
        Err(err) => println!("  failed: {}", err),
    }

    println!("\n=== Example Complete ===");
}
