use tactics_core::{
    ActionKind, ActorId, CombatAction, Position, TimeValue, calculate_action_time,
};
use tactics_runtime::{
    ActorOracle, AttackError, AttackExecutor, CombatEvent, CombatScheduler, DamagePort, Event,
    EventBus, InMemoryWorld, Topic,
};

const PLAYER: ActorId = ActorId::PLAYER;
const ORC: ActorId = ActorId(1);

fn at(ticks: u64) -> TimeValue {
    TimeValue::from_raw(ticks)
}

fn strike(damage: u32) -> CombatAction {
    CombatAction::new("strike", at(100), damage, ActionKind::Attack, 0).unwrap()
}

/// Player (100 hp) at (2,2) facing an orc (80 hp) at (2,3), both scheduled.
fn arena() -> (InMemoryWorld, CombatScheduler, EventBus) {
    let _ = tracing_subscriber::fmt::try_init();

    let mut world = InMemoryWorld::new();
    world.spawn(PLAYER, Position::new(2, 2), 100, 50, 10);
    world.spawn(ORC, Position::new(2, 3), 80, 30, 0);

    let events = EventBus::new();
    let mut scheduler = CombatScheduler::new(PLAYER, events.clone());
    scheduler
        .schedule_actor(ORC, Position::new(2, 3), at(10))
        .unwrap();

    (world, scheduler, events)
}

#[test]
fn successful_attack_damages_and_reschedules() {
    let (mut world, mut scheduler, events) = arena();

    // The player takes its turn and swings.
    let turn = scheduler.process_next_turn().unwrap();
    assert_eq!(turn.actor, PLAYER);

    let action = strike(15);
    let outcome = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, ORC, &action)
        .unwrap();

    assert_eq!(outcome.damage, 15);
    assert_eq!(outcome.target_health.current, 65);
    assert!(!outcome.target_died);
    assert_eq!(world.actor(ORC).unwrap().health.current, 65);

    // Rescheduled at clock + calculated cost, from the attacker's stats.
    let expected_cost = calculate_action_time(&action, 50, 10).unwrap();
    assert_eq!(
        outcome.next_turn_at,
        scheduler.clock().saturating_add(expected_cost)
    );

    let order = scheduler.get_turn_order();
    let player_entry = order.iter().find(|e| e.actor == PLAYER).unwrap();
    assert_eq!(player_entry.ready_at, outcome.next_turn_at);
}

#[test]
fn lethal_damage_clamps_health_and_emits_death() {
    let (mut world, mut scheduler, events) = arena();
    let mut subscription = events.subscribe(Topic::Combat);

    // A wounded orc with 5 hp takes a 15-damage hit.
    world.spawn(ORC, Position::new(2, 3), 5, 30, 0);
    scheduler.process_next_turn().unwrap();

    let outcome = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, ORC, &strike(15))
        .unwrap();

    assert_eq!(outcome.target_health.current, 0);
    assert!(outcome.target_died);
    assert!(!world.actor(ORC).unwrap().is_alive());

    // Attacker still re-entered the schedule despite the kill.
    assert!(scheduler.is_scheduled(PLAYER));

    let Ok(Event::Combat(CombatEvent::ActorDamaged {
        actor, hp_before, hp_after, ..
    })) = subscription.try_recv()
    else {
        panic!("expected a damage event");
    };
    assert_eq!(actor, ORC);
    assert_eq!(hp_before, 5);
    assert_eq!(hp_after, 0);

    let Ok(Event::Combat(CombatEvent::ActorDied { actor, position, killer })) =
        subscription.try_recv()
    else {
        panic!("expected a death event");
    };
    assert_eq!(actor, ORC);
    assert_eq!(position, Position::new(2, 3));
    assert_eq!(killer, Some(PLAYER));

    // Death cleanup is the subscriber's job, reacting to the event.
    scheduler.remove_actor(ORC).unwrap();
    world.despawn(ORC);
    assert!(!scheduler.is_in_combat());
}

#[test]
fn sequential_hits_accumulate_in_order() {
    let (mut world, mut scheduler, events) = arena();
    world.spawn(ORC, Position::new(2, 3), 100, 30, 0);
    scheduler.process_next_turn().unwrap();

    let mut executor = AttackExecutor::new(&mut scheduler, events);
    for damage in [8, 15, 22] {
        executor
            .execute(&mut world, PLAYER, ORC, &strike(damage))
            .unwrap();
    }

    assert_eq!(world.actor(ORC).unwrap().health.current, 55);
}

#[test]
fn non_adjacent_attack_mutates_nothing() {
    let (mut world, mut scheduler, events) = arena();
    world.spawn(ORC, Position::new(5, 5), 80, 30, 0);
    scheduler.process_next_turn().unwrap();

    let order_before = scheduler.get_turn_order();
    let result = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, ORC, &strike(15));

    assert_eq!(result, Err(AttackError::NotAdjacent { distance: 3 }));
    assert_eq!(world.actor(ORC).unwrap().health.current, 80);
    assert_eq!(scheduler.get_turn_order(), order_before);
}

#[test]
fn dead_targets_are_rejected() {
    let (mut world, mut scheduler, events) = arena();
    world.apply_damage(ORC, 80).unwrap();
    scheduler.process_next_turn().unwrap();

    let result = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, ORC, &strike(15));
    assert_eq!(result, Err(AttackError::TargetDead(ORC)));
}

#[test]
fn unknown_actors_are_rejected() {
    let (mut world, mut scheduler, events) = arena();
    let ghost = ActorId(42);
    scheduler.process_next_turn().unwrap();

    let result = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, ghost, &strike(15));
    assert_eq!(result, Err(AttackError::NotFound(ghost)));
}

#[test]
fn self_attack_is_rejected_without_mutation() {
    let (mut world, mut scheduler, events) = arena();
    scheduler.process_next_turn().unwrap();

    // Identical positions put self-attacks at distance zero.
    let result = AttackExecutor::new(&mut scheduler, events)
        .execute(&mut world, PLAYER, PLAYER, &strike(15));
    assert_eq!(result, Err(AttackError::NotAdjacent { distance: 0 }));
    assert_eq!(world.actor(PLAYER).unwrap().health.current, 100);
}
