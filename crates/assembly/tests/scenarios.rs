//! Black-box scenarios against the public assembly API.

use std::thread;

use proptest::prelude::*;

use pizzeria_assembly::{AssemblyError, AssemblyEvent, AssemblyLine, FinishingStep, Registry};
use pizzeria_core::{Component, ComponentKind, ProductKind, Variant};
use pizzeria_events::{EventBus, InMemoryEventBus};
use pizzeria_ingredients::{SupplyError, TableSupplier};
use pizzeria_products::builder_for;

fn names(components: &[Component]) -> Vec<&str> {
    components.iter().map(Component::display_name).collect()
}

#[test]
fn every_registered_pair_fills_exactly_its_required_slots() {
    let line = AssemblyLine::standard();
    for (kind, variant) in line.registry().combinations() {
        let product = line.process(kind, variant).unwrap();
        let populated: Vec<_> = product.populated_kinds().collect();
        assert_eq!(populated, builder_for(kind).required_kinds().to_vec(), "{kind} / {variant}");
        assert!(product.name().starts_with(variant.style()));
        assert!(product.name().ends_with(kind.label()));
    }
}

#[test]
fn scenario_basic_new_york() {
    let product = AssemblyLine::standard()
        .process(ProductKind::Basic, Variant::NewYork)
        .unwrap();
    assert!(product.name().contains("New York"));
    assert!(product.name().contains("Cheese"));
    assert_eq!(names(product.components(ComponentKind::Base)), vec!["thin crust dough"]);
    assert_eq!(names(product.components(ComponentKind::Sauce)), vec!["marinara sauce"]);
    assert_eq!(names(product.components(ComponentKind::Topping)), vec!["reggiano cheese"]);
}

#[test]
fn scenario_mixed_chicago_has_three_vegetables() {
    let product = AssemblyLine::standard()
        .process(ProductKind::Mixed, Variant::Chicago)
        .unwrap();
    assert_eq!(
        names(product.components(ComponentKind::ToppingSet)),
        vec!["black olives", "egg plant", "spinach"]
    );
    assert!(!product.has(ComponentKind::Topping));
}

#[test]
fn scenario_shellfish_fresh_versus_frozen() {
    let line = AssemblyLine::standard();
    let new_york = line.process(ProductKind::Shellfish, Variant::NewYork).unwrap();
    let chicago = line.process(ProductKind::Shellfish, Variant::Chicago).unwrap();
    assert_eq!(names(new_york.components(ComponentKind::Shellfish)), vec!["fresh clams"]);
    assert_eq!(names(chicago.components(ComponentKind::Shellfish)), vec!["frozen clams"]);
}

#[test]
fn scenario_unregistered_variant_runs_no_steps() {
    let registry = Registry::builder()
        .standard_supplier(Variant::NewYork)
        .standard_builder(ProductKind::Shellfish)
        .build();
    let bus = InMemoryEventBus::<AssemblyEvent>::new();
    let sub = bus.subscribe();
    let line = AssemblyLine::with_bus(registry, bus);

    let result = line.process(ProductKind::Shellfish, Variant::Chicago);
    assert!(matches!(result, Err(AssemblyError::UnknownCombination { .. })));

    let steps: Vec<FinishingStep> = sub.drain().iter().filter_map(|e| e.payload().step()).collect();
    assert!(steps.is_empty());
}

#[test]
fn empty_topping_set_surfaces_to_the_caller() {
    let supplier = TableSupplier::builder(Variant::Chicago)
        .with_standard(ComponentKind::Base)
        .with_standard(ComponentKind::Sauce)
        .with_toppings(Vec::<String>::new())
        .build();
    let line = AssemblyLine::new(
        Registry::builder()
            .supplier(supplier)
            .standard_builder(ProductKind::Mixed)
            .build(),
    );

    let err = line.process(ProductKind::Mixed, Variant::Chicago).unwrap_err();
    assert_eq!(
        err.supply_error(),
        Some(&SupplyError::EmptyToppingSet {
            variant: Variant::Chicago
        })
    );
}

#[test]
fn completed_event_names_the_product() {
    let bus = InMemoryEventBus::<AssemblyEvent>::new();
    let sub = bus.subscribe();
    let line = AssemblyLine::with_bus(Registry::standard(), bus);
    let product = line.process(ProductKind::Mixed, Variant::NewYork).unwrap();

    let last = sub.drain().pop().unwrap().into_payload();
    match last {
        AssemblyEvent::Completed { product_name, .. } => assert_eq!(product_name, product.name()),
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[test]
fn line_is_shared_across_threads() {
    let line = AssemblyLine::standard();
    let expected = line.process(ProductKind::Primary, Variant::Chicago).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| line.process(ProductKind::Primary, Variant::Chicago)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

fn any_product_kind() -> impl Strategy<Value = ProductKind> {
    prop::sample::select(ProductKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: process is idempotent (identical inputs give equal products).
    #[test]
    fn process_is_idempotent(kind in any_product_kind(), variant in any_variant()) {
        let line = AssemblyLine::standard();
        let first = line.process(kind, variant).unwrap();
        let second = line.process(kind, variant).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a slot is populated iff the builder requires it.
    #[test]
    fn slots_match_required_kinds(kind in any_product_kind(), variant in any_variant()) {
        let product = AssemblyLine::standard().process(kind, variant).unwrap();
        let builder = builder_for(kind);
        for component_kind in ComponentKind::ALL {
            prop_assert_eq!(product.has(component_kind), builder.requires(component_kind));
        }
    }

    /// Property: a registry missing the variant always answers UnknownCombination.
    #[test]
    fn unregistered_variant_is_unknown(kind in any_product_kind(), variant in any_variant()) {
        let others = Variant::ALL.into_iter().filter(|v| *v != variant);
        let mut builder = Registry::builder().standard_builder(kind);
        for other in others {
            builder = builder.standard_supplier(other);
        }
        let line = AssemblyLine::new(builder.build());
        let err = line.process(kind, variant).unwrap_err();
        prop_assert_eq!(err, AssemblyError::UnknownCombination { kind, variant });
    }
}

#[test]
fn one_bus_watches_several_lines() {
    let bus = InMemoryEventBus::<AssemblyEvent>::new();
    let sub = bus.subscribe();
    let first = AssemblyLine::with_bus(Registry::standard(), bus.clone());
    let second = AssemblyLine::with_bus(Registry::standard(), bus);

    first.process(ProductKind::Basic, Variant::NewYork).unwrap();
    second.process(ProductKind::Shellfish, Variant::Chicago).unwrap();

    let envelopes = sub.drain();
    assert_eq!(envelopes.len(), 10);
    assert!(envelopes[..5].iter().all(|e| e.same_run(&envelopes[0])));
    assert!(!envelopes[0].same_run(&envelopes[5]));
    assert_eq!(envelopes[5].event_type(), "assembly.run.started");
}
