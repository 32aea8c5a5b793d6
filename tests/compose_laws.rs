#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Left Identity**: `compose_after(identity, f) == f`
//! - **Right Identity**: `compose_after(f, identity) == f`
//! - **Associativity**: `compose_after(h, compose_after(g, f)) == compose_after(compose_after(h, g), f)`
//!
//! ## Direction Laws
//! - **Equivalence**: `compose_then(f, g) == compose_after(g, f)`
//! - **Macro Equivalence**: `pipeline!(f, g, h) == compose!(h, g, f)`

use functional::compose::{Pipeline, compose_after, compose_then, identity};
use functional::{compose, pipeline};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose_after(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose_after(identity, function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose_after(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose_after(function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law for right-to-left composition
    #[test]
    fn prop_compose_after_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let nested_right = compose_after(function3, compose_after(function2, function1));
        let nested_left = compose_after(compose_after(function3, function2), function1);

        prop_assert_eq!(nested_right(x), nested_left(x));
    }

    /// Associativity Law for left-to-right composition
    #[test]
    fn prop_compose_then_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let nested_left = compose_then(compose_then(function1, function2), function3);
        let nested_right = compose_then(function1, compose_then(function2, function3));

        prop_assert_eq!(nested_left(x), nested_right(x));
    }

    /// Associativity over owned containers moved through every stage
    #[test]
    fn prop_compose_associativity_with_owned_vectors(values in prop::collection::vec(any::<i16>(), 0..32)) {
        let push_zero = |mut list: Vec<i16>| { list.push(0); list };
        let reverse = |mut list: Vec<i16>| { list.reverse(); list };
        let length = |list: Vec<i16>| list.len();

        let nested_right = compose_after(length, compose_after(reverse, push_zero));
        let nested_left = compose_after(compose_after(length, reverse), push_zero);

        prop_assert_eq!(nested_right(values.clone()), nested_left(values.clone()));
        prop_assert_eq!(nested_right(values.clone()), values.len() + 1);
    }
}

// =============================================================================
// Direction Laws
// =============================================================================

proptest! {
    /// compose_then(f, g)(x) == compose_after(g, f)(x)
    #[test]
    fn prop_compose_then_equals_compose_after(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(
            compose_then(function1, function2)(x),
            compose_after(function2, function1)(x)
        );
    }

    /// pipeline!(f, g, h)(x) == compose!(h, g, f)(x)
    #[test]
    fn prop_pipeline_macro_equals_compose_macro(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        prop_assert_eq!(
            pipeline!(function1, function2, function3)(x),
            compose!(function3, function2, function1)(x)
        );
    }

    /// Pipeline::then and Pipeline::after build the same chain
    #[test]
    fn prop_pipeline_builder_directions_agree(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let appended = Pipeline::new(function1).then(function2);
        let prepended = Pipeline::new(function2).after(function1);

        prop_assert_eq!(appended.call(x), prepended.call(x));
    }
}
