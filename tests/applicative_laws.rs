//! Property-based tests for Applicative laws and error accumulation.
//!
//! - **Identity**: `brand.ap(brand.of(|x| x), v) == v`
//! - **Homomorphism**: `brand.ap(brand.of(f), brand.of(x)) == brand.of(f(x))`
//! - **Map consistency**: `brand.map2(fa, fb, f) == brand.ap(brand.map(fa, curry(f)), fb)`
//!
//! The validated instances additionally combine the errors of two failures
//! in argument order.

use kindred::data::option::OptionKind;
use kindred::data::result::{ResultKind, validated_alt, validated_applicative};
use kindred::typeclass::{Alt, Apply, Functor, Pointed};
use proptest::prelude::*;
use rstest::rstest;

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,4}")
}

proptest! {
    #[test]
    fn prop_option_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionKind.ap(OptionKind.of(|x: i32| x), value), value);
    }

    #[test]
    fn prop_option_homomorphism(value in any::<i32>()) {
        let function = |x: i32| x.wrapping_mul(5);
        prop_assert_eq!(OptionKind.ap(OptionKind.of(function), OptionKind.of(value)), Some(function(value)));
    }

    #[test]
    fn prop_result_identity(value in result_strategy()) {
        let brand = ResultKind::<String>::new();
        prop_assert_eq!(brand.ap(brand.of(|x: i32| x), value.clone()), value);
    }

    #[test]
    fn prop_validated_identity(value in result_strategy()) {
        let brand = validated_applicative::<String>();
        prop_assert_eq!(brand.ap(brand.of(|x: i32| x), value.clone()), value);
    }

    #[test]
    fn prop_validated_map2_consistent_with_ap(first in result_strategy(), second in result_strategy()) {
        let brand = validated_applicative::<String>();
        let direct = brand.map2(first.clone(), second.clone(), |a: i32, b: i32| a.wrapping_add(b));
        let curried = brand.map(first, |a: i32| move |b: i32| a.wrapping_add(b));
        prop_assert_eq!(direct, brand.ap(curried, second));
    }

    #[test]
    fn prop_validated_combines_errors_in_argument_order(first in "[a-z]{1,4}", second in "[a-z]{1,4}") {
        let brand = validated_applicative::<String>();
        let combined = brand.map2(Err::<i32, _>(first.clone()), Err::<i32, _>(second.clone()), |a, b| a + b);
        prop_assert_eq!(combined, Err(format!("{first}{second}")));
    }

    #[test]
    fn prop_result_keeps_first_error(first in "[a-z]{1,4}", second in "[a-z]{1,4}") {
        let brand = ResultKind::<String>::new();
        let combined = brand.map2(Err::<i32, _>(first.clone()), Err::<i32, _>(second), |a, b| a + b);
        prop_assert_eq!(combined, Err(first));
    }
}

#[rstest]
fn validated_ap_puts_function_error_first() {
    let function: Result<fn(i32) -> i32, String> = Err("b".to_string());
    let validated = validated_applicative::<String>().ap(function.clone(), Err("a".to_string()));
    assert_eq!(validated, Err("ba".to_string()));
    let plain = ResultKind::<String>::new().ap(function, Err("a".to_string()));
    assert_eq!(plain, Err("b".to_string()));
}

#[rstest]
fn validated_alt_combines_in_order() {
    let validated = validated_alt::<String>().or_else(Err::<i32, _>("a".to_string()), || Err("b".to_string()));
    assert_eq!(validated, Err("ab".to_string()));
    let plain = ResultKind::<String>::new().or_else(Err::<i32, _>("a".to_string()), || Err("b".to_string()));
    assert_eq!(plain, Err("b".to_string()));
}
