use std::str::FromStr;

use rscookbook::math::{checked_pow, divide, gcd, is_power_of_two, RoundingMode};
use rscookbook::util::testing;
use rscookbook::CookbookError;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
fn given_two_to_the_tenth_when_checked_pow_then_1024() {
    assert_eq!(checked_pow(2, 10).unwrap(), 1024);
}

#[rstest]
#[case(2, 31)]
#[case(10, 10)]
fn given_large_power_when_checked_pow_then_overflow(#[case] base: i32, #[case] exp: u32) {
    assert!(matches!(checked_pow(base, exp), Err(CookbookError::Overflow(_))));
}

#[rstest]
#[case(7, 2, RoundingMode::HalfUp, 4)]
#[case(7, 2, RoundingMode::HalfDown, 3)]
#[case(7, 2, RoundingMode::HalfEven, 4)]
#[case(5, 2, RoundingMode::HalfEven, 2)]
#[case(7, 2, RoundingMode::Down, 3)]
#[case(7, 2, RoundingMode::Up, 4)]
#[case(-7, 2, RoundingMode::Floor, -4)]
#[case(-7, 2, RoundingMode::Ceiling, -3)]
#[case(-7, 2, RoundingMode::HalfUp, -4)]
#[case(8, 3, RoundingMode::HalfDown, 3)]
#[case(6, 3, RoundingMode::Unnecessary, 2)]
fn given_division_when_rounding_then_expected_quotient(
    #[case] p: i32,
    #[case] q: i32,
    #[case] mode: RoundingMode,
    #[case] expected: i32,
) {
    assert_eq!(divide(p, q, mode).unwrap(), expected);
}

#[rstest]
fn given_zero_divisor_when_divide_then_division_by_zero() {
    assert!(matches!(
        divide(1, 0, RoundingMode::HalfUp),
        Err(CookbookError::DivisionByZero)
    ));
}

#[rstest]
fn given_inexact_division_when_unnecessary_then_rounding_necessary() {
    assert!(matches!(
        divide(7, 2, RoundingMode::Unnecessary),
        Err(CookbookError::RoundingNecessary { p: 7, q: 2 })
    ));
}

#[rstest]
fn given_constant_name_when_get_if_present_then_mode() {
    assert_eq!(
        RoundingMode::get_if_present("HALF_UP"),
        Some(RoundingMode::HalfUp)
    );
    assert_eq!(RoundingMode::get_if_present("half_up"), None);
    assert_eq!(RoundingMode::get_if_present("SIDEWAYS"), None);
}

#[rstest]
fn given_unknown_name_when_from_str_then_unknown_variant() {
    assert_eq!(RoundingMode::from_str("FLOOR").unwrap(), RoundingMode::Floor);
    assert!(matches!(
        RoundingMode::from_str("NEAREST"),
        Err(CookbookError::UnknownVariant(name)) if name == "NEAREST"
    ));
}

#[rstest]
fn given_integers_when_gcd_and_power_of_two_then_expected() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(0, 5), 5);
    assert!(is_power_of_two(1024));
    assert!(!is_power_of_two(0));
    assert!(!is_power_of_two(12));
}
