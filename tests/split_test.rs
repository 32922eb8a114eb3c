use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

use pay_splitter::split::{is_valid_weight, proportional_share, SplitTally, WEIGHT_MAX};

type Amount = BigUint<StaticApi>;

#[test]
fn test_proportional_share_floors() {
    let amount = Amount::from(1_000_000u64);
    assert_eq!(proportional_share(&amount, 6, 10), Amount::from(600_000u64));
    assert_eq!(proportional_share(&amount, 4, 10), Amount::from(400_000u64));

    // 10 * 1 / 3 = 3.33..
    let amount = Amount::from(10u64);
    assert_eq!(proportional_share(&amount, 1, 3), Amount::from(3u64));
}

#[test]
fn test_proportional_share_large_amount() {
    // Far beyond u64: the product must not wrap.
    let amount = Amount::from(10u64).pow(30);
    assert_eq!(
        proportional_share(&amount, WEIGHT_MAX, WEIGHT_MAX),
        amount.clone()
    );
    assert_eq!(
        proportional_share(&amount, 1, 4),
        Amount::from(25u64) * Amount::from(10u64).pow(28)
    );
}

#[test]
fn test_tally_keeps_remainder_as_dust() {
    let mut tally = SplitTally::new(Amount::from(7u64), 10);
    assert_eq!(tally.take_share(6), Amount::from(4u64));
    assert_eq!(tally.take_share(4), Amount::from(2u64));

    assert_eq!(tally.dust(), Amount::from(1u64));
}

#[test]
fn test_tally_exact_split_has_no_dust() {
    let mut tally = SplitTally::new(Amount::from(1_000_000u64), 20);
    let mut distributed = Amount::zero();
    for weight in [6u64, 4, 2, 8] {
        distributed += tally.take_share(weight);
    }
    assert_eq!(distributed, Amount::from(1_000_000u64));
    assert_eq!(tally.dust(), Amount::zero());
}

#[test]
fn test_weight_bounds() {
    assert!(!is_valid_weight(0));
    assert!(is_valid_weight(1));
    assert!(is_valid_weight(WEIGHT_MAX));
    assert!(!is_valid_weight(WEIGHT_MAX + 1));
}
