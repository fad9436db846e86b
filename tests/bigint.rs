use longint::primitives::{BigInt, Magnitude};

fn big(text: &str) -> BigInt {
    text.parse().unwrap()
}

fn int(value: i64) -> BigInt {
    BigInt::from(value)
}

#[test]
fn bigint_default_is_zero() {
    let zero = BigInt::default();

    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert!(!zero.is_positive());
    assert!(!zero.is_nan());
    assert_eq!(zero.size(), 0);
    assert_eq!(zero, BigInt::zero());
}

#[test]
fn bigint_nan_state() {
    let nan = BigInt::nan();

    assert!(nan.is_nan());
    assert!(!nan.is_zero());
    assert!(!nan.is_negative());
    assert!(!nan.is_positive());
    assert_eq!(nan.size(), 0);
    assert!(nan.magnitude().is_none());
}

#[test]
fn bigint_size_counts_digits() {
    assert_eq!(int(0xFF).size(), 1);
    assert_eq!(int(0x100).size(), 2);
    assert_eq!(int(-0x1_0000).size(), 3);
    assert_eq!(int(i64::MIN).size(), 8);
}

#[test]
fn bigint_zero_is_never_negative() {
    let zero = BigInt::from_parts(true, Magnitude::zero());
    assert!(!zero.is_negative());

    assert!(!(-BigInt::zero()).is_negative());
    assert!(!big("-0").is_negative());
    assert!(!(int(5) - int(5)).is_negative());
    assert!(!(int(-5) + int(5)).is_negative());
    assert!(!(int(-3) * int(0)).is_negative());
    assert!(!(int(-6) % int(3)).is_negative());
}

#[test]
fn bigint_take_leaves_zero() {
    let mut value = big("-DEADBEEF");
    let moved = value.take();

    assert_eq!(moved, big("-DEADBEEF"));
    assert!(value.is_zero());
}

#[test]
fn bigint_clear_resets_to_zero() {
    let mut value = BigInt::nan();
    value.clear();
    assert!(value.is_zero());

    let mut value = big("123456789ABCDEF0123");
    value.clear();
    assert!(value.is_zero());
    assert_eq!(value.size(), 0);
}

#[test]
fn bigint_clone_is_independent() {
    let original = big("ABCDEF");
    let mut copy = original.clone();

    copy += int(1);

    assert_eq!(original, big("ABCDEF"));
    assert_eq!(copy, big("ABCDF0"));
}

#[test]
fn bigint_add_scenarios() {
    assert_eq!(int(3) + int(4), int(7));
    assert_eq!((int(3) + int(4)).to_string(), "7");
    assert_eq!(int(-3) + int(-4), int(-7));
    assert_eq!(int(-3) + int(4), int(1));
    assert_eq!(int(3) + int(-4), int(-1));
    assert_eq!(big("FF") + big("1"), big("100"));
}

#[test]
fn bigint_sub_scenarios() {
    assert_eq!(int(10) - int(3), int(7));
    assert_eq!(int(3) - int(10), int(-7));
    assert_eq!(int(-3) - int(-10), int(7));
    assert_eq!(int(-3) - int(10), int(-13));
    assert_eq!(int(3) - int(-10), int(13));
    assert_eq!(big("100") - big("1"), big("FF"));
}

#[test]
fn bigint_mul_scenarios() {
    assert_eq!(big("0x10") * big("0x10"), big("100"));
    assert_eq!((big("0x10") * big("0x10")).to_string(), "100");
    assert_eq!(int(-4) * int(5), int(-20));
    assert_eq!(int(4) * int(-5), int(-20));
    assert_eq!(int(-4) * int(-5), int(20));
    assert!((int(-4) * int(0)).is_zero());
}

#[test]
fn bigint_div_rem_scenarios() {
    assert_eq!(int(10) / int(3), int(3));
    assert_eq!((int(10) / int(3)).to_string(), "3");
    assert_eq!(int(10) % int(3), int(1));

    assert_eq!(int(-7) / int(2), int(-3));
    assert_eq!(int(-7) % int(2), int(-1));
    assert_eq!(int(7) / int(-2), int(-3));
    assert_eq!(int(7) % int(-2), int(1));
    assert_eq!(int(-7) / int(-2), int(3));
    assert_eq!(int(-7) % int(-2), int(-1));

    assert_eq!(int(2) / int(7), int(0));
    assert_eq!(int(2) % int(7), int(2));
}

#[test]
fn bigint_div_rem_matches_i64() {
    let values = [-1000, -257, -256, -17, -1, 1, 3, 16, 255, 256, 4096, 99_999];

    for &a in &values {
        for &b in &values {
            let (q, r) = int(a).div_rem(&int(b));

            assert_eq!(q, int(a / b), "{a} / {b}");
            assert_eq!(r, int(a % b), "{a} % {b}");
        }
    }
}

#[test]
fn bigint_division_by_zero_is_nan() {
    assert!((int(5) / int(0)).is_nan());
    assert!((int(5) % int(0)).is_nan());
    assert!((int(0) / int(0)).is_nan());
    assert!((int(-5) % BigInt::zero()).is_nan());

    let (q, r) = int(9).div_rem(&BigInt::zero());
    assert!(q.is_nan());
    assert!(r.is_nan());
}

#[test]
fn bigint_negation() {
    assert_eq!(-int(-1), int(1));
    assert_eq!((-int(-1)).to_string(), "1");
    assert_eq!(-&big("FF"), big("-FF"));
    assert_eq!((-big("FF")).to_string(), "-FF");
    assert_eq!(int(12).negate(), int(-12));
    assert_eq!(int(-12).abs(), int(12));
    assert!((-BigInt::nan()).is_nan());
}

#[test]
fn bigint_nan_poisons_arithmetic() {
    let nan = BigInt::nan();
    let one = int(1);

    assert!((&nan + &one).is_nan());
    assert!((&one - &nan).is_nan());
    assert!((&nan * &one).is_nan());
    assert!((&one / &nan).is_nan());
    assert!((&nan % &one).is_nan());
    assert!((&nan * &BigInt::zero()).is_nan());
    assert!((!&nan).is_nan());
}

#[test]
fn bigint_compound_assignment() {
    let mut value = int(10);

    value += int(5);
    assert_eq!(value, int(15));

    value -= &int(20);
    assert_eq!(value, int(-5));

    value *= int(-3);
    assert_eq!(value, int(15));

    value /= int(4);
    assert_eq!(value, int(3));

    value %= int(2);
    assert_eq!(value, int(1));

    value /= int(0);
    assert!(value.is_nan());

    value += int(1);
    assert!(value.is_nan());
}

#[test]
fn bigint_ordering() {
    assert!(int(-5) < int(3));
    assert!(int(3) > int(-5));
    assert!(int(-5) < int(-3));
    assert!(int(-300) < int(-3));
    assert!(int(3) < int(300));
    assert!(int(0) < int(1));
    assert!(int(-1) < int(0));
    assert!(int(7) <= int(7));
    assert!(int(7) >= int(7));
    assert!(int(7) != int(8));
    assert!(int(-7) != int(7));
    assert!(big("-0") == big("0"));
}

#[test]
fn bigint_nan_compares_false() {
    let nan = BigInt::nan();
    let one = int(1);

    assert!(!(nan == nan));
    assert!(!(nan != nan));
    assert!(!(nan < one));
    assert!(!(nan <= one));
    assert!(!(nan > one));
    assert!(!(nan >= one));
    assert!(!(one == nan));
    assert!(!(one != nan));
    assert!(nan.partial_cmp(&one).is_none());
}

#[test]
fn bigint_comparison_results_as_values() {
    let less = BigInt::from(int(2) < int(3));
    let not_less = BigInt::from(int(3) < int(2));

    assert_eq!(less, int(1));
    assert!(not_less.is_zero());
}

#[test]
fn bigint_large_product_and_quotient() {
    // (2^2048 - 1) * (2^2048 + 1) == 2^4096 - 1
    let one = int(1);
    let power = BigInt::from_le_bytes(false, &{
        let mut bytes = vec![0u8; 256];
        bytes.push(1);
        bytes
    });

    let lhs = &power - &one;
    let rhs = &power + &one;
    let product = &lhs * &rhs;

    assert_eq!(product.size(), 512);
    assert_eq!(product.to_string(), "F".repeat(1024));

    assert_eq!(&product / &rhs, lhs);
    assert!((&product % &rhs).is_zero());
}

#[test]
fn bigint_print_writes_line() {
    let mut out = Vec::new();

    big("-1A").print(&mut out).unwrap();
    BigInt::zero().print(&mut out).unwrap();
    BigInt::nan().print(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "-1A\n0\nNaN\n");
}
