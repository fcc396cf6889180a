#![no_main]
use libfuzzer_sys::fuzz_target;

use libbigint::BigInt;

fuzz_target!(|input: String| {
    let value = match BigInt::from_digits(&input) {
        Ok(value) => value,
        Err(_) => return,
    };
    let rendered = value.to_string();
    assert_eq!(BigInt::from_digits(&rendered).as_ref(), Ok(&value));
    assert_eq!(&(&value - &value), &BigInt::default());
    assert_eq!(-(-&value), value);
    if let Ok(n) = value.get_value::<i64>() {
        assert_eq!(rendered, n.to_string());
        let n = n as i128;
        assert_eq!(&value * &value, BigInt::from(n * n));
        assert_eq!(&value + &value, BigInt::from(n + n));
    }
});
