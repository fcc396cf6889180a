#[macro_use]
extern crate criterion;
extern crate libbigint;

use criterion::Criterion;
use libbigint::{multiply, BigInt};

macro_rules! bench_bigint_mul {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = BigInt::from_digits(&String::from_utf8(vec![b'9'; $size]).unwrap()).unwrap();
            let v = BigInt::from_digits(&String::from_utf8(vec![b'8'; $size]).unwrap()).unwrap();
            c.bench_function(concat!("BigInt_", $size, "_mul"), |b| {
                b.iter(|| multiply(&u, &v))
            });
        }
    )*
    }
}

bench_bigint_mul! {
    size_64: 64
    size_256: 256
    size_1024: 1024
}

criterion_group!(mul_benches, size_64, size_256, size_1024);
criterion_main!(mul_benches);
