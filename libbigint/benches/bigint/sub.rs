#[macro_use]
extern crate criterion;
extern crate lazy_static;
extern crate libbigint;

use criterion::Criterion;
use lazy_static::lazy_static;
use libbigint::{subtract, BigInt};

fn bg(input: &str) -> BigInt {
    BigInt::from_digits(input).unwrap()
}

lazy_static! {
    static ref INPUT: [(BigInt, BigInt); 4] = [
        (bg("99999999999999999999999999999999"), bg("999999999999999999999")),
        (bg("555555555555555555"), bg("555555555555555555555555555")),
        (bg("-99999999999999999999999999"), bg("9999999999999999")),
        (bg("-99999999999999999999999999"), bg("-9999999999999999")),
    ];
}

fn bench_sub(c: &mut Criterion) {
    c.bench_function("sub", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                subtract(u, v);
            }
        })
    });
}

macro_rules! bench_bigint_sub {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = BigInt::from_digits(&String::from_utf8(vec![b'1'; $size]).unwrap()).unwrap();
            let v = BigInt::from_digits(&String::from_utf8(vec![b'9'; $size - 1]).unwrap()).unwrap();
            c.bench_function(concat!("BigInt_", $size, "_sub"), |b| {
                b.iter(|| subtract(&u, &v))
            });
        }
    )*
    }
}

bench_bigint_sub! {
    size_1024: 1024
    size_4096: 4096
}

criterion_group!(sub_benches, bench_sub, size_1024, size_4096);
criterion_main!(sub_benches);
