#[macro_use]
extern crate criterion;
extern crate lazy_static;
extern crate libbigint;

use criterion::Criterion;
use lazy_static::lazy_static;
use libbigint::{add, BigInt};

fn bg(input: &str) -> BigInt {
    BigInt::from_digits(input).unwrap()
}

lazy_static! {
    static ref INPUT: [(BigInt, BigInt); 4] = [
        (bg("99999999999999999999999999999999"), bg("999999999999999999999")),
        (bg("555555555555555555555555555"), bg("-555555555555555555")),
        (bg("-99999999999999999999999999"), bg("9999999999999999")),
        (bg("-99999999999999999999999999"), bg("-9999999999999999")),
    ];
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                add(u, v);
            }
        })
    });
}

macro_rules! bench_bigint_add {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = BigInt::from_digits(&String::from_utf8(vec![b'9'; $size]).unwrap()).unwrap();
            let v = BigInt::from_digits(&String::from_utf8(vec![b'7'; $size]).unwrap()).unwrap();
            c.bench_function(concat!("BigInt_", $size, "_add"), |b| {
                b.iter(|| add(&u, &v))
            });
        }
    )*
    }
}

bench_bigint_add! {
    size_1024: 1024
    size_4096: 4096
}

criterion_group!(add_benches, bench_add, size_1024, size_4096);
criterion_main!(add_benches);
