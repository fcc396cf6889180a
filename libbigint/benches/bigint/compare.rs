#[macro_use]
extern crate criterion;
extern crate libbigint;

use criterion::Criterion;
use libbigint::BigInt;

macro_rules! bench_bigint_cmp {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = BigInt::from_digits(&String::from_utf8(vec![b'9'; $size]).unwrap()).unwrap();
            let v = BigInt::from_digits(&String::from_utf8(vec![b'5'; $size]).unwrap()).unwrap();
            let w = -&v;
            let cases = [("eq", &u, &u), ("lt", &v, &u), ("gt", &u, &v), ("neg", &u, &w)];
            for (case, lhs, rhs) in cases.iter() {
                c.bench_function(&(concat!("BigInt_", $size, "_cmp_").to_string() + *case), |b| {
                    b.iter(|| lhs.cmp(rhs))
                });
            }
        }
    )*
    }
}

bench_bigint_cmp! {
    size_1024: 1024
    size_2048: 2048
    size_4096: 4096
}

criterion_group!(bigint_cmp_benches, size_1024, size_2048, size_4096);
criterion_main!(bigint_cmp_benches);
