#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibo_core::doubling::fib_with;
use fibo_core::strategy::{ParallelStep, SequentialStep};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // n below 2^16, operands small enough to stay fast.
    let n = u64::from(u16::from_le_bytes([data[0], data[1]]));

    let a: BigUint = fib_with(n, &SequentialStep, true);
    let b: BigUint = fib_with(n + 1, &SequentialStep, false);
    let c: BigUint = fib_with(n + 2, &ParallelStep::new(64), true);

    assert_eq!(&a + &b, c, "F(n) + F(n+1) != F(n+2) at n={n}");
});
