#![no_main]

use libfuzzer_sys::fuzz_target;

use fibo_core::calculator::{calculate, Request};
use fibo_core::fastdoubling::FastDoubling;
use fibo_core::iterative::IterativeReference;
use fibo_core::progress::Silent;
use fibo_core::stop::StopToken;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // The linear reference bounds n.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 10_000;

    let stop = StopToken::new();
    let req = Request::new(n, &stop, &Silent);

    if let (Ok(f), Ok(r)) = (
        calculate(&FastDoubling, &req),
        calculate(&IterativeReference, &req),
    ) {
        assert_eq!(f, r, "FastDoubling != Iterative at n={n}");
    }
});
