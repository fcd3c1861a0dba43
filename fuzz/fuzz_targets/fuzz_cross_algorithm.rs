#![no_main]

use libfuzzer_sys::fuzz_target;

use primecalc_core::fast::FastPrimeFinder;
use primecalc_core::finder::PrimeFinder;
use primecalc_core::slow::SlowPrimeFinder;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First two bytes pick the limit, next two the count; capped for the slow finder
    let max_int = u64::from(u16::from_le_bytes([data[0], data[1]])) % 5_000;
    let num_primes = usize::from(u16::from_le_bytes([data[2], data[3]])) % 1_000;

    let slow = SlowPrimeFinder::new().find(max_int, num_primes);
    let fast = FastPrimeFinder::new().find(max_int, num_primes);

    assert_eq!(slow, fast, "slow != fast at max_int={max_int} num_primes={num_primes}");
    assert!(fast.len() <= num_primes);
    assert!(fast.windows(2).all(|w| w[0] < w[1]));
    assert!(fast.last().map_or(true, |&p| p <= max_int));
});
