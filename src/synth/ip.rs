//! Random IPv4 addresses.

use std::net::Ipv4Addr;

use rand::Rng;

/// Generates one address with non-zero first and last octets.
pub fn generate_fake_ip<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    Ipv4Addr::new(
        rng.gen_range(1..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=255),
    )
}

/// Generates `count` addresses.
pub fn ipgen<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Ipv4Addr> {
    (0..count).map(|_| generate_fake_ip(rng)).collect()
}
