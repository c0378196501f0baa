//! Synthetic data for the `ipgen` and `faker` commands.

mod identity;
mod ip;

use std::net::Ipv4Addr;

pub use identity::{
    FakeIdentity, aba_check_digit, generate_identity, is_valid_routing_number, routing_number,
};
pub use ip::{generate_fake_ip, ipgen};

/// Source of fake data for the dispatcher.
pub trait Synthesizer: Send + Sync {
    /// Generates `count` random IPv4 addresses.
    fn fake_ips(&self, count: usize) -> Vec<Ipv4Addr>;

    /// Generates one synthetic identity.
    fn fake_identity(&self) -> FakeIdentity;
}

/// [`Synthesizer`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSynthesizer;

impl Synthesizer for RandomSynthesizer {
    fn fake_ips(&self, count: usize) -> Vec<Ipv4Addr> {
        ipgen(&mut rand::thread_rng(), count)
    }

    fn fake_identity(&self) -> FakeIdentity {
        generate_identity(&mut rand::thread_rng())
    }
}
