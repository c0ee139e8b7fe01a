use rand::{rngs::SmallRng, SeedableRng};

/// Component drawing from a random stream. Components seeded with the same
/// value still get unrelated streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Bandit,
    Policy,
}

impl Stream {
    fn salt(self) -> u64 {
        match self {
            Stream::Bandit => 0x9e37_79b9_7f4a_7c15,
            Stream::Policy => 0xd1b5_4a32_d192_ed03,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    pub seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>, stream: Stream) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed ^ stream.salt())
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
