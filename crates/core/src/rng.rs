//! RNG module - piece selection sources
//!
//! The engine asks a [`PieceSource`] for every new piece. The default source is
//! a seeded LCG drawing each kind uniformly and independently (no bag, no
//! lookahead). Tests and demos can script exact sequences with
//! [`SequenceSource`].

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG with a power-of-two modulus
    /// have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// Create a source that yields `kinds` in order, then repeats
    ///
    /// An empty list yields `PieceKind::I` forever.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            index: 0,
        }
    }

    /// A source that always yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// How many kinds have been handed out
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_hits_every_kind() {
        let mut rng = SimpleRng::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = rng.next_kind();
            let i = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[i] += 1;
        }
        // Expected 1000 each; allow a wide margin
        for (i, &c) in counts.iter().enumerate() {
            assert!(c > 700 && c < 1300, "kind {} drawn {} times", i, c);
        }
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut src = SequenceSource::new([PieceKind::I, PieceKind::O]);
        assert_eq!(src.next_kind(), PieceKind::I);
        assert_eq!(src.next_kind(), PieceKind::O);
        assert_eq!(src.next_kind(), PieceKind::I);
        assert_eq!(src.drawn(), 3);
    }

    #[test]
    fn test_sequence_source_empty_falls_back() {
        let mut src = SequenceSource::new(Vec::<PieceKind>::new());
        assert_eq!(src.next_kind(), PieceKind::I);
    }

    #[test]
    fn test_boxed_source() {
        let mut src: Box<dyn PieceSource> = Box::new(SequenceSource::repeat(PieceKind::Z));
        assert_eq!(src.next_kind(), PieceKind::Z);
    }
}
