//! Unabhängige, reproduzierbare Zufallsströme.
//!
//! Jede Strecken-Generierung besitzt ihren eigenen [`RandomStream`]. Ströme
//! werden über eine [`RandomStreamFactory`] erzeugt: Basiswert (Uhrzeit oder
//! fest) plus atomarer Zähler. Es gibt keinen thread-lokalen oder globalen
//! Generator.

use rand::Rng;
use rand_pcg::Pcg32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Quelle für Zufallszahlen eines einzelnen Generierungslaufs.
pub trait RandomSource {
    /// Gleichverteilte Zahl in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Gleichverteilte Ganzzahl in `[0, bound)`. Bei `bound == 0` immer `0`.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }
}

/// PCG32-Strom, exklusiv von einem Lauf benutzt (`&mut`-Zugriff).
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: Pcg32,
    seed: u64,
}

impl RandomStream {
    /// Erstellt einen Strom aus einem Seed.
    ///
    /// Der Seed bestimmt Startzustand und PCG-Stream-Selektor, zwei
    /// verschiedene Seeds teilen sich also nie dieselbe Sequenz.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(splitmix64(seed), seed),
            seed,
        }
    }

    /// Seed, mit dem dieser Strom erzeugt wurde (für Logging/Replay).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RandomStream {
    fn next_double(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_int(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Thread-sichere Fabrik für unabhängige Ströme.
///
/// Strom `k` erhält den Seed `base + k`. Der Zähler ist atomar, parallele
/// Aufrufer blockieren sich nicht gegenseitig.
#[derive(Debug)]
pub struct RandomStreamFactory {
    base: u64,
    counter: AtomicU64,
}

impl RandomStreamFactory {
    /// Fabrik mit Basiswert aus der Systemzeit.
    pub fn new() -> Self {
        let base = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_base(base)
    }

    /// Fabrik mit festem Basiswert (reproduzierbare Batches).
    pub fn with_base(base: u64) -> Self {
        Self {
            base,
            counter: AtomicU64::new(0),
        }
    }

    /// Basiswert der Fabrik.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Liefert den nächsten Seed, ohne einen Strom zu erzeugen.
    pub fn next_seed(&self) -> u64 {
        let k = self.counter.fetch_add(1, Ordering::Relaxed);
        self.base.wrapping_add(k)
    }

    /// Erzeugt den nächsten unabhängigen Strom.
    pub fn next_stream(&self) -> RandomStream {
        RandomStream::from_seed(self.next_seed())
    }
}

impl Default for RandomStreamFactory {
    fn default() -> Self {
        Self::new()
    }
}

// Verteilt benachbarte Seeds (base, base+1, ...) über den ganzen Zustandsraum.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
