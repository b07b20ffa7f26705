//! Random graph generation
//!
//! The random source is always passed in, so a seeded `StdRng` reproduces
//! the same graph for the same spec.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{GraphStore, VertexId, Weight};

/// Inclusive weight range before optional negation
pub const MIN_WEIGHT: Weight = 1;
pub const MAX_WEIGHT: Weight = 10;

/// Shape of a random graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGraphSpec {
    pub vertex_count: usize,
    /// Fraction of the `vertex_count²` ordered pairs that carry an edge
    pub density: f64,
    /// Negate each weight with probability 1/2
    pub allow_negative: bool,
}

impl RandomGraphSpec {
    pub fn new(vertex_count: usize, density: f64, allow_negative: bool) -> Self {
        Self {
            vertex_count,
            density,
            allow_negative,
        }
    }

    /// Number of edges the generator places: `floor(density * V²)`
    pub fn edge_target(&self) -> usize {
        let cells = self.vertex_count.saturating_mul(self.vertex_count);
        ((cells as f64 * self.density) as usize).min(cells)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            bail_invalid!("density (expected 0.0..=1.0)", self.density);
        }
        if self.vertex_count.checked_mul(self.vertex_count).is_none() {
            bail_invalid!("vertex count (matrix size overflows)", self.vertex_count);
        }
        Ok(())
    }
}

/// Generate a graph with exactly `spec.edge_target()` distinct edges.
///
/// The occupied cells are picked by shuffling a mask of all ordered pairs
/// (self-loops included). Weights are uniform in `MIN_WEIGHT..=MAX_WEIGHT`.
/// With `allow_negative`, a negated weight is flipped back to positive when
/// it would close an obvious negative cycle: a negative self-loop, or a
/// negative `u -> v` whose already-placed reverse `v -> u` is negative too.
/// Longer negative cycles are still possible.
#[tracing::instrument(skip(rng))]
pub fn generate<G, R>(spec: &RandomGraphSpec, rng: &mut R) -> Result<G>
where
    G: GraphStore,
    R: Rng + ?Sized,
{
    spec.validate()?;

    let n = spec.vertex_count;
    let mut mask = vec![false; n * n];
    for cell in mask.iter_mut().take(spec.edge_target()) {
        *cell = true;
    }
    mask.shuffle(rng);

    let mut placed: Vec<Option<Weight>> = vec![None; n * n];
    let mut graph = G::with_vertices(n)?;

    for from in 0..n {
        for to in 0..n {
            if !mask[from * n + to] {
                continue;
            }
            let weight = random_weight(spec, from, to, &placed, rng);
            placed[from * n + to] = Some(weight);
            graph.set_edge(from, to, weight)?;
        }
    }

    Ok(graph)
}

fn random_weight<R: Rng + ?Sized>(
    spec: &RandomGraphSpec,
    from: VertexId,
    to: VertexId,
    placed: &[Option<Weight>],
    rng: &mut R,
) -> Weight {
    let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
    if !spec.allow_negative || !rng.gen_bool(0.5) {
        return weight;
    }

    let reverse = placed[to * spec.vertex_count + from];
    let closes_cycle = from == to || reverse.is_some_and(|w| w < 0);
    if closes_cycle {
        weight
    } else {
        -weight
    }
}

/// Pick a uniformly random source vertex
pub fn random_source<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Result<VertexId> {
    if vertex_count == 0 {
        bail_invalid!("vertex count", vertex_count);
    }
    Ok(rng.gen_range(0..vertex_count))
}
