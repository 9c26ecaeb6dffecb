//! Force-directed (spring-embedder) 3D layout.
//!
//! A Fruchterman-Reingold style relaxation: all node pairs repel, edge
//! endpoints attract proportionally to edge weight, and a temperature
//! cap on per-step displacement cools linearly so positions settle.
//! The only stochastic layout in the engine: initial positions are
//! random, so results differ across runs unless a seed is fixed with
//! [`ForceLayout::with_seed`].

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::store::{Graph, NodeId};

use super::{Point3, Positions};

/// Configuration and entry point for the force-directed layout.
///
/// # Example
///
/// ```
/// use neurographis::layout::ForceLayout;
/// use neurographis::store::Graph;
///
/// let graph = Graph::sample();
/// let positions = ForceLayout::new()
///     .with_iterations(80)
///     .with_seed(7)
///     .run(&graph);
/// assert_eq!(positions.len(), graph.node_count());
/// ```
#[derive(Debug, Clone)]
pub struct ForceLayout {
    /// Number of relaxation iterations.
    /// Default: 50
    iterations: usize,
    /// Initial temperature: the maximum displacement per iteration,
    /// decayed linearly to zero.
    /// Default: 0.1
    temperature: f64,
    /// Seed for the initial random placement. `None` seeds from
    /// entropy, making the result non-deterministic across runs.
    /// Default: None
    seed: Option<u64>,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self { iterations: 50, temperature: 0.1, seed: None }
    }
}

impl ForceLayout {
    /// Create a layout with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of relaxation iterations.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the initial temperature (maximum per-step displacement).
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Fix the random seed so repeated runs produce identical layouts.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Relax the graph to an equilibrium layout.
    ///
    /// Positions are rescaled to fit [-1, 1] on every axis. An empty
    /// graph yields an empty position list.
    #[must_use]
    pub fn run(&self, graph: &Graph) -> Positions {
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let n = nodes.len();
        if n == 0 {
            return Vec::new();
        }

        tracing::debug!(nodes = n, iterations = self.iterations, "running force layout");

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut positions: Vec<Point3> = (0..n)
            .map(|_| {
                Point3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
            })
            .collect();

        if n == 1 {
            return vec![(nodes[0], Point3::default())];
        }

        let index: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let edges: Vec<(usize, usize, f64)> = graph
            .edges()
            .map(|e| (index[&e.source], index[&e.target], e.weight))
            .collect();
        let max_weight = edges.iter().map(|&(_, _, w)| w.abs()).fold(1.0, f64::max);

        // Ideal pairwise distance for n nodes in a unit-ish volume.
        let k = (1.0 / n as f64).cbrt();

        for iteration in 0..self.iterations {
            let mut displacement = vec![Point3::default(); n];

            // Repulsion between every node pair.
            for i in 0..n {
                for j in (i + 1)..n {
                    let (dx, dy, dz) = delta(positions[i], positions[j]);
                    let distance = (dx * dx + dy * dy + dz * dz).sqrt().max(1e-6);
                    let force = k * k / distance;
                    let (ux, uy, uz) = (dx / distance, dy / distance, dz / distance);
                    displacement[i].x += ux * force;
                    displacement[i].y += uy * force;
                    displacement[i].z += uz * force;
                    displacement[j].x -= ux * force;
                    displacement[j].y -= uy * force;
                    displacement[j].z -= uz * force;
                }
            }

            // Attraction along edges, scaled by relative weight.
            for &(i, j, weight) in &edges {
                let (dx, dy, dz) = delta(positions[i], positions[j]);
                let distance = (dx * dx + dy * dy + dz * dz).sqrt().max(1e-6);
                let force = distance * distance / k * (weight.abs() / max_weight);
                let (ux, uy, uz) = (dx / distance, dy / distance, dz / distance);
                displacement[i].x -= ux * force;
                displacement[i].y -= uy * force;
                displacement[i].z -= uz * force;
                displacement[j].x += ux * force;
                displacement[j].y += uy * force;
                displacement[j].z += uz * force;
            }

            // Linear cooling caps the step size.
            let temperature = self.temperature
                * (1.0 - iteration as f64 / self.iterations.max(1) as f64);
            for i in 0..n {
                let step = displacement[i];
                let magnitude = step.norm().max(1e-12);
                let capped = magnitude.min(temperature);
                positions[i].x += step.x / magnitude * capped;
                positions[i].y += step.y / magnitude * capped;
                positions[i].z += step.z / magnitude * capped;
            }
        }

        rescale(&mut positions);
        nodes.into_iter().zip(positions).collect()
    }
}

fn delta(a: Point3, b: Point3) -> (f64, f64, f64) {
    (a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Rescale positions so the largest coordinate magnitude is 1.
fn rescale(positions: &mut [Point3]) {
    let max = positions
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs(), p.z.abs()])
        .fold(0.0, f64::max);
    if max > 0.0 {
        for p in positions.iter_mut() {
            p.x /= max;
            p.y /= max;
            p.z /= max;
        }
    }
}
