//! 3D layout generation for visualization.
//!
//! The sphere, spiral, and grid layouts are closed-form: pure
//! functions of the ordered node list and node count, with no
//! iteration or randomness. The force-directed layout
//! ([`force::ForceLayout`]) is the one iterative, stochastic layout;
//! it is deterministic only under a fixed seed.
//!
//! Positions are returned as `(NodeId, Point3)` pairs in ascending
//! node order; the engine computes coordinates only, rendering is the
//! caller's concern.

pub mod cache;
pub mod force;

use serde::{Deserialize, Serialize};

use crate::store::{Graph, NodeId};

pub use cache::LayoutCache;
pub use force::ForceLayout;

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Which layout to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Golden-angle distribution over the unit sphere surface.
    Sphere,
    /// Three-turn parametric spiral.
    Spiral,
    /// Implicit cubic grid.
    Grid,
    /// Spring-embedder force layout with default parameters.
    Force,
}

/// Positions of all nodes, ascending by identifier.
pub type Positions = Vec<(NodeId, Point3)>;

/// Compute the requested layout for `graph`.
///
/// [`LayoutKind::Force`] runs [`ForceLayout`] with default parameters
/// and no fixed seed; use the builder directly for reproducible runs.
#[must_use]
pub fn compute_layout(graph: &Graph, kind: LayoutKind) -> Positions {
    match kind {
        LayoutKind::Sphere => sphere_layout(graph),
        LayoutKind::Spiral => spiral_layout(graph),
        LayoutKind::Grid => grid_layout(graph),
        LayoutKind::Force => ForceLayout::new().run(graph),
    }
}

/// Distribute nodes over the unit sphere surface along a
/// golden-angle (Fibonacci) spiral, approximating uniform density.
#[must_use]
pub fn sphere_layout(graph: &Graph) -> Positions {
    let n = graph.node_count();
    // Golden angle in radians.
    let phi = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());

    graph
        .nodes()
        .enumerate()
        .map(|(i, node)| {
            let y = if n > 1 { 1.0 - (i as f64 / (n - 1) as f64) * 2.0 } else { 0.0 };
            let radius = (1.0 - y * y).max(0.0).sqrt();
            let theta = phi * i as f64;
            (node, Point3::new(theta.cos() * radius, y, theta.sin() * radius))
        })
        .collect()
}

/// Place nodes along a three-turn spiral: radius grows linearly with
/// index from 0.5 to 1.0, height spans [-1, 1].
#[must_use]
pub fn spiral_layout(graph: &Graph) -> Positions {
    let n = graph.node_count().max(1) as f64;

    graph
        .nodes()
        .enumerate()
        .map(|(i, node)| {
            let fraction = i as f64 / n;
            let t = fraction * 2.0 * std::f64::consts::PI * 3.0;
            let r = 0.5 + fraction * 0.5;
            (node, Point3::new(r * t.cos(), r * t.sin(), fraction * 2.0 - 1.0))
        })
        .collect()
}

/// Place nodes on an implicit cubic grid of side `floor(n^(1/3)) + 1`,
/// coordinates in [-1, 1) per axis.
#[must_use]
pub fn grid_layout(graph: &Graph) -> Positions {
    let n = graph.node_count();
    let dim = (n as f64).powf(1.0 / 3.0) as usize + 1;
    let scale = dim as f64;

    graph
        .nodes()
        .enumerate()
        .map(|(i, node)| {
            let x = (i % dim) as f64 / scale * 2.0 - 1.0;
            let y = ((i / dim) % dim) as f64 / scale * 2.0 - 1.0;
            let z = (i / (dim * dim)) as f64 / scale * 2.0 - 1.0;
            (node, Point3::new(x, y, z))
        })
        .collect()
}
