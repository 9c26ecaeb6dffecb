//! `NeuroGraphis` Engine
//!
//! This crate provides the analysis core for weighted undirected graphs:
//! shortest paths, minimum spanning trees, Eulerian and Hamiltonian
//! structure, structural predicates, matrix representations, and 3D
//! layout generation.
//!
//! The engine is a synchronous, in-process library. A host application
//! owns a mutable [`store::Graph`]; every analysis module borrows it
//! immutably, runs to completion, and returns a plain result value.
//! No module mutates the store, performs I/O, or holds state across
//! calls (the layout cache is the one explicit, version-keyed
//! exception).
//!
//! # Modules
//!
//! - [`store`] - The weighted undirected graph container and error types
//! - [`traversal`] - BFS reachability and Dijkstra shortest paths
//! - [`spanning`] - Kruskal and Prim minimum spanning trees
//! - [`analytics`] - Eulerian/Hamiltonian analysis and structural predicates
//! - [`matrix`] - Adjacency, incidence, and Laplacian matrices plus spectra
//! - [`layout`] - Deterministic and force-directed 3D layouts
//! - [`interchange`] - JSON node/edge document serialization

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod interchange;
pub mod layout;
pub mod matrix;
pub mod spanning;
pub mod store;
pub mod traversal;

pub use store::{Edge, Graph, GraphError, GraphResult, NodeId, Warning};
