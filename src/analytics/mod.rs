//! Graph analytics: structural classification and tour construction.
//!
//! - [`properties`] - Connectivity, bipartiteness, regularity,
//!   completeness predicates
//! - [`eulerian`] - Eulerian circuit/path classification and
//!   Hierholzer circuit extraction
//! - [`hamiltonian`] - Approximate Hamiltonian path via a
//!   traveling-salesman heuristic

pub mod eulerian;
pub mod hamiltonian;
pub mod properties;

pub use eulerian::{classify_eulerian, eulerian_circuit, EulerianClass, EulerianClassification};
pub use hamiltonian::{approximate_hamiltonian_path, HamiltonianTour};
pub use properties::{
    is_bipartite, is_complete, is_connected, is_regular, summarize, StructuralSummary,
};
