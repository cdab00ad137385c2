//! # swc-rs — SWC Neuron Morphology Reader/Writer
//!
//! Parses and generates SWC, the line-oriented format for neuron traces:
//! a rooted forest of 3D points with radii, one point per line.
//!
//! ```text
//! # comment
//!  id type x y z radius parent
//! ```
//!
//! ## Design Principles
//!
//! 1. **Plain data**: `Graph`, `Vertex`, `Edge` are DTOs with no behavior
//! 2. **No globals**: each `Parser` / `Generator` owns its diagnostic buffer
//! 3. **Partial results are visible**: a failed parse keeps what it read
//! 4. **Repair on write**: conflicting parents are reconciled by the generator,
//!    the graph itself is never modified
//!
//! ## Quick Start
//!
//! ```rust
//! use swc_rs::{Generator, Graph, Parser};
//!
//! # fn example() -> swc_rs::Result<()> {
//! let mut parser = Parser::new();
//! let mut graph = Graph::new();
//! parser.parse_str("1 1 0 0 0 1 -1\n2 3 1 1 1 0.5 1\n", &mut graph)?;
//! assert_eq!(graph.root_ids, vec![1]);
//!
//! let text = Generator::new().generate(&graph);
//! assert_eq!(text, " 1 1 0 0 0 1 -1\n 2 3 1 1 1 0.5 1\n");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod swc;
pub mod export;
pub mod io;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Vertex, VertexKind, VertexType, Edge, Graph};
pub use swc::{Field, Parser};
pub use export::{Generator, GeneratorConfig, Reconciliation};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Can not open file: {}", .path.display())]
    CannotOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error at line {line}: unexpected symbol {symbol:?}")]
    Syntax { line: usize, symbol: char },

    #[error("Syntax error at line {line}: wrong {field}")]
    Field { line: usize, field: Field },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
