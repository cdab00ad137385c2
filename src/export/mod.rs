//! SWC export — serialize a [`Graph`] as canonical SWC text.
//!
//! ```text
//! Graph → comment lines → reconcile edges → one data line per vertex
//! ```
//!
//! Output always uses a single leading space and single-space separators,
//! whatever the spacing of the document the graph was parsed from.

pub mod format;
pub mod reconcile;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::Graph;
use crate::Result;

pub use format::{format_general, format_shortest_f32, format_shortest_f64};
pub use reconcile::{reconcile, Reconciliation};

// ============================================================================
// Configuration
// ============================================================================

/// Numeric precision of the generated text.
///
/// `None` writes the shortest text that reads back to the exact stored
/// value. `Some(n)` writes `n` significant digits like `%.<n>g`, which is
/// lossy for values needing more digits (`Some(15)`/`Some(7)` reproduce the
/// classic SWC writer byte for byte).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Significant digits for x, y and z.
    pub coordinate_precision: Option<usize>,
    /// Significant digits for the radius.
    pub radius_precision: Option<usize>,
}

impl GeneratorConfig {
    fn coordinate(&self, value: f64) -> String {
        match self.coordinate_precision {
            Some(precision) => format_general(value, precision),
            None => format_shortest_f64(value),
        }
    }

    fn radius(&self, value: f32) -> String {
        match self.radius_precision {
            Some(precision) => format_general(f64::from(value), precision),
            None => format_shortest_f32(value),
        }
    }
}

// ============================================================================
// Generator
// ============================================================================

/// SWC writer with a per-instance diagnostic buffer.
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
    pub(crate) message: String,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config, message: String::new() }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Diagnostics produced by the most recent call.
    ///
    /// Holds one `Loop detected!` line per conflict that could not be
    /// reconciled. Those are not errors: the text is still generated.
    pub fn error_message(&self) -> &str {
        &self.message
    }

    /// Render `graph` as SWC text.
    pub fn generate(&mut self, graph: &Graph) -> String {
        self.message.clear();

        let mut out = String::with_capacity(graph.vertices.len() * 48);
        for entry in &graph.meta {
            out.push('#');
            out.push_str(entry);
            out.push('\n');
        }

        let resolved = reconcile(&graph.edges);
        for &start in &resolved.loops {
            self.message.push_str("Loop detected!\n");
            warn!(child = start, "loop detected while reconciling parent conflicts");
        }

        let config = self.config;
        for vertex in &graph.vertices {
            let parent = resolved.parent_of(vertex.id).unwrap_or(-1);
            let _ = writeln!(
                out,
                " {} {} {} {} {} {} {}",
                vertex.id,
                vertex.vertex_type,
                config.coordinate(vertex.x),
                config.coordinate(vertex.y),
                config.coordinate(vertex.z),
                config.radius(vertex.radius),
                parent,
            );
        }

        debug!(
            vertices = graph.vertices.len(),
            meta = graph.meta.len(),
            conflicts = resolved.conflicts,
            loops = resolved.loops.len(),
            "generated SWC document"
        );
        out
    }

    /// Render `graph` and write the whole text to `out`.
    ///
    /// Fails only if the sink does.
    pub fn write<W: std::io::Write + ?Sized>(&mut self, out: &mut W, graph: &Graph) -> Result<()> {
        let text = self.generate(graph);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Render a graph with the default configuration.
pub fn to_swc_string(graph: &Graph) -> String {
    Generator::new().generate(graph)
}
