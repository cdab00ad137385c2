//! Vertex (sample point) of an SWC trace.

use serde::{Deserialize, Serialize};

/// Structure identifiers with a standard meaning in SWC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKind {
    Undefined,
    Soma,
    Axon,
    Dendrite,
    ApicalDendrite,
    ForkPoint,
    EndPoint,
    Custom,
}

impl VertexKind {
    pub fn code(self) -> i64 {
        match self {
            VertexKind::Undefined => 0,
            VertexKind::Soma => 1,
            VertexKind::Axon => 2,
            VertexKind::Dendrite => 3,
            VertexKind::ApicalDendrite => 4,
            VertexKind::ForkPoint => 5,
            VertexKind::EndPoint => 6,
            VertexKind::Custom => 7,
        }
    }
}

/// Raw structure identifier of a vertex.
///
/// The format tolerates codes outside the standard table, so the raw code is
/// what gets stored. [`VertexType::kind`] maps it onto [`VertexKind`] when the
/// code is one of the known ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexType(pub i64);

impl VertexType {
    pub const UNDEFINED: VertexType = VertexType(0);
    pub const SOMA: VertexType = VertexType(1);
    pub const AXON: VertexType = VertexType(2);
    pub const DENDRITE: VertexType = VertexType(3);
    pub const APICAL_DENDRITE: VertexType = VertexType(4);
    pub const FORK_POINT: VertexType = VertexType(5);
    pub const END_POINT: VertexType = VertexType(6);
    pub const CUSTOM: VertexType = VertexType(7);

    pub fn code(self) -> i64 {
        self.0
    }

    /// The named kind, or `None` for a non-standard code.
    pub fn kind(self) -> Option<VertexKind> {
        match self.0 {
            0 => Some(VertexKind::Undefined),
            1 => Some(VertexKind::Soma),
            2 => Some(VertexKind::Axon),
            3 => Some(VertexKind::Dendrite),
            4 => Some(VertexKind::ApicalDendrite),
            5 => Some(VertexKind::ForkPoint),
            6 => Some(VertexKind::EndPoint),
            7 => Some(VertexKind::Custom),
            _ => None,
        }
    }
}

impl From<VertexKind> for VertexType {
    fn from(kind: VertexKind) -> Self {
        VertexType(kind.code())
    }
}

impl From<i64> for VertexType {
    fn from(code: i64) -> Self {
        VertexType(code)
    }
}

impl std::fmt::Display for VertexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sample point: position, radius and structure type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: i64,
    pub vertex_type: VertexType,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f32,
    /// Scratch flag for traversals done by consumers.
    #[serde(default)]
    pub visited: bool,
}

impl Vertex {
    pub fn new(id: i64, vertex_type: impl Into<VertexType>, x: f64, y: f64, z: f64, radius: f32) -> Self {
        Self {
            id,
            vertex_type: vertex_type.into(),
            x,
            y,
            z,
            radius,
            visited: false,
        }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn kind(&self) -> Option<VertexKind> {
        self.vertex_type.kind()
    }
}
