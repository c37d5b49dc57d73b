//! Node identity across the mesh.

use std::collections::HashMap;

use nalgebra::Point2;

use crate::quadtree::NodeId;

/// Assigns one [`NodeId`] per distinct quantized coordinate.
///
/// Coordinates are quantized by rounding to a fixed epsilon before being
/// used as a lookup key, so two leaf cells registering the corner they share
/// resolve to the same node even when their corner arithmetic differs in the
/// last few bits. Ids are assigned lazily in first-seen order and never
/// change once assigned.
#[derive(Debug)]
pub struct NodeRegistry {
    positions: Vec<Point2<f64>>,
    index: HashMap<(i64, i64), NodeId>,
    quantization: f64,
}

impl NodeRegistry {
    /// Create an empty registry with the given quantization epsilon.
    pub fn new(quantization: f64) -> Self {
        Self {
            positions: Vec::new(),
            index: HashMap::new(),
            quantization,
        }
    }

    fn key(&self, position: &Point2<f64>) -> (i64, i64) {
        (
            (position.x / self.quantization).round() as i64,
            (position.y / self.quantization).round() as i64,
        )
    }

    /// Return the node id for a coordinate, registering it on first sight.
    ///
    /// The first position seen for a quantized key is the one recorded; later
    /// hits within the epsilon reuse it unchanged.
    pub fn insert(&mut self, position: Point2<f64>) -> NodeId {
        let key = self.key(&position);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId::new(self.positions.len());
        self.positions.push(position);
        self.index.insert(key, id);
        id
    }

    /// Position recorded for a node.
    pub fn position(&self, id: NodeId) -> &Point2<f64> {
        &self.positions[id.index()]
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no nodes have been registered.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consume the registry, returning positions ordered by node id.
    pub fn into_positions(self) -> Vec<Point2<f64>> {
        self.positions
    }
}
