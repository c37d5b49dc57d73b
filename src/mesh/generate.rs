//! Mesh generation: converting a finished quadtree into nodes and elements.

use std::collections::BTreeSet;

use nalgebra::Point2;

use crate::geometry::Shape;
use crate::quadtree::{CellId, ElementId, NodeId, Quadtree};

use super::materials::classify_cell;
use super::registry::NodeRegistry;

/// A mesh node: one distinct (quantized) coordinate in the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// The node's id; nodes in a [`QuadMesh`] are ordered by it.
    pub id: NodeId,
    /// Position of the node.
    pub position: Point2<f64>,
}

/// A quadrilateral mesh element produced from one leaf cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The element's id; elements in a [`QuadMesh`] are ordered by it.
    pub id: ElementId,
    /// Corner node ids in counter-clockwise order:
    /// bottom-left, bottom-right, top-right, top-left.
    pub nodes: [NodeId; 4],
    /// Materials present in the cell (empty for background regions).
    pub materials: BTreeSet<i32>,
}

/// The generated mesh: deduplicated nodes plus material-tagged elements.
///
/// Elements reference nodes by id only; downstream consumers read both
/// lists and must not mutate them.
#[derive(Debug, Clone)]
pub struct QuadMesh {
    /// Nodes ordered by id.
    pub nodes: Vec<Node>,
    /// Elements ordered by id.
    pub elements: Vec<Element>,
}

impl QuadMesh {
    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Position of a node.
    pub fn position(&self, id: NodeId) -> &Point2<f64> {
        &self.nodes[id.index()].position
    }

    /// Corner positions of an element in counter-clockwise order.
    pub fn element_corners(&self, id: ElementId) -> [Point2<f64>; 4] {
        let element = &self.elements[id.index()];
        element.nodes.map(|n| self.nodes[n.index()].position)
    }
}

/// Walk a finished quadtree and emit the mesh.
///
/// Every leaf cell registers its four corners in a tree-wide node registry
/// (deduplicated by coordinate quantized to `quantization`) and becomes one
/// element with corners in bottom-left, bottom-right, top-right, top-left
/// order. Branch cells emit nothing themselves; the registry and the
/// running element counter are threaded depth-first through the whole
/// subtree of each child before its next sibling starts, so node and
/// element ids never collide across siblings.
///
/// `shapes` is consulted only for corner-containment material
/// classification; pass an empty slice for an untagged mesh.
pub fn generate_mesh(tree: &Quadtree, shapes: &[Shape], quantization: f64) -> QuadMesh {
    let mut registry = NodeRegistry::new(quantization);
    let mut elements = Vec::new();
    emit_cell(tree, tree.root(), shapes, &mut registry, &mut elements);

    let nodes = registry
        .into_positions()
        .into_iter()
        .enumerate()
        .map(|(i, position)| Node {
            id: NodeId::new(i),
            position,
        })
        .collect();

    QuadMesh { nodes, elements }
}

fn emit_cell(
    tree: &Quadtree,
    id: CellId,
    shapes: &[Shape],
    registry: &mut NodeRegistry,
    elements: &mut Vec<Element>,
) {
    let cell = tree.cell(id);
    match cell.children() {
        Some(children) => {
            for child in children {
                emit_cell(tree, child, shapes, registry, elements);
            }
        }
        None => {
            let nodes = cell.bounds().corners().map(|corner| registry.insert(corner));
            elements.push(Element {
                id: ElementId::new(elements.len()),
                nodes,
                materials: classify_cell(cell, shapes),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use crate::geometry::BoundarySample;
    use crate::quadtree::Bounds;

    use super::*;

    fn sample(x: f64, y: f64) -> BoundarySample {
        BoundarySample {
            position: Point2::new(x, y),
            material: 1,
        }
    }

    /// Fully subdivided tree: n levels deep everywhere.
    fn full_tree(depth: usize) -> Quadtree {
        let per_axis = 1usize << depth;
        let step = 100.0 / per_axis as f64;
        let mut samples = Vec::new();
        for j in 0..per_axis {
            for i in 0..per_axis {
                samples.push(sample(
                    step * i as f64 + step / 2.0,
                    step * j as f64 + step / 2.0,
                ));
            }
        }
        let mut tree = Quadtree::new(Bounds::from_extent(100.0, 100.0), depth);
        tree.partition(&samples, 0);
        tree
    }

    #[test]
    fn test_single_leaf_mesh() {
        let tree = Quadtree::new(Bounds::from_extent(100.0, 50.0), 5);
        let mesh = generate_mesh(&tree, &[], 1e-6);
        assert_eq!(mesh.num_elements(), 1);
        assert_eq!(mesh.num_nodes(), 4);
        let corners = mesh.element_corners(ElementId::new(0));
        assert_eq!(corners[0], Point2::new(0.0, 0.0));
        assert_eq!(corners[1], Point2::new(100.0, 0.0));
        assert_eq!(corners[2], Point2::new(100.0, 50.0));
        assert_eq!(corners[3], Point2::new(0.0, 50.0));
    }

    #[test]
    fn test_adjacent_leaves_share_corner_nodes() {
        // A full depth-2 tree is a 4x4 element grid: 25 distinct corner
        // coordinates. Without tree-wide dedup there would be 64.
        let mesh = generate_mesh(&full_tree(2), &[], 1e-6);
        assert_eq!(mesh.num_elements(), 16);
        assert_eq!(mesh.num_nodes(), 25);
    }

    #[test]
    fn test_deeper_grid_node_count() {
        // (2^d + 1)^2 nodes for a fully subdivided depth-d tree.
        let mesh = generate_mesh(&full_tree(3), &[], 1e-6);
        assert_eq!(mesh.num_elements(), 64);
        assert_eq!(mesh.num_nodes(), 81);
    }

    #[test]
    fn test_shared_edge_resolves_to_same_ids() {
        let mesh = generate_mesh(&full_tree(1), &[], 1e-6);
        assert_eq!(mesh.num_elements(), 4);
        // BL element's bottom-right corner is BR element's bottom-left.
        let bl = &mesh.elements[0];
        let br = &mesh.elements[1];
        assert_eq!(bl.nodes[1], br.nodes[0]);
        assert_eq!(bl.nodes[2], br.nodes[3]);
    }

    #[test]
    fn test_element_winding_counter_clockwise() {
        let mesh = generate_mesh(&full_tree(2), &[], 1e-6);
        for element in &mesh.elements {
            let [bl, br, tr, tl] = element.nodes.map(|n| *mesh.position(n));
            assert!(bl.x < br.x && (bl.y - br.y).abs() < 1e-12);
            assert!(br.y < tr.y && (br.x - tr.x).abs() < 1e-12);
            assert!(tr.x > tl.x && (tr.y - tl.y).abs() < 1e-12);
            // Shoelace: positive signed area means counter-clockwise.
            let area = (br.x - bl.x) * (tr.y - bl.y) - (tr.x - bl.x) * (br.y - bl.y);
            assert!(area > 0.0);
        }
    }

    #[test]
    fn test_element_ids_sequential_in_traversal_order() {
        let mesh = generate_mesh(&full_tree(2), &[], 1e-6);
        for (i, element) in mesh.elements.iter().enumerate() {
            assert_eq!(element.id.index(), i);
        }
    }

    #[test]
    fn test_elements_reference_distinct_nodes() {
        let mesh = generate_mesh(&full_tree(2), &[], 1e-6);
        for element in &mesh.elements {
            let mut ids: Vec<_> = element.nodes.to_vec();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 4);
        }
    }

    #[test]
    fn test_degenerate_cell_accepted() {
        // A quantization coarser than the cell size collapses corners to
        // shared nodes; the element is still emitted, not rejected.
        let tree = Quadtree::new(Bounds::from_extent(1e-8, 1e-8), 5);
        let mesh = generate_mesh(&tree, &[], 1e-6);
        assert_eq!(mesh.num_elements(), 1);
        assert_eq!(mesh.num_nodes(), 1);
        let element = &mesh.elements[0];
        assert!(element.nodes.iter().all(|&n| n == element.nodes[0]));
    }

    #[test]
    fn test_irregular_tree_shares_hanging_nodes() {
        // Subdivide only the bottom-left quadrant: 2 samples there, nothing
        // elsewhere. The coarse neighbors still reuse the fine corners that
        // fall on their edges where coordinates coincide.
        let samples = vec![sample(10.0, 10.0), sample(40.0, 40.0)];
        let mut tree = Quadtree::new(Bounds::from_extent(100.0, 100.0), 2);
        tree.partition(&samples, 1);
        // Root split; BL child split again; others leaves.
        let mesh = generate_mesh(&tree, &[], 1e-6);
        assert_eq!(mesh.num_elements(), 7);
        // 9 fine-grid corners in the BL quadrant plus 8 coarse corners,
        // 3 of which coincide with fine corners: 14 distinct nodes.
        assert_eq!(mesh.num_nodes(), 14);
    }
}
