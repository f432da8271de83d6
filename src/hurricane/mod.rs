//! Id-addressed node graph laid out on a spiral.
//!
//! The center node always sits at index 0 with every coordinate at zero. Each
//! added node takes the next index, is placed by the spiral law at that index,
//! and is wired to existing nodes by an [`AdjacencyStrategy`].

mod adjacency;
mod traversal;

use std::collections::HashMap;

pub use adjacency::AdjacencyStrategy;
pub use traversal::MAX_LAYERS;

use crate::error::HurricaneError;
use crate::spiral::Spiral;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub data: String,
    pub r: f64,
    pub theta: f64,
    pub z: f64,
    pub x: f64,
    pub y: f64,
    adjacent: Vec<usize>,
}

impl Node {
    /// Indices of the neighbours, in the order the edges were added.
    pub fn adjacent(&self) -> &[usize] {
        &self.adjacent
    }
}

#[derive(Debug)]
pub struct Hurricane<S> {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    spiral: S,
    strategy: AdjacencyStrategy,
}

impl<S: Spiral> Hurricane<S> {
    pub fn new(
        center_id: impl Into<String>,
        center_data: impl Into<String>,
        spiral: S,
        strategy: AdjacencyStrategy,
    ) -> Self {
        let center = Node {
            id: center_id.into(),
            data: center_data.into(),
            r: 0.0,
            theta: 0.0,
            z: 0.0,
            x: 0.0,
            y: 0.0,
            adjacent: Vec::new(),
        };

        let mut index = HashMap::new();
        index.insert(center.id.clone(), 0);

        Self {
            nodes: vec![center],
            index,
            spiral,
            strategy,
        }
    }

    /// Places a new node at the next spiral index and connects it.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<&Node, HurricaneError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(HurricaneError::DuplicateNode(id));
        }

        let node_index = self.nodes.len();
        let polar = self.spiral.polar(node_index);
        let [x, y, _] = polar.to_cartesian();

        self.index.insert(id.clone(), node_index);
        self.nodes.push(Node {
            id,
            data: data.into(),
            r: polar.r,
            theta: polar.theta,
            z: polar.z,
            x,
            y,
            adjacent: Vec::new(),
        });

        self.strategy.connect(&mut self.nodes, node_index);

        Ok(&self.nodes[node_index])
    }
}

impl<S> Hurricane<S> {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn center(&self) -> &Node {
        &self.nodes[0]
    }

    /// All nodes in insertion order, center first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the center node exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn index_of(&self, id: &str) -> Result<usize, HurricaneError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| HurricaneError::UnknownNode(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spiral::LinearSpiral;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    pub(super) fn default_spiral() -> LinearSpiral {
        LinearSpiral {
            radius_step: 0.2,
            theta_step: PI / 10.0,
            height_step: 0.1,
        }
    }

    #[test]
    fn center_is_at_origin() {
        let h = Hurricane::new("center", "center node", default_spiral(), AdjacencyStrategy::Chain);
        let center = h.center();
        assert_eq!(center.id, "center");
        assert_eq!(center.data, "center node");
        assert_eq!((center.x, center.y, center.z), (0.0, 0.0, 0.0));
        assert_eq!(h.len(), 1);
        assert!(!h.is_empty());
    }

    #[test]
    fn nodes_take_the_next_spiral_index() {
        let mut h = Hurricane::new("center", "", default_spiral(), AdjacencyStrategy::Chain);
        for i in 1..=5 {
            h.add_node(format!("n{i}"), format!("node {i}")).unwrap();
        }

        let n5 = h.node("n5").unwrap();
        assert_relative_eq!(n5.r, 1.0);
        assert_relative_eq!(n5.theta, PI / 2.0);
        assert_relative_eq!(n5.z, 0.5);
        assert_relative_eq!(n5.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n5.y, 1.0, epsilon = 1e-12);
        assert_eq!(n5.data, "node 5");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut h = Hurricane::new("center", "", default_spiral(), AdjacencyStrategy::Chain);
        h.add_node("a", "first").unwrap();

        assert_eq!(
            h.add_node("a", "second").unwrap_err(),
            HurricaneError::DuplicateNode("a".to_string())
        );
        assert_eq!(
            h.add_node("center", "").unwrap_err(),
            HurricaneError::DuplicateNode("center".to_string())
        );
        assert_eq!(h.len(), 2);
        assert_eq!(h.node("a").unwrap().data, "first");
    }

    #[test]
    fn debug_output_names_the_nodes() {
        let mut h = Hurricane::new("center", "", default_spiral(), AdjacencyStrategy::Tree);
        h.add_node("n1", "").unwrap();

        let debug = format!("{h:?}");
        assert!(debug.contains("\"n1\""));
        assert!(debug.contains("Tree"));
    }

    #[test]
    fn missing_node_lookup() {
        let h = Hurricane::new("center", "", default_spiral(), AdjacencyStrategy::Chain);
        assert!(h.node("nope").is_none());
    }
}
