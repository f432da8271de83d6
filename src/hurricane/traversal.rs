use std::collections::VecDeque;

use super::{Hurricane, Node};
use crate::error::HurricaneError;

/// Upper bound on the number of layers one traversal may produce.
pub const MAX_LAYERS: usize = 1 << 20;

impl<S> Hurricane<S> {
    /// Nodes ordered outward by radius, ties broken by angle.
    pub fn spiral_traversal(&self) -> Vec<&Node> {
        let mut sorted: Vec<&Node> = self.nodes.iter().collect();
        sorted.sort_by(|a, b| a.r.total_cmp(&b.r).then(a.theta.total_cmp(&b.theta)));
        sorted
    }

    /// Buckets nodes into height layers `floor(z / layer_size)`.
    ///
    /// Layers run from 0 up to the highest occupied layer; there is always at
    /// least one and empty layers in between are kept. Nodes below zero height
    /// are left out. More than [`MAX_LAYERS`] layers is an error.
    pub fn layered_traversal(&self, layer_size: f64) -> Result<Vec<Vec<&Node>>, HurricaneError> {
        if !layer_size.is_finite() || layer_size <= 0.0 {
            return Err(HurricaneError::InvalidLayerSize(layer_size));
        }

        let mut placed = Vec::with_capacity(self.nodes.len());
        let mut highest = 0;
        for node in &self.nodes {
            let layer = (node.z / layer_size).floor();
            if !layer.is_finite() || layer < 0.0 {
                continue;
            }
            if layer >= MAX_LAYERS as f64 {
                return Err(HurricaneError::TooManyLayers { layer, max: MAX_LAYERS });
            }
            let layer = layer as usize;
            highest = highest.max(layer);
            placed.push((layer, node));
        }

        let mut layers: Vec<Vec<&Node>> = vec![Vec::new(); highest + 1];
        for (layer, node) in placed {
            layers[layer].push(node);
        }

        Ok(layers)
    }

    pub fn bfs(&self, start: &str) -> Result<Vec<&Node>, HurricaneError> {
        let start = self.index_of(start)?;

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            let node = &self.nodes[current];
            order.push(node);

            for &next in node.adjacent() {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        Ok(order)
    }

    pub fn dfs(&self, start: &str) -> Result<Vec<&Node>, HurricaneError> {
        let start = self.index_of(start)?;

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            let node = &self.nodes[current];
            order.push(node);

            // Reversed so the first neighbour is explored first
            stack.extend(node.adjacent().iter().rev().filter(|&&next| !visited[next]));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::default_spiral;
    use super::super::AdjacencyStrategy;
    use super::*;
    use crate::spiral::{LinearSpiral, Polar};

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.id.clone()).collect()
    }

    fn build(strategy: AdjacencyStrategy, count: usize) -> Hurricane<LinearSpiral> {
        let mut h = Hurricane::new("center", "", default_spiral(), strategy);
        for i in 1..=count {
            h.add_node(format!("n{i}"), "").unwrap();
        }
        h
    }

    #[test]
    fn spiral_order_sorts_by_radius_then_angle() {
        // Shrinking radius, so insertion order is reversed by the sort
        let spiral = |i: usize| Polar::new(10.0 - i as f64, 0.0, 0.0);
        let mut h = Hurricane::new("center", "", spiral, AdjacencyStrategy::Isolated);
        h.add_node("a", "").unwrap();
        h.add_node("b", "").unwrap();

        assert_eq!(ids(&h.spiral_traversal()), ["center", "b", "a"]);

        let same_radius = |i: usize| Polar::new(1.0, -(i as f64), 0.0);
        let mut h = Hurricane::new("center", "", same_radius, AdjacencyStrategy::Isolated);
        h.add_node("a", "").unwrap();
        h.add_node("b", "").unwrap();

        // Center has r = 0 regardless of the law
        assert_eq!(ids(&h.spiral_traversal()), ["center", "b", "a"]);
    }

    #[test]
    fn spiral_order_on_default_law_is_insertion_order() {
        let h = build(AdjacencyStrategy::Chain, 10);
        let expected: Vec<String> = h.nodes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids(&h.spiral_traversal()), expected);
    }

    #[test]
    fn layers_bucket_by_height() {
        let h = build(AdjacencyStrategy::Chain, 5);
        // z = 0.0, 0.1, 0.2, 0.3, 0.4, 0.5
        let layers = h.layered_traversal(0.25).unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(ids(&layers[0]), ["center", "n1", "n2"]);
        assert_eq!(ids(&layers[1]), ["n3", "n4"]);
        assert_eq!(ids(&layers[2]), ["n5"]);
    }

    #[test]
    fn layers_keep_gaps_and_drop_negative_heights() {
        let spiral = |i: usize| Polar::new(0.0, 0.0, [0.0, 3.5, -1.0][i]);
        let mut h = Hurricane::new("center", "", spiral, AdjacencyStrategy::Isolated);
        h.add_node("high", "").unwrap();
        h.add_node("low", "").unwrap();

        let layers = h.layered_traversal(1.0).unwrap();
        assert_eq!(layers.len(), 4);
        assert_eq!(ids(&layers[0]), ["center"]);
        assert!(layers[1].is_empty());
        assert!(layers[2].is_empty());
        assert_eq!(ids(&layers[3]), ["high"]);
    }

    #[test]
    fn layer_size_must_be_positive() {
        let h = build(AdjacencyStrategy::Chain, 1);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                h.layered_traversal(bad),
                Err(HurricaneError::InvalidLayerSize(_))
            ));
        }
    }

    #[test]
    fn tiny_layer_size_is_rejected_not_allocated() {
        let spiral = LinearSpiral {
            radius_step: 0.2,
            theta_step: 0.1,
            height_step: 1.0,
        };
        let mut h = Hurricane::new("center", "", spiral, AdjacencyStrategy::Chain);
        h.add_node("n1", "").unwrap();

        assert!(matches!(
            h.layered_traversal(1e-300),
            Err(HurricaneError::TooManyLayers { max: MAX_LAYERS, .. })
        ));
    }

    #[test]
    fn highest_allowed_layer_is_accepted() {
        let top = (MAX_LAYERS - 1) as f64;
        let spiral = move |i: usize| Polar::new(0.0, 0.0, i as f64 * top);
        let mut h = Hurricane::new("center", "", spiral, AdjacencyStrategy::Isolated);
        h.add_node("top", "").unwrap();

        let layers = h.layered_traversal(1.0).unwrap();
        assert_eq!(layers.len(), MAX_LAYERS);
        assert_eq!(ids(&layers[MAX_LAYERS - 1]), ["top"]);

        h.add_node("over", "").unwrap();
        assert!(h.layered_traversal(1.0).is_err());
    }

    #[test]
    fn bfs_on_chain_follows_insertion() {
        let h = build(AdjacencyStrategy::Chain, 4);
        assert_eq!(ids(&h.bfs("center").unwrap()), ["center", "n1", "n2", "n3", "n4"]);
        assert_eq!(ids(&h.bfs("n2").unwrap()), ["n2", "n1", "n3", "center", "n4"]);
    }

    #[test]
    fn bfs_and_dfs_differ_on_tree() {
        let h = build(AdjacencyStrategy::Tree, 3);
        // center: [1, 2, 3], n1: [0, 2], n2: [0, 1, 3], n3: [0, 2]
        assert_eq!(ids(&h.bfs("center").unwrap()), ["center", "n1", "n2", "n3"]);
        assert_eq!(ids(&h.dfs("n3").unwrap()), ["n3", "center", "n1", "n2"]);
        assert_eq!(ids(&h.bfs("n3").unwrap()), ["n3", "center", "n2", "n1"]);
    }

    #[test]
    fn dfs_goes_deep_first() {
        let h = build(AdjacencyStrategy::ConnectToCenter, 3);
        assert_eq!(ids(&h.dfs("n1").unwrap()), ["n1", "center", "n2", "n3"]);
    }

    #[test]
    fn traversal_from_unknown_node() {
        let h = build(AdjacencyStrategy::Chain, 1);
        assert_eq!(
            h.bfs("ghost").unwrap_err(),
            HurricaneError::UnknownNode("ghost".to_string())
        );
        assert!(h.dfs("ghost").is_err());
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let h = build(AdjacencyStrategy::Isolated, 2);
        assert_eq!(ids(&h.bfs("n1").unwrap()), ["n1"]);
        assert_eq!(ids(&h.dfs("n1").unwrap()), ["n1"]);
    }
}
