use super::Node;

const CENTER: usize = 0;

/// How a newly added node is wired into the graph. Edges are undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyStrategy {
    /// Link to the previously added node.
    #[default]
    Chain,
    /// Link to the center node.
    ConnectToCenter,
    /// Link to the center and to the previously added node.
    Tree,
    /// No edges.
    Isolated,
}

impl AdjacencyStrategy {
    pub(super) fn connect(self, nodes: &mut [Node], new_index: usize) {
        if new_index == CENTER {
            return;
        }
        let previous = new_index - 1;

        match self {
            AdjacencyStrategy::Chain => connect_nodes(nodes, previous, new_index),
            AdjacencyStrategy::ConnectToCenter => connect_nodes(nodes, CENTER, new_index),
            AdjacencyStrategy::Tree => {
                connect_nodes(nodes, CENTER, new_index);
                // Second node: previous is the center, linked once rather than twice
                if previous != CENTER {
                    connect_nodes(nodes, previous, new_index);
                }
            }
            AdjacencyStrategy::Isolated => {}
        }
    }
}

fn connect_nodes(nodes: &mut [Node], a: usize, b: usize) {
    nodes[a].adjacent.push(b);
    nodes[b].adjacent.push(a);
}

#[cfg(test)]
mod tests {
    use super::super::tests::default_spiral;
    use super::super::Hurricane;
    use super::*;

    fn build(strategy: AdjacencyStrategy, count: usize) -> Hurricane<crate::spiral::LinearSpiral> {
        let mut h = Hurricane::new("center", "", default_spiral(), strategy);
        for i in 1..=count {
            h.add_node(format!("n{i}"), "").unwrap();
        }
        h
    }

    #[test]
    fn chain_links_neighbours() {
        let h = build(AdjacencyStrategy::Chain, 3);
        assert_eq!(h.center().adjacent(), &[1]);
        assert_eq!(h.node("n1").unwrap().adjacent(), &[0, 2]);
        assert_eq!(h.node("n2").unwrap().adjacent(), &[1, 3]);
        assert_eq!(h.node("n3").unwrap().adjacent(), &[2]);
    }

    #[test]
    fn connect_to_center_is_a_star() {
        let h = build(AdjacencyStrategy::ConnectToCenter, 3);
        assert_eq!(h.center().adjacent(), &[1, 2, 3]);
        for id in ["n1", "n2", "n3"] {
            assert_eq!(h.node(id).unwrap().adjacent(), &[0]);
        }
    }

    #[test]
    fn tree_links_center_and_previous_once() {
        let h = build(AdjacencyStrategy::Tree, 3);
        assert_eq!(h.center().adjacent(), &[1, 2, 3]);
        assert_eq!(h.node("n1").unwrap().adjacent(), &[0, 2]);
        assert_eq!(h.node("n2").unwrap().adjacent(), &[0, 1, 3]);
        assert_eq!(h.node("n3").unwrap().adjacent(), &[0, 2]);
    }

    #[test]
    fn isolated_adds_nothing() {
        let h = build(AdjacencyStrategy::Isolated, 2);
        assert!(h.nodes().iter().all(|n| n.adjacent().is_empty()));
    }
}
