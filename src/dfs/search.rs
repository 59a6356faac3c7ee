use tracing::{debug, trace};

use super::{GraphView, Mark};

/// Result of the first depth-first pass over a graph
///
/// Holds the final marks, the vertices in decreasing finish-time order and
/// the first back edge met, if any.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    marks: Vec<Mark>,
    finish_order: Vec<usize>,
    back_edge: Option<(usize, usize)>,
}

impl DepthFirstSearch {
    /// Run a full traversal of `graph`
    ///
    /// Every vertex still unvisited becomes a new root, in position order.
    /// Successors are explored in adjacency order.
    pub fn run<G: GraphView>(graph: &G) -> Self {
        let vertex_count = graph.vertex_count();
        let mut search = Self {
            marks: vec![Mark::Unvisited; vertex_count],
            finish_order: Vec::with_capacity(vertex_count),
            back_edge: None,
        };

        for root in 0..vertex_count {
            if search.marks[root] == Mark::Unvisited {
                search.visit(graph, root);
            }
        }

        // Vertices were pushed as they finished
        search.finish_order.reverse();

        debug!(
            vertices = vertex_count,
            cyclic = search.has_cycle(),
            "first depth-first pass complete"
        );

        search
    }

    fn visit<G: GraphView>(&mut self, graph: &G, root: usize) {
        trace!(root, "starting traversal tree");

        self.marks[root] = Mark::InProgress;
        let mut stack = vec![(root, graph.successors(root))];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let step = frame.1.next();
            match step {
                Some(next) => match self.marks[next] {
                    Mark::Unvisited => {
                        self.marks[next] = Mark::InProgress;
                        stack.push((next, graph.successors(next)));
                    }
                    Mark::InProgress => {
                        trace!(from = vertex, to = next, "back edge");
                        self.back_edge.get_or_insert((vertex, next));
                    }
                    Mark::Finished => {}
                },
                None => {
                    self.marks[vertex] = Mark::Finished;
                    self.finish_order.push(vertex);
                    stack.pop();
                }
            }
        }
    }

    /// Whether any back edge was found
    pub fn has_cycle(&self) -> bool {
        self.back_edge.is_some()
    }

    /// The first back edge found, as `(from, to)` positions
    pub fn back_edge(&self) -> Option<(usize, usize)> {
        self.back_edge
    }

    /// Vertex positions in decreasing finish-time order
    ///
    /// This is a topological order when [`has_cycle`](Self::has_cycle) is
    /// false.
    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    /// Final mark of every vertex
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Adjacency lists addressed by position
    struct Lists(Vec<Vec<usize>>);

    impl GraphView for Lists {
        fn vertex_count(&self) -> usize {
            self.0.len()
        }

        fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
            self.0[index].iter().copied()
        }
    }

    #[test]
    fn test_empty_graph() {
        let search = DepthFirstSearch::run(&Lists(vec![]));

        assert!(!search.has_cycle());
        assert!(search.finish_order().is_empty());
    }

    #[test]
    fn test_chain_orders_by_decreasing_finish_time() {
        // 0 -> 1 -> 2
        let search = DepthFirstSearch::run(&Lists(vec![vec![1], vec![2], vec![]]));

        assert!(!search.has_cycle());
        assert_eq!(search.finish_order(), &[0, 1, 2]);
    }

    #[test]
    fn test_roots_are_taken_in_position_order() {
        // 0 and 1 are unrelated, 2 -> 0
        let search = DepthFirstSearch::run(&Lists(vec![vec![], vec![], vec![0]]));

        // 0 finishes first, then 1, then 2
        assert_eq!(search.finish_order(), &[2, 1, 0]);
    }

    #[test]
    fn test_three_cycle_reports_back_edge() {
        // 0 -> 1 -> 2 -> 0
        let search = DepthFirstSearch::run(&Lists(vec![vec![1], vec![2], vec![0]]));

        assert!(search.has_cycle());
        assert_eq!(search.back_edge(), Some((2, 0)));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let search = DepthFirstSearch::run(&Lists(vec![vec![0]]));

        assert!(search.has_cycle());
        assert_eq!(search.back_edge(), Some((0, 0)));
    }

    #[test]
    fn test_cross_edges_are_not_cycles() {
        // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
        let search =
            DepthFirstSearch::run(&Lists(vec![vec![1, 2], vec![3], vec![3], vec![]]));

        assert!(!search.has_cycle());
        assert_eq!(search.finish_order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_all_vertices_finish() {
        let search = DepthFirstSearch::run(&Lists(vec![vec![1], vec![0], vec![]]));

        assert!(search.marks().iter().all(|mark| *mark == Mark::Finished));
        assert_eq!(search.finish_order().len(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let depth = 200_000;
        let lists = (0..depth)
            .map(|i| if i + 1 < depth { vec![i + 1] } else { vec![] })
            .collect();

        let search = DepthFirstSearch::run(&Lists(lists));

        assert!(!search.has_cycle());
        assert_eq!(search.finish_order().first(), Some(&0));
        assert_eq!(search.finish_order().last(), Some(&(depth - 1)));
    }
}
