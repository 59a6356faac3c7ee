use tracing::{debug, trace};

use super::{GraphView, Mark};

/// Partition the vertices of `transpose` into strongly connected components
///
/// `seed_order` must list every vertex of the original graph in decreasing
/// finish-time order, as produced by
/// [`DepthFirstSearch::finish_order`](super::DepthFirstSearch::finish_order),
/// and `transpose` must be the transpose of that graph with the same vertex
/// positions. Seeds are tried in exactly that order, first element included.
///
/// Each component lists its vertices in discovery order; components are
/// returned in the order they were found.
pub fn collect_components<G: GraphView>(transpose: &G, seed_order: &[usize]) -> Vec<Vec<usize>> {
    let mut marks = vec![Mark::Unvisited; transpose.vertex_count()];
    let mut components = Vec::new();

    for &seed in seed_order {
        if marks[seed] != Mark::Unvisited {
            continue;
        }

        trace!(seed, "starting component");
        let mut component = vec![seed];
        marks[seed] = Mark::InProgress;
        let mut stack = vec![(seed, transpose.successors(seed))];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let step = frame.1.next();
            match step {
                Some(next) if marks[next] == Mark::Unvisited => {
                    marks[next] = Mark::InProgress;
                    component.push(next);
                    stack.push((next, transpose.successors(next)));
                }
                Some(_) => {}
                None => {
                    marks[vertex] = Mark::Finished;
                    stack.pop();
                }
            }
        }

        components.push(component);
    }

    debug!(
        components = components.len(),
        "second depth-first pass complete"
    );

    components
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dfs::DepthFirstSearch;

    struct Lists(Vec<Vec<usize>>);

    impl Lists {
        fn transpose(&self) -> Self {
            let mut reversed = vec![Vec::new(); self.0.len()];
            for (from, successors) in self.0.iter().enumerate() {
                for &to in successors {
                    reversed[to].push(from);
                }
            }
            Lists(reversed)
        }
    }

    impl GraphView for Lists {
        fn vertex_count(&self) -> usize {
            self.0.len()
        }

        fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
            self.0[index].iter().copied()
        }
    }

    fn components_of(lists: Lists) -> Vec<Vec<usize>> {
        let search = DepthFirstSearch::run(&lists);
        let mut components = collect_components(&lists.transpose(), search.finish_order());
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn test_single_cycle_is_one_component() {
        let components = components_of(Lists(vec![vec![1], vec![2], vec![0]]));

        assert_eq!(components, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_isolated_vertices_are_singletons() {
        let components = components_of(Lists(vec![vec![], vec![], vec![]]));

        assert_eq!(components, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_two_cycles_joined_by_one_edge() {
        // {0, 1} -> {2, 3}
        let components = components_of(Lists(vec![vec![1], vec![0, 2], vec![3], vec![2]]));

        assert_eq!(components, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_first_seed_is_not_skipped() {
        // 0 -> 1 with no cycle: 0 finishes last and leads the seed order
        let lists = Lists(vec![vec![1], vec![]]);
        let search = DepthFirstSearch::run(&lists);
        assert_eq!(search.finish_order(), &[0, 1]);

        let components = collect_components(&lists.transpose(), search.finish_order());

        assert_eq!(components, vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_components_follow_seed_order() {
        // 0 -> 1 -> 2 -> 1
        let lists = Lists(vec![vec![1], vec![2], vec![1]]);
        let search = DepthFirstSearch::run(&lists);

        let components = collect_components(&lists.transpose(), search.finish_order());

        assert_eq!(components, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_deep_ring_does_not_recurse() {
        let size = 200_000;
        let lists = Lists((0..size).map(|i| vec![(i + 1) % size]).collect());

        let components = components_of(lists);

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), size);
    }
}
