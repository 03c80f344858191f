use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeIndexable};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Longest-path distance from each node to a leaf, indexed by
/// [`NodeIndexable::to_index`]. Leaves get rank 0.
///
/// A successor that is still being computed (a cycle) contributes whatever
/// rank it currently holds instead of being descended into again, so cyclic
/// graphs terminate; their ranks carry no particular meaning.
pub fn longest_path_ranks<G>(graph: G) -> Vec<u32>
where
    G: IntoNeighbors + IntoNodeIdentifiers + NodeIndexable,
{
    let bound = graph.node_bound();
    let mut ranks = vec![0u32; bound];
    let mut marks = vec![Mark::Unvisited; bound];

    for root in graph.node_identifiers() {
        if marks[graph.to_index(root)] != Mark::Unvisited {
            continue;
        }

        marks[graph.to_index(root)] = Mark::InProgress;
        // (node, remaining successors, highest successor rank seen so far)
        let mut frames: Vec<(G::NodeId, G::Neighbors, Option<u32>)> =
            vec![(root, graph.neighbors(root), None)];

        while let Some((node, neighbors, best)) = frames.last_mut() {
            match neighbors.next() {
                Some(succ) => {
                    let w = graph.to_index(succ);
                    if marks[w] == Mark::Unvisited {
                        marks[w] = Mark::InProgress;
                        frames.push((succ, graph.neighbors(succ), None));
                    } else {
                        *best = Some(best.map_or(ranks[w], |b| b.max(ranks[w])));
                    }
                }
                None => {
                    let v = graph.to_index(*node);
                    ranks[v] = best.map_or(0, |b| b + 1);
                    marks[v] = Mark::Done;
                    frames.pop();
                    if let Some((_, _, parent_best)) = frames.last_mut() {
                        *parent_best = Some(parent_best.map_or(ranks[v], |b| b.max(ranks[v])));
                    }
                }
            }
        }
    }

    ranks
}

/// Nodes ordered sources first: descending rank, ties kept in
/// [`IntoNodeIdentifiers`] order.
pub fn rank_order<G>(graph: G) -> Vec<G::NodeId>
where
    G: IntoNeighbors + IntoNodeIdentifiers + NodeIndexable,
{
    let ranks = longest_path_ranks(graph);
    let mut order: Vec<G::NodeId> = graph.node_identifiers().collect();
    order.sort_by_key(|&node| std::cmp::Reverse(ranks[graph.to_index(node)]));
    order
}
