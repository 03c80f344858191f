use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeIndexable};

/// Tarjan's strongly connected components.
///
/// Components come out sources first (the reverse of the order in which
/// Tarjan closes them) and each component lists its members in reverse pop
/// order, which approximates a topological order of its acyclic part.
/// Traversal uses an explicit frame stack, so deep graphs cannot overflow
/// the call stack.
pub fn strongly_connected_components<G>(graph: G) -> Vec<Vec<G::NodeId>>
where
    G: IntoNeighbors + IntoNodeIdentifiers + NodeIndexable,
{
    let mut state = TarjanState::new(graph.node_bound());
    let mut stack: Vec<G::NodeId> = Vec::new();
    let mut components: Vec<Vec<G::NodeId>> = Vec::new();

    for root in graph.node_identifiers() {
        if state.index[graph.to_index(root)].is_some() {
            continue;
        }

        state.enter(graph.to_index(root));
        stack.push(root);
        let mut frames: Vec<(G::NodeId, G::Neighbors)> = vec![(root, graph.neighbors(root))];

        while let Some((node, neighbors)) = frames.last_mut() {
            let node = *node;
            let v = graph.to_index(node);
            match neighbors.next() {
                Some(succ) => {
                    let w = graph.to_index(succ);
                    match state.index[w] {
                        None => {
                            state.enter(w);
                            stack.push(succ);
                            frames.push((succ, graph.neighbors(succ)));
                        }
                        Some(succ_index) if state.on_stack[w] => {
                            state.lowlink[v] = state.lowlink[v].min(succ_index);
                        }
                        Some(_) => {}
                    }
                }
                None => {
                    frames.pop();
                    if let Some((parent, _)) = frames.last() {
                        let p = graph.to_index(*parent);
                        state.lowlink[p] = state.lowlink[p].min(state.lowlink[v]);
                    }
                    if Some(state.lowlink[v]) == state.index[v] {
                        let mut component = Vec::new();
                        while let Some(member) = stack.pop() {
                            state.on_stack[graph.to_index(member)] = false;
                            component.push(member);
                            if member == node {
                                break;
                            }
                        }
                        component.reverse();
                        components.push(component);
                    }
                }
            }
        }
    }

    components.reverse();
    components
}

struct TarjanState {
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    next_index: usize,
}

impl TarjanState {
    fn new(bound: usize) -> Self {
        Self {
            index: vec![None; bound],
            lowlink: vec![0; bound],
            on_stack: vec![false; bound],
            next_index: 0,
        }
    }

    fn enter(&mut self, i: usize) {
        self.index[i] = Some(self.next_index);
        self.lowlink[i] = self.next_index;
        self.on_stack[i] = true;
        self.next_index += 1;
    }
}
