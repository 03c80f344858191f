use boxroute_layout::*;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};
use tracing_test::traced_test;

const SPACING: f32 = 10.0;

fn node(id: &str) -> Node {
    Node::new(id, id.to_uppercase())
}

fn edge(from: &str, to: &str) -> Edge {
    Edge::new(format!("{from}-{to}"), from, to)
}

fn config(strategy: LayoutStrategy, path: PathAlgorithm) -> LayoutConfig {
    LayoutConfig {
        layout_strategy: strategy,
        path_strategy: path,
        node_width: 5,
        node_height: 3,
        border: 1,
        margin: 2,
        layout_attempts: 50,
        ..Default::default()
    }
}

/// Writes the layout to the temp directory, scaled by `SPACING`.
fn generate_svg(result: &LayoutResult, filename: &str) {
    let scale = |v: i32| v as f32 * SPACING;
    let mut document = Document::new()
        .set("viewBox", (0, 0, scale(result.width), scale(result.height)))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        );

    for rect in &result.nodes {
        document = document.add(
            Rectangle::new()
                .set("id", rect.id.as_str())
                .set("x", scale(rect.left))
                .set("y", scale(rect.top))
                .set("width", scale(rect.width))
                .set("height", scale(rect.height))
                .set("fill", "lightblue")
                .set("stroke", "black"),
        );
    }

    for routed in &result.edges {
        let Some((first, rest)) = routed.route.split_first() else {
            continue;
        };
        let data = rest.iter().fold(
            Data::new().move_to((scale(first.x), scale(first.y))),
            |data, point| data.line_to((scale(point.x), scale(point.y))),
        );
        document = document.add(
            Path::new()
                .set("d", data)
                .set("stroke", "black")
                .set("stroke-width", 2)
                .set("fill", "none"),
        );
    }

    let path = std::env::temp_dir().join(filename);
    svg::save(&path, &document).unwrap();
    println!("wrote {}", path.display());
}

fn print_result(name: &str, result: &LayoutResult) {
    println!("{name} Nodes:");
    for rect in &result.nodes {
        println!(
            "  {}: left {}, top {}, size {}x{}",
            rect.id, rect.left, rect.top, rect.width, rect.height
        );
    }
    println!("{name} Edges:");
    for routed in &result.edges {
        println!("  {} (cost {}): {:?}", routed.id, routed.cost, routed.route);
    }
}

/// Checks that a route leaves through a port of its source, travels
/// orthogonally through free cells and enters through a port of its target.
fn assert_route_well_formed(result: &LayoutResult, routed: &RoutedEdge) {
    let from = result.node(&routed.from).unwrap();
    let to = result.node(&routed.to).unwrap();
    let route = &routed.route;

    assert_eq!(route.first(), Some(&from.center()), "{}", routed.id);
    assert_eq!(route.last(), Some(&to.center()), "{}", routed.id);
    if routed.from == routed.to {
        assert_eq!(route.len(), 2);
        return;
    }

    assert!(route.len() >= 4, "{}: {:?}", routed.id, route);
    let exit = route[1];
    let entry = route[route.len() - 2];
    assert!(from.is_port(exit.x, exit.y), "{}: exit {:?}", routed.id, exit);
    assert!(to.is_port(entry.x, entry.y), "{}: entry {:?}", routed.id, entry);

    for point in &route[2..route.len() - 2] {
        for rect in &result.nodes {
            assert!(
                !rect.contains(point.x, point.y),
                "{}: {:?} lies on {}",
                routed.id,
                point,
                rect.id
            );
        }
    }
    for hop in route[1..route.len() - 1].windows(2) {
        assert!(
            hop[0].x == hop[1].x || hop[0].y == hop[1].y,
            "{}: diagonal hop {:?}",
            routed.id,
            hop
        );
    }
}

fn pipeline() -> (Vec<Node>, Vec<Edge>) {
    let nodes = ["parse", "check", "lower", "optimize", "emit", "report"]
        .into_iter()
        .map(node)
        .collect();
    let edges = vec![
        edge("parse", "check"),
        edge("check", "lower"),
        edge("lower", "optimize"),
        edge("optimize", "lower"),
        edge("optimize", "emit"),
        edge("check", "report"),
        edge("emit", "report"),
    ];
    (nodes, edges)
}

#[test]
fn test_layout_every_strategy() {
    let (nodes, edges) = pipeline();
    let generated = [
        LayoutStrategy::FlowSquare,
        LayoutStrategy::TopoSort,
        LayoutStrategy::Tarjan,
        LayoutStrategy::RandomShortestSquare,
    ];

    for strategy in generated {
        let mut engine = DiagramLayout::with_shuffle(
            config(strategy, PathAlgorithm::Dijkstra),
            SeededShuffle::from_seed(7),
        )
        .unwrap();
        let result = engine.layout(&nodes, &edges).unwrap();

        print_result(strategy.name(), &result);
        assert_eq!(result.nodes.len(), nodes.len());
        assert_eq!(result.edges.len(), edges.len());
        for routed in &result.edges {
            assert_route_well_formed(&result, routed);
        }
        generate_svg(&result, &format!("boxroute_{}.svg", strategy.name()));
    }
}

#[test]
fn test_layout_every_path_algorithm() {
    let (nodes, edges) = pipeline();
    for path in [
        PathAlgorithm::Dijkstra,
        PathAlgorithm::AStar,
        PathAlgorithm::Bidirectional,
    ] {
        for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
            let mut cfg = config(LayoutStrategy::Tarjan, path);
            cfg.heuristic = heuristic;
            let result = DiagramLayout::new(cfg).unwrap().layout(&nodes, &edges).unwrap();
            for routed in &result.edges {
                assert_route_well_formed(&result, routed);
            }
        }
    }
}

#[test]
fn test_dijkstra_and_bidirectional_agree_on_cost() {
    let (nodes, edges) = pipeline();
    let cost = |path| {
        DiagramLayout::new(config(LayoutStrategy::FlowSquare, path))
            .unwrap()
            .layout(&nodes, &edges)
            .unwrap()
            .edges
            .iter()
            .map(|routed| routed.cost)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        cost(PathAlgorithm::Dijkstra),
        cost(PathAlgorithm::Bidirectional)
    );
}

#[test]
fn test_absolute_layout() {
    let nodes = vec![
        node("left").at(3, 3),
        node("right").at(14, 3),
        node("below").at(3, 11).with_size(9, 3),
    ];
    let edges = vec![
        edge("left", "right"),
        edge("right", "below"),
        edge("below", "below"),
    ];
    let mut engine =
        DiagramLayout::new(config(LayoutStrategy::Absolute, PathAlgorithm::AStar)).unwrap();
    let result = engine.layout(&nodes, &edges).unwrap();

    print_result("Absolute", &result);
    let below = result.node("below").unwrap();
    assert_eq!((below.left, below.top, below.width), (3, 11, 9));
    assert_eq!((result.width, result.height), (14 + 5 + 3, 11 + 3 + 3));
    for routed in &result.edges {
        assert_route_well_formed(&result, routed);
    }
    generate_svg(&result, "boxroute_absolute.svg");
}

#[test]
fn test_absolute_overlap_is_rejected() {
    let nodes = vec![node("a").at(4, 4), node("b").at(6, 5)];
    let mut engine =
        DiagramLayout::new(config(LayoutStrategy::Absolute, PathAlgorithm::Dijkstra)).unwrap();
    let err = engine.layout(&nodes, &[]).unwrap_err();
    assert!(err.to_string().contains("overlap"), "{err}");
    assert_eq!(
        err,
        LayoutError::Geometry(GeometryViolation::Overlap {
            first: "a".to_string(),
            second: "b".to_string(),
        })
    );
}

#[test]
fn test_path_not_found_when_target_is_walled_in() {
    // the target sits in the corner of a grid that has no room around it
    let rects = vec![
        NodeRect {
            id: "a".to_string(),
            label: "A".to_string(),
            left: 1,
            top: 1,
            width: 4,
            height: 3,
        },
        NodeRect {
            id: "b".to_string(),
            label: "B".to_string(),
            left: 9,
            top: 6,
            width: 4,
            height: 3,
        },
    ];
    let mut map = VertexMap::for_layout(&rects, 13, 9);
    // wall off column 8 and row 5 around b
    map.map_and(|x, y| x != 8 && y != 5);

    let router = EdgeRouter::new(&map, &rects, PathSearch::new(PathStrategy::Bidirectional));
    let err = router.route(&edge("a", "b")).unwrap_err();
    assert!(matches!(err, LayoutError::PathNotFound { ref edge, .. } if edge == "a-b"));
}

#[test]
fn test_config_from_json() {
    let config: LayoutConfig = serde_json::from_str(
        r#"{
            "layoutStrategy": "random-shortest-square",
            "pathStrategy": "bidirectional",
            "nodeWidth": 4,
            "nodeHeight": 3,
            "layoutAttempts": 20
        }"#,
    )
    .unwrap();
    let (nodes, edges) = pipeline();
    let mut engine = DiagramLayout::with_shuffle(config, SeededShuffle::from_seed(1)).unwrap();
    let result = engine.layout(&nodes, &edges).unwrap();
    assert!(result.nodes.iter().all(|r| r.width == 4 && r.height == 3));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), nodes.len());
    assert!(json["edges"][0]["route"][0]["x"].is_number());
}

#[test]
fn test_random_layout_is_reproducible() {
    let (nodes, edges) = pipeline();
    let run = || {
        DiagramLayout::with_shuffle(
            config(LayoutStrategy::RandomShortestSquare, PathAlgorithm::Dijkstra),
            SeededShuffle::from_seed(2024),
        )
        .unwrap()
        .layout(&nodes, &edges)
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_shared_shuffle_across_engines() {
    let (nodes, edges) = pipeline();
    let shared = SharedShuffle::new(SeededShuffle::from_seed(5));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shuffle = shared.clone();
            let (nodes, edges) = (nodes.clone(), edges.clone());
            std::thread::spawn(move || {
                DiagramLayout::with_shuffle(
                    config(LayoutStrategy::RandomShortestSquare, PathAlgorithm::Dijkstra),
                    shuffle,
                )
                .unwrap()
                .layout(&nodes, &edges)
                .map(|result| result.nodes.len())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(nodes.len()));
    }
}

#[test]
#[traced_test]
fn test_random_layout_logs_retained_samples() {
    let (nodes, edges) = pipeline();
    DiagramLayout::with_shuffle(
        config(LayoutStrategy::RandomShortestSquare, PathAlgorithm::Dijkstra),
        SeededShuffle::from_seed(11),
    )
    .unwrap()
    .layout(&nodes, &edges)
    .unwrap();
    assert!(logs_contain("retained arrangement"));
    assert!(logs_contain("built vertex map"));
}

#[test]
fn test_layout_in_place() {
    #[derive(Debug, Clone, Default)]
    struct Block {
        name: String,
        rect: Option<NodeRect>,
    }

    impl LayoutNode for Block {
        fn id(&self) -> String {
            self.name.clone()
        }
        fn label(&self) -> String {
            self.name.to_uppercase()
        }
        fn size(&self) -> Option<(i32, i32)> {
            None
        }
        fn position(&self) -> Option<GridPoint> {
            None
        }
        fn set_rect(&mut self, rect: &NodeRect) {
            self.rect = Some(rect.clone());
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Wire {
        from: String,
        to: String,
        points: Vec<GridPoint>,
    }

    impl LayoutEdge for Wire {
        fn id(&self) -> String {
            format!("{}->{}", self.from, self.to)
        }
        fn source(&self) -> String {
            self.from.clone()
        }
        fn target(&self) -> String {
            self.to.clone()
        }
        fn set_route(&mut self, route: Vec<GridPoint>) {
            self.points = route;
        }
    }

    let mut blocks: Vec<Block> = ["cpu", "bus", "ram"]
        .into_iter()
        .map(|name| Block {
            name: name.to_string(),
            ..Default::default()
        })
        .collect();
    let mut wires = vec![
        Wire {
            from: "cpu".to_string(),
            to: "bus".to_string(),
            ..Default::default()
        },
        Wire {
            from: "bus".to_string(),
            to: "ram".to_string(),
            ..Default::default()
        },
    ];

    let config = config(LayoutStrategy::TopoSort, PathAlgorithm::Dijkstra);
    layout_in_place(&mut blocks, &mut wires, &config).unwrap();

    let cpu = blocks[0].rect.clone().unwrap();
    let bus = blocks[1].rect.clone().unwrap();
    assert_eq!(cpu.label, "CPU");
    assert!(cpu.left < bus.left);
    assert_eq!(wires[0].points.first(), Some(&cpu.center()));
    assert_eq!(wires[0].points.last(), Some(&bus.center()));
    assert!(!wires[1].points.is_empty());
}
