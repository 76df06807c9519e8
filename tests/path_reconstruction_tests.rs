use ordered_float::OrderedFloat;
use sssp_compare::{
    BellmanFord, Dijkstra, EdgeSpec, Error, GraphSpec, NodeSpec, ShortestPathAlgorithm,
    ShortestPathResult, Tsinghua,
};

type W = OrderedFloat<f64>;

fn graph(nodes: &[&str], edges: &[(&str, &str, f64)]) -> GraphSpec {
    GraphSpec {
        nodes: nodes.iter().map(|id| NodeSpec::new(*id)).collect(),
        edges: edges
            .iter()
            .map(|(s, t, w)| EdgeSpec::new(*s, *t, *w))
            .collect(),
    }
}

fn diamond() -> GraphSpec {
    graph(
        &["S", "A", "B", "T"],
        &[
            ("S", "A", 1.0),
            ("S", "B", 2.0),
            ("A", "T", 3.0),
            ("B", "T", 1.0),
        ],
    )
}

// Every consecutive pair in a reported path must be an input edge, and some
// choice of matching edge weights must sum to the reported target distance.
#[test]
fn path_edges_exist_and_sum_to_target_distance() {
    let g = diamond();
    let result: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("T")).unwrap();

    assert_eq!(result.path, vec!["S", "B", "T"]);

    let mut total = 0.0;
    for pair in result.path.windows(2) {
        let weight = g
            .edges
            .iter()
            .filter(|e| e.source == pair[0] && e.target == pair[1])
            .map(|e| e.weight)
            .fold(f64::INFINITY, f64::min);
        assert!(weight.is_finite(), "no input edge {} -> {}", pair[0], pair[1]);
        total += weight;
    }
    assert_eq!(
        OrderedFloat(total),
        result.dist[result.id_to_index["T"]]
    );
}

#[test]
fn unreachable_target_yields_empty_path_and_infinite_distance() {
    let g = graph(&["S", "A", "X"], &[("S", "A", 1.0)]);

    let dijkstra: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("X")).unwrap();
    let bellman: ShortestPathResult<W> = BellmanFord::new().run(&g, "S", Some("X")).unwrap();
    let tsinghua: ShortestPathResult<W> = Tsinghua::new().run(&g, "S", Some("X")).unwrap();

    for result in [&dijkstra, &bellman, &tsinghua] {
        assert!(result.path.is_empty());
        assert!(result.dist[result.id_to_index["X"]].is_infinite());
    }
}

#[test]
fn absent_target_yields_empty_path_but_full_distances() {
    let g = diamond();
    let result: ShortestPathResult<W> = BellmanFord::new().run(&g, "S", None).unwrap();

    assert!(result.path.is_empty());
    assert_eq!(result.dist[result.id_to_index["T"]], OrderedFloat(3.0));
}

#[test]
fn unknown_target_id_is_treated_as_no_target() {
    let g = diamond();
    let result: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("nope")).unwrap();

    assert!(result.path.is_empty());
    // Distances are still computed for every node.
    assert_eq!(result.dist[result.id_to_index["T"]], OrderedFloat(3.0));
}

#[test]
fn source_as_target_yields_singleton_path() {
    let g = diamond();
    let result: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("S")).unwrap();

    assert_eq!(result.path, vec!["S"]);
    assert_eq!(result.dist[result.id_to_index["S"]], OrderedFloat(0.0));
}

#[test]
fn edges_with_unknown_endpoints_are_dropped_silently() {
    let g = graph(
        &["S", "T"],
        &[
            ("S", "T", 5.0),
            ("S", "ghost", 1.0),
            ("ghost", "T", 1.0),
        ],
    );
    let result: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("T")).unwrap();

    // The phantom shortcut does not exist; only the direct edge counts.
    assert_eq!(result.dist[result.id_to_index["T"]], OrderedFloat(5.0));
    assert_eq!(result.path, vec!["S", "T"]);
}

#[test]
fn parallel_edges_relax_independently() {
    let g = graph(&["S", "T"], &[("S", "T", 5.0), ("S", "T", 3.0)]);

    let dijkstra: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("T")).unwrap();
    let bellman: ShortestPathResult<W> = BellmanFord::new().run(&g, "S", Some("T")).unwrap();

    assert_eq!(dijkstra.dist[dijkstra.id_to_index["T"]], OrderedFloat(3.0));
    assert_eq!(bellman.dist[bellman.id_to_index["T"]], OrderedFloat(3.0));
}

#[test]
fn invalid_source_is_rejected_by_every_engine() {
    let g = diamond();

    let dijkstra: sssp_compare::Result<ShortestPathResult<W>> =
        Dijkstra::new().run(&g, "missing", None);
    let bellman: sssp_compare::Result<ShortestPathResult<W>> =
        BellmanFord::new().run(&g, "missing", None);
    let tsinghua: sssp_compare::Result<ShortestPathResult<W>> =
        Tsinghua::new().run(&g, "missing", None);

    for result in [dijkstra, bellman, tsinghua] {
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidSource(id) if id == "missing"
        ));
    }
}

#[test]
fn repeat_runs_are_identical() {
    let g = diamond();

    let first: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("T")).unwrap();
    let second: ShortestPathResult<W> = Dijkstra::new().run(&g, "S", Some("T")).unwrap();
    assert_eq!(first, second);

    let first: ShortestPathResult<W> = BellmanFord::new().run(&g, "S", Some("T")).unwrap();
    let second: ShortestPathResult<W> = BellmanFord::new().run(&g, "S", Some("T")).unwrap();
    assert_eq!(first, second);

    let first: ShortestPathResult<W> = Tsinghua::new().run(&g, "S", Some("T")).unwrap();
    let second: ShortestPathResult<W> = Tsinghua::new().run(&g, "S", Some("T")).unwrap();
    assert_eq!(first, second);
}
