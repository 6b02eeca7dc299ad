use tracing_subscriber::EnvFilter;

pub const DIAMOND_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/diamond.txt"
));

pub const TIE_BREAK_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/tie_break.txt"
));

pub const TIE_BREAK_REVERSED_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/tie_break_reversed.txt"
));

pub const DETOUR_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/detour.txt"
));

pub const GREEDY_TRAP_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/greedy_trap.txt"
));

pub const UNIT_MAZE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/unit_maze.txt"
));

pub const DISCONNECTED_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/disconnected.txt"
));

pub const PARKING_TWO_LANES_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/parking/two_lanes.txt"
));

pub const DUNGEON_SMALL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dungeon/small.txt"
));

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`.
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
