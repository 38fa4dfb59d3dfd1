use countup_core::{AnimationRequest, Board, Config, CounterEvent, Inputs};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    label: String,
    request: AnimationRequest,
    #[serde(rename = "final")]
    final_text: String,
}

fn load(name: &str) -> Vec<Case> {
    countup_test_fixtures::counters::load(name).expect("counter fixture")
}

fn run_to_idle(board: &mut Board, inputs: Inputs) -> Vec<CounterEvent> {
    let mut events = board.update(inputs).events.clone();
    let mut guard = 0;
    while !board.is_idle() {
        board.clock().advance(1000.0 / 60.0);
        events.extend(board.update(Inputs::default()).events.iter().cloned());
        guard += 1;
        assert!(guard < 10_000, "board never went idle");
    }
    events
}

#[test]
fn about_stats_row_counts_up_staggered() {
    let cases = load("about-stats");
    let reqs: Vec<AnimationRequest> = cases.iter().map(|c| c.request.clone()).collect();
    let mut board = Board::manual(Config::default()).unwrap();
    let ids = board.mount_staggered(&reqs).unwrap();

    let mut inputs = Inputs::default();
    for id in &ids {
        inputs = inputs.with_ratio(*id, 0.4);
    }
    let events = run_to_idle(&mut board, inputs);

    for (case, id) in cases.iter().zip(&ids) {
        assert_eq!(board.text(*id), Some(case.final_text.as_str()), "{}", case.label);
    }

    // Index i waits i * 200ms before interpolating.
    for (i, id) in ids.iter().enumerate() {
        let started = events
            .iter()
            .find_map(|e| match e {
                CounterEvent::Started { counter, time_ms } if counter == id => Some(*time_ms),
                _ => None,
            })
            .expect("every card starts");
        let expected = i as f64 * 200.0;
        assert!(started >= expected, "card {i} started at {started}");
        assert!(started < expected + 20.0, "card {i} started late at {started}");
    }

    let completed = events
        .iter()
        .filter(|e| matches!(e, CounterEvent::Completed { .. }))
        .count();
    assert_eq!(completed, ids.len());
}

#[test]
fn edge_cases_land_on_their_final_text() {
    for case in load("edge-cases") {
        let mut board = Board::manual(Config::default()).unwrap();
        let id = board.mount(&case.request).unwrap();
        run_to_idle(&mut board, Inputs::visible(id));
        assert_eq!(board.text(id), Some(case.final_text.as_str()), "{}", case.label);
        assert!(board.state(id).unwrap().is_complete, "{}", case.label);
    }
}
