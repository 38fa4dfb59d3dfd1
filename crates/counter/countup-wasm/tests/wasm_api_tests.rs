#![cfg(target_arch = "wasm32")]
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use countup_core::Outputs;
use countup_wasm::{abi_version, format_count, CountUpBoard};

wasm_bindgen_test_configure!(run_in_browser);

fn js(v: serde_json::Value) -> JsValue {
    swb::to_value(&v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(CountUpBoard::new(JsValue::UNDEFINED).is_ok());
    assert!(CountUpBoard::new(js(json!({ "visibility_threshold": 0.5 }))).is_ok());
    assert!(CountUpBoard::new(js(json!({ "visibility_threshold": 0.0 }))).is_err());
}

#[wasm_bindgen_test]
fn mount_observe_and_finish() {
    let mut board = CountUpBoard::new(JsValue::NULL).unwrap();
    let id = board
        .mount(js(json!({ "end": 500, "duration": 2500, "suffix": "+" })))
        .unwrap();
    assert_eq!(board.text(id).as_deref(), Some("0+"));

    board.observe(id, 0.6);
    let out: Outputs = swb::from_value(board.update(0.0).unwrap()).unwrap();
    assert!(out.wants_frame);

    let out: Outputs = swb::from_value(board.update(2600.0).unwrap()).unwrap();
    assert!(!out.wants_frame);
    assert_eq!(board.text(id).as_deref(), Some("500+"));
    assert!(board.is_idle());
}

#[wasm_bindgen_test]
fn mount_rejects_bad_duration() {
    let mut board = CountUpBoard::new(JsValue::NULL).unwrap();
    assert!(board.mount(js(json!({ "end": 1, "duration": 0 }))).is_err());
    assert!(board.mount_json("{\"start\": 1}").is_err());
}

#[wasm_bindgen_test]
fn staggered_row_and_unmount() {
    let mut board = CountUpBoard::new(JsValue::NULL).unwrap();
    let ids = board
        .mount_staggered(js(json!([{ "end": 1 }, { "end": 2 }, { "end": 3 }])))
        .unwrap();
    assert_eq!(ids.len(), 3);
    for id in &ids {
        board.observe(*id, 1.0);
    }
    board.update(0.0).unwrap();
    assert!(board.unmount(ids[2]));
    assert!(board.text(ids[2]).is_none());
    assert!(!board.unmount(ids[2]));
}

#[wasm_bindgen_test]
fn format_helper_truncates() {
    assert_eq!(format_count(4.97, 0, "", ""), "4");
    assert_eq!(format_count(4.97, 1, "", "★"), "5.0★");
}

#[wasm_bindgen_test]
fn oversized_decimals_fail_cleanly() {
    let mut board = CountUpBoard::new(JsValue::NULL).unwrap();
    assert!(board.mount(js(json!({ "end": 5, "decimals": 70000 }))).is_err());
    assert!(board.mount_json(r#"{ "end": 5, "decimals": 100 }"#).is_ok());
    assert_eq!(format_count(1.5, 70_000, "", "").len(), "1.".len() + 100);
}

#[wasm_bindgen_test]
fn system_clock_runs_in_the_browser() {
    use countup_core::{Clock, SystemClock};
    let clock = SystemClock::default();
    let t0 = clock.now_ms();
    assert!(clock.now_ms() >= t0);
}

#[wasm_bindgen_test]
fn carousel_swipes_and_auto_advances() {
    use countup_wasm::SlideCarousel;

    let mut deck = SlideCarousel::new(3, JsValue::UNDEFINED).unwrap();
    assert_eq!(deck.start(0.0), 0);
    assert_eq!(deck.next_timer_ms(), Some(5000.0));

    deck.touch_start(200.0);
    deck.touch_move(150.0);
    assert_eq!(deck.touch_end(100.0), None);

    deck.touch_start(200.0);
    deck.touch_move(100.0);
    assert_eq!(deck.touch_end(1000.0).as_deref(), Some("left"));
    assert_eq!(deck.current(), 1);
    assert_eq!(deck.next_timer_ms(), Some(6000.0));

    assert_eq!(deck.update(5000.0), 1);
    assert_eq!(deck.update(6000.0), 2);
    assert_eq!(deck.next(6500.0), 0);
    assert_eq!(deck.previous(6600.0), 2);
    assert!(deck.select(7, 7000.0).is_err());
    assert!(SlideCarousel::new(0, JsValue::NULL).is_err());
}
