//! Integration tests for the countdown controller.

use std::cell::RefCell;
use std::rc::Rc;

use backstraightener_core::{
    Alert, AlertError, Config, ControllerConfig, CountdownController, DisplayTriple, Event,
    RunState, WheelPanel,
};
use proptest::prelude::*;

/// Panel whose recordings stay readable after the controller takes ownership.
#[derive(Clone, Default)]
struct SharedPanel {
    shown: Rc<RefCell<Vec<DisplayTriple>>>,
    editable: Rc<RefCell<bool>>,
}

impl WheelPanel for SharedPanel {
    fn show(&mut self, display: DisplayTriple) {
        self.shown.borrow_mut().push(display);
    }

    fn set_editable(&mut self, editable: bool) {
        *self.editable.borrow_mut() = editable;
    }
}

#[derive(Clone, Default)]
struct SharedAlert {
    fired: Rc<RefCell<u32>>,
}

impl Alert for SharedAlert {
    fn fire(&mut self, _duration_ms: u64) -> Result<(), AlertError> {
        *self.fired.borrow_mut() += 1;
        Ok(())
    }
}

fn controller() -> (
    CountdownController<SharedPanel, SharedAlert>,
    SharedPanel,
    SharedAlert,
) {
    let panel = SharedPanel::default();
    let alert = SharedAlert::default();
    let c = CountdownController::new(ControllerConfig::default(), panel.clone(), alert.clone());
    (c, panel, alert)
}

#[test]
fn test_full_countdown_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("alert.vibrate_ms", "750").unwrap();
    cfg.save_to(&path).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    let panel = SharedPanel::default();
    let mut c = CountdownController::new(cfg.controller_config(), panel.clone(), SharedAlert::default());

    let (h, m, s) = cfg.wheels().clamp(0, 0, 75);
    c.request_start(h.into(), m.into(), s.into());
    assert_eq!(c.remaining_secs(), 59);
    assert!(!*panel.editable.borrow());

    let mut last = None;
    while c.is_running() {
        last = c.on_tick();
    }
    assert!(matches!(last, Some(Event::CountdownCompleted { ticks: 59, .. })));
    assert!(*panel.editable.borrow());
    assert_eq!(panel.shown.borrow().len(), 59);
}

#[test]
fn test_events_serialize_as_json_lines() {
    let (mut c, _, _) = controller();
    let mut lines = Vec::new();
    lines.push(serde_json::to_string(&c.request_start(0, 0, 2).unwrap()).unwrap());
    while let Some(event) = c.on_tick() {
        lines.push(serde_json::to_string(&event).unwrap());
    }

    let types: Vec<String> = lines
        .iter()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, ["countdown_started", "tick", "countdown_completed"]);
}

#[test]
fn test_snapshot_after_completion_is_idle_at_zero() {
    let (mut c, _, alert) = controller();
    c.request_start(0, 0, 1);
    c.on_tick();

    match c.snapshot() {
        Event::StateSnapshot { state, remaining_secs, display, .. } => {
            assert_eq!(state, RunState::Idle);
            assert_eq!(remaining_secs, 0);
            assert_eq!(display, DisplayTriple::ZERO);
        }
        other => panic!("Expected StateSnapshot, got {other:?}"),
    }
    assert_eq!(*alert.fired.borrow(), 1);
}

proptest! {
    #[test]
    fn start_sets_initial_duration(h in 0i64..100, m in 0i64..60, s in 0i64..60) {
        let (mut c, _, _) = controller();
        c.request_start(h, m, s);
        prop_assert_eq!(c.remaining_secs(), (h * 3600 + m * 60 + s) as u64);
    }

    #[test]
    fn display_matches_remaining_on_every_tick(m in 0i64..3, s in 0i64..60) {
        let (mut c, panel, alert) = controller();
        c.request_start(0, m, s);

        let mut observed = 0;
        while c.is_running() {
            c.on_tick();
            let shown = *panel.shown.borrow().last().unwrap();
            prop_assert_eq!(shown.total_secs(), c.remaining_secs());
            prop_assert!(shown.minutes < 60 && shown.seconds < 60);
            observed += 1;
        }
        prop_assert_eq!(observed, m * 60 + s);
        prop_assert_eq!(*alert.fired.borrow(), 1);
    }

    #[test]
    fn display_triple_is_pure(d in 0u64..360_000) {
        let a = DisplayTriple::from_secs(d);
        prop_assert_eq!(a, DisplayTriple::from_secs(d));
        prop_assert_eq!(a.total_secs(), d);
        prop_assert!(a.hours < 100);
    }

    #[test]
    fn restart_while_running_changes_nothing(first in 2u64..500, h in 0i64..100, m in 0i64..60) {
        let (mut c, _, _) = controller();
        c.request_start(0, 0, first as i64);
        c.on_tick();

        prop_assert!(c.request_start(h, m, 0).is_none());
        prop_assert_eq!(c.remaining_secs(), first - 1);
        prop_assert_eq!(c.ticks(), 1);
    }
}
