use std::cell::RefCell;
use std::rc::Rc;

use chart_boxselect::ChartError;
use chart_boxselect::api::ChartRuntime;
use chart_boxselect::core::{
    ChartHost, ChartId, ChartModel, ChartType, DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID, DataPoint,
    Dataset, LinearScale,
};
use chart_boxselect::extensions::{BOXSELECT_PLUGIN_ID, BoxSelectPlugin, ChartPlugin};
use chart_boxselect::interaction::PointerEvent;
use chart_boxselect::selection::{Interval, SelectCallbacks, SelectionOutcome};
use serde_json::Value;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    hooks: Rc<RefCell<Vec<&'static str>>>,
    allow_tooltips: bool,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, hooks: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            id: id.into(),
            hooks,
            allow_tooltips: true,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn after_init(&mut self, _chart: &dyn ChartHost) {
        self.hooks.borrow_mut().push("init");
    }

    fn after_event(&mut self, _chart: &mut dyn ChartHost, _event: &PointerEvent) {
        self.hooks.borrow_mut().push("event");
    }

    fn before_tooltip_draw(&self, _chart: &dyn ChartHost) -> bool {
        self.allow_tooltips
    }

    fn after_destroy(&mut self, _chart: ChartId) {
        self.hooks.borrow_mut().push("destroy");
    }
}

fn build_chart(id: u64) -> ChartModel {
    ChartModel::new(ChartId(id), ChartType::Scatter)
        .with_x_scale(
            DEFAULT_X_AXIS_ID,
            LinearScale::horizontal(0.0, 1024.0, 0.0, 1024.0).expect("x scale"),
        )
        .with_y_scale(
            DEFAULT_Y_AXIS_ID,
            LinearScale::vertical(0.0, 512.0, 0.0, 512.0).expect("y scale"),
        )
        .with_dataset(Dataset::new(vec![
            DataPoint::new(10.0, 10.0),
            DataPoint::new(100.0, 100.0),
        ]))
}

#[test]
fn registration_rejects_empty_and_duplicate_ids() {
    let hooks = Rc::new(RefCell::new(Vec::new()));
    let mut runtime = ChartRuntime::new(build_chart(1));

    let empty = runtime.register_plugin(Box::new(RecordingPlugin::new("", hooks.clone())));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    runtime
        .register_plugin(Box::new(RecordingPlugin::new("recorder", hooks.clone())))
        .expect("register recorder");
    let duplicate = runtime.register_plugin(Box::new(RecordingPlugin::new("recorder", hooks.clone())));
    assert!(matches!(duplicate, Err(ChartError::DuplicatePlugin(id)) if id == "recorder"));

    assert_eq!(runtime.plugin_count(), 1);
    assert_eq!(*hooks.borrow(), vec!["init"]);
}

#[test]
fn hooks_run_in_order_and_unregister_detaches() {
    let hooks = Rc::new(RefCell::new(Vec::new()));
    let mut runtime = ChartRuntime::new(build_chart(1));
    runtime
        .register_plugin(Box::new(RecordingPlugin::new("recorder", hooks.clone())))
        .expect("register recorder");
    runtime
        .register_plugin(Box::new(BoxSelectPlugin::new()))
        .expect("register box select");
    assert!(runtime.has_plugin(BOXSELECT_PLUGIN_ID));

    runtime.dispatch_event(PointerEvent::hover(1.0, 1.0));
    assert!(runtime.unregister_plugin("recorder"));
    assert!(!runtime.unregister_plugin("recorder"));
    runtime.dispatch_event(PointerEvent::hover(2.0, 2.0));

    assert_eq!(*hooks.borrow(), vec!["init", "event", "destroy"]);
    assert_eq!(runtime.plugin_count(), 1);
    assert!(runtime.plugin::<RecordingPlugin>(BOXSELECT_PLUGIN_ID).is_none());
}

#[test]
fn any_plugin_can_veto_tooltips() {
    let hooks = Rc::new(RefCell::new(Vec::new()));
    let mut runtime = ChartRuntime::new(build_chart(1));
    runtime
        .register_plugin(Box::new(BoxSelectPlugin::new()))
        .expect("register box select");
    assert!(runtime.tooltips_enabled());

    let mut veto = RecordingPlugin::new("veto", hooks);
    veto.allow_tooltips = false;
    runtime
        .register_plugin(Box::new(veto))
        .expect("register veto");
    assert!(!runtime.tooltips_enabled());
}

#[test]
fn into_chart_notifies_plugins() {
    let hooks = Rc::new(RefCell::new(Vec::new()));
    let mut runtime = ChartRuntime::new(build_chart(5));
    runtime
        .register_plugin(Box::new(RecordingPlugin::new("recorder", hooks.clone())))
        .expect("register recorder");

    let chart = runtime.into_chart();
    assert_eq!(chart.id(), ChartId(5));
    assert_eq!(*hooks.borrow(), vec!["init", "destroy"]);
}

#[test]
fn one_plugin_keeps_independent_sessions_per_chart() {
    let selections = Rc::new(RefCell::new(Vec::new()));
    let sink = selections.clone();
    let mut plugin = BoxSelectPlugin::new().with_callbacks(
        SelectCallbacks::new().with_after_select(move |bounds, datasets| {
            sink.borrow_mut().push((bounds.x_range, datasets.len()));
        }),
    );
    let mut left = build_chart(1);
    let mut right = build_chart(2).with_options(Value::Null);

    plugin.after_init(&left);
    plugin.after_init(&right);
    assert_eq!(plugin.session_count(), 2);

    plugin.after_event(&mut left, &PointerEvent::down(0.0, 512.0));
    plugin.after_event(&mut right, &PointerEvent::hover(300.0, 300.0));
    assert!(plugin.session(ChartId(1)).expect("left").is_dragging());
    assert!(!plugin.session(ChartId(2)).expect("right").is_dragging());
    assert!(!plugin.before_tooltip_draw(&left));
    assert!(plugin.before_tooltip_draw(&right));

    let outcome = plugin.handle_event(&mut left, &PointerEvent::up(50.0, 462.0));
    assert!(matches!(
        outcome,
        Some(SelectionOutcome::Committed {
            selected_points: 1,
            ..
        })
    ));
    assert_eq!(
        plugin.last_selection(ChartId(1)),
        Some(Interval { min: 0.0, max: 50.0 })
    );
    assert_eq!(plugin.last_selection(ChartId(2)), None);
    assert_eq!(*selections.borrow(), vec![(Some(Interval { min: 0.0, max: 50.0 }), 1)]);
    assert_eq!(left.redraw_requests(), 2);
    assert_eq!(right.redraw_requests(), 1);

    plugin.after_destroy(ChartId(1));
    assert!(plugin.session(ChartId(1)).is_none());
    assert!(!plugin.forget_chart(ChartId(1)));
    assert_eq!(plugin.session_count(), 1);
}

#[test]
fn short_drag_reports_discarded_outcome() {
    let mut plugin = BoxSelectPlugin::new();
    let mut chart = build_chart(1);
    plugin.after_init(&chart);

    plugin.handle_event(&mut chart, &PointerEvent::down(10.0, 10.0));
    let outcome = plugin.handle_event(&mut chart, &PointerEvent::up(10.5, 80.0));
    assert_eq!(outcome, Some(SelectionOutcome::Discarded));
}

#[test]
fn reinitializing_a_chart_resets_its_session() {
    let mut plugin = BoxSelectPlugin::new();
    let mut chart = build_chart(1);
    plugin.after_init(&chart);
    plugin.handle_event(&mut chart, &PointerEvent::down(10.0, 10.0));
    assert!(plugin.session(ChartId(1)).expect("session").is_dragging());

    plugin.after_init(&chart);
    let session = plugin.session(ChartId(1)).expect("session");
    assert!(!session.is_dragging());
    assert!(!session.is_enabled());
}
