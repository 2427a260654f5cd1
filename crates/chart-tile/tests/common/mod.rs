// File: crates/chart-tile/tests/common/mod.rs
// Purpose: Recording engine and fixtures shared by the tile integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{ChartOption, Size};
use chart_tile::{ChartEngine, Host, Reading, ThemeMode, Widget, WidgetConfig};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Init(ChartOption),
    SetOption { option: ChartOption, merge: bool },
    Resize,
    Dispose,
}

pub type Log = Rc<RefCell<Vec<Call>>>;

/// Engine double that records every call and keeps a merged option.
pub struct RecordingEngine {
    pub option: ChartOption,
    log: Log,
}

impl ChartEngine for RecordingEngine {
    fn set_option(&mut self, option: ChartOption, merge: bool) {
        self.log.borrow_mut().push(Call::SetOption { option: option.clone(), merge });
        if merge {
            self.option.merge(option);
        } else {
            self.option = option;
        }
    }

    fn resize(&mut self) {
        self.log.borrow_mut().push(Call::Resize);
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().push(Call::Dispose);
    }
}

pub fn recording_factory(log: &Log) -> impl FnMut(ChartOption) -> RecordingEngine + 'static {
    let log = Rc::clone(log);
    move |base: ChartOption| {
        log.borrow_mut().push(Call::Init(base.clone()));
        RecordingEngine { option: base, log: Rc::clone(&log) }
    }
}

pub fn recording_widget(config: WidgetConfig) -> (Widget<RecordingEngine>, Log) {
    let log: Log = Rc::default();
    let widget = Widget::new(config, recording_factory(&log));
    (widget, log)
}

pub fn host(theme: ThemeMode) -> Host {
    Host::new(Size::new(800, 300), theme)
}

pub fn reading(ordinal: u64) -> Reading {
    Reading::new(ordinal, ordinal as f64 * 1_000.0, ordinal as f64 * 2.0)
}

/// Calls made after the engine was created.
pub fn patches(log: &Log) -> Vec<Call> {
    log.borrow().iter().filter(|c| !matches!(c, Call::Init(_))).cloned().collect()
}

pub fn count(log: &Log, pred: impl Fn(&Call) -> bool) -> usize {
    log.borrow().iter().filter(|c| pred(c)).count()
}
