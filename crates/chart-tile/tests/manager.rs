// File: crates/chart-tile/tests/manager.rs
// Purpose: Chart instance manager lifecycle errors and disjoint patch application.

mod common;

use chart_core::{Chart, ChartOption, Size};
use chart_tile::{base_option, resolve, ChartError, ChartInstanceManager, PatchRequest, ThemeMode, Window};
use common::{reading, recording_factory, Call, Log};

fn chart_manager() -> ChartInstanceManager<Chart> {
    ChartInstanceManager::new(|base| Chart::headless(Size::default(), base))
}

fn filled_window(n: u64) -> Window {
    let mut window = Window::new(10);
    for i in 1..=n {
        window.append(reading(i));
    }
    window
}

#[test]
fn second_mount_is_rejected() {
    let mut manager = chart_manager();
    let handle = manager.mount(ChartOption::default()).unwrap();
    assert_eq!(manager.mount(ChartOption::default()), Err(ChartError::AlreadyMounted));
    assert!(manager.is_mounted());
    manager.dispose(handle).unwrap();
    assert!(!manager.is_mounted());
    assert!(manager.mount(ChartOption::default()).is_ok());
}

#[test]
fn disposed_handle_is_stale() {
    let mut manager = chart_manager();
    let handle = manager.mount(ChartOption::default()).unwrap();
    manager.dispose(handle).unwrap();

    assert_eq!(manager.apply_patch(handle, &PatchRequest::Resize), Err(ChartError::NotMounted));
    assert_eq!(manager.resize(handle), Err(ChartError::NotMounted));
    assert!(manager.inspect(handle).is_err());
    assert_eq!(manager.dispose(handle), Err(ChartError::AlreadyDisposed));
}

#[test]
fn old_handle_does_not_reach_new_instance() {
    let mut manager = chart_manager();
    let first = manager.mount(ChartOption::default()).unwrap();
    manager.dispose(first).unwrap();
    let second = manager.mount(ChartOption::default()).unwrap();

    assert_ne!(first, second);
    assert_eq!(manager.apply_patch(first, &PatchRequest::Resize), Err(ChartError::NotMounted));
    assert_eq!(manager.dispose(first), Err(ChartError::AlreadyDisposed));
    assert!(manager.is_mounted());
}

#[test]
fn theme_patch_leaves_data_alone() {
    let window = filled_window(5);
    let mut manager = chart_manager();
    let handle = manager.mount(base_option(&resolve(ThemeMode::Light), &window.snapshot())).unwrap();
    let before = manager.inspect(handle).unwrap().option().clone();

    manager.apply_patch(handle, &PatchRequest::ThemeChanged(resolve(ThemeMode::Dark))).unwrap();
    let after = manager.inspect(handle).unwrap().option();

    assert_eq!(after.series_data(0), before.series_data(0));
    assert_eq!(after.grid, before.grid);
    assert_eq!(after.x_axis, before.x_axis);
    assert_eq!(after.series[0].color, resolve(ThemeMode::Dark).to_option().series[0].color);
    assert_ne!(after.tooltip, before.tooltip);
}

#[test]
fn data_patch_leaves_style_alone() {
    let mut window = filled_window(3);
    let mut manager = chart_manager();
    let handle = manager.mount(base_option(&resolve(ThemeMode::Dark), &window.snapshot())).unwrap();
    let before = manager.inspect(handle).unwrap().option().clone();

    let snapshot = window.append(reading(4));
    manager.apply_patch(handle, &PatchRequest::DataAppended(snapshot.clone())).unwrap();
    let after = manager.inspect(handle).unwrap().option();

    assert_eq!(after.tooltip, before.tooltip);
    assert_eq!(after.series[0].color, before.series[0].color);
    assert_eq!(after.series[0].area_style, before.series[0].area_style);
    assert_eq!(after.series_data(0), Some(snapshot.points().as_slice()));
}

#[test]
fn resize_changes_no_configuration() {
    let window = filled_window(3);
    let mut manager = chart_manager();
    let handle = manager.mount(base_option(&resolve(ThemeMode::Light), &window.snapshot())).unwrap();
    let before = manager.inspect(handle).unwrap().option().clone();

    manager.apply_patch(handle, &PatchRequest::Resize).unwrap();
    manager.resize(handle).unwrap();

    assert_eq!(manager.inspect(handle).unwrap().option(), &before);
}

#[test]
fn repeated_data_patch_is_idempotent() {
    let window = filled_window(6);
    let mut manager = chart_manager();
    let handle = manager.mount(base_option(&resolve(ThemeMode::Light), &Window::new(10).snapshot())).unwrap();
    let request = PatchRequest::DataAppended(window.snapshot());

    manager.apply_patch(handle, &request).unwrap();
    let once = manager.inspect(handle).unwrap().option().clone();
    manager.apply_patch(handle, &request).unwrap();
    assert_eq!(manager.inspect(handle).unwrap().option(), &once);
}

#[test]
fn patches_are_merged_and_resize_reaches_engine() {
    let log: Log = Default::default();
    let mut manager = ChartInstanceManager::new(recording_factory(&log));
    let handle = manager.mount(ChartOption::default()).unwrap();

    manager.apply_patch(handle, &PatchRequest::ThemeChanged(resolve(ThemeMode::Dark))).unwrap();
    manager.apply_patch(handle, &PatchRequest::Resize).unwrap();
    manager.dispose(handle).unwrap();

    let calls = log.borrow();
    assert!(matches!(calls[0], Call::Init(_)));
    assert!(matches!(&calls[1], Call::SetOption { merge: true, option } if option.series[0].data.is_none()));
    assert_eq!(calls[2], Call::Resize);
    assert_eq!(calls[3], Call::Dispose);
    assert_eq!(calls.len(), 4);
}
