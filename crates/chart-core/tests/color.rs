// File: crates/chart-core/tests/color.rs
// Purpose: CSS color parsing and display.

use chart_core::{ColorParseError, Rgba};

#[test]
fn parses_rgba_with_leading_dot_alpha() {
    let c: Rgba = "rgba(153, 250, 255, .08)".parse().expect("parse");
    assert_eq!(c, Rgba::rgba(153, 250, 255, 0.08));
    let c: Rgba = "rgba(0, 0, 0, .6)".parse().expect("parse");
    assert_eq!(c, Rgba::rgba(0, 0, 0, 0.6));
}

#[test]
fn parses_hex_and_rgb() {
    assert_eq!("#181923".parse::<Rgba>().unwrap(), Rgba::rgb(0x18, 0x19, 0x23));
    assert_eq!("#f7f7f7".parse::<Rgba>().unwrap(), Rgba::rgb(0xf7, 0xf7, 0xf7));
    assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::rgb(255, 255, 255));
    assert_eq!("rgb(1, 2, 3)".parse::<Rgba>().unwrap(), Rgba::rgb(1, 2, 3));
}

#[test]
fn rejects_bad_input() {
    assert!(matches!("#12345".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
    assert!(matches!("rgb(300, 0, 0)".parse::<Rgba>(), Err(ColorParseError::Range(_))));
    assert!(matches!("rgba(0, 0, 0, 1.5)".parse::<Rgba>(), Err(ColorParseError::Range(_))));
    assert!(matches!("hsl(0, 0%, 0%)".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
    assert!(matches!("rgba(0, 0, 0)".parse::<Rgba>(), Err(ColorParseError::Syntax(_))));
}

#[test]
fn display_round_trips_through_css() {
    assert_eq!(Rgba::rgb(0x18, 0x19, 0x23).to_string(), "#181923");
    assert_eq!(Rgba::rgba(0, 0, 0, 0.2).to_string(), "rgba(0, 0, 0, 0.2)");
}

#[test]
fn fade_scales_alpha() {
    let c = Rgba::rgba(10, 10, 10, 0.5).fade(0.5);
    assert_eq!(c.a, 0.25);
    assert_eq!(Rgba::rgb(1, 1, 1).alpha_u8(), 255);
}
