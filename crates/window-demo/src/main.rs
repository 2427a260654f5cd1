// File: crates/window-demo/src/main.rs
// Summary: Windowed host for the live tile: window resizes drive the width observer, `T` flips
//          the theme, a timer feeds synthetic ticks, and frames are blitted via softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chart_core::Size;
use chart_tile::{ChartTile, DataSource, Host, OverlayColors, SyntheticSource, ThemeMode, WidgetConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Debug, Parser)]
#[command(name = "tile-window-demo", about = "Live area-chart tile in a native window")]
struct Args {
    /// TOML file with tile settings; TILE_* environment variables override it.
    #[arg(short, long, env = "TILE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "dark")]
    theme: ThemeMode,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();

    let config = WidgetConfig::load(args.config.as_deref())?;
    let mut source = match args.seed {
        Some(seed) => SyntheticSource::seeded(seed, config.window_len),
        None => SyntheticSource::new(config.window_len),
    };
    let interval = config.tick_interval();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Live Tile: Window Demo")
        .with_inner_size(winit::dpi::PhysicalSize::new(960u32, config.height_px + 40))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;

    let mut size = window.inner_size();
    let host = Host::new(Size::new(size.width.max(1), config.height_px), args.theme);
    let mut tile = ChartTile::for_host(config, &host);
    let backfill = source.backfill(source.window_len());
    tile.mount_seeded(&host, backfill)?;

    let mut cursor: Option<(f32, f32)> = None;
    let mut next_tick = Instant::now() + interval;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::WaitUntil(next_tick);
        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                host.tick(source.next_reading());
                next_tick = Instant::now() + interval;
                *cf = ControlFlow::WaitUntil(next_tick);
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                    ..
                } => {
                    tile.unmount();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    host.resize_container(size.width.max(1));
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x as f32, position.y as f32));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::T), .. },
                    ..
                } => {
                    let theme = host.toggle_theme();
                    tracing::info!(%theme, "theme switched");
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = present(&tile, &mut surface, size.width, size.height, cursor) {
                    tracing::error!(%err, "frame not presented");
                }
            }
            _ => {}
        }
    });
}

/// Render the tile and blit it to the top of the window; the rest of the
/// window is filled with the tile background.
fn present(
    tile: &ChartTile,
    surface: &mut softbuffer::Surface,
    width: u32,
    height: u32,
    cursor: Option<(f32, f32)>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    surface.resize(w, h)?;

    let tile_height = tile.config().height_px as f32;
    let crosshair = cursor.filter(|&(_, y)| y < tile_height);
    let (rgba, tw, th, stride) = tile.render_rgba8(crosshair)?;

    let background = OverlayColors::for_theme(tile.theme()).background;
    let fill = pack(background.r, background.g, background.b);
    let (width, height) = (width as usize, height as usize);
    let mut frame = surface.buffer_mut()?;
    frame.fill(fill);
    for y in 0..(th as usize).min(height) {
        let src = &rgba[y * stride..y * stride + tw as usize * 4];
        let dst = &mut frame[y * width..(y + 1) * width];
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *out = pack(px[0], px[1], px[2]);
        }
    }
    frame.present()?;
    Ok(())
}

fn pack(r: u8, g: u8, b: u8) -> u32 {
    (0xff << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
