// File: crates/demo/src/main.rs
// Summary: Mounts a live tile on a headless host, feeds it ticks, flips the theme and resizes
//          the container mid-session, and writes PNG frames along the way.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::Size;
use chart_tile::{ChartTile, DataSource, Host, SyntheticSource, WidgetConfig};
use clap::Parser;

use args::Args;
use replay::CsvReplay;

mod args;
mod logger;
mod replay;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(&args.log_filter);

    let config = WidgetConfig::load(args.config.as_deref())?;
    let mut source: Box<dyn DataSource> = match &args.csv {
        Some(path) => Box::new(CsvReplay::open(path, config.window_len)?),
        None => Box::new(match args.seed {
            Some(seed) => SyntheticSource::seeded(seed, config.window_len),
            None => SyntheticSource::new(config.window_len),
        }),
    };
    // the tile only needs the window length from its source
    let config = WidgetConfig { window_len: source.window_len(), ..config };

    let host = Host::new(Size::new(args.width, config.height_px), args.theme);
    let mut tile = ChartTile::for_host(config, &host);
    let seed: Vec<_> = if args.prefill {
        (0..tile.config().window_len).filter_map(|_| source.next_reading()).collect()
    } else {
        Vec::new()
    };
    tile.mount_seeded(&host, seed).context("mounting tile")?;

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let frame_every = args.frame_every.max(1);
    let mut written = 0usize;
    for tick in 1..=args.ticks {
        host.tick(source.next_reading());

        if tick == args.ticks / 3 {
            let theme = host.toggle_theme();
            tracing::info!(tick, %theme, "theme switched");
        }
        if tick == args.ticks * 2 / 3 {
            let width = (args.width * 3 / 4).max(1);
            host.resize_container(width);
            tracing::info!(tick, width, "container resized");
        }

        if tick % frame_every == 0 || tick == args.ticks {
            let path = frame_path(&args.out, tick);
            tile.render_png(&path)?;
            written += 1;
            tracing::debug!(path = %path.display(), "frame written");
        }
    }

    let overlay = tile.overlay();
    tracing::info!(
        frames = written,
        patches = tile.delivered_patches(),
        health = %overlay.health,
        out = %args.out.display(),
        "session finished"
    );
    for line in overlay.footer() {
        println!("{line}");
    }
    tile.unmount();
    Ok(())
}

fn frame_path(out: &Path, tick: usize) -> PathBuf {
    out.join(format!("tile_{tick:04}.png"))
}
