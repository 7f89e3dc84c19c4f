use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use lancette_face::config::FaceConfig;
use lancette_face::coords::{Edges, Surface};
use lancette_face::face::ClockFace;
use lancette_face::logging::{LoggingConfig, init_logging};
use lancette_face::scene::DrawList;
use lancette_face::time::{ClockTime, FrameClock};

/// Fallback surface dimension when the host has no layout opinion.
const SURFACE_SIZE: f32 = 800.0;

/// Nominal 60 Hz frame pacing for the headless loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  lancette — analog clock face demo");
    println!("  draw-stream renderer · {SURFACE_SIZE:.0}×{SURFACE_SIZE:.0} logical px");
    println!("  pass a config path to restyle · ctrl-c to exit");
    println!();

    let config = match std::env::args_os().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            FaceConfig::load(&path)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => FaceConfig::default(),
    };
    let style = config.style().context("resolving face style")?;

    let mut face = ClockFace::new(style);
    face.resize(Surface::new(SURFACE_SIZE, SURFACE_SIZE, Edges::default()));

    let mut clock = FrameClock::new();
    let mut list = DrawList::new();

    loop {
        let frame = clock.tick();
        let now = ClockTime::now();

        list.clear();
        face.render(now, &mut list);

        // One status line per second of frames.
        if frame.frame_index % 60 == 0 {
            let angles = now.angles();
            log::info!(
                "frame {:>6} · dt {:>5.1} ms · hour {:6.2}° minute {:6.2}° second {:6.2}° · {} draw items",
                frame.frame_index,
                f64::from(frame.dt) * 1000.0,
                angles.hour,
                angles.minute,
                angles.second,
                list.items().len(),
            );
        }

        thread::sleep(FRAME_INTERVAL);
    }
}
