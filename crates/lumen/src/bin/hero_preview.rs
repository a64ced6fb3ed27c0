//! # LUMEN Hero Preview
//!
//! Headless run of the landing page: generates the hero scene, lays out the
//! page sections, then scrolls down the page frame by frame with a wandering
//! pointer, logging what reveals and when.
//!
//! ```bash
//! # Defaults
//! hero_preview
//!
//! # From a config file, with a tighter reveal window
//! RUST_LOG=debug hero_preview lumen.toml --root-margin "0px 0px -120px 0px"
//! ```

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lumen::ui::{
    IntersectionCapability, PointerTracker, Rect, RootMargin, SharedCapability, ViewportObserver,
};
use lumen::{FrameClock, HeroScene, LumenConfig, LumenResult, SectionReveal};

/// Page sections below the hero, with an optional headline statistic.
const SECTIONS: [(&str, Option<u32>); 4] = [
    ("about", Some(50)),
    ("skills", None),
    ("projects", Some(12)),
    ("contact", None),
];

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    root_margin: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--root-margin" {
            args.root_margin = iter.next();
        } else {
            args.config = Some(arg);
        }
    }
    args
}

fn run(args: Args) -> LumenResult<()> {
    let mut config = match &args.config {
        Some(path) => LumenConfig::from_file(path)?,
        None => LumenConfig::default(),
    };
    if let Some(margin) = &args.root_margin {
        config.reveal.trigger.root_margin = RootMargin::parse(margin)?;
    }

    let preview = config.preview;
    let mut scene = HeroScene::new(config.scene);
    tracing::info!(
        seed = scene.seed().value(),
        nodes = scene.graph().node_count(),
        edges = scene.graph().edge_count(),
        particles = scene.particles().len(),
        "scene generated"
    );

    // Hero fills the first screen; sections stack below it.
    let mut viewport = ViewportObserver::new(preview.viewport_width, preview.viewport_height);
    let mut page_height = preview.viewport_height;
    let mut regions = Vec::with_capacity(SECTIONS.len());
    for _ in SECTIONS {
        regions.push(viewport.add_region(Rect::new(
            0.0,
            page_height,
            preview.viewport_width,
            preview.section_height,
        )));
        page_height += preview.section_height;
    }
    let viewport = lumen::ui::shared(viewport);
    let capability: SharedCapability = viewport.clone();

    let mut sections: Vec<SectionReveal> = SECTIONS
        .iter()
        .zip(&regions)
        .enumerate()
        .map(|(position, (&(name, statistic), &region))| {
            let mut section = SectionReveal::new(name, capability.clone(), &config.reveal)
                .with_delay(config.reveal.stagger * position as f32);
            if let Some(value) = statistic {
                section = section.with_counter(value, &config.reveal);
            }
            if !section.mount(region) {
                tracing::warn!(section = name, "section could not be observed");
            }
            section
        })
        .collect();

    let mut clock = FrameClock::new();
    let mut pointer = PointerTracker::new(preview.viewport_width, preview.viewport_height);
    let interval = config.frame_interval();
    let max_scroll = (page_height - preview.viewport_height).max(0.0);
    let mut scroll = 0.0_f32;

    for _ in 0..preview.frames {
        let tick = clock.advance(Duration::from_secs_f32(interval));

        pointer.on_move(
            preview.viewport_width * (0.5 + 0.4 * (tick.elapsed * 0.7).cos()),
            preview.viewport_height * (0.5 + 0.4 * (tick.elapsed * 1.1).sin()),
        );
        scroll = (scroll + preview.scroll_speed).min(max_scroll);
        viewport.lock().scroll_to(0.0, scroll);

        let frame = scene.tick(tick.elapsed, pointer.position().normalized());
        if tick.frame % 60 == 0 {
            tracing::debug!(
                frame = tick.frame,
                elapsed = tick.elapsed,
                yaw = frame.graph_rotation.y,
                pitch = frame.graph_rotation.x,
                scroll,
                "hero frame"
            );
        }

        for section in &mut sections {
            let was_visible = section.is_visible();
            section.update(tick.delta_time);
            if section.is_visible() && !was_visible {
                tracing::info!(section = section.name(), frame = tick.frame, "revealed");
            }
        }
    }

    let stats = clock.stats();
    tracing::info!(
        frames = stats.frames_recorded,
        avg_ms = stats.avg_frame_ms(),
        avg_fps = stats.avg_fps(),
        over_budget = stats.frames_over_budget,
        "preview finished"
    );
    for section in &sections {
        tracing::info!(
            section = section.name(),
            visible = section.is_visible(),
            opacity = section.opacity(),
            counter = ?section.counter_display(),
            "section state"
        );
    }
    tracing::info!(
        active_observations = viewport.lock().active_observations(),
        "observer state"
    );

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "hero preview failed");
            ExitCode::FAILURE
        }
    }
}
