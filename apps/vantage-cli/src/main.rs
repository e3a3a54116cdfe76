mod config;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vantage_camera::{CameraBlock, MatrixOrder};
use vantage_input::{Action, Key, MovementKeys};
use vantage_math::{Mat4, MathError, Vec3};
use vantage_render::{
    DebugTextRenderer, FixedTimestep, FrameContext, LoopStats, Renderer, UniformRenderer,
};
use vantage_scene::{Cube, Player, Scene};

use crate::config::{AppConfig, load_script};

#[derive(Parser)]
#[command(name = "vantage", about = "Camera and transform math toolkit")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the projection, view and view-projection matrices for a camera
    Project {
        /// YAML config with a `camera` section
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Camera position
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        pos: Option<Vec<f32>>,
        /// Point the camera looks at
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        target: Option<Vec<f32>>,
        /// Vertical field of view in degrees
        #[arg(long)]
        fov: Option<f32>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the fixed-timestep loop headless with scripted input
    Simulate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Simulated wall time per frame in seconds
        #[arg(long, default_value = "0.016")]
        frame_time: f64,
        /// Horizontal mouse drift per frame in pixels, used without a script
        #[arg(long, default_value = "4.0", allow_negative_numbers = true)]
        drift: f32,
        /// Hold the forward key for the whole run
        #[arg(long)]
        forward: bool,
        /// YAML list of `{ frame, action, ... }` events replacing the drift
        #[arg(long)]
        script: Option<PathBuf>,
        /// Number of cubes to place in front of the camera
        #[arg(long, default_value = "3")]
        cubes: usize,
        #[arg(long)]
        json: bool,
    },
    /// Invert a 4x4 matrix given as 16 row-major numbers
    Invert {
        #[arg(num_args = 16, allow_negative_numbers = true, required = true)]
        values: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ProjectionReport {
    perspective: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    view_projection: [[f32; 4]; 4],
}

#[derive(Serialize)]
struct SecondSample {
    stats: LoopStats,
    position: [f32; 3],
}

#[derive(Serialize)]
struct SimulationSummary {
    frames: u64,
    ticks: u64,
    stats: LoopStats,
    per_second: Vec<SecondSample>,
    position: [f32; 3],
    direction: [f32; 3],
    block_bytes: usize,
    objects: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("vantage v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", vantage_math::crate_info());
            println!("camera: {}", vantage_camera::crate_info());
            println!("input: {}", vantage_input::crate_info());
            println!("scene: {}", vantage_scene::crate_info());
            println!("render: {}", vantage_render::crate_info());
            println!(
                "camera block: {} bytes (f32), {} bytes (f64)",
                CameraBlock::<f32>::size(),
                CameraBlock::<f64>::size()
            );
        }
        Commands::Project {
            config,
            pos,
            target,
            fov,
            json,
        } => {
            let mut camera_config = AppConfig::load_or_default(config.as_deref())?.camera;
            if let Some(p) = pos {
                camera_config.position = widen(&p);
            }
            if let Some(t) = target {
                camera_config.target = widen(&t);
            }
            if let Some(f) = fov {
                camera_config.fov_y = f64::from(f);
            }
            let camera = camera_config.camera::<f32>()?;
            let out = ProjectionReport {
                perspective: camera.perspective().m,
                view: camera.look_at().m,
                view_projection: camera.view_projection().m,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Perspective:\n{}", camera.perspective());
                println!("View:\n{}", camera.look_at());
                println!("View-projection:\n{}", camera.view_projection());
            }
        }
        Commands::Simulate {
            config,
            frames,
            frame_time,
            drift,
            forward,
            script,
            cubes,
            json,
        } => {
            let app = AppConfig::load_or_default(config.as_deref())?;
            let script = script.as_deref().map(load_script).transpose()?;
            let summary = simulate(&app, frames, frame_time, drift, forward, script, cubes)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for (second, sample) in summary.per_second.iter().enumerate() {
                    let [x, y, z] = sample.position;
                    println!(
                        "  second {}: ups={} fps={} camera=({x:.2}, {y:.2}, {z:.2})",
                        second + 1,
                        sample.stats.ups,
                        sample.stats.fps
                    );
                }
                println!(
                    "Simulated {} frames, {} ticks (ups={}, fps={})",
                    summary.frames, summary.ticks, summary.stats.ups, summary.stats.fps
                );
                println!("Camera block: {} bytes, objects: {}", summary.block_bytes, summary.objects);
            }
        }
        Commands::Invert { values, json } => {
            let m = Mat4::from_row_major_slice(&values)?;
            match m.inverse() {
                Ok(inv) if json => println!("{}", serde_json::to_string_pretty(&inv.m)?),
                Ok(inv) => println!("{inv}"),
                Err(MathError::Singular) => bail!("matrix is singular (determinant = {})", m.determinant()),
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn widen(v: &[f32]) -> [f64; 3] {
    [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])]
}

fn simulate(
    app: &AppConfig,
    frames: u64,
    frame_time: f64,
    drift: f32,
    forward: bool,
    script: Option<vantage_input::InputScript<f32>>,
    cubes: usize,
) -> anyhow::Result<SimulationSummary> {
    if !(frame_time >= 0.0) {
        bail!("frame time must be non-negative, got {frame_time}");
    }

    let camera = app.camera.fly_camera::<f32>()?;
    let mut scene = Scene::new();
    for i in 0..cubes {
        let z = -10.0 - 5.0 * i as f32;
        scene.spawn(Cube::new(Vec3::new(0.0, 0.0, z)));
    }
    scene.spawn(Player::new(camera.pos(), 1.0));
    let mut ctx = FrameContext::new(camera, scene);

    let mut keys = MovementKeys::default();
    if forward {
        keys.press(Key::Forward);
        ctx.handle(keys.action(app.camera.move_speed as f32));
    }

    let mut timestep = FixedTimestep::new(app.frame_loop);
    let mut total_ticks = 0u64;
    let mut per_second = Vec::new();
    for frame in 0..frames {
        let _span = tracing::info_span!("frame", frame).entered();
        match &script {
            Some(s) => s.actions_at(frame).for_each(|a| ctx.handle(a)),
            None => ctx.handle(Action::Look { dx: drift, dy: 0.0 }),
        }

        let step = timestep.frame(frame_time, |dt| ctx.update(dt as f32));
        total_ticks += u64::from(step.ticks);
        if let Some(stats) = step.stats {
            let pos = ctx.camera.pos();
            tracing::info!(%pos, "camera position");
            per_second.push(SecondSample {
                stats,
                position: pos.to_array(),
            });
        }
        tracing::trace!(alpha = step.alpha, "frame done");
    }

    tracing::debug!("{}", DebugTextRenderer::new().render(&ctx));
    let uniforms = UniformRenderer::new(MatrixOrder::RowMajor).render(&ctx);

    Ok(SimulationSummary {
        frames,
        ticks: total_ticks,
        stats: timestep.last_stats(),
        per_second,
        position: ctx.camera.pos().to_array(),
        direction: ctx.camera.direction.to_array(),
        block_bytes: uniforms.camera_block.len(),
        objects: uniforms.models.len(),
    })
}
