use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use deskscene_camera::{Camera, CameraMovement, Projection, ProjectionMode};
use deskscene_common::ViewerConfig;
use deskscene_input::FrameInput;
use deskscene_render::{DebugTextRenderer, FrameView, Renderer};
use deskscene_scene::{OrbitEvent, Scene, TextureSlot};
use glam::Vec2;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deskscene-cli", about = "CLI tool for the desk scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON viewer configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// List scene objects with mesh, position and texture
    Scene,
    /// Load every texture strictly and report per file
    CheckAssets {
        /// Texture directory (defaults to the config's asset_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Run a scripted headless flight and print the final frame
    Fly(FlyArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct FlyArgs {
    /// Number of frames to simulate
    #[arg(long, default_value = "60")]
    frames: u32,
    /// Seconds per frame
    #[arg(long, default_value = "0.016")]
    dt: f32,
    /// Movement keys held for the whole flight (repeatable)
    #[arg(long, value_enum)]
    hold: Vec<Direction>,
    /// Horizontal pointer motion in pixels, applied on the first frame
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    look_x: f32,
    /// Vertical pointer motion in pixels (positive looks up), applied on the first frame
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    look_y: f32,
    /// Scroll ticks applied on the first frame (positive zooms in)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    scroll: f32,
    /// Set the light orbiting before flying
    #[arg(long, conflicts_with = "stop_orbit")]
    start_orbit: bool,
    /// Freeze the light before flying
    #[arg(long)]
    stop_orbit: bool,
    /// Start in orthographic projection
    #[arg(long)]
    orthographic: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl From<Direction> for CameraMovement {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Forward => CameraMovement::Forward,
            Direction::Backward => CameraMovement::Backward,
            Direction::Left => CameraMovement::Left,
            Direction::Right => CameraMovement::Right,
            Direction::Up => CameraMovement::Up,
            Direction::Down => CameraMovement::Down,
        }
    }
}

/// Camera, projection and scene after a scripted flight.
struct Flight {
    camera: Camera,
    projection: Projection,
    scene: Scene,
}

impl Flight {
    fn frame(&self) -> FrameView {
        FrameView::new(&self.camera, &self.projection)
    }
}

fn fly(config: &ViewerConfig, args: &FlyArgs) -> Flight {
    let window = &config.window;
    let aspect = window.width as f32 / window.height.max(1) as f32;
    let mut camera = Camera::from_settings(&config.camera);
    let mut projection = Projection::from_settings(&config.projection, aspect);
    let mut scene = Scene::desk(&config.light);

    if args.orthographic && projection.mode != ProjectionMode::Orthographic {
        projection.toggle_mode();
    }
    if args.start_orbit {
        scene.orbit_mut().handle(OrbitEvent::Start);
    }
    if args.stop_orbit {
        scene.orbit_mut().handle(OrbitEvent::Stop);
    }

    let mut input = FrameInput::new();
    for direction in &args.hold {
        input.press((*direction).into());
    }
    input.add_look(Vec2::new(args.look_x, args.look_y));
    input.add_scroll(args.scroll);

    for _ in 0..args.frames {
        input.apply(&mut camera, args.dt);
        scene.update(args.dt);
    }
    tracing::debug!("flew {} frames of {}s", args.frames, args.dt);

    Flight {
        camera,
        projection,
        scene,
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}

fn describe_scene(scene: &Scene) -> String {
    let mut out = format!("Scene: {} objects\n", scene.objects().len());
    for object in scene.objects() {
        let p = object.transform.position;
        let texture = object
            .material
            .texture
            .map(TextureSlot::file_name)
            .unwrap_or("-");
        out.push_str(&format!(
            "  {:<20} {:<6} ({:.2}, {:.2}, {:.2}) {texture}\n",
            object.name,
            object.mesh.label(),
            p.x,
            p.y,
            p.z
        ));
    }
    out
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("deskscene-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", deskscene_common::crate_info());
            println!("camera: {}", deskscene_camera::crate_info());
            println!("input: {}", deskscene_input::crate_info());
            println!("scene: {}", deskscene_scene::crate_info());
            println!("assets: {}", deskscene_assets::crate_info());
            println!("render: {}", deskscene_render::crate_info());
        }
        Commands::Scene => {
            let scene = Scene::desk(&config.light);
            print!("{}", describe_scene(&scene));
        }
        Commands::CheckAssets { dir } => {
            let dir = dir.unwrap_or(config.asset_dir);
            println!("Checking textures in {}", dir.display());

            let mut failed = 0;
            for slot in TextureSlot::ALL {
                match deskscene_assets::load_slot(&dir, slot) {
                    Ok(image) => {
                        println!("  OK   {:<14} {}x{}", slot.file_name(), image.width, image.height);
                    }
                    Err(e) => {
                        failed += 1;
                        println!("  FAIL {:<14} {e}", slot.file_name());
                    }
                }
            }

            if failed > 0 {
                bail!("{failed} texture(s) failed to load");
            }
            println!("All textures loaded");
        }
        Commands::Fly(args) => {
            let flight = fly(&config, &args);
            print!(
                "{}",
                DebugTextRenderer::new().render(&flight.scene, &flight.frame())
            );
        }
    }

    Ok(())
}
