use clap::{Parser, Subcommand};
use fractalspace_assets::Palette;
use fractalspace_input::{InputSource, ScriptedSource};
use fractalspace_nav::{NavConfig, NavSession, Phase};
use fractalspace_render::{DebugTextRenderer, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fractalspace-cli", about = "CLI tool for fractalspace operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print viewer version and crate info
    Info,
    /// Run a navigation script headlessly and print the final view
    Simulate {
        /// Comma-separated frames: left right up down in out idle exit
        #[arg(short, long)]
        script: String,
        /// Frame time in seconds fed to each step
        #[arg(short, long, default_value = "0.1")]
        dt: f32,
        /// Let panning leave the default clamp box
        #[arg(long)]
        unclamped: bool,
    },
    /// Sample a palette preset on the CPU
    Palette {
        /// Preset name: deep-sea, fire, grayscale
        #[arg(short, long, default_value = "deep-sea")]
        name: String,
        /// Number of evenly spaced samples to print
        #[arg(long, default_value = "12")]
        samples: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("fractalspace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", fractalspace_common::crate_info());
            println!("input: {}", fractalspace_input::crate_info());
            println!("nav: {}", fractalspace_nav::crate_info());
            println!("assets: {}", fractalspace_assets::crate_info());
            println!("render: {}", fractalspace_render::crate_info());
            println!("render-wgpu: {}", fractalspace_render_wgpu::crate_info());
            println!("platform: {}", fractalspace_platform::crate_info());
        }
        Commands::Simulate {
            script,
            dt,
            unclamped,
        } => {
            let mut source = ScriptedSource::parse(&script)?;
            println!(
                "Scripted navigation: {} frames at dt={dt}",
                source.remaining()
            );

            let mut config = NavConfig::default();
            if unclamped {
                config.bounds = None;
            }

            let mut session = NavSession::new(config);
            let mut frames = 0u32;
            while let Some(snapshot) = source.poll() {
                frames += 1;
                if session.advance(&snapshot, dt) == Phase::Terminated {
                    break;
                }
            }

            println!(
                "Frames consumed: {frames}  Phase: {}",
                if session.is_running() {
                    "running"
                } else {
                    "terminated"
                }
            );
            print!("{}", DebugTextRenderer::new().render(&session.view()));
        }
        Commands::Palette { name, samples } => {
            let palette = Palette::by_name(&name)?;
            println!("Palette {:?} ({} colors)", palette.name(), palette.len());
            for i in 0..samples {
                let t = (i as f32 + 0.5) / samples as f32;
                let [r, g, b] = palette.sample(t);
                println!("  t={t:.3}  rgb=({r:.3}, {g:.3}, {b:.3})");
            }
        }
    }

    Ok(())
}
