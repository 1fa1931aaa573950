use brickbreaker::display::{self, CanvasRenderer, SoftwareRenderer, WINDOW_TITLE};
use brickbreaker::input::KeyboardInput;
use brickbreaker::settings::DEFAULT_SETTINGS_FILE;
use brickbreaker::{run, Backend, BestScoreFile, LoopOptions, ScoreStore, Session, Settings};

/// Command line overrides, applied on top of the settings file
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<String>,
    backend: Option<Backend>,
    width: Option<u32>,
    height: Option<u32>,
    score_file: Option<String>,
    vsync: bool,
    show_fps: bool,
    help: bool,
}

impl CliArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(backend) = self.backend {
            settings.backend = backend;
        }
        if let Some(w) = self.width {
            settings.width = w;
        }
        if let Some(h) = self.height {
            settings.height = h;
        }
        if let Some(path) = &self.score_file {
            settings.score_file = path.clone();
        }
        if self.vsync {
            settings.vsync = true;
        }
        if self.show_fps {
            settings.show_fps = true;
        }
    }
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--software" => cli.backend = Some(Backend::Software),
            "--accelerated" => cli.backend = Some(Backend::Accelerated),
            "--vsync" => cli.vsync = true,
            "--fps" => cli.show_fps = true,
            "--help" => cli.help = true,
            "--backend" | "-b" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<Backend>() {
                        Ok(backend) => cli.backend = Some(backend),
                        Err(e) => log::warn!("Ignoring --backend: {}", e),
                    }
                    i += 1;
                }
            },
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    cli.config = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--scores" | "-s" => {
                if i + 1 < args.len() {
                    cli.score_file = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        cli.width = Some(w);
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        cli.height = Some(h);
                    }
                    i += 1;
                }
            },
            other => log::warn!("Ignoring unknown argument {}", other),
        }
        i += 1;
    }

    cli
}

fn print_help() {
    let defaults = Settings::default();
    println!("Usage: brickbreaker [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  --config PATH, -c PATH  Settings file (default: {})",
        DEFAULT_SETTINGS_FILE
    );
    println!("  --backend NAME, -b NAME Renderer: accelerated or software");
    println!("  --software              Use the software renderer");
    println!("  --accelerated           Use the accelerated renderer (default)");
    println!(
        "  --width W, -w W         Playfield width (default: {})",
        defaults.width
    );
    println!(
        "  --height H, -h H        Playfield height (default: {})",
        defaults.height
    );
    println!(
        "  --scores PATH, -s PATH  Best score file (default: {})",
        defaults.score_file
    );
    println!("  --vsync                 Also sync presentation to the display");
    println!("  --fps                   Show the FPS readout");
    println!("  --help                  Show this help message");
    println!();
    println!("Controls:");
    println!("  Left/Right - Move paddle");
    println!("  R          - Restart after the round ends");
    println!("  F          - Toggle FPS readout");
    println!("  Escape     - Quit");
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args);
    if cli.help {
        print_help();
        return Ok(());
    }

    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_SETTINGS_FILE);
    let mut settings = Settings::load_or_default(config_path);
    cli.apply(&mut settings);

    log::info!(
        "Playfield {}x{}, {} renderer, {}ms frame delay",
        settings.width,
        settings.height,
        settings.backend.as_str(),
        settings.frame_delay_ms
    );

    let mut store = BestScoreFile::new(&settings.score_file);
    let mut session = Session::new(settings.game_config(), store.load());
    let options = LoopOptions::from(&settings);

    let (canvas, event_pump) = display::open(
        WINDOW_TITLE,
        settings.width,
        settings.height,
        settings.backend,
        settings.vsync,
    )?;
    let mut input = KeyboardInput::new(event_pump);

    match settings.backend {
        Backend::Accelerated => {
            let mut renderer = CanvasRenderer::new(canvas);
            run(&mut session, &mut renderer, &mut input, &mut store, &options)?;
        },
        Backend::Software => {
            let texture_creator = canvas.texture_creator();
            let mut renderer = SoftwareRenderer::new(canvas, &texture_creator)?;
            run(&mut session, &mut renderer, &mut input, &mut store, &options)?;
        },
    }

    log::info!("Final best score {}", session.best_score);
    Ok(())
}
