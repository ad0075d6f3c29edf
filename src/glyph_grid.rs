use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use glyph_grid::display::{print_element_list, print_pattern_summary, text_preview};
use glyph_grid::export::export_svg;
use glyph_grid::{grid, EditSession, GlyphConfig, GlyphError, Pattern, PatternDims};
use log::info;
use std::io::{self, Write};

const BANNER: &str = r#"
   ___ _             _        ___     _    _
  / __| |_  _ _ __  | |_     / __|_ _(_)__| |
 | (_ | | || | '_ \ | ' \   | (_ | '_| / _` |
  \___|_|\_, | .__/ |_||_|   \___|_| |_\__,_|
         |__/|_|
"#;

fn show_help() {
    println!("{}", BANNER);
    println!("Usage: glyph_grid <command> [args]");
    println!();
    println!("Commands:");
    println!("  count <w> <h>              Element counts for a w x h glyph");
    println!("  elements <w> <h>           List every element with its index");
    println!("  encode <w> <h> [index...]  Activate the given elements, print the code");
    println!("  decode <code>              Show the elements and preview of a code");
    println!("  svg <code> [--all]         Print the SVG for a code (--all adds inactive elements)");
    println!("  random <w> <h> [density]   Print a random glyph code");
    println!("  config                     Print the effective configuration as JSON");
    println!("  help                       Show this help message");
    println!();
    println!("Codes use the form <width>,<height>:<hex>, e.g. 1,1:1400");
    println!();
    println!("Environment:");
    println!("  GLYPH_CONFIG               Path to a JSON config file");
    println!("  GLYPH_WIDTH / GLYPH_HEIGHT Default glyph size");
    println!("  GLYPH_COLOR=false          Disable colored output");
    println!("  RUST_LOG=debug             Enable debug logging");
    println!();
}

fn load_config() -> Result<GlyphConfig, Box<dyn std::error::Error>> {
    let mut config = match std::env::var("GLYPH_CONFIG") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            GlyphConfig::load_from_file(&path)?
        }
        Err(_) => GlyphConfig::default(),
    };
    config.apply_env();
    config.validate()?;
    Ok(config)
}

fn parse_dims(args: &[String]) -> Result<PatternDims, Box<dyn std::error::Error>> {
    let parse = |i: usize, name: &str| -> Result<u32, Box<dyn std::error::Error>> {
        let raw = args
            .get(i)
            .ok_or_else(|| format!("Missing {} argument", name))?;
        raw.parse::<u32>()
            .map_err(|_| format!("Invalid {} '{}'", name, raw).into())
    };
    Ok(PatternDims::new(parse(0, "width")?, parse(1, "height")?)?)
}

fn parse_code(args: &[String]) -> Result<Pattern, Box<dyn std::error::Error>> {
    let raw = args.first().ok_or("Missing glyph code argument")?;
    Ok(raw.parse::<Pattern>().map_err(GlyphError::from)?)
}

fn print_preview(pattern: &Pattern, colored: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    for line in text_preview(pattern) {
        queue!(stdout, Print("  "))?;
        for ch in line.chars() {
            if colored && ch != '.' && ch != ' ' {
                queue!(stdout, SetForegroundColor(Color::Green), Print(ch), ResetColor)?;
            } else {
                queue!(stdout, Print(ch))?;
            }
        }
        queue!(stdout, Print("\n"))?;
    }
    stdout.flush()
}

fn print_code(code: &str, colored: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if colored {
        queue!(stdout, SetForegroundColor(Color::Cyan), Print(code), ResetColor, Print("\n"))?;
    } else {
        queue!(stdout, Print(code), Print("\n"))?;
    }
    stdout.flush()
}

fn run(command: &str, args: &[String], config: GlyphConfig) -> Result<(), Box<dyn std::error::Error>> {
    let colored = config.display.colored;
    match command {
        "count" => {
            let dims = parse_dims(args)?;
            println!(
                "{}x{}: {} elements ({} lines, {} dots)",
                dims.width(),
                dims.height(),
                grid::element_count(&dims),
                grid::line_count(&dims),
                grid::dot_count(&dims)
            );
        }
        "elements" => {
            let dims = parse_dims(args)?;
            let all = grid::generate(&dims);
            print_element_list(all.iter().enumerate(), true);
        }
        "encode" => {
            let dims = parse_dims(args)?;
            let mut session = EditSession::new(config);
            session.new_pattern(dims.width(), dims.height())?;
            for raw in &args[2..] {
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid element index '{}'", raw))?;
                session.toggle(index)?;
            }
            print_code(&session.export_hex(), colored)?;
        }
        "decode" => {
            let pattern = parse_code(args)?;
            print_pattern_summary(&pattern);
            println!();
            let active = pattern.active_elements();
            print_element_list(active.iter().map(|(i, e)| (*i, e)), config.display.show_indices);
            if config.display.show_preview {
                println!();
                print_preview(&pattern, colored)?;
            }
        }
        "svg" => {
            let pattern = parse_code(args)?;
            let mut export = config.export.clone();
            export.include_inactive |= args.iter().any(|a| a == "--all");
            println!("{}", export_svg(&pattern, &export));
        }
        "random" => {
            let dims = parse_dims(args)?;
            let density = match args.get(2) {
                Some(raw) => raw
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid density '{}'", raw))?,
                None => config.display.random_density,
            };
            let mut session = EditSession::new(config);
            session.new_pattern(dims.width(), dims.height())?;
            session.randomize(density, &mut rand::thread_rng())?;
            print_code(&session.export_hex(), colored)?;
        }
        "config" => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        unknown => {
            return Err(format!("Unknown command: {} (run 'glyph_grid help')", unknown).into());
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        None | Some("help") | Some("-h") | Some("--help") => {
            show_help();
            Ok(())
        }
        Some(command) => {
            let config = load_config()?;
            run(command, &args[2..], config)
        }
    }
}
