use std::io::{self, BufRead, Write};

use anyhow::Result;

use figura_scene::Scene;
use figura_scene::logging::{LoggingConfig, init_logging};
use figura_scene::persist::{load_scene, save_scene};
use figura_scene::shapes::{Circle, Rect};

/// One parsed driver command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    CreateCircle { x: i32, y: i32, radius: i32, color: String },
    CreateRect { x: i32, y: i32, width: i32, height: i32, color: String },
    GroupTop(usize),
    MoveTop { dx: i32, dy: i32 },
    Recolor { index: usize, color: String },
    Resize { index: usize, size: i32 },
    ToggleVisibility { index: usize },
    Describe,
    Save(String),
    Load(String),
    Quit,
}

fn int(tok: &str) -> Result<i32, String> {
    tok.parse().map_err(|_| format!("expected an integer, got {tok:?}"))
}

fn index(tok: &str) -> Result<usize, String> {
    tok.parse().map_err(|_| format!("expected an index, got {tok:?}"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["c", x, y, radius, color] => Ok(Command::CreateCircle {
            x: int(x)?,
            y: int(y)?,
            radius: int(radius)?,
            color: color.to_string(),
        }),
        ["r", x, y, width, height, color] => Ok(Command::CreateRect {
            x: int(x)?,
            y: int(y)?,
            width: int(width)?,
            height: int(height)?,
            color: color.to_string(),
        }),
        ["a", n] => Ok(Command::GroupTop(index(n)?)),
        ["m", dx, dy] => Ok(Command::MoveTop { dx: int(dx)?, dy: int(dy)? }),
        ["e", i, color] => Ok(Command::Recolor { index: index(i)?, color: color.to_string() }),
        ["z", i, size] => Ok(Command::Resize { index: index(i)?, size: int(size)? }),
        ["v", i] => Ok(Command::ToggleVisibility { index: index(i)? }),
        ["d"] => Ok(Command::Describe),
        ["s", file] => Ok(Command::Save(file.to_string())),
        ["l", file] => Ok(Command::Load(file.to_string())),
        ["q"] => Ok(Command::Quit),
        _ => Err(format!("unrecognized command {line:?} (h for help)")),
    }
}

fn print_usage() {
    println!("Commands:");
    println!("  c X Y RADIUS COLOR    create a circle");
    println!("  r X Y WIDTH HEIGHT COLOR");
    println!("                        create a rectangle");
    println!("  a N                   group the top N shapes");
    println!("  m DX DY               move the top shape");
    println!("  e INDEX COLOR         recolor a shape");
    println!("  z INDEX SIZE          resize a shape");
    println!("  v INDEX               toggle a shape's visibility");
    println!("  d                     draw the scene");
    println!("  s FILE                save the scene");
    println!("  l FILE                load a scene");
    println!("  q                     quit");
}

/// Applies one command. Returns `false` when the session should end.
fn apply(scene: &mut Scene, cmd: Command) -> bool {
    log::debug!("applying {cmd:?}");
    match cmd {
        Command::CreateCircle { x, y, radius, color } => {
            scene.push(Circle::new(x, y, color, radius).into());
        }
        Command::CreateRect { x, y, width, height, color } => {
            scene.push(Rect::new(x, y, color, width, height).into());
        }
        Command::GroupTop(n) => {
            let moved = scene.group_top(n);
            println!("grouped {moved} shape(s)");
        }
        Command::MoveTop { dx, dy } => match scene.last_mut() {
            Some(shape) => shape.translate(dx, dy),
            None => println!("nothing to move"),
        },
        Command::Recolor { index, color } => match scene.get_mut(index) {
            Some(shape) => shape.set_color(color),
            None => println!("no shape at index {index}"),
        },
        Command::Resize { index, size } => match scene.get_mut(index) {
            Some(shape) => shape.resize(size),
            None => println!("no shape at index {index}"),
        },
        Command::ToggleVisibility { index } => match scene.get_mut(index) {
            Some(shape) => shape.toggle_visibility(),
            None => println!("no shape at index {index}"),
        },
        Command::Describe => {}
        Command::Save(file) => {
            if let Err(err) = save_scene(scene, &file) {
                println!("save failed: {err:#}");
            }
        }
        Command::Load(file) => match load_scene(&file) {
            Ok(load) => {
                if let Some(err) = load.error {
                    println!("scene file is damaged past shape {}: {err}", load.scene.len());
                }
                // The prior scene is replaced wholesale, damaged file or not;
                // an unreadable file (Err above) leaves it untouched.
                *scene = load.scene;
            }
            Err(err) => println!("load failed: {err:#}"),
        },
        Command::Quit => return false,
    }
    print!("{}", scene.describe());
    true
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔══════════════════════════════════════╗");
    println!("  ║           FIGURA STUDIO v0.1         ║");
    println!("  ║   circles · rectangles · groups      ║");
    println!("  ╚══════════════════════════════════════╝");
    println!();
    print_usage();

    let mut scene = Scene::new();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "h" {
            print_usage();
            continue;
        }
        match parse_command(line) {
            Ok(cmd) => {
                if !apply(&mut scene, cmd) {
                    break;
                }
            }
            Err(msg) => println!("{msg}"),
        }
    }
    Ok(())
}
