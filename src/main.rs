//! Frog Hop entry point
//!
//! On the web the page drives [`frog_hop::web::WebGame`]; this binary only
//! installs the logging hooks. Natively it runs a console version of the game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    frog_hop::web::init_logging();
    log::info!("Frog Hop starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Frog Hop (native) starting...");

    if let Err(err) = console::run() {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io::{self, BufRead, Write};
    use std::thread;
    use std::time::{Duration, Instant};

    use frog_hop::sim::{GameStatus, LevelCatalog};
    use frog_hop::{FrogHopError, Session, Settings};

    const HELP: &str = "Commands: <pad id> to hop, retry, next, hint, help, quit";

    /// Command-line options: `--settings <file>` and `--levels <file>`
    #[derive(Debug, Default)]
    struct Options {
        settings: Option<String>,
        levels: Option<String>,
    }

    fn parse_args() -> Options {
        let mut options = Options::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => options.settings = args.next(),
                "--levels" => options.levels = args.next(),
                other => log::warn!("Ignoring unknown argument {:?}", other),
            }
        }
        options
    }

    pub fn run() -> Result<(), FrogHopError> {
        let options = parse_args();
        let settings = match &options.settings {
            Some(path) => Settings::load_file(path)?,
            None => Settings::default(),
        };
        let catalog = match &options.levels {
            Some(path) => LevelCatalog::from_json(&std::fs::read_to_string(path)?)?,
            None => LevelCatalog::builtin(),
        };

        let clock = Instant::now();
        let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;
        let mut session = Session::new(catalog, settings);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        println!("{}", HELP);
        print!("{}", session.view());

        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            match line.trim() {
                "" => continue,
                "quit" | "q" => break,
                "help" | "?" => println!("{}", HELP),
                "retry" | "r" => session.retry(),
                "next" | "n" => {
                    if !session.advance() {
                        println!("Win the level first");
                    }
                }
                "hint" | "h" => match session.hint() {
                    Some(solution) => println!(
                        "Try: {:?} (final score {})",
                        solution.route, solution.score
                    ),
                    None => println!("No winning route from here"),
                },
                input => match input.parse::<u32>() {
                    Ok(pad) => {
                        if session.click_pad(pad, now_ms()) {
                            // Let the hop play out
                            if let Some(due) = session.landing_due_ms() {
                                let wait = (due - now_ms()).max(0.0);
                                thread::sleep(Duration::from_secs_f64(wait / 1000.0));
                                session.update(due.max(now_ms()));
                            }
                        } else if session.state().status == GameStatus::Playing {
                            println!("The frog can't reach pad {}", pad);
                        }
                    }
                    Err(_) => println!("{}", HELP),
                },
            }
            print!("{}", session.view());
        }

        log::info!("Bye");
        Ok(())
    }
}
