use anyhow::Result;
use connectw::Engine;
use log::warn;
use std::io::{self, BufRead};

mod cwi;
mod logging;
use cwi::command::parse_command;
use cwi::protocol::{handle_command, Flow};

fn main() -> Result<()> {
    let _logger = logging::setup_logging()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line?;

        if let Some(cmd) = parse_command(&input) {
            let result = handle_command(&cmd, &mut engine, &mut stdout.lock());

            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    if engine.options.strict_mode {
                        return Err(err.context(format!("command failed: {}", cmd)));
                    } else {
                        warn!("command failed: {}", cmd);
                        eprintln!("{:#}", err);
                    }
                }
            }
        }
    }

    Ok(())
}
