//! CWI protocol implementation

use std::io::Write;
use anyhow::{bail, ensure, Context, Result};
use connectw::{
    ai::AgentKind,
    core::GameConfig,
    engine::{Engine, SearchOptions},
    heuristics::HeuristicKind,
};

/// Whether the command loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn parse_column(arg: Option<&&str>) -> Result<usize> {
    arg.context("missing column")?
        .parse()
        .context("invalid column")
}

/// Handle a CWI command, writing responses to `out`
pub fn handle_command(cmd: &str, engine: &mut Engine, out: &mut impl Write) -> Result<Flow> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    match parts[0] {
        "cwi" => {
            let agents = AgentKind::ALL.map(|kind| kind.name()).join(" var ");
            let heuristics = HeuristicKind::ALL.map(|kind| kind.name()).join(" var ");

            writeln!(out, "id name connectw author Ritam Nag")?;
            writeln!(out, "option name agent type combo default {} var {}",
                AgentKind::default(), agents)?;
            writeln!(out, "option name heuristic type combo default {} var {}",
                HeuristicKind::default(), heuristics)?;
            writeln!(out, "option name strictmode type check default false")?;
            writeln!(out, "option name seed type string default none")?;
            writeln!(out, "cwiok")?;
        }
        "isready" => {
            writeln!(out, "readyok")?;
        }
        "setoption" => {
            ensure!(parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command");

            let option_name = parts[2];
            let option_value = parts[4];

            engine.set_option(option_name, option_value)?;
        }
        "newgame" => {
            let config = match parts.len() {
                1 => engine.config,
                4 => {
                    let dims = parts[1..].iter()
                        .map(|s| s.parse::<usize>().context("invalid newgame argument"))
                        .collect::<Result<Vec<_>>>()?;
                    GameConfig { columns: dims[0], rows: dims[1], win_length: dims[2] }
                }
                _ => bail!("newgame takes no arguments or <cols> <rows> <w>"),
            };

            engine.set_game(config)?;
        }
        "position" => {
            ensure!(parts.len() >= 2, "position command requires at least 2 arguments");

            match parts[1] {
                "startpos" => {
                    let moves = match parts.get(2) {
                        None => Vec::new(),
                        Some(&"moves") => parts[3..].iter()
                            .map(|s| s.parse::<usize>().context("invalid move"))
                            .collect::<Result<Vec<_>>>()?,
                        Some(_) => bail!("invalid startpos arguments"),
                    };

                    engine.set_startpos(&moves)?;
                }
                "fen" if parts.len() >= 3 => {
                    let fen = parts[2..].join(" ");
                    engine.set_position_fen(&fen)?;
                }
                _ => bail!("invalid position command")
            }
        }
        "play" => {
            let column = parse_column(parts.get(1))?;
            let outcome = engine.play(column)?;

            if outcome.is_terminal() {
                writeln!(out, "info outcome {}", outcome)?;
            }
        }
        "undo" => {
            let column = parse_column(parts.get(1))?;
            engine.undo(column)?;
        }
        "go" => {
            let args = parts[1..].join(" ");
            let search_options = args.parse::<SearchOptions>()?;

            let (column, nodes, time) = engine.go(&search_options)?;

            writeln!(out, "info agent {} nodes {} time {:.3}", engine.agent_kind(), nodes, time)?;
            writeln!(out, "bestmove {}", column)?;
        }
        "outcome" => {
            writeln!(out, "outcome {}", engine.outcome())?;
        }
        "display" => {
            write!(out, "{}", engine.display())?;
        }
        "getfen" => {
            writeln!(out, "{}", engine.get_fen())?;
        }
        "quit" => {
            return Ok(Flow::Quit);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    out.flush()?;
    Ok(Flow::Continue)
}
