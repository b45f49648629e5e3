//! Race Binary
//!
//! Runs a learning session on the terminal: agents and random movers play
//! themselves, human seats are prompted for every step.
//!
//! Example: race --episodes 5000 --representation parametric --credit sparse --p2 random

use clap::Parser;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use steprace::players::Human;
use steprace::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Ordinal,
    Parametric,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "JSON session config; flags below override it")]
    config: Option<std::path::PathBuf>,
    #[arg(long, value_enum, default_value = "ordinal")]
    representation: Kind,
    #[arg(long, help = "Cells on the track, start and goal included")]
    length: Option<usize>,
    #[arg(long, help = "Number of step sizes")]
    slots: Option<usize>,
    #[arg(long, help = "bulk | sparse")]
    credit: Option<Credit>,
    #[arg(long, help = "agent | random | human")]
    p1: Option<Mover>,
    #[arg(long, help = "agent | random | human")]
    p2: Option<Mover>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, help = "Episodes in the rolling win-rate window")]
    capacity: Option<usize>,
    #[arg(long, default_value_t = 1000)]
    episodes: usize,
    #[arg(long, default_value_t = 0, help = "Pause between turns, in milliseconds")]
    delay: u64,
    #[arg(long, help = "Start P2 from the hand-tuned ordinal policy")]
    trained: bool,
    #[arg(long, help = "Write final policies and tally as JSON")]
    dump: Option<std::path::PathBuf>,
    #[arg(long, default_value = "info", help = "Terminal log level")]
    level: String,
}

impl Args {
    fn session(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => serde_json::from_reader(std::fs::File::open(path)?)?,
            None => Config::default(),
        };
        if self.length.is_some() || self.slots.is_some() {
            config.track = Track::new(
                self.length.unwrap_or(config.track.length()),
                self.slots.unwrap_or(config.track.slots()),
            )?;
        }
        config.credit = self.credit.unwrap_or(config.credit);
        config.movers[0] = self.p1.unwrap_or(config.movers[0]);
        config.movers[1] = self.p2.unwrap_or(config.movers[1]);
        config.capacity = self.capacity.unwrap_or(config.capacity);
        config.seed = self.seed.or(config.seed);
        Ok(config)
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = "R: Serialize, R::Descriptor: Serialize"))]
struct Dump<'a, R>
where
    R: Representation,
{
    config: &'a Config,
    episodes: usize,
    converged: bool,
    tally: &'a Tally,
    policies: [&'a Policy<R>; 2],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = args
        .level
        .parse::<log::LevelFilter>()
        .map_err(|e| anyhow::anyhow!("{}: {}", e, args.level))?;
    steprace::log(level)?;
    let config = args.session()?;
    match args.representation {
        Kind::Ordinal => {
            let mut session = Session::new(config, Scale::default())?;
            if args.trained {
                let preset = Policy::trained(*session.track(), Scale::default());
                session.install(Seat::P2, preset)?;
            }
            run(session, &args)
        }
        Kind::Parametric => {
            if args.trained {
                return Err(anyhow::anyhow!("--trained only applies to the ordinal representation"));
            }
            run(Session::new(config, Gaussian::default())?, &args)
        }
    }
}

fn run<R>(mut session: Session<R>, args: &Args) -> anyhow::Result<()>
where
    R: Representation + Serialize,
    R::Descriptor: Serialize,
{
    let interactive = Seat::all()
        .into_iter()
        .any(|s| session.config().mover(s) == Mover::Human);
    for _ in 0..args.episodes {
        let winner = if interactive {
            prompt(&mut session, args.delay)?
        } else {
            Some(session.play_episode()?)
        };
        let Some(winner) = winner else {
            log::info!("episode abandoned, stopping");
            break;
        };
        if interactive {
            println!("{}", format!("{} WINS", winner).bold());
            println!("{}", session.tally());
        }
        if session.converged() {
            log::info!("converged after {} episodes", session.episodes());
            break;
        }
    }
    report(&session);
    if let Some(ref path) = args.dump {
        let dump = Dump {
            config: session.config(),
            episodes: session.episodes(),
            converged: session.converged(),
            tally: session.tally(),
            policies: Seat::all().map(|s| session.snapshot_policy(s)),
        };
        serde_json::to_writer_pretty(std::fs::File::create(path)?, &dump)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

/// Plays one episode with at least one human seat. `None` if a human quit.
fn prompt<R>(session: &mut Session<R>, delay: u64) -> anyhow::Result<Option<Seat>>
where
    R: Representation,
{
    session.start_episode();
    while let Some(seat) = session.turn() {
        let receipt = match session.config().mover(seat) {
            Mover::Human => {
                let track = *session.track();
                match Human.choose(&track, seat, session.position())? {
                    Some(step) => session.submit_action(seat, step),
                    None => {
                        session.abandon();
                        return Ok(None);
                    }
                }
            }
            _ => {
                std::thread::sleep(std::time::Duration::from_millis(delay));
                session.auto_play_turn()
            }
        };
        if let Some(rejection) = receipt.rejection {
            println!("{}", rejection.to_string().red());
            continue;
        }
        if let Some(ref roll) = receipt.roll {
            println!("{} rolled {}", seat, roll);
        }
        println!("{} -> cell {}", seat, receipt.position.to_string().cyan());
    }
    Ok(session.phase().winner())
}

fn report<R>(session: &Session<R>)
where
    R: Representation,
{
    for seat in Seat::all() {
        let header = format!(
            "{} ({}, recent win rate {:.2})",
            seat,
            session.config().mover(seat),
            session.recent_win_rate(seat)
        );
        println!("{}", header.bold().green());
        println!("{}", session.snapshot_policy(seat));
    }
    println!("{}", session.tally());
}
