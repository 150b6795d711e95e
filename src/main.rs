mod answers;
mod app;
mod autoplay;
mod crash_report;
mod presenter;
mod session;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use answers::{
    HttpFetcher, Resolver, ResolverHandle, SUGGESTIONS, builtin_answers, get_config_path,
    load_config,
};
use app::App;
use autoplay::AutoPlay;
use crash_report::StderrSurface;
use presenter::ConsolePresenter;

#[derive(Parser)]
#[command(name = "whatis", version, about = "Ask what something is and hear a short answer")]
struct Cli {
    /// Config file (defaults to ~/.whatis.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one question and present the answer
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// List the suggestion words
    Suggestions,
    /// Play builtin answers one after another
    Autoplay {
        /// Stop after this many items
        #[arg(long)]
        count: Option<usize>,
        /// Seconds between items
        #[arg(long)]
        delay_secs: Option<u64>,
    },
    /// Read questions from stdin (the default)
    Interactive,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    crash_report::install(Arc::new(StderrSurface));

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(get_config_path);
    let config = load_config(&config_path)?;
    log::debug!("Loaded config from {}", config_path.display());

    let answers = builtin_answers();
    let resolver = Resolver::new(&config, answers.clone(), Box::new(HttpFetcher::new(&config)));
    let mut app = App::new(
        ResolverHandle::spawn(resolver),
        ConsolePresenter::new(io::stdout()),
    );

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Suggestions => {
            for word in SUGGESTIONS {
                println!("{}", word);
            }
        }
        Command::Ask { question } => app.ask(&question.join(" "))?,
        Command::Autoplay { count, delay_secs } => {
            let delay = Duration::from_secs(delay_secs.unwrap_or(config.autoplay_delay_secs));
            let mut play = AutoPlay::new(answers.keywords());
            let played = app.run_autoplay(&mut play, count, delay)?;
            log::info!("Autoplay finished after {} items", played);
        }
        Command::Interactive => {
            let (tx, rx) = crossbeam_channel::unbounded();
            thread::spawn(move || {
                for line in io::stdin().lock().lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            log::error!("Failed to read stdin: {}", e);
                            break;
                        }
                    }
                }
            });
            app.run_interactive(rx)?;
        }
    }

    Ok(())
}
