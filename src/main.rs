use std::path::PathBuf;

use clap::Parser;
use o_rakat::{Drill, DrillConfig, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with a custom question pool (defaults to the built-in unit questions)
    #[arg(short, long)]
    pool: Option<PathBuf>,

    /// Number of questions drawn per session
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    questions: u16,

    /// Points awarded per correct answer
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    reward: u32,

    /// Seed for a reproducible question draw
    #[arg(long)]
    seed: Option<u64>,

    /// Speech synthesis command; the text is appended and audio is read from stdout
    #[arg(long, env = "O_RAKAT_TTS")]
    tts_command: Option<String>,

    /// Command that plays synthesized audio from stdin
    #[arg(long, env = "O_RAKAT_PLAYER")]
    player_command: Option<String>,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn drill_config(&self) -> DrillConfig {
        DrillConfig {
            pool_path: self.pool.clone(),
            questions_per_session: usize::from(self.questions),
            reward: self.reward,
            seed: self.seed,
            tts_command: self.tts_command.clone(),
            player_command: self.player_command.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::setup(&log_path) {
        eprintln!("Logging disabled: {}", e);
    }

    let drill = match Drill::new(&args.drill_config()) {
        Ok(drill) => drill,
        Err(e) => {
            eprintln!("Error starting drill: {}", e);
            std::process::exit(1);
        }
    };

    match tokio::task::spawn_blocking(move || drill.run()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("Error running drill: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Drill task failed: {}", e);
            std::process::exit(1);
        }
    }
}
