//! Word Combat - terminal front end.
//!
//! Line-oriented: reads words from stdin, prints the duel to stdout.
//! Type `/quit` or close the input (Ctrl-D) to abandon the match.
//! Ctrl-C ends it the same way, with the same farewell and exit status.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use word_combat::core::error::Result;
use word_combat::core::{HealthTier, Player, RoundResult, Submission};
use word_combat::{
    CombatMode, GameOverReason, GameRng, MatchConfig, MatchEngine, MatchError, MatchEvent,
    MatchState, PlayerId, Presenter,
};

const QUIT_COMMAND: &str = "/quit";

const FAREWELL: &str = "👋 Combat interrupted! See you soon!";

const ATTACK_LINES: [&str; 5] = [
    "🗡️ {name} brandishes '{word}'!",
    "⚡ {name} hurls '{word}' in a fury!",
    "🔥 {name} unleashes the power of '{word}'!",
    "💫 {name} summons '{word}'!",
    "⚔️ {name} strikes with '{word}'!",
];

/// Word Combat - two warriors, one keyboard, and a lot of words
#[derive(Parser, Debug)]
#[command(name = "word-combat")]
#[command(about = "A two-player word duel for the terminal")]
struct Args {
    /// Name of the first warrior (asked interactively if omitted)
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second warrior (asked interactively if omitted)
    #[arg(long)]
    player2: Option<String>,

    /// Starting health for both warriors
    #[arg(long, default_value_t = 100)]
    health: u32,

    /// Random seed for deterministic mode selection
    #[arg(long)]
    seed: Option<u64>,

    /// Do not wait for Enter between rounds
    #[arg(long)]
    no_pause: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    summary_json: bool,
}

/// Stdin/stdout presenter.
struct TerminalPresenter<R, W> {
    input: R,
    out: W,
    flavor: GameRng,
    pause: bool,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    fn new(input: R, out: W, flavor: GameRng, pause: bool) -> Self {
        Self {
            input,
            out,
            flavor,
            pause,
        }
    }

    /// Read one trimmed line. End of input and `/quit` cancel the match.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MatchError::Cancelled);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Err(MatchError::Cancelled);
        }
        Ok(line.to_string())
    }

    fn wait(&mut self, prompt: &str) -> Result<()> {
        if self.pause {
            self.read_line(&format!("\n{} ", prompt))?;
        }
        Ok(())
    }

    fn ask_name(&mut self, seat: usize) -> Result<String> {
        let name = self.read_line(&format!("Name of Warrior {}: ", seat))?;
        Ok(if name.is_empty() {
            format!("Warrior {}", seat)
        } else {
            name
        })
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "╔═══════════════════════════════════════════════╗")?;
        writeln!(self.out, "║              ⚔️  WORD COMBAT  ⚔️              ║")?;
        writeln!(self.out, "║          May the best word win!               ║")?;
        writeln!(self.out, "╚═══════════════════════════════════════════════╝")?;
        Ok(())
    }

    fn health_line(player: &Player) -> String {
        let bar = player.health_bar();
        let cells: String = "█".repeat(bar.filled) + &"░".repeat(bar.width - bar.filled);
        let marker = match bar.tier {
            HealthTier::Healthy => "",
            HealthTier::Wounded => " (wounded)",
            HealthTier::Critical => " (critical)",
        };
        format!(
            "{}: {} {}/{} HP{}",
            player.name, cells, player.health, player.max_health, marker
        )
    }

    fn status(&mut self, round: u32, state: &MatchState) -> Result<()> {
        writeln!(self.out, "\n🏟️  ROUND {} 🏟️", round)?;
        for (_, player) in state.players().iter() {
            writeln!(self.out, "{}", Self::health_line(player))?;
        }
        self.score_line(state)
    }

    fn score_line(&mut self, state: &MatchState) -> Result<()> {
        let first = state.player(PlayerId::FIRST);
        let second = state.player(PlayerId::SECOND);
        writeln!(
            self.out,
            "\nScore: {} {} - {} {}",
            first.name, first.score, second.score, second.name
        )?;
        Ok(())
    }

    fn analysis(&mut self, submission: &Submission) -> Result<()> {
        let stats = &submission.stats;
        writeln!(self.out, "\n📊 WORD ANALYSIS: '{}'", submission.word.to_uppercase())?;
        writeln!(self.out, "Length: {} letters", stats.length)?;
        writeln!(
            self.out,
            "Vowels: {} | Consonants: {}",
            stats.vowel_count, stats.consonant_count
        )?;
        writeln!(self.out, "Rare letters: {}", stats.rare_letter_count)?;
        writeln!(self.out, "Scrabble score: {} points", stats.scrabble_score)?;
        if stats.is_palindrome {
            writeln!(self.out, "🪞 PALINDROME DETECTED!")?;
        }
        writeln!(self.out, "⚔️ DAMAGE: {}", submission.damage)?;
        Ok(())
    }

    fn attack(&mut self, name: &str, word: &str, damage: u32) -> Result<()> {
        let line = self
            .flavor
            .choose(&ATTACK_LINES)
            .copied()
            .unwrap_or(ATTACK_LINES[0])
            .replace("{name}", name)
            .replace("{word}", &word.to_uppercase());
        writeln!(self.out, "\n{}", line)?;
        writeln!(self.out, "💥 {} DAMAGE! 💥", damage)?;
        Ok(())
    }

    fn round_resolved(
        &mut self,
        outcome: &word_combat::RoundOutcome,
        state: &MatchState,
    ) -> Result<()> {
        writeln!(self.out, "\n📊 ROUND {} RESULTS 📊", outcome.round)?;
        for submission in &outcome.submissions {
            self.analysis(submission)?;
        }

        match outcome.result {
            RoundResult::Victory { winner, damage, .. } => {
                let name = state.player(winner).name.clone();
                writeln!(self.out, "\n🏆 {} wins the round!", name)?;
                if let Some(submission) = outcome.submission(winner) {
                    self.attack(&name, &submission.word, damage)?;
                }
            }
            RoundResult::Tie => {
                writeln!(self.out, "\n⚖️ TIE! Both warriors are wounded!")?;
                for submission in &outcome.submissions {
                    let name = state.player(submission.player).name.clone();
                    let damage = outcome.damage_taken[submission.player.opponent()];
                    self.attack(&name, &submission.word, damage)?;
                }
            }
            RoundResult::Uncontested { player } => {
                writeln!(self.out, "\n{} stands alone.", state.player(player).name)?;
            }
        }

        if !state.is_game_over() {
            self.wait("Press Enter for the next round...")?;
        }
        Ok(())
    }

    fn match_over(
        &mut self,
        reason: GameOverReason,
        summary: &word_combat::MatchSummary,
    ) -> Result<()> {
        match reason {
            GameOverReason::DoubleKnockout => {
                writeln!(self.out, "\n💀 DOUBLE K.O.! 💀")?;
                writeln!(self.out, "Both warriors collapse at the same time!")?;
            }
            GameOverReason::Victory(winner) => {
                writeln!(
                    self.out,
                    "\n👑 VICTORY FOR {}! 👑",
                    summary.names[winner].to_uppercase()
                )?;
            }
        }

        writeln!(self.out, "\n📈 FINAL STATISTICS 📈")?;
        writeln!(self.out, "Rounds played: {}", summary.rounds_played)?;
        writeln!(self.out, "Words used: {}", summary.words_used)?;
        writeln!(
            self.out,
            "Final score: {} {} - {} {}",
            summary.names[PlayerId::FIRST],
            summary.scores[PlayerId::FIRST],
            summary.scores[PlayerId::SECOND],
            summary.names[PlayerId::SECOND]
        )?;
        writeln!(self.out, "\n🏆 Words of the match:")?;
        for word in &summary.sample_words {
            writeln!(self.out, "• {}", word.to_uppercase())?;
        }
        writeln!(self.out, "\nThanks for playing Word Combat! ⚔️")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present(&mut self, event: &MatchEvent<'_>) -> Result<()> {
        match *event {
            MatchEvent::MatchStarted { state } => {
                let first = &state.player(PlayerId::FIRST).name;
                let second = &state.player(PlayerId::SECOND).name;
                writeln!(self.out, "\n⚔️ {} VS {} ⚔️", first, second)?;
                writeln!(self.out, "Let the combat begin!")?;
                self.wait("Press Enter to start...")
            }
            MatchEvent::RoundStarted {
                round,
                mode,
                description,
                state,
            } => {
                self.banner()?;
                self.status(round, state)?;
                writeln!(self.out, "\n⚔️ COMBAT MODE: {} ⚔️", mode)?;
                writeln!(self.out, "{}", description)?;
                self.wait("Press Enter to start the round...")
            }
            MatchEvent::WordRejected { error, .. } => {
                writeln!(self.out, "❌ {}!", error)?;
                Ok(())
            }
            MatchEvent::WordAccepted { .. } => Ok(()),
            MatchEvent::RoundResolved { outcome, state } => self.round_resolved(outcome, state),
            MatchEvent::MatchOver { reason, summary } => self.match_over(reason, summary),
        }
    }

    fn request_word(&mut self, _player: PlayerId, name: &str, mode: CombatMode) -> Result<String> {
        writeln!(self.out, "\n🎯 {}, your turn to attack!", name)?;
        writeln!(self.out, "{}", mode.description())?;
        self.read_line("\nEnter your attack word: ")
    }
}

fn play(args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seed selected");

    // stdout stays unlocked so the interrupt watcher can still print
    let stdin = io::stdin();
    let flavor = GameRng::new(seed).for_context("flavor");
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout(), flavor, !args.no_pause);

    presenter.banner()?;
    writeln!(presenter.out, "Welcome to Word Combat!")?;
    writeln!(presenter.out, "⚔️ Two warriors fight with words!")?;
    writeln!(presenter.out, "Every round has a different combat mode.")?;
    writeln!(presenter.out, "The first to fall to 0 HP loses!\n")?;

    let first = match &args.player1 {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => presenter.ask_name(1)?,
    };
    let second = match &args.player2 {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => presenter.ask_name(2)?,
    };

    let config = MatchConfig::default()
        .with_starting_health(args.health)
        .with_seed(seed);
    let mut engine = MatchEngine::new([first, second], config);
    engine.run(&mut presenter)?;

    if args.summary_json {
        match serde_json::to_string_pretty(&engine.state().summary()) {
            Ok(json) => writeln!(presenter.out, "{}", json)?,
            Err(e) => warn!("could not serialize summary: {}", e),
        }
    }

    Ok(())
}

/// Watch for Ctrl-C on a side thread.
///
/// The main thread is usually blocked reading stdin, so the watcher prints
/// the farewell and exits itself rather than unwinding the match.
fn spawn_interrupt_watcher() {
    std::thread::spawn(|| {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("could not start interrupt watcher: {}", e);
                return;
            }
        };

        match runtime.block_on(tokio::signal::ctrl_c()) {
            Ok(()) => {
                info!("interrupt received");
                println!("\n{}", FAREWELL);
                std::process::exit(0);
            }
            Err(e) => warn!("could not listen for Ctrl-C: {}", e),
        }
    });
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_combat=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if args.health == 0 {
        eprintln!("error: --health must be at least 1");
        return ExitCode::FAILURE;
    }

    spawn_interrupt_watcher();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(MatchError::Cancelled) => {
            println!("\n{}", FAREWELL);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
