use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keydash::{
    corpus::Corpus,
    events,
    limit::{self, DEFAULT_LIMIT, LIMIT_OPTIONS},
    runtime::{AppEvent, CrosstermEvents, Runner},
    session::Session,
    TICK_RATE_MS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

/// minimalist typing sprint for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a randomly sampled sequence of words and read your wpm and accuracy when \
                  the last character lands. Enter starts a new test, ctrl-r retries the current \
                  one, up/down change the word count."
)]
struct Cli {
    /// number of words in the target (10, 25, 50 or 100)
    #[clap(short = 'w', long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    words: usize,

    /// built-in corpus to sample words from
    #[clap(short = 'l', long, value_enum, default_value_t = CorpusChoice::English)]
    language: CorpusChoice,

    /// newline-separated word list file (overrides --language)
    #[clap(long)]
    wordlist: Option<PathBuf>,

    /// seed for the word sampler, for reproducible drills
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
enum CorpusChoice {
    English,
    Programming,
}

impl CorpusChoice {
    fn load(&self) -> Result<Corpus, Box<dyn Error>> {
        Ok(Corpus::embedded(&self.to_string().to_lowercase())?)
    }
}

fn parse_limit(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if limit::is_valid(n) {
        Ok(n)
    } else {
        Err(format!("word count must be one of {LIMIT_OPTIONS:?}"))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // Load and cache the corpus before touching the terminal, so a missing
    // or empty word list fails with a readable message.
    let corpus = match &cli.wordlist {
        Some(path) => Corpus::from_file(path)?,
        None => cli.language.load()?,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(corpus, cli.words, rng);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEvents::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    terminal.draw(|f| f.render_widget(&*session, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {}
            AppEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*session, f.area()))?;
            }
            AppEvent::Key(key) => {
                let quit = key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL));
                if quit {
                    break;
                }

                if let Some(event) = events::map_key(key) {
                    events::apply(session, event);
                }

                terminal.draw(|f| f.render_widget(&*session, f.area()))?;
            }
        }
    }

    Ok(())
}
