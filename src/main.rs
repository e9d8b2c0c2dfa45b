use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use tikiri_quiz::{
    consume_or_default, draw_quit_confirmation, draw_quiz, draw_result, draw_splash,
    handle_quit_confirm_input, handle_quiz_input, handle_result_input, handle_splash_input,
    is_exit_chord, logger, AppState, Config, QuestionBank, QuizResult, QuizSession,
    ResultStore, SqliteStore,
};

fn open_store(config: &Config) -> Result<SqliteStore, Box<dyn Error>> {
    let store = match &config.store_path {
        Some(path) => {
            logger::log(&format!("Using result store at {}", path.display()));
            SqliteStore::open(path)?
        }
        None => SqliteStore::open_in_memory()?,
    };
    Ok(store)
}

fn new_session(rng: &mut StdRng) -> QuizSession {
    logger::log("Starting new quiz session");
    QuizSession::new(QuestionBank::standard(), rng)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    store: &mut dyn ResultStore,
) -> Result<(), Box<dyn Error>> {
    let mut rng = match config.seed {
        Some(seed) => {
            logger::log(&format!("Shuffle seed fixed to {}", seed));
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut app_state = AppState::initial(config.start_route);
    let mut session = new_session(&mut rng);
    // Loaded once, when the result view is first entered.
    let mut result_view: Option<QuizResult> = None;

    loop {
        if app_state == AppState::Exit {
            return Ok(());
        }

        if app_state == AppState::Result && result_view.is_none() {
            result_view = Some(consume_or_default(store));
        }

        terminal.draw(|f| match app_state {
            AppState::Splash => draw_splash(f, session.total()),
            AppState::Quiz => draw_quiz(f, &session),
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Result => {
                if let Some(result) = &result_view {
                    draw_result(f, result);
                }
            }
            AppState::Exit => {}
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_exit_chord(&key) {
            return Ok(());
        }

        match app_state {
            AppState::Splash => handle_splash_input(key, &mut app_state),
            AppState::Quiz => handle_quiz_input(&mut session, key, &mut app_state, store),
            AppState::QuizQuitConfirm => {
                handle_quit_confirm_input(key, &mut app_state, &mut session, store, &mut rng)
            }
            AppState::Result => handle_result_input(key, &mut app_state),
            AppState::Exit => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logger::init(&config.log_path);

    let mut store = open_store(&config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal, &config, &mut store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &outcome {
        logger::log(&format!("Exiting with error: {}", e));
    }
    outcome
}
