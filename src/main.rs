mod aggregate;
mod build_info;
mod constants;
mod dice;
mod experiment;
mod rules;
mod trial;
mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use experiment::{rng_for, run_experiment, ExperimentConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use ui::chart_scene::ChartScreen;
use ui::setup_scene::SetupScreen;

enum Screen {
    Setup,
    Chart,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "dicedecay {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dice Decay - Radioactive Decay Simulator\n");
                println!("Usage: dicedecay\n");
                println!("Interactive terminal simulation. Pick a decay rule and a trial");
                println!("count, then watch the decay curves. For scripted runs use the");
                println!("headless `decay` binary.\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'dicedecay --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut current_screen = Screen::Setup;
    let mut setup_screen = SetupScreen::new();
    let mut chart_screen: Option<ChartScreen> = None;
    let mut last_config: Option<ExperimentConfig> = None;

    loop {
        match current_screen {
            Screen::Setup => {
                terminal.draw(|f| {
                    let area = f.size();
                    setup_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => setup_screen.handle_char_input(c),
                            KeyCode::Backspace => setup_screen.handle_backspace(),
                            KeyCode::Tab => setup_screen.next_field(),
                            KeyCode::Up => setup_screen.handle_up(),
                            KeyCode::Down => setup_screen.handle_down(),
                            KeyCode::Enter => match setup_screen.config() {
                                Ok(config) => {
                                    chart_screen = Some(run_and_summarize(&config));
                                    last_config = Some(config);
                                    current_screen = Screen::Chart;
                                }
                                Err(msg) => {
                                    setup_screen.validation_error = Some(msg);
                                }
                            },
                            KeyCode::Esc => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }
            Screen::Chart => {
                if let Some(screen) = &chart_screen {
                    terminal.draw(|f| {
                        let area = f.size();
                        screen.draw(f, area);
                    })?;
                }

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('r') => {
                                if let Some(config) = &last_config {
                                    chart_screen = Some(run_and_summarize(config));
                                }
                            }
                            KeyCode::Char('n') => {
                                setup_screen = SetupScreen::new();
                                current_screen = Screen::Setup;
                            }
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

/// Run one experiment and prepare its chart. The setup screen has already
/// validated the config, so a failed run is a programming error here.
fn run_and_summarize(config: &ExperimentConfig) -> ChartScreen {
    let result = run_experiment(config).expect("setup screen validated trial count");
    let mut sample_rng = rng_for(config.seed, 1);
    let spec = aggregate::summarize(&result.curves(), &mut sample_rng);
    ChartScreen::new(spec)
}
