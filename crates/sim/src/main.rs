mod config;
mod events;
mod simulator;
mod tui;

use std::io;
use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use config::SimConfig;
use events::SimEvent;
use rubiks::{CompositorConfig, Layer, Move};
use simulator::Simulator;
use tui::TuiState;

#[derive(Parser)]
#[command(name = "rubiks-sim")]
#[command(about = "Runs a scripted quarter-turn sequence through the face-label model")]
struct Args {
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "1,2",
        help = "Move indices to run in order (1 = front turn, 2 = right column)"
    )]
    moves: Vec<u32>,

    #[arg(short, long, default_value_t = 60)]
    tick_rate: u32,

    #[arg(long, default_value_t = 1.0, help = "Rotation per tick in degrees")]
    step_degrees: f32,

    #[arg(long, default_value_t = 2.2)]
    layer_spacing: f32,

    #[arg(long, default_value_t = 0, help = "Stop after this many ticks (0 = when the script is done)")]
    max_ticks: u64,

    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let script = args
        .moves
        .iter()
        .map(|index| Move::from_index(*index))
        .collect::<Result<Vec<_>, _>>()?;

    let config = SimConfig {
        tick_rate: args.tick_rate,
        max_ticks: args.max_ticks,
        compositor: CompositorConfig {
            step_degrees: args.step_degrees,
            layer_spacing: args.layer_spacing,
            queue_capacity: script.len().max(CompositorConfig::default().queue_capacity),
            ..Default::default()
        },
    };

    let mut simulator = Simulator::new(config, &script)?;

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!(
            "Running {} move(s) at {} ticks/s",
            script.len(),
            args.tick_rate
        );
        run_headless(&mut simulator);
        log_labels(&simulator);
    } else {
        run_with_tui(&mut simulator)?;
    }

    Ok(())
}

fn run_headless(simulator: &mut Simulator) {
    let running = simulator.running();

    while running.load(Ordering::SeqCst) && !simulator.is_finished() {
        simulator.tick_once();

        for event in simulator.drain_events() {
            if event.is_error() {
                log::error!("{}", event.describe());
            } else if let SimEvent::Finished { .. } = event {
                log::info!("{}", event.describe());
            } else {
                log::debug!("{}", event.describe());
            }
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn log_labels(simulator: &Simulator) {
    for layer in Layer::ALL {
        for row in simulator.labels().grid(layer) {
            let cells: Vec<String> = row.iter().map(|c| format!("{:>2}", c.index())).collect();
            log::info!("{:<6} {}", layer.as_str(), cells.join(" "));
        }
    }
}

fn run_with_tui(simulator: &mut Simulator) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let running = simulator.running();
    let mut tui_state = TuiState::new();

    while running.load(Ordering::SeqCst) {
        simulator.tick_once();

        for event in simulator.drain_events() {
            let line = event.describe();
            match event {
                SimEvent::Error { .. } => tui_state.log_error(line),
                SimEvent::Paused { .. } => tui_state.log_warn(line),
                _ => tui_state.log_info(line),
            }
        }

        if event::poll(Duration::from_millis(1))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            running.store(false, Ordering::SeqCst);
                        }
                        KeyCode::Char(' ') => simulator.toggle_pause(),
                        KeyCode::Char(c @ ('1' | '2')) => {
                            let dispatched = Move::from_index(c as u32 - '0' as u32)
                                .and_then(|mv| simulator.dispatch(mv));
                            if let Err(err) = dispatched {
                                tui_state.log_error(err.to_string());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        let stats = simulator.stats();
        terminal.draw(|frame| {
            tui::render(frame, &tui_state, &stats);
        })?;
    }

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    Ok(())
}
