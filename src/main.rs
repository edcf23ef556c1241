mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use display::TerminalView;
use lane_runner::config::{FRAME, MAX_FRAME_DT};
use lane_runner::entities::{CharacterId, Direction, InputEvent};
use lane_runner::session::Session;

/// What a single key press means to the front end.
enum KeyAction {
    Game(InputEvent),
    Quit,
    Ignore,
}

/// Unknown keys map to `Ignore`, never to an error.
fn map_key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Game(InputEvent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Game(InputEvent::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            KeyAction::Game(InputEvent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Game(InputEvent::Move(Direction::Down))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(InputEvent::RestartRequested),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| CharacterId::from_menu_slot(d as usize))
            .map(|id| KeyAction::Game(InputEvent::SelectCharacter(id)))
            .unwrap_or(KeyAction::Ignore),
        _ => KeyAction::Ignore,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits. Key presses are buffered into the session and
/// applied at the next tick; `dt` is the real time since the previous frame.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut session = Session::new(&mut rng);
    let mut view = TerminalView::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) = ev {
                match map_key(code, modifiers) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Game(input) => session.push_input(input),
                    KeyAction::Ignore => {}
                }
            }
        }

        let dt = frame_start.duration_since(last).as_secs_f64().min(MAX_FRAME_DT);
        last = frame_start;

        // TerminalView is both the UI sink and the render sink; the core
        // treats them as separate borrows, so drive the two halves in turn.
        session.tick(dt, &mut rng, &mut view);
        session.render(&mut view);
        display::present(out, &mut view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Logs go to stderr; run with e.g. `RUST_LOG=debug ... 2>game.log`.
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!("input reader stopped: {}", err);
                break;
            }
        }
    });

    info!("lane_runner started");
    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
