mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use invaders::events::{EventQueue, SoundKind};
use invaders::game::{Game, GameOutcome};
use invaders::player::PlayerInput;
use invaders::score::{HighScoreTable, NAME_LENGTH};
use invaders::stage::StageManager;

use display::Viewport;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Frames a key keeps counting as held after its most recent press or
/// repeat.  Terminals without release reporting deliver only repeats, and
/// key repeat arrives faster than this window expires, so a held key
/// stays held and a released one decays within ~130 ms.
const HOLD_WINDOW: u64 = 4;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── High-score persistence ────────────────────────────────────────────────────

fn score_table_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".invaders_scores")
}

// ── Sound events ──────────────────────────────────────────────────────────────

/// The terminal's entire sound hardware is the bell.  Ring it for the
/// impactful cues, drop the rest.
fn emit_sounds<W: Write>(out: &mut W, sounds: &[SoundKind]) -> std::io::Result<()> {
    let audible = sounds.iter().any(|s| {
        matches!(
            s,
            SoundKind::PlayerHit | SoundKind::UfoSpawn | SoundKind::GameOver | SoundKind::GameWin
        )
    });

    if audible {
        out.write_all(b"\x07")?;
        out.flush()?;
    }

    Ok(())
}

// ── Scenes ────────────────────────────────────────────────────────────────────

/// Where the save-score screen hands control after committing a name.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AfterSave {
    Replay,
    Menu,
}

enum Scene {
    Menu,
    Playing,
    GameOver { win: bool },
    SaveScore { name: String, next: AfterSave },
    ScoreRank,
}

/// Held-key flags fed to the player as press/release transitions.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
struct HeldKeys {
    left: bool,
    right: bool,
    shoot: bool,
}

fn apply_held_keys(game: &mut Game, prev: HeldKeys, held: HeldKeys) {
    if held.left != prev.left {
        game.handle_input(if held.left {
            PlayerInput::MoveLeft
        } else {
            PlayerInput::StopMoveLeft
        });
    }
    if held.right != prev.right {
        game.handle_input(if held.right {
            PlayerInput::MoveRight
        } else {
            PlayerInput::StopMoveRight
        });
    }
    if held.shoot != prev.shoot {
        game.handle_input(if held.shoot {
            PlayerInput::Shoot
        } else {
            PlayerInput::StopShoot
        });
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let path = score_table_path();
    let mut table = HighScoreTable::load(&path);
    let mut stage_manager = StageManager::new();
    let mut rng = thread_rng();
    let mut events = EventQueue::new();
    let clock = Instant::now();

    let mut scene = Scene::Menu;
    let mut game: Option<Game> = None;
    let mut last_score: u32 = 0;

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut prev_held = HeldKeys::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        let now = clock.elapsed().as_secs_f64();
        frame += 1;

        // Drain all pending input events (non-blocking).  One-shot scene
        // actions react to Press only; the key map tracks held state.
        let mut presses: Vec<KeyCode> = Vec::new();
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        table.save(&path)?;
                        return Ok(());
                    }
                    presses.push(code);
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let (term_w, term_h) = terminal::size()?;
        let view = Viewport::new(term_w, term_h);

        match &mut scene {
            Scene::Menu => {
                display::draw_menu(out, view, &table)?;

                for code in &presses {
                    match code {
                        KeyCode::Enter => {
                            stage_manager.reset();
                            game = Some(Game::new(&mut stage_manager, 0, now));
                            prev_held = HeldKeys::default();
                            scene = Scene::Playing;
                            break;
                        }
                        KeyCode::Char('h') | KeyCode::Char('H') => {
                            scene = Scene::ScoreRank;
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            table.save(&path)?;
                            return Ok(());
                        }
                        _ => {}
                    }
                }
            }

            Scene::Playing => {
                if presses.contains(&KeyCode::Esc) {
                    game = None;
                    scene = Scene::Menu;
                    continue;
                }

                let Some(g) = game.as_mut() else {
                    scene = Scene::Menu;
                    continue;
                };

                let held = HeldKeys {
                    left: is_held(&key_frame, &KeyCode::Left, frame)
                        || is_held(&key_frame, &KeyCode::Char('a'), frame),
                    right: is_held(&key_frame, &KeyCode::Right, frame)
                        || is_held(&key_frame, &KeyCode::Char('d'), frame),
                    shoot: is_held(&key_frame, &KeyCode::Char(' '), frame),
                };
                apply_held_keys(g, prev_held, held);
                prev_held = held;

                let outcome = g.update(&mut stage_manager, &mut rng, &mut events, now);
                last_score = g.player.score;

                display::render(out, g, stage_manager.current_stage, view)?;

                match outcome {
                    GameOutcome::Running => {}
                    GameOutcome::StageCleared => {
                        events.play_sound(SoundKind::GameWin);
                        scene = Scene::GameOver { win: true };
                    }
                    GameOutcome::Defeat => {
                        events.play_sound(SoundKind::GameOver);
                        scene = Scene::GameOver { win: false };
                    }
                }

                emit_sounds(out, &events.drain_sounds())?;
            }

            Scene::GameOver { win } => {
                let win = *win;
                display::draw_game_over(out, view, win, last_score)?;

                for code in &presses {
                    match code {
                        KeyCode::Enter => {
                            if win {
                                // Next stage, score carried over.
                                stage_manager.next_stage();
                                game = Some(Game::new(&mut stage_manager, last_score, now));
                                prev_held = HeldKeys::default();
                                scene = Scene::Playing;
                            } else if table.is_eligible(last_score) {
                                scene = Scene::SaveScore {
                                    name: String::new(),
                                    next: AfterSave::Replay,
                                };
                            } else {
                                stage_manager.reset();
                                game = Some(Game::new(&mut stage_manager, 0, now));
                                prev_held = HeldKeys::default();
                                scene = Scene::Playing;
                            }
                            break;
                        }
                        KeyCode::Esc => {
                            if table.is_eligible(last_score) {
                                scene = Scene::SaveScore {
                                    name: String::new(),
                                    next: AfterSave::Menu,
                                };
                            } else {
                                game = None;
                                scene = Scene::Menu;
                            }
                            break;
                        }
                        _ => {}
                    }
                }
            }

            Scene::SaveScore { name, next } => {
                let mut committed: Option<AfterSave> = None;

                for code in &presses {
                    match code {
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            if name.chars().count() < NAME_LENGTH {
                                name.push(c.to_ascii_uppercase());
                            }
                        }
                        KeyCode::Backspace => {
                            name.pop();
                        }
                        KeyCode::Enter => {
                            if name.chars().count() == NAME_LENGTH {
                                table.save_score(name, last_score);
                                table.save(&path)?;
                                committed = Some(*next);
                            }
                        }
                        _ => {}
                    }
                }

                display::draw_save_score(out, view, &table, name, last_score)?;

                match committed {
                    Some(AfterSave::Replay) => {
                        stage_manager.reset();
                        game = Some(Game::new(&mut stage_manager, 0, now));
                        prev_held = HeldKeys::default();
                        scene = Scene::Playing;
                    }
                    Some(AfterSave::Menu) => {
                        game = None;
                        scene = Scene::Menu;
                    }
                    None => {}
                }
            }

            Scene::ScoreRank => {
                display::draw_score_rank(out, view, &table)?;

                if !presses.is_empty() {
                    scene = Scene::Menu;
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events from the terminal.  Kitty-protocol
    // terminals support this; others fall back to the hold-window model.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
