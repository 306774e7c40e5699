//! Pixel Bloom headless entry point
//!
//! There is no renderer in this crate; the binary runs a short scripted
//! session through the real simulation and dumps the final frame snapshot
//! as JSON. Useful as a smoke run and as an example of driving the core.

use glam::Vec2;
use pixel_bloom::platform::{InputSource, ScriptedSource};
use pixel_bloom::sim::{tick, GamePhase, GameState, TickInput};
use pixel_bloom::ui;

fn demo_script(state: &GameState) -> ScriptedSource {
    let dt = 1.0 / 60.0;
    let (_, start_rect) = ui::visible_buttons(state)[0];
    let start_click = TickInput {
        pointer: Vec2::new(start_rect.x + 2.0, start_rect.y + 2.0),
        released: true,
        ..Default::default()
    };
    let shield_up = TickInput {
        pointer: Vec2::new(70.0, 70.0),
        pressed: true,
        ..Default::default()
    };
    let shield_hold = TickInput {
        pointer: Vec2::new(70.0, 70.0),
        ..Default::default()
    };
    let toggle = TickInput {
        toggle_weather: true,
        ..Default::default()
    };

    let mut source = ScriptedSource::default();
    source
        .frame(start_click, dt)
        // A stretch of sunny weather with the shield parked mid-field
        .frame(shield_up, dt)
        .hold(shield_hold, dt, 600)
        // Switch to rain and let the flower drink for a while
        .frame(toggle, dt)
        .hold(TickInput::default(), dt, 600)
        // Back to sun until the script runs out
        .frame(toggle, dt)
        .hold(TickInput::default(), dt, 600);
    source
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Pixel Bloom headless demo, seed {seed}");

    let mut state = GameState::new(seed);
    let mut source = demo_script(&state);

    while let Some((input, dt)) = source.next_frame() {
        tick(&mut state, &input, dt);
        if state.exit_requested {
            break;
        }
        if state.phase == GamePhase::GameOver {
            log::info!(
                "run ended: {}",
                state
                    .death_cause
                    .map(|c| c.label())
                    .unwrap_or("unknown cause")
            );
            break;
        }
    }

    log::info!(
        "demo finished: score {:.1}, health {:.0}, hydration {:.0}",
        state.score.current,
        state.flower.health,
        state.flower.hydration
    );
    let snapshot = serde_json::to_string_pretty(&state.snapshot()).expect("snapshot serializes");
    println!("{snapshot}");
}
