//! Menu layout and button hit-testing
//!
//! All rectangles live in the 160x90 virtual space; the window scaling
//! transform is applied by the platform layer before input reaches the
//! core. Buttons are edge-triggered: one fires exactly once, on the frame
//! the pointer transitions from down to up inside its rectangle, so a
//! held button never repeats.

use glam::Vec2;

use crate::consts::{NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::sim::{GamePhase, GameState, TickInput};

/// Axis-aligned rectangle in virtual coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Menu actions a button release can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Restart,
    Continue,
    Pause,
    Exit,
}

impl MenuButton {
    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Start => "Start Game",
            MenuButton::Restart => "Restart Game",
            MenuButton::Continue => "Continue",
            MenuButton::Pause => "Pause",
            MenuButton::Exit => "Exit Game",
        }
    }
}

const MENU_WIDTH: f32 = 60.0;
const MENU_ITEM_HEIGHT: f32 = 12.0;
const MENU_X: f32 = (NATIVE_WIDTH - MENU_WIDTH) / 2.0;

const fn menu_slot(row: f32) -> Rect {
    Rect::new(
        MENU_X,
        NATIVE_HEIGHT / 2.0 + row * (MENU_ITEM_HEIGHT + 4.0) - MENU_ITEM_HEIGHT / 2.0,
        MENU_WIDTH,
        MENU_ITEM_HEIGHT,
    )
}

/// Small pause toggle in the corner, visible while playing
const PAUSE_BUTTON: Rect = Rect::new(2.0, 2.0, 18.0, 8.0);

/// On-screen flower hitbox; a pointer release inside it toggles the
/// weather instead of ending a shield stroke.
pub const FLOWER_HITBOX: Rect = Rect::new(52.0, 56.0, 24.0, 34.0);

/// Buttons visible for the current screen, top to bottom, with their
/// rectangles. The renderer draws these; `released_button` hit-tests them.
pub fn visible_buttons(state: &GameState) -> Vec<(MenuButton, Rect)> {
    match state.phase {
        GamePhase::StartMenu => vec![
            (MenuButton::Start, menu_slot(-1.0)),
            (MenuButton::Exit, menu_slot(1.0)),
        ],
        GamePhase::GameOver => vec![
            (MenuButton::Restart, menu_slot(-1.0)),
            (MenuButton::Exit, menu_slot(1.0)),
        ],
        GamePhase::InGame => {
            if state.paused {
                vec![
                    (MenuButton::Continue, menu_slot(-1.0)),
                    (MenuButton::Restart, menu_slot(0.0)),
                    (MenuButton::Exit, menu_slot(1.0)),
                ]
            } else {
                vec![(MenuButton::Pause, PAUSE_BUTTON)]
            }
        }
    }
}

/// The button activated this frame, if the pointer was released inside
/// one. Level state (held button) never fires.
pub fn released_button(state: &GameState, input: &TickInput) -> Option<MenuButton> {
    if !input.released {
        return None;
    }
    visible_buttons(state)
        .into_iter()
        .find(|(_, rect)| rect.contains(input.pointer))
        .map(|(button, _)| button)
}
