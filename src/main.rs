//! An interactive vector calculator written in Rust.
//!
//! The window shows three cards: single-vector analysis (null check and unit
//! vector), pairwise comparison (equal, opposite, collinear), and multi-vector
//! sums (resultant and equilibrant). Vectors are typed as comma-separated
//! components, one text field per vector, and every button runs one operation
//! and prints the formatted result or error message in the card's output area.

mod widgets;
mod panel;

use crate::widgets::{Button, CalcAction, Label, OutputArea, TextField};
use crate::panel::Panel;
use sdl2::pixels::Color;
use sdl2::event::Event;
use sdl2::video::Window;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use std::time::Duration;

/// Window title displayed in the title bar
const TITLE: &str = "Vector Calculator";
/// Width of the calculator window in pixels
const WINDOW_WIDTH: u32 = 560;
/// Height of the calculator window in pixels
const WINDOW_HEIGHT: u32 = 720;
/// Background color for the canvas
const BACKGROUND: Color = Color::RGB(24, 24, 30);
/// Path to the font file used for rendering text
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Point size for all rendered text
const FONT_SIZE: u16 = 15;
/// Horizontal margin around the cards
const MARGIN: i32 = 20;
/// Width of every field and output area
const CARD_WIDTH: u32 = 520;
/// Height of a single-line text field
const FIELD_HEIGHT: u32 = 36;
/// Button dimensions shared by all seven buttons
const BUTTON_WIDTH: u32 = 150;
const BUTTON_HEIGHT: u32 = 32;
/// Horizontal gap between buttons in the same row
const BUTTON_GAP: i32 = 12;

/// Renders the calculator for one frame.
///
/// # Arguments
///
/// * `panel` - The panel containing all fields, buttons, and output areas
/// * `canvas` - SDL2 canvas for rendering
/// * `font` - Font for rendering text
fn main_loop(panel: &Panel, canvas: &mut Canvas<Window>, font: &Font) {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    panel.draw_frame(canvas, font);
}

/// Sets up the three calculator cards.
///
/// Each card wires its text field(s) and output area to the buttons that
/// dispatch the card's operations.
///
/// # Arguments
///
/// * `panel` - The panel to add widgets to
fn set_up(panel: &mut Panel) {
    let button_step = BUTTON_WIDTH as i32 + BUTTON_GAP;

    // --- Card 1: single vector analysis ---
    panel.add_label(Label::new(MARGIN, 20, "Single vector"));
    let single = panel.add_field(TextField::new(
        Rect::new(MARGIN, 44, CARD_WIDTH, FIELD_HEIGHT),
        "e.g. [1, 2, 3]",
        None,
    ));
    let single_out = panel.add_output(OutputArea::new(Rect::new(MARGIN, 132, CARD_WIDTH, 70)));
    panel.add_button(Button::new(
        Rect::new(MARGIN, 90, BUTTON_WIDTH, BUTTON_HEIGHT),
        "Null vector?",
        CalcAction::CheckNull,
        vec![single],
        single_out,
        None,
    ));
    panel.add_button(Button::new(
        Rect::new(MARGIN + button_step, 90, BUTTON_WIDTH, BUTTON_HEIGHT),
        "Unit vector",
        CalcAction::UnitVector,
        vec![single],
        single_out,
        None,
    ));

    // --- Card 2: comparison between two vectors ---
    panel.add_label(Label::new(MARGIN, 216, "Compare two vectors"));
    let first = panel.add_field(TextField::new(
        Rect::new(MARGIN, 240, CARD_WIDTH, FIELD_HEIGHT),
        "Vector A",
        None,
    ));
    let second = panel.add_field(TextField::new(
        Rect::new(MARGIN, 284, CARD_WIDTH, FIELD_HEIGHT),
        "Vector B",
        None,
    ));
    let compare_out = panel.add_output(OutputArea::new(Rect::new(MARGIN, 372, CARD_WIDTH, 26)));
    let compare = [
        ("Equal?", CalcAction::CheckEqual),
        ("Opposite?", CalcAction::CheckOpposite),
        ("Collinear?", CalcAction::CheckCollinear),
    ];
    for (i, (label, action)) in compare.into_iter().enumerate() {
        panel.add_button(Button::new(
            Rect::new(MARGIN + i as i32 * button_step, 330, BUTTON_WIDTH, BUTTON_HEIGHT),
            label,
            action,
            vec![first, second],
            compare_out,
            None,
        ));
    }

    // --- Card 3: operations over a list of vectors ---
    panel.add_label(Label::new(MARGIN, 414, "Multiple vectors (one per line)"));
    let multi = panel.add_field(TextField::new(
        Rect::new(MARGIN, 438, CARD_WIDTH, 140),
        "e.g. 1, 2 with Enter between vectors",
        Some(true),
    ));
    let multi_out = panel.add_output(OutputArea::new(Rect::new(MARGIN, 630, CARD_WIDTH, 70)));
    panel.add_button(Button::new(
        Rect::new(MARGIN, 588, BUTTON_WIDTH, BUTTON_HEIGHT),
        "Resultant",
        CalcAction::Resultant,
        vec![multi],
        multi_out,
        None,
    ));
    panel.add_button(Button::new(
        Rect::new(MARGIN + button_step, 588, BUTTON_WIDTH, BUTTON_HEIGHT),
        "Equilibrant",
        CalcAction::Equilibrant,
        vec![multi],
        multi_out,
        None,
    ));
}

/// Main entry point for the vector calculator.
///
/// Initializes SDL2, creates the window and rendering context, builds the
/// three cards, and runs the event loop at 60 FPS.
fn main() {
    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();
    let ttf_context = sdl2::ttf::init().unwrap();

    // Create window and font
    let window = video_subsystem.window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .unwrap();
    let font = ttf_context.load_font(FONT_PATH, FONT_SIZE).unwrap();

    // Create rendering canvas
    let mut canvas = window.into_canvas().build().unwrap();
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut panel = Panel::new();
    set_up(&mut panel);

    // Route typed characters to the focused field
    video_subsystem.text_input().start();
    let mut event_pump = sdl_context.event_pump().unwrap();

    // Main event loop
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit {..} |
                Event::KeyDown { keycode: Some(Keycode::Escape), ..} => {
                    break 'running
                },
                Event::MouseButtonDown { mouse_btn: MouseButton::Left, x, y, .. } => {
                    panel.handle_click(x, y)
                },
                Event::TextInput { text, .. } => {
                    panel.handle_text_input(&text)
                },
                Event::KeyDown { keycode: Some(Keycode::Backspace), ..} => {
                    panel.handle_backspace()
                },
                Event::KeyDown { keycode: Some(Keycode::Return), ..} => {
                    panel.handle_return()
                },
                _ => {}
            }
        }

        main_loop(&panel, &mut canvas, &font);

        canvas.present();
        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
}
