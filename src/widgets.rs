use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::ttf::Font;
use sdl2::gfx::primitives::DrawRenderer;

const FIELD_BG: Color = Color::RGB(36, 36, 44);
const FIELD_BORDER: Color = Color::RGB(90, 90, 102);
const FOCUS_BORDER: Color = Color::RGB(110, 160, 255);
const BUTTON_BG: Color = Color::RGB(52, 82, 140);
const BUTTON_BORDER: Color = Color::RGB(110, 160, 255);
const TEXT_COLOR: Color = Color::RGB(232, 232, 238);
const PLACEHOLDER_COLOR: Color = Color::RGB(120, 120, 132);
const TITLE_COLOR: Color = Color::RGB(180, 190, 210);
const RESULT_COLOR: Color = Color::RGB(160, 230, 170);
const ERROR_COLOR: Color = Color::RGB(255, 120, 120);

const TEXT_PAD: i32 = 8;
const LINE_SPACING: i32 = 4;
const CORNER_RADIUS: i16 = 5;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn draw_text(canvas: &mut Canvas<Window>, font: &Font, text: &str, x: i32, y: i32, color: Color) {
    if text.is_empty() {
        return;
    }
    let surface = font.render(text).blended(color).unwrap();
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator.create_texture_from_surface(&surface).unwrap();
    let query = texture.query();
    let _ = canvas.copy(&texture, None, Rect::new(x, y, query.width, query.height));
}

/// The seven calculator operations a button can be wired to.
#[derive(Clone, Copy)]
pub enum CalcAction {
    CheckNull,
    UnitVector,
    CheckEqual,
    CheckOpposite,
    CheckCollinear,
    Resultant,
    Equilibrant,
}

pub struct Label {
    pub position: [i32; 2],
    pub text: String,
}

impl Label {
    pub fn new(x: i32, y: i32, text: &str) -> Label {
        Label {
            position: [x, y],
            text: text.to_string(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, font: &Font) {
        draw_text(canvas, font, &self.text, self.position[0], self.position[1], TITLE_COLOR);
    }
}

pub struct TextField {
    pub id: usize,
    pub rect: Rect,
    pub placeholder: String,
    pub lines: Vec<String>,
    pub multiline: bool,
    pub focused: bool,
}

impl TextField {
    pub fn new(rect: Rect, placeholder: &str, multiline: Option<bool>) -> TextField {
        TextField {
            id: 0,
            rect,
            placeholder: placeholder.to_string(),
            lines: vec![String::new()],
            multiline: multiline.unwrap_or(false),
            focused: false,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    pub fn insert(&mut self, text: &str) {
        self.lines.last_mut().unwrap().push_str(text);
    }

    pub fn backspace(&mut self) {
        if self.lines.last_mut().unwrap().pop().is_none() && self.lines.len() > 1 {
            self.lines.pop();
        }
    }

    pub fn newline(&mut self) {
        if self.multiline {
            self.lines.push(String::new());
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, font: &Font) {
        canvas.set_draw_color(FIELD_BG);
        let _ = canvas.fill_rect(self.rect);
        canvas.set_draw_color(if self.focused { FOCUS_BORDER } else { FIELD_BORDER });
        let _ = canvas.draw_rect(self.rect);

        canvas.set_clip_rect(self.rect);
        let line_height = font.height() + LINE_SPACING;
        let empty = self.lines.len() == 1 && self.lines[0].is_empty();
        if empty && !self.focused {
            draw_text(
                canvas,
                font,
                &self.placeholder,
                self.rect.x + TEXT_PAD,
                self.rect.y + TEXT_PAD,
                PLACEHOLDER_COLOR,
            );
        } else {
            for (i, line) in self.lines.iter().enumerate() {
                // Caret on the line currently receiving input
                let shown = if self.focused && i == self.lines.len() - 1 {
                    format!("{}_", line)
                } else {
                    line.clone()
                };
                draw_text(
                    canvas,
                    font,
                    &shown,
                    self.rect.x + TEXT_PAD,
                    self.rect.y + TEXT_PAD + i as i32 * line_height,
                    TEXT_COLOR,
                );
            }
        }
        canvas.set_clip_rect(None);
    }
}

pub struct Button {
    pub id: usize,
    pub rect: Rect,
    pub label: String,
    pub action: CalcAction,
    pub inputs: Vec<usize>,
    pub output: usize,
    pub color: Color,
}

impl Button {
    pub fn new(
        rect: Rect,
        label: &str,
        action: CalcAction,
        inputs: Vec<usize>,
        output: usize,
        color: Option<Color>,
    ) -> Button {
        Button {
            id: 0,
            rect,
            label: label.to_string(),
            action,
            inputs,
            output,
            color: color.unwrap_or(BUTTON_BG),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, font: &Font) {
        let x1 = self.rect.left() as i16;
        let y1 = self.rect.top() as i16;
        let x2 = self.rect.right() as i16;
        let y2 = self.rect.bottom() as i16;
        let _ = canvas.rounded_box(x1, y1, x2, y2, CORNER_RADIUS, to_abgr(self.color));
        let _ = canvas.rounded_rectangle(x1, y1, x2, y2, CORNER_RADIUS, to_abgr(BUTTON_BORDER));

        let (text_w, text_h) = font.size_of(&self.label).unwrap_or((0, 0));
        let x = self.rect.x + (self.rect.width() as i32 - text_w as i32) / 2;
        let y = self.rect.y + (self.rect.height() as i32 - text_h as i32) / 2;
        draw_text(canvas, font, &self.label, x, y, TEXT_COLOR);
    }
}

pub struct OutputArea {
    pub id: usize,
    pub rect: Rect,
    pub lines: Vec<String>,
    pub is_error: bool,
}

impl OutputArea {
    pub fn new(rect: Rect) -> OutputArea {
        OutputArea {
            id: 0,
            rect,
            lines: Vec::new(),
            is_error: false,
        }
    }

    pub fn show(&mut self, message: &str, is_error: bool) {
        self.lines = message.lines().map(str::to_string).collect();
        self.is_error = is_error;
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, font: &Font) {
        let color = if self.is_error { ERROR_COLOR } else { RESULT_COLOR };
        canvas.set_clip_rect(self.rect);
        let line_height = font.height() + LINE_SPACING;
        for (i, line) in self.lines.iter().enumerate() {
            draw_text(
                canvas,
                font,
                line,
                self.rect.x,
                self.rect.y + i as i32 * line_height,
                color,
            );
        }
        canvas.set_clip_rect(None);
    }
}
