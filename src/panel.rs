use rvcalc::vectors::{self, VectorError};
use crate::widgets::{Button, CalcAction, Label, OutputArea, TextField};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::ttf::Font;
use std::collections::HashMap;

pub struct Panel {
    fields: HashMap<usize, TextField>,
    buttons: HashMap<usize, Button>,
    outputs: HashMap<usize, OutputArea>,
    labels: Vec<Label>,
    field_id: usize,
    button_id: usize,
    output_id: usize,
    focused: Option<usize>,
}

impl Panel {
    pub fn new() -> Panel {
        Panel {
            fields: HashMap::new(),
            buttons: HashMap::new(),
            outputs: HashMap::new(),
            labels: Vec::new(),
            field_id: 0,
            button_id: 0,
            output_id: 0,
            focused: None,
        }
    }

    pub fn add_field(&mut self, field: TextField) -> usize {
        let idx = self.field_id;
        self.field_id += 1;
        self.fields.insert(idx, field);
        self.fields.get_mut(&idx).unwrap().id = idx;
        idx
    }

    pub fn add_button(&mut self, button: Button) -> usize {
        let idx = self.button_id;
        self.button_id += 1;
        self.buttons.insert(idx, button);
        self.buttons.get_mut(&idx).unwrap().id = idx;
        idx
    }

    pub fn add_output(&mut self, output: OutputArea) -> usize {
        let idx = self.output_id;
        self.output_id += 1;
        self.outputs.insert(idx, output);
        self.outputs.get_mut(&idx).unwrap().id = idx;
        idx
    }

    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn handle_click(&mut self, x: i32, y: i32) {
        self.focused = None;
        for idx in 0..self.field_id {
            let field = self.fields.get_mut(&idx).unwrap();
            field.focused = field.contains(x, y);
            if field.focused {
                self.focused = Some(idx);
            }
        }

        let mut clicked = None;
        for idx in 0..self.button_id {
            if self.buttons.get(&idx).unwrap().contains(x, y) {
                clicked = Some(idx);
            }
        }
        if let Some(idx) = clicked {
            self.run_button(idx);
        }
    }

    fn run_button(&mut self, idx: usize) {
        let button = self.buttons.get(&idx).unwrap();
        let inputs: Vec<String> = button
            .inputs
            .iter()
            .map(|fid| self.fields.get(fid).unwrap().text())
            .collect();
        let action = button.action;
        let output_idx = button.output;

        let output = self.outputs.get_mut(&output_idx).unwrap();
        match evaluate(action, &inputs) {
            Ok(message) => output.show(&message, false),
            Err(err) => output.show(&format!("Error: {}.", err), true),
        }
    }

    pub fn handle_text_input(&mut self, text: &str) {
        if let Some(idx) = self.focused {
            self.fields.get_mut(&idx).unwrap().insert(text);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(idx) = self.focused {
            self.fields.get_mut(&idx).unwrap().backspace();
        }
    }

    pub fn handle_return(&mut self) {
        if let Some(idx) = self.focused {
            self.fields.get_mut(&idx).unwrap().newline();
        }
    }

    pub fn draw_frame(&self, canvas: &mut Canvas<Window>, font: &Font) {
        for label in &self.labels {
            label.draw(canvas, font);
        }
        for idx in 0..self.field_id {
            self.fields.get(&idx).unwrap().draw(canvas, font);
        }
        for idx in 0..self.button_id {
            self.buttons.get(&idx).unwrap().draw(canvas, font);
        }
        for idx in 0..self.output_id {
            self.outputs.get(&idx).unwrap().draw(canvas, font);
        }
    }
}

/// Run one calculator operation against the raw field texts and produce the
/// message for the output area.
fn evaluate(action: CalcAction, inputs: &[String]) -> Result<String, VectorError> {
    match action {
        CalcAction::CheckNull => {
            let vec = vectors::parse_vector(&inputs[0]);
            let verdict = if vectors::is_null(&vec)? { "IS" } else { "is NOT" };
            Ok(format!(
                "The vector {} {} a null vector.",
                vectors::format_vector(&vec),
                verdict
            ))
        }
        CalcAction::UnitVector => {
            let vec = vectors::parse_vector(&inputs[0]);
            let unit = vectors::normalize(&vec)?;
            Ok(format!(
                "Original vector: {}\nMagnitude: {:.3}\nUnit vector: {}",
                vectors::format_vector(&vec),
                unit.magnitude,
                vectors::format_vector(&unit.components)
            ))
        }
        CalcAction::CheckEqual => {
            let a = vectors::parse_vector(&inputs[0]);
            let b = vectors::parse_vector(&inputs[1]);
            let verdict = if vectors::are_equal(&a, &b)? { "ARE" } else { "are NOT" };
            Ok(format!("The vectors {} equal.", verdict))
        }
        CalcAction::CheckOpposite => {
            let a = vectors::parse_vector(&inputs[0]);
            let b = vectors::parse_vector(&inputs[1]);
            let verdict = if vectors::are_opposite(&a, &b)? { "ARE" } else { "are NOT" };
            Ok(format!("The vectors {} opposite.", verdict))
        }
        CalcAction::CheckCollinear => {
            let a = vectors::parse_vector(&inputs[0]);
            let b = vectors::parse_vector(&inputs[1]);
            let verdict = if vectors::are_collinear(&a, &b)? { "ARE" } else { "are NOT" };
            Ok(format!("The vectors {} collinear.", verdict))
        }
        CalcAction::Resultant => {
            let sum = vectors::resultant(&inputs[0])?;
            Ok(format!("Resultant vector: {}", vectors::format_vector(&sum)))
        }
        CalcAction::Equilibrant => {
            let sum = vectors::equilibrant(&inputs[0])?;
            Ok(format!("Equilibrant vector: {}", vectors::format_vector(&sum)))
        }
    }
}
