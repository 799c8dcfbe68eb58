//! Experiment setup screen: rule selection and trial count entry.

use crate::constants::DEFAULT_POPULATION;
use crate::experiment::ExperimentConfig;
use crate::rules::DecayRule;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Rule,
    Trials,
    Population,
}

pub struct SetupScreen {
    pub selected_rule: usize,
    pub trials_input: String,
    pub population_input: String,
    pub focus: SetupField,
    pub validation_error: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            selected_rule: 0,
            trials_input: String::new(),
            population_input: String::new(),
            focus: SetupField::Rule,
            validation_error: None,
        }
    }

    pub fn rule(&self) -> DecayRule {
        DecayRule::ALL[self.selected_rule]
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SetupField::Rule => SetupField::Trials,
            SetupField::Trials => SetupField::Population,
            SetupField::Population => SetupField::Rule,
        };
    }

    pub fn handle_up(&mut self) {
        if self.focus == SetupField::Rule && self.selected_rule > 0 {
            self.selected_rule -= 1;
        }
    }

    pub fn handle_down(&mut self) {
        if self.focus == SetupField::Rule && self.selected_rule + 1 < DecayRule::ALL.len() {
            self.selected_rule += 1;
        }
    }

    /// Digits go into whichever text field has focus.
    pub fn handle_char_input(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        match self.focus {
            SetupField::Trials => self.trials_input.push(c),
            SetupField::Population => self.population_input.push(c),
            SetupField::Rule => {}
        }
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        match self.focus {
            SetupField::Trials => {
                self.trials_input.pop();
            }
            SetupField::Population => {
                self.population_input.pop();
            }
            SetupField::Rule => {}
        }
        self.validation_error = None;
    }

    /// Parse the form into a config, or explain what is wrong.
    pub fn config(&self) -> Result<ExperimentConfig, String> {
        let trials: i64 = self
            .trials_input
            .trim()
            .parse()
            .map_err(|_| "Enter a number of trials".to_string())?;
        if trials <= 0 {
            return Err("Trial count must be positive".to_string());
        }

        let initial_population = if self.population_input.trim().is_empty() {
            DEFAULT_POPULATION
        } else {
            self.population_input
                .trim()
                .parse()
                .map_err(|_| "Population must be a number".to_string())?
        };

        Ok(ExperimentConfig {
            rule: self.rule(),
            trials,
            initial_population,
            seed: None,
            verbosity: 0,
        })
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Intro
                Constraint::Length(4), // Rule list
                Constraint::Length(3), // Trials input
                Constraint::Length(3), // Population input
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new("DICE DECAY SIMULATION")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let intro = Paragraph::new(
            "Each die is a parent isotope. Every roll is the passage of time.",
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        f.render_widget(intro, chunks[1]);

        // Rule selection list
        let rule_focused = self.focus == SetupField::Rule;
        let items: Vec<ListItem> = DecayRule::ALL
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let prefix = if i == self.selected_rule { "> " } else { "  " };
                let style = if i == self.selected_rule && rule_focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if i == self.selected_rule {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{}{}: {}", prefix, i + 1, rule.label())).style(style)
            })
            .collect();
        let rule_block = Block::default()
            .title(" Decay Rule ")
            .borders(Borders::ALL)
            .border_style(field_border(rule_focused));
        f.render_widget(List::new(items).block(rule_block), chunks[2]);

        // Trial count input
        let trials_focused = self.focus == SetupField::Trials;
        let trials_text = input_text(&self.trials_input, trials_focused);
        let trials_widget = Paragraph::new(trials_text).block(
            Block::default()
                .title(" Trials ")
                .borders(Borders::ALL)
                .border_style(field_border(trials_focused)),
        );
        f.render_widget(trials_widget, chunks[3]);

        // Population input
        let pop_focused = self.focus == SetupField::Population;
        let pop_text = if self.population_input.is_empty() && !pop_focused {
            format!("{} (default)", DEFAULT_POPULATION)
        } else {
            input_text(&self.population_input, pop_focused)
        };
        let pop_widget = Paragraph::new(pop_text).block(
            Block::default()
                .title(" Initial Population ")
                .borders(Borders::ALL)
                .border_style(field_border(pop_focused)),
        );
        f.render_widget(pop_widget, chunks[4]);

        // Validation feedback
        let validation = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(validation), chunks[5]);

        let controls =
            Paragraph::new("[Tab] Next Field  [↑/↓] Rule  [Enter] Run Experiment  [Esc] Quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }
}

fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn input_text(input: &str, focused: bool) -> String {
    if focused {
        format!("{}_", input)
    } else {
        input.to_string()
    }
}
