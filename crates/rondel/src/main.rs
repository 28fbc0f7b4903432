use std::time::Duration;

use chrono::{Local, Timelike};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rondel_core::{compute_frame, ClockConfig, TimeSample, MAX_SIZE_STEP};

mod ui;

/// Side of the square logical space the rings are laid out in. The
/// canvas widget maps it onto whatever terminal area is available.
const CANVAS_SIZE: f64 = 800.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let file_config = rondel_config::load()?;
    let terminal = ratatui::init();
    let result = App::new(file_config.clock_config(CANVAS_SIZE)).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current clock configuration, edited by key presses.
    config: ClockConfig,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: ClockConfig) -> Self {
        Self {
            running: false,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = Local::now();
        let time = TimeSample::from_hms(now.hour() as u8, now.minute() as u8, now.second() as u8);

        let geometry = compute_frame(time, &self.config, CANVAS_SIZE);
        let color = self.config.active_color.color();

        // Create vertical layout: header, clock face, status, help
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Fill(1),   // Clock face
            Constraint::Length(1), // Status readout
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let title = Paragraph::new("// THREE RINGS //")
            .style(Style::new().white().bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        ui::render_clock(frame, chunks[1], &geometry, color);

        // Status readout: current time plus every configuration value.
        let status = format!(
            "{:02}:{:02}:{:02} // min size: {}px   max size: {}px   orbit: {}px   ring ratio: {:.2}",
            now.hour(),
            time.minute,
            time.second,
            self.config.min_size,
            self.config.max_size,
            self.config.orbit,
            self.config.ring_ratio(),
        );
        let status = Paragraph::new(status)
            .style(Style::new().dark_gray())
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[2]);

        // Render help text
        let help = Line::from(vec![
            "[ ]".bold().fg(color),
            " min size  ".dark_gray(),
            "{ }".bold().fg(color),
            " max size  ".dark_gray(),
            "- =".bold().fg(color),
            " orbit  ".dark_gray(),
            ", .".bold().fg(color),
            " ring ratio  ".dark_gray(),
            "s".bold().fg(color),
            " inner ring  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "q".bold().fg(color),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout for real-time clock updates.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // Poll for events with 100ms timeout for smooth clock updates
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    /// Each adjustment key nudges one configuration value.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('[')) => self.config.nudge_min_size(-1.0),
            (_, KeyCode::Char(']')) => self.config.nudge_min_size(1.0),
            (_, KeyCode::Char('{')) => self.config.nudge_max_size(-MAX_SIZE_STEP),
            (_, KeyCode::Char('}')) => self.config.nudge_max_size(MAX_SIZE_STEP),
            (_, KeyCode::Char('-')) => self.config.nudge_orbit(-1.0, CANVAS_SIZE),
            (_, KeyCode::Char('=') | KeyCode::Char('+')) => self.config.nudge_orbit(1.0, CANVAS_SIZE),
            (_, KeyCode::Char(',')) => self.config.nudge_ring_ratio(-1),
            (_, KeyCode::Char('.')) => self.config.nudge_ring_ratio(1),
            (_, KeyCode::Char('s')) => self.config.toggle_inner_ring(),
            (_, KeyCode::Char('c')) => self.config.toggle_active_color(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
