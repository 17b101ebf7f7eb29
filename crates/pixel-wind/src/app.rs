//! Terminal application: the wind scene with an optional letter on top.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pixel_wind_config::Config;
use pixel_wind_core::{Rgb, Viewport};
use pixel_wind_letter::LetterPayload;
use pixel_wind_letter::reveal::{Page, RevealPlayer};
use pixel_wind_scene::{AnimationLoop, PixelSurface};
use rand::Rng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

use crate::canvas;

/// Letter text color at full opacity.
const INK: Rgb = Rgb::from_hex(0xf1e9da);
/// Letter paper color, what faded text blends into.
const PAPER: Rgb = Rgb::from_hex(0x1b1b2f);

/// A letter being read, with its reveal sequence.
#[derive(Debug)]
struct Reading {
    letter: LetterPayload,
    reveal: RevealPlayer,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    engine: AnimationLoop,
    surface: PixelSurface,
    /// Present in reader mode.
    reading: Option<Reading>,
    /// One-line message shown in place of the help text.
    notice: Option<String>,
    show_help: bool,
    frame_period: Duration,
    /// When the scene is next due to advance.
    next_tick: Instant,
    last_frame: Instant,
}

impl App {
    /// Creator mode: the scene alone, laid out for `viewport`.
    pub fn new(config: &Config, viewport: Viewport, seed: Option<f64>) -> Self {
        let mut engine = AnimationLoop::new(viewport);
        engine.start(seed);
        Self {
            running: false,
            engine,
            surface: PixelSurface::new(0, 0),
            reading: None,
            notice: None,
            show_help: config.show_help,
            frame_period: Duration::from_millis(1000 / config.frame_rate.max(1) as u64),
            next_tick: Instant::now(),
            last_frame: Instant::now(),
        }
    }

    /// Reader mode: the letter's own scene plus the reveal sequence.
    pub fn reading(config: &Config, viewport: Viewport, letter: LetterPayload) -> Self {
        let mut app = Self::new(config, viewport, Some(letter.seed()));
        let reveal = RevealPlayer::for_letter(&letter, &mut rand::rng());
        app.reading = Some(Reading { letter, reveal });
        app
    }

    /// Show a one-line notice instead of the help text.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.last_frame = Instant::now();
        self.next_tick = self.last_frame;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Step the scene if a frame is due. Returns whether it stepped.
    fn advance_if_due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.engine.tick(&mut self.surface);
        self.next_tick = now + self.frame_period;
        true
    }

    /// Draw the scene and any letter over it, stepping the scene when due.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now = Instant::now();
        self.advance_if_due(now);
        frame.render_widget(
            Paragraph::new(canvas::to_lines(&self.surface, area.width, area.height)),
            area,
        );

        let elapsed_ms = now.duration_since(self.last_frame).as_millis() as u64;
        self.last_frame = now;
        if let Some(reading) = &mut self.reading {
            reading.reveal.advance(elapsed_ms);
            render_letter(frame, reading);
        }

        let footer = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        if let Some(notice) = &self.notice {
            frame.render_widget(Line::from(notice.as_str().yellow()).centered(), footer);
        } else if self.show_help {
            frame.render_widget(help_line(), footer);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => {
                    self.engine.resize(canvas::aspect_for_cells(cols, rows))
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.reseed(),
            (_, KeyCode::Char('h')) => self.toggle_help(),
            _ => {}
        }
    }

    /// Start over with a fresh random scene.
    fn reseed(&mut self) {
        let seed = rand::rng().random::<f64>();
        self.engine.reseed(seed);
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.notice = None;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn help_line() -> Line<'static> {
    let accent = to_color(INK);
    Line::from(vec![
        "q".bold().fg(accent),
        " quit  ".dark_gray(),
        "r".bold().fg(accent),
        " new wind  ".dark_gray(),
        "h".bold().fg(accent),
        " hide help".dark_gray(),
    ])
    .centered()
}

/// Draw the letter card in the middle of the screen.
fn render_letter(frame: &mut Frame, reading: &Reading) {
    let view = reading.reveal.view();
    let letter = &reading.letter;

    let (body, opacity) = match view.page {
        Page::First => (view.typed.as_str(), view.first_page_opacity),
        Page::Second => (letter.msg2().unwrap_or_default(), view.second_page_opacity),
    };
    let ink = fade(opacity);

    let mut lines = vec![
        Line::from(format!("To {},", letter.to())).style(Style::new().fg(fade(1.0)).bold()),
        Line::default(),
        Line::from(body.to_string()).style(Style::new().fg(ink)),
        Line::default(),
        Line::from(format!("— {}", letter.from()))
            .style(Style::new().fg(fade(1.0)).italic())
            .alignment(Alignment::Right),
    ];
    if let Some(media) = letter.media_id() {
        lines.push(Line::from(format!("♪ {media}")).dark_gray());
    }

    let area = card_area(frame.area(), lines.len() as u16 + 4);
    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::new().bg(to_color(PAPER))),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);
}

/// Centered card, at most 60 columns wide.
fn card_area(area: Rect, min_height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(min_height.max(area.height / 2))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Max(60)])
        .flex(Flex::Center)
        .areas(row);
    card
}

/// Ink color at a given opacity over the card paper.
fn fade(opacity: f64) -> Color {
    to_color(PAPER.lerp(INK, opacity))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
