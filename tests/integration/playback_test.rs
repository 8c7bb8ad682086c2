//! End-to-end player behavior: input events, rendering and hit-testing

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};

use vidctl::config::PlaybackConfig;
use vidctl::media::{ClockMedia, MediaElement};
use vidctl::player::input::handle_event;
use vidctl::player::render::draw;
use vidctl::player::state::Control;
use vidctl::player::{InputResult, PlaybackSync, UiState};
use vidctl::store::MemoryStore;
use vidctl::theme::Theme;

use crate::helpers::{load, session};

struct Player {
    sync: PlaybackSync<ClockMedia, MemoryStore>,
    ui: UiState,
    settings: PlaybackConfig,
    terminal: Terminal<TestBackend>,
}

impl Player {
    fn new() -> Self {
        let mut sync = session(MemoryStore::new(), 9000.0);
        load(&mut sync);
        let ui = UiState::new(sync.chapters().len());
        let mut player = Self {
            sync,
            ui,
            settings: PlaybackConfig::default(),
            terminal: Terminal::new(TestBackend::new(120, 24)).unwrap(),
        };
        player.render();
        player
    }

    fn render(&mut self) {
        let theme = Theme::default();
        self.terminal
            .draw(|f| draw(f, &self.sync, &mut self.ui, "Feature", &self.settings, &theme))
            .unwrap();
    }

    fn send(&mut self, event: Event) -> InputResult {
        let result = handle_event(event, &mut self.ui, &mut self.sync, &self.settings);
        self.sync.pump_events();
        self.render();
        result
    }

    fn key(&mut self, code: KeyCode) -> InputResult {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(&mut self, column: u16, row: u16) -> InputResult {
        self.send(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn screen(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[test]
fn space_toggles_playback_and_status() {
    let mut player = Player::new();

    player.key(KeyCode::Char(' '));
    assert!(!player.sync.media().paused());
    assert!(player.screen().contains("Playing"));
    assert!(player.screen().contains("[ Pause ]"));

    player.key(KeyCode::Char(' '));
    assert!(player.sync.media().paused());
    assert!(player.screen().contains("Paused"));
}

#[test]
fn arrow_keys_skip_and_clamp() {
    let mut player = Player::new();

    player.key(KeyCode::Left);
    assert_eq!(player.sync.media().position(), 0.0);

    player.key(KeyCode::Right);
    player.key(KeyCode::Right);
    assert_eq!(player.sync.media().position(), 10.0);
    assert!(player.screen().contains("00:00:10"));
}

#[test]
fn caption_key_updates_status_line() {
    let mut player = Player::new();

    player.key(KeyCode::Char('c'));
    assert!(player.screen().contains("Captions: On"));
    assert!(player.screen().contains("[ CC: On ]"));

    player.key(KeyCode::Char('C'));
    assert!(player.screen().contains("Captions: Off"));
}

#[test]
fn shortcuts_are_ignored_while_a_slider_has_focus() {
    let mut player = Player::new();
    player.ui.focus = Some(Control::Volume);

    player.key(KeyCode::Char(' '));
    player.key(KeyCode::Char('c'));
    player.key(KeyCode::Char('>'));

    assert!(player.sync.media().paused());
    assert!(!player.sync.state().captions_visible);
    assert_eq!(player.sync.media().rate(), 1.0);
}

#[test]
fn tab_then_enter_presses_play() {
    let mut player = Player::new();

    player.key(KeyCode::Tab);
    assert_eq!(player.ui.focus, Some(Control::PlayPause));

    player.key(KeyCode::Enter);
    assert!(!player.sync.media().paused());
}

#[test]
fn clicking_a_rendered_chapter_jumps_to_it() {
    let mut player = Player::new();

    let (_, area) = *player
        .ui
        .hit
        .controls
        .iter()
        .find(|(c, _)| *c == Control::Chapter(3))
        .expect("chapter rendered");
    player.click(area.x + 1, area.y);

    assert_eq!(player.sync.media().position(), 4500.0);
    assert!(!player.sync.media().paused());
    assert!(player.screen().contains("01:15:00"));
}

#[test]
fn clicking_the_end_of_the_seek_bar_seeks_to_the_end() {
    let mut player = Player::new();

    let seek = player.ui.hit.seek.expect("seek bar rendered");
    player.click(seek.x + seek.width - 1, seek.y);

    assert_eq!(player.sync.media().position(), 9000.0);
    assert_eq!(player.sync.view().seek, 1000);
}

#[test]
fn escape_and_q_quit() {
    let mut player = Player::new();
    assert_eq!(player.key(KeyCode::Esc), InputResult::Quit);
    assert_eq!(player.key(KeyCode::Char('q')), InputResult::Quit);
}
