//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all page widgets using Ratatui. `AppState` is the single source of
//! truth: widgets read from it immutably, and only its named entry points
//! mutate the shared theme and playback state.

pub mod background;
pub mod brochart;
pub mod component;
pub mod footer;
pub mod help_overlay;
pub mod hero;
pub mod lightbox;
pub mod links;
pub mod profile;
pub mod qr_modal;
pub mod socials;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

use crate::audio::{MusicPlayer, PlaybackState};
use crate::config::Config;
use crate::constants::EVENT_POLL_INTERVAL;
use crate::dispatch::{activation_for, LinkActivation};
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::site::SiteConfig;

// Re-export TUI components
pub use brochart::{BrochartView, BrochartViewEvent};
pub use component::Component;
pub use help_overlay::HelpOverlay;
pub use hero::Slideshow;
pub use lightbox::{Lightbox, LightboxEvent};
pub use links::{build_focus_ring, FocusTarget, LinkSections};
pub use qr_modal::{QrModal, QrModalEvent};
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeVariant};

/// Popup types that can be displayed over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// QR code modal
    QrModal,
    /// Video lightbox
    Lightbox,
    /// Brochart card view
    Brochart,
    /// Help overlay
    HelpOverlay,
}

/// The currently active popup component.
///
/// Only one popup can be open at a time.
pub enum ActiveComponent {
    /// QR code modal component
    QrModal(QrModal),
    /// Video lightbox component
    Lightbox(Lightbox),
    /// Brochart card component
    Brochart(BrochartView),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Something a popup asked the parent to do.
enum PopupOutcome {
    OpenUrl(String),
    ExportBrochart,
}

/// Application state - single source of truth.
pub struct AppState {
    // Core data
    /// The loaded site document (read-only after construction)
    pub site: SiteConfig,
    /// Path to the source document file
    pub source_path: Option<PathBuf>,
    /// Application settings
    pub config: Config,

    // UI state
    /// Active color theme variant (owned exclusively here)
    pub theme_variant: ThemeVariant,
    /// Resolved theme for the current frame
    pub theme: Theme,
    /// Grouped link sections with collapse state
    pub sections: LinkSections,
    /// Ordered focusable elements
    pub focus_ring: Vec<FocusTarget>,
    /// Index into the focus ring
    pub selected: usize,
    /// Hero slideshow state, present when the hero is shown
    pub slideshow: Option<Slideshow>,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active popup component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Music player, present when a track could be loaded
    pub music: Option<MusicPlayer>,
    /// Music playback state (owned exclusively here)
    pub playback: PlaybackState,
    /// Keyboard shortcut registry
    pub shortcuts: ShortcutRegistry,

    // Control flags
    /// Whether the application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from a loaded site document and settings.
    pub fn new(site: SiteConfig, source_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let theme_variant = ThemeVariant::from_mode(config.ui.theme_mode);
        let theme = Theme::for_site(theme_variant, &site.meta.theme);

        let sections = LinkSections::new(&site.links);
        let focus_ring = build_focus_ring(site.hero.show, &sections);

        let slideshow = site
            .hero
            .show
            .then(|| Slideshow::for_hero(&site.hero, Instant::now()));

        let music = site
            .music
            .as_ref()
            .and_then(|m| MusicPlayer::try_new(m, config.audio.volume));

        // Autoplay degrades silently to Stopped when the device refused.
        let autoplay = site.music.as_ref().is_some_and(|m| m.autoplay);
        let playback = match (&music, autoplay) {
            (Some(player), true) => {
                player.resume();
                PlaybackState::Playing
            }
            _ => PlaybackState::Stopped,
        };

        let mut state = Self {
            site,
            source_path,
            config,
            theme_variant,
            theme,
            sections,
            focus_ring,
            selected: 0,
            slideshow,
            active_popup: None,
            active_component: None,
            status_message: String::new(),
            error_message: None,
            music,
            playback,
            shortcuts: ShortcutRegistry::new(),
            should_quit: false,
        };

        if state.config.ui.show_help_on_startup {
            state.open_help_overlay();
        }

        Ok(state)
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Advances timer-driven state; called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(slideshow) = &mut self.slideshow {
            slideshow.tick(now);
        }
    }

    // === Theme & music toggles (the only mutation paths) ===

    /// Flips the color theme; the new theme applies before the next draw.
    pub fn toggle_theme(&mut self) {
        self.theme_variant = self.theme_variant.toggled();
        self.theme = Theme::for_site(self.theme_variant, &self.site.meta.theme);
        let name = match self.theme_variant {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        };
        self.set_status(format!("Theme: {name}"));
    }

    /// Toggles music playback.
    ///
    /// Entering `Playing` resumes the sink, entering `Stopped` pauses it.
    /// When the player is unavailable a play attempt leaves the state
    /// `Stopped` and reports the feature unavailable.
    pub fn toggle_music(&mut self) {
        match self.playback.toggled() {
            PlaybackState::Playing => match &self.music {
                Some(player) => {
                    player.resume();
                    self.playback = PlaybackState::Playing;
                    self.set_status("Music: playing");
                }
                None => {
                    warn!("music toggle requested but playback is unavailable");
                    self.set_status("Music unavailable");
                }
            },
            PlaybackState::Stopped => {
                if let Some(player) = &self.music {
                    player.pause();
                }
                self.playback = PlaybackState::Stopped;
                self.set_status("Music: stopped");
            }
        }
    }

    // === Focus navigation ===

    /// The currently focused element.
    #[must_use]
    pub fn selected_target(&self) -> Option<FocusTarget> {
        self.focus_ring.get(self.selected).copied()
    }

    /// Move focus up one element.
    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move focus down one element.
    pub fn navigate_down(&mut self) {
        if self.selected + 1 < self.focus_ring.len() {
            self.selected += 1;
        }
    }

    /// Jump focus to the first element.
    pub fn jump_to_first(&mut self) {
        self.selected = 0;
    }

    /// Jump focus to the last element.
    pub fn jump_to_last(&mut self) {
        self.selected = self.focus_ring.len().saturating_sub(1);
    }

    fn rebuild_focus_ring(&mut self, keep: Option<FocusTarget>) {
        self.focus_ring = build_focus_ring(self.site.hero.show, &self.sections);
        self.selected = keep
            .and_then(|target| self.focus_ring.iter().position(|t| *t == target))
            .unwrap_or_else(|| self.selected.min(self.focus_ring.len().saturating_sub(1)));
    }

    // === Activation ===

    /// Activates the focused element.
    ///
    /// Section headers toggle their own collapse state; links resolve
    /// through the dispatcher to exactly one outcome.
    pub fn activate_selected(&mut self) {
        match self.selected_target() {
            Some(FocusTarget::HeroCta) => {
                let url = self.site.hero.primary_cta.url.clone();
                self.open_lightbox(url);
            }
            Some(FocusTarget::SectionHeader(group)) => {
                self.sections.toggle(group);
                self.rebuild_focus_ring(Some(FocusTarget::SectionHeader(group)));
            }
            Some(FocusTarget::Link { group, index }) => {
                let Some(link) = self
                    .sections
                    .groups()
                    .get(group)
                    .and_then(|g| g.links.get(index))
                else {
                    return;
                };

                match activation_for(link) {
                    LinkActivation::Navigate(url) => self.open_external(&url),
                    LinkActivation::OpenQr(payload) => self.open_qr_modal(payload),
                    LinkActivation::ExportBrochart => self.export_brochart(),
                    LinkActivation::NoOp => {}
                }
            }
            None => {}
        }
    }

    /// Opens a URL in the system browser, reporting the outcome.
    pub fn open_external(&mut self, url: &str) {
        match crate::system::open_url(url) {
            Ok(()) => self.set_status(format!("Opened {url}")),
            Err(e) => {
                warn!("failed to open url: {e:#}");
                self.set_error(format!("Failed to open URL: {e}"));
            }
        }
    }

    /// Copies the page's share text to the clipboard.
    pub fn share_page(&mut self) {
        match crate::system::share_page(&self.site) {
            Ok(text) => self.set_status(format!("Copied to clipboard: {text}")),
            Err(e) => {
                warn!("share failed: {e:#}");
                self.set_error(format!("Share unavailable: {e}"));
            }
        }
    }

    /// Exports the brochart card as a JPEG.
    ///
    /// Without a render target (`brochart.show` false) this is a no-op.
    pub fn export_brochart(&mut self) {
        if !self.site.brochart.show {
            debug!("brochart export requested but the card is not shown");
            return;
        }

        let result = self
            .config
            .export_dir()
            .and_then(|dir| crate::export::export_brochart_jpeg(&self.site, &dir));

        match result {
            Ok(path) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => {
                warn!("brochart export failed: {e:#}");
                self.set_error(format!("Export failed: {e}"));
            }
        }
    }

    // === Component management ===

    /// Open the QR modal with a payload.
    pub fn open_qr_modal(&mut self, payload: String) {
        self.active_component = Some(ActiveComponent::QrModal(QrModal::new(payload)));
        self.active_popup = Some(PopupType::QrModal);
    }

    /// Open the video lightbox with a source URL.
    pub fn open_lightbox(&mut self, source_url: String) {
        self.active_component = Some(ActiveComponent::Lightbox(Lightbox::new(source_url)));
        self.active_popup = Some(PopupType::Lightbox);
    }

    /// Open the brochart card view.
    ///
    /// Does nothing when the document does not show the card.
    pub fn open_brochart_view(&mut self) {
        if !self.site.brochart.show {
            self.set_status("This page has no brochart");
            return;
        }
        self.active_component = Some(ActiveComponent::Brochart(BrochartView::new(
            self.site.brochart.clone(),
        )));
        self.active_popup = Some(PopupType::Brochart);
    }

    /// Open the help overlay.
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component.
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Timer-driven transitions apply before the draw, never mid-frame.
        state.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill the screen with the theme background first so the page looks
    // consistent regardless of terminal settings.
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Page content
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_page(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if state.active_popup.is_some() {
        render_popup(f, state);
    }
}

/// Render title bar with the page title
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} ", state.site.meta.title);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the page sections top to bottom
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    // Decorative backdrop first; the sections draw over it.
    background::render(f, area, &state.theme);

    let hero_height = if state.site.hero.show { 7 } else { 0 };
    let profile_height = profile::rendered_height(&state.site.profile);
    let links_height = state.sections.rendered_height() + 2; // borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(profile_height),
            Constraint::Max(links_height),
            Constraint::Length(1), // Socials
            Constraint::Length(1), // Footer
            Constraint::Min(0),
        ])
        .split(area);

    if state.site.hero.show {
        if let Some(slideshow) = &state.slideshow {
            let cta_focused = state.selected_target() == Some(FocusTarget::HeroCta);
            hero::render(f, chunks[0], &state.site.hero, slideshow, &state.theme, cta_focused);
        }
    }

    profile::render(f, chunks[1], &state.site.profile, &state.theme);

    links::render(
        f,
        chunks[2],
        &state.sections,
        state.site.meta.theme.button_shape,
        state.site.meta.theme.elevated_cards,
        state.selected_target(),
        &state.theme,
    );

    socials::render(f, chunks[3], &state.site.socials, &state.theme);
    footer::render(f, chunks[4], &state.site.footer, &state.theme);
}

/// Render active popup
fn render_popup(f: &mut Frame, state: &AppState) {
    match &state.active_component {
        Some(ActiveComponent::QrModal(modal)) => modal.render(f, f.area(), &state.theme),
        Some(ActiveComponent::Lightbox(lightbox)) => lightbox.render(f, f.area(), &state.theme),
        Some(ActiveComponent::Brochart(view)) => view.render(f, f.area(), &state.theme),
        Some(ActiveComponent::HelpOverlay(help)) => help.render(f, f.area(), &state.theme),
        None => {}
    }
}

/// Compute a centered rectangle covering the given percentages of `r`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `Ok(true)` when the user quit.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Route to the active popup first.
    if state.active_component.is_some() {
        handle_popup_input(state, key);
        return Ok(false);
    }

    let Some(action) = state.shortcuts.lookup("main", key) else {
        return Ok(false);
    };

    match action {
        Action::NavigateUp => state.navigate_up(),
        Action::NavigateDown => state.navigate_down(),
        Action::JumpToFirst => state.jump_to_first(),
        Action::JumpToLast => state.jump_to_last(),
        Action::Activate => state.activate_selected(),
        Action::ToggleTheme => state.toggle_theme(),
        Action::ToggleMusic => state.toggle_music(),
        Action::SharePage => state.share_page(),
        Action::ViewBrochart => state.open_brochart_view(),
        Action::ExportBrochart => state.export_brochart(),
        Action::ToggleHelp => state.open_help_overlay(),
        Action::Cancel => {
            state.clear_error();
            state.status_message.clear();
        }
        Action::Quit => return Ok(true),
    }

    Ok(false)
}

/// Route a key event into the active popup and apply its outcome.
fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) {
    let mut outcome = None;
    let mut close = false;

    if let Some(component) = state.active_component.as_mut() {
        match component {
            ActiveComponent::QrModal(modal) => {
                if let Some(QrModalEvent::OpenImage(url)) = modal.handle_input(key) {
                    outcome = Some(PopupOutcome::OpenUrl(url));
                }
                close = modal.should_close();
            }
            ActiveComponent::Lightbox(lightbox) => {
                if let Some(LightboxEvent::OpenExternal(url)) = lightbox.handle_input(key) {
                    outcome = Some(PopupOutcome::OpenUrl(url));
                }
                close = lightbox.should_close();
            }
            ActiveComponent::Brochart(view) => {
                if let Some(BrochartViewEvent::Export) = view.handle_input(key) {
                    outcome = Some(PopupOutcome::ExportBrochart);
                }
                close = view.should_close();
            }
            ActiveComponent::HelpOverlay(help) => {
                help.handle_input(key);
                close = help.should_close();
            }
        }
    }

    if close {
        state.close_component();
    }

    match outcome {
        Some(PopupOutcome::OpenUrl(url)) => state.open_external(&url),
        Some(PopupOutcome::ExportBrochart) => state.export_brochart(),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_site() -> SiteConfig {
        SiteConfig::from_json(include_str!("../../demos/site.json")).unwrap()
    }

    fn demo_state() -> AppState {
        AppState::new(demo_site(), None, Config::new()).unwrap()
    }

    #[test]
    fn test_initial_theme_is_dark() {
        let state = demo_state();
        assert_eq!(state.theme_variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut state = demo_state();
        let original = state.theme_variant;
        let original_theme = state.theme.clone();

        state.toggle_theme();
        assert_ne!(state.theme_variant, original);
        assert_ne!(state.theme, original_theme);

        state.toggle_theme();
        assert_eq!(state.theme_variant, original);
        assert_eq!(state.theme, original_theme);
    }

    #[test]
    fn test_music_without_player_stays_stopped() {
        // The demo document carries no music config, so playback must
        // report unavailable and remain stopped across toggles.
        let mut state = demo_state();
        assert_eq!(state.playback, PlaybackState::Stopped);

        state.toggle_music();
        assert_eq!(state.playback, PlaybackState::Stopped);
    }

    #[test]
    fn test_focus_ring_starts_at_hero_cta() {
        let state = demo_state();
        assert_eq!(state.selected_target(), Some(FocusTarget::HeroCta));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = demo_state();
        state.navigate_up();
        assert_eq!(state.selected, 0);

        state.jump_to_last();
        let last = state.selected;
        state.navigate_down();
        assert_eq!(state.selected, last);
    }

    #[test]
    fn test_activating_header_toggles_only_that_section() {
        let mut state = demo_state();

        // Move to the first section header (EXPERIENCE, expanded).
        state.navigate_down();
        assert_eq!(state.selected_target(), Some(FocusTarget::SectionHeader(0)));
        let before: Vec<bool> = (0..state.sections.groups().len())
            .map(|i| state.sections.is_expanded(i))
            .collect();

        state.activate_selected();
        assert!(!state.sections.is_expanded(0));
        for (i, was) in before.iter().enumerate().skip(1) {
            assert_eq!(state.sections.is_expanded(i), *was);
        }

        // The header stays focused after the ring rebuild.
        assert_eq!(state.selected_target(), Some(FocusTarget::SectionHeader(0)));
    }

    #[test]
    fn test_qr_link_opens_modal_with_exact_payload() {
        let mut state = demo_state();

        // Focus the INQUIRIES section header, expand it, then its QR link.
        let inquiries = state
            .sections
            .groups()
            .iter()
            .position(|g| g.name == "INQUIRIES")
            .unwrap();
        let header_pos = state
            .focus_ring
            .iter()
            .position(|t| *t == FocusTarget::SectionHeader(inquiries))
            .unwrap();
        state.selected = header_pos;
        state.activate_selected();

        state.selected = state
            .focus_ring
            .iter()
            .position(|t| matches!(t, FocusTarget::Link { group, .. } if *group == inquiries))
            .unwrap();
        state.activate_selected();

        assert_eq!(state.active_popup, Some(PopupType::QrModal));
        match &state.active_component {
            Some(ActiveComponent::QrModal(modal)) => {
                assert_eq!(modal.payload(), "mailto:g.dukes1@gmail.com");
                assert!(modal
                    .request_url()
                    .contains("data=mailto%3Ag.dukes1%40gmail.com"));
            }
            _ => panic!("expected QR modal"),
        }
    }

    #[test]
    fn test_disabled_links_never_enter_the_focus_ring() {
        let mut site = demo_site();
        for link in &mut site.links {
            link.enabled = false;
        }
        let state = AppState::new(site, None, Config::new()).unwrap();

        assert!(state
            .focus_ring
            .iter()
            .all(|t| !matches!(t, FocusTarget::Link { .. })));
    }

    #[test]
    fn test_hero_cta_opens_lightbox_with_resolved_embed() {
        let mut state = demo_state();
        state.jump_to_first();
        state.activate_selected();

        assert_eq!(state.active_popup, Some(PopupType::Lightbox));
        match &state.active_component {
            Some(ActiveComponent::Lightbox(lightbox)) => {
                assert_eq!(lightbox.embed().unwrap().id(), "TF06nUzToNk");
            }
            _ => panic!("expected lightbox"),
        }
    }

    #[test]
    fn test_closing_popup_requires_fresh_open() {
        let mut state = demo_state();
        state.open_qr_modal("payload".to_string());
        assert!(state.active_popup.is_some());

        handle_popup_input(
            &mut state,
            event::KeyEvent::new(event::KeyCode::Esc, event::KeyModifiers::NONE),
        );
        assert!(state.active_popup.is_none());
        assert!(state.active_component.is_none());
    }

    #[test]
    fn test_brochart_view_respects_show_flag() {
        let mut site = demo_site();
        site.brochart.show = false;
        let mut state = AppState::new(site, None, Config::new()).unwrap();

        state.open_brochart_view();
        assert!(state.active_popup.is_none());
    }
}
