//! TUI shell - the interactive game screen.

// Icon and scroll sizes are small; casts to terminal units are intentional
#![allow(clippy::cast_possible_truncation)]

use super::assets::{ICON_HEIGHT, ICON_WIDTH, Icons};
use super::output::{COMPUTER_WINS, PLAYER_WINS, TIES};
use super::{Action, CliError, logging};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use roshambo::{Move, MoveSource, RoundLog, Session};
use std::io::{self, Stdout, stdout};
use std::path::Path;

const TITLE: &str = " Rock Paper Scissors Game ";
const BUTTON_WIDTH: u16 = ICON_WIDTH as u16 + 4;
const PAGE: usize = 10;

/// A clickable button in the move panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Button {
    /// Play rock.
    Rock,
    /// Play paper.
    Paper,
    /// Play scissors.
    Scissors,
    /// End the session.
    Quit,
}

impl Button {
    /// Buttons in panel order.
    pub(crate) const ALL: [Button; 4] = [
        Button::Rock,
        Button::Paper,
        Button::Scissors,
        Button::Quit,
    ];

    /// Position in [`Button::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Button::Rock => 0,
            Button::Paper => 1,
            Button::Scissors => 2,
            Button::Quit => 3,
        }
    }

    /// Text on the button.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Button::Rock => Move::Rock.label(),
            Button::Paper => Move::Paper.label(),
            Button::Scissors => Move::Scissors.label(),
            Button::Quit => "Quit",
        }
    }

    /// Icon file stem.
    pub(crate) const fn asset_name(self) -> &'static str {
        match self {
            Button::Rock => "fist",
            Button::Paper => "hand-paper",
            Button::Scissors => "scissors",
            Button::Quit => "error",
        }
    }

    const fn action(self) -> Action {
        match self {
            Button::Rock => Action::Play(Move::Rock),
            Button::Paper => Action::Play(Move::Paper),
            Button::Scissors => Action::Play(Move::Scissors),
            Button::Quit => Action::Quit,
        }
    }
}

/// Execute the TUI shell.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub(crate) fn execute<S: MoveSource>(source: S, assets: Option<&Path>) -> Result<(), CliError> {
    // Icons load before the alternate screen so warnings stay visible
    let icons = assets.map_or_else(Icons::builtin, Icons::load);
    let mut app = App::new(Session::new(source), icons);

    log::info!("TUI session started");
    run_tui(&mut app)?;
    log::info!("TUI session ended after {} rounds", app.session.rounds());

    Ok(())
}

/// App state for the TUI.
struct App<S> {
    session: Session<S>,
    log: RoundLog,
    icons: Icons,
    focus: usize,
    /// Lines scrolled back from the newest; 0 follows the newest line.
    scroll_back: usize,
    /// Rows inside the log border as of the last frame.
    log_height: usize,
    status: Option<String>,
    quit: bool,
}

impl<S: MoveSource> App<S> {
    fn new(session: Session<S>, icons: Icons) -> Self {
        Self {
            session,
            log: RoundLog::new(),
            icons,
            focus: 0,
            scroll_back: 0,
            log_height: 0,
            status: None,
            quit: false,
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::Play(player) => match self.session.play_round(player, &mut self.log) {
                Ok(_) => {
                    self.scroll_back = 0;
                    self.status = None;
                }
                Err(e) => {
                    log::error!("Round not played: {e}");
                    self.status = Some(format!("Round not played: {e}"));
                }
            },
        }
    }

    fn press(&mut self, button: Button) {
        self.focus = button.index();
        self.perform(button.action());
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Button::ALL.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + Button::ALL.len() - 1) % Button::ALL.len();
    }

    /// Track the log viewport for `screen`, keeping the scroll position in range.
    fn fit_to(&mut self, screen: Rect) {
        let log = layout(screen, self.icons.any()).log;
        self.log_height = usize::from(Block::bordered().inner(log).height);
        self.scroll_back = self.scroll_back.min(self.max_scroll_back());
    }

    /// Scroll position that puts the oldest line at the top of the log.
    fn max_scroll_back(&self) -> usize {
        self.log.lines().len().saturating_sub(self.log_height)
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = (self.scroll_back + lines).min(self.max_scroll_back());
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.perform(Action::Quit);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.press(Button::Quit),
            KeyCode::Char('r' | '1') => self.press(Button::Rock),
            KeyCode::Char('p' | '2') => self.press(Button::Paper),
            KeyCode::Char('s' | '3') => self.press(Button::Scissors),
            KeyCode::Right | KeyCode::Tab => self.focus_next(),
            KeyCode::Left | KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(Button::ALL[self.focus]),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::PageDown => self.scroll_down(PAGE),
            KeyCode::Home => self.scroll_back = self.max_scroll_back(),
            KeyCode::End => self.scroll_back = 0,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let areas = layout(screen, self.icons.any());
                if let Some(button) = Button::ALL
                    .into_iter()
                    .find(|b| areas.buttons[b.index()].contains(position))
                {
                    self.press(button);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(1),
            MouseEventKind::ScrollDown => self.scroll_down(1),
            _ => {}
        }
    }
}

fn run_tui<S: MoveSource>(app: &mut App<S>) -> Result<(), CliError> {
    let mut terminal = setup_terminal()?;
    let held = logging::hold();

    let result = event_loop(&mut terminal, app);

    let restored = restore_terminal(&mut terminal);
    drop(held);

    result?;
    restored?;
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    })
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn event_loop<B: Backend, S: MoveSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), CliError> {
    while !app.quit {
        let screen = terminal.draw(|f| ui(f, &*app))?.area;
        app.fit_to(screen);

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, screen),
            _ => {}
        }
    }
    Ok(())
}

/// Screen regions for one frame.
struct Areas {
    header: Rect,
    panel: Rect,
    buttons: [Rect; 4],
    log: Rect,
    stats: Rect,
    footer: Rect,
}

fn layout(area: Rect, with_icons: bool) -> Areas {
    // Border, optional icon rows, label row, border
    let button_height = if with_icons { ICON_HEIGHT as u16 + 3 } else { 3 };

    let [header, panel, log, stats, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(button_height + 2),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    let buttons = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 4])
        .flex(Flex::Center)
        .spacing(1)
        .areas(Block::bordered().inner(panel));

    Areas {
        header,
        panel,
        buttons,
        log,
        stats,
        footer,
    }
}

fn ui<S: MoveSource>(f: &mut Frame, app: &App<S>) {
    let areas = layout(f.area(), app.icons.any());

    render_header(f, areas.header, app);
    render_buttons(f, &areas, app);
    render_log(f, areas.log, app);
    render_stats(f, areas.stats, app);
    render_footer(f, areas.footer, app);
}

fn render_header<S: MoveSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let title = format!("{TITLE}| Round {} ", app.session.rounds());

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::bordered());

    f.render_widget(header, area);
}

fn render_buttons<S: MoveSource>(f: &mut Frame, areas: &Areas, app: &App<S>) {
    f.render_widget(Block::bordered().title(" Select Move "), areas.panel);

    let with_icons = app.icons.any();
    for button in Button::ALL {
        let mut lines: Vec<Line> = match app.icons.get(button) {
            Some(icon) => icon.iter().map(|row| Line::from(row.as_str())).collect(),
            None if with_icons => vec![Line::from(""); ICON_HEIGHT],
            None => Vec::new(),
        };
        lines.push(Line::from(Span::styled(
            button.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let border = if app.focus == button.index() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border));

        f.render_widget(widget, areas.buttons[button.index()]);
    }
}

/// First visible log line for `total` lines in `height` rows.
fn log_offset(total: usize, height: usize, scroll_back: usize) -> usize {
    total.saturating_sub(height).saturating_sub(scroll_back)
}

fn render_log<S: MoveSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let block = Block::bordered().title(" Results ");
    let height = block.inner(area).height as usize;

    let lines = app.log.lines();
    let max_offset = lines.len().saturating_sub(height);
    let offset = log_offset(lines.len(), height, app.scroll_back);

    let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    let log = Paragraph::new(text)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    f.render_widget(log, area);

    if max_offset > 0 {
        let mut state = ScrollbarState::new(max_offset).position(offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

fn render_stats<S: MoveSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let score = app.log.score();
    let block = Block::bordered();
    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas::<3>(block.inner(area));
    f.render_widget(block, area);

    let field = Style::default().fg(Color::Black).bg(Color::Gray);
    for ((label, count), cell) in [
        (PLAYER_WINS, score.player_wins),
        (COMPUTER_WINS, score.computer_wins),
        (TIES, score.ties),
    ]
    .into_iter()
    .zip(cells)
    {
        let line = Line::from(vec![
            Span::raw(format!("{label} ")),
            Span::styled(format!("{count:>5}"), field),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), cell);
    }
}

fn render_footer<S: MoveSource>(f: &mut Frame, area: Rect, app: &App<S>) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            " [r/p/s] Play  [←/→] Focus  [Enter] Press  [↑/↓] Scroll  [q] Quit ",
            Style::default().fg(Color::Gray),
        )),
    };

    f.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use roshambo::{Score, ScriptedSource};

    fn app(computer: &[Move]) -> App<ScriptedSource> {
        App::new(
            Session::new(ScriptedSource::new(computer.iter().copied())),
            Icons::builtin(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(app: &App<ScriptedSource>, width: u16, height: u16) -> String {
        render_rows(app, width, height).concat()
    }

    fn render_rows(app: &App<ScriptedSource>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let app = app(&[]);
        let screen = render(&app, 100, 40);

        assert!(screen.contains("Rock Paper Scissors Game"));
        assert!(screen.contains("Select Move"));
        for button in Button::ALL {
            assert!(screen.contains(button.label()), "missing {}", button.label());
        }
        assert!(screen.contains("Player Wins:     0"));
        assert!(screen.contains("Computer Wins:     0"));
        assert!(screen.contains("Ties:     0"));
    }

    #[test]
    fn test_keys_play_rounds_in_order() {
        let mut app = app(&[Move::Scissors, Move::Paper, Move::Rock]);

        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('s')));

        assert_eq!(
            app.log.lines(),
            [
                "Rock breaks Scissors. Player wins!",
                "It's a tie!",
                "Rock breaks Scissors. Computer wins!",
            ]
        );
        assert_eq!(
            app.log.score(),
            Score {
                player_wins: 1,
                computer_wins: 1,
                ties: 1
            }
        );

        let screen = render(&app, 100, 40);
        assert!(screen.contains("It's a tie!"));
        assert!(screen.contains("Player Wins:     1"));
        assert!(screen.contains("Round 3"));
    }

    #[test]
    fn test_focus_and_enter() {
        let mut app = app(&[Move::Rock]);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.focus, Button::Paper.index());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.log.lines(), ["Paper covers Rock. Player wins!"]);

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.focus, Button::Quit.index());
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.quit);
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app(&[]);
            app.handle_key(event);
            assert!(app.quit);
            assert_eq!(app.session.rounds(), 0);
        }
    }

    #[test]
    fn test_mouse_click_presses_button() {
        let mut app = app(&[Move::Paper]);
        let screen = Rect::new(0, 0, 100, 40);
        let target = layout(screen, true).buttons[Button::Scissors.index()];

        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: target.x + target.width / 2,
                row: target.y + target.height / 2,
                modifiers: KeyModifiers::NONE,
            },
            screen,
        );
        assert_eq!(app.log.lines(), ["Scissors cuts Paper. Player wins!"]);
        assert_eq!(app.focus, Button::Scissors.index());

        // A click outside every button does nothing
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
            screen,
        );
        assert_eq!(app.session.rounds(), 1);
    }

    #[test]
    fn test_source_failure_shows_status() {
        let mut app = app(&[]);
        app.handle_key(key(KeyCode::Char('p')));

        assert_eq!(app.session.score(), Score::default());
        assert!(app.log.lines().is_empty());
        assert!(!app.quit);
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Round not played: move source exhausted"));
    }

    #[test]
    fn test_text_only_buttons() {
        let app = App::new(Session::new(ScriptedSource::default()), Icons::default());
        let areas = layout(Rect::new(0, 0, 100, 40), app.icons.any());
        assert_eq!(areas.panel.height, 5);

        let screen = render(&app, 100, 40);
        assert!(screen.contains("Scissors"));
        assert!(screen.contains("Quit"));
    }

    #[test]
    fn test_log_offset() {
        assert_eq!(log_offset(3, 10, 0), 0);
        assert_eq!(log_offset(30, 10, 0), 20);
        assert_eq!(log_offset(30, 10, 5), 15);
        assert_eq!(log_offset(30, 10, 30), 0);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut app = app(&[Move::Rock; 4]);
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Char('r')));
        }

        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.scroll_back, 4);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll_back, 3);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll_back, 0);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll_back, 4);

        // A new round jumps back to the newest line
        let mut app = App::new(
            Session::new(ScriptedSource::new([Move::Rock; 2])),
            Icons::builtin(),
        );
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.scroll_back, 0);
    }

    #[test]
    fn test_scroll_stops_at_top_of_log() {
        // Player always plays rock: tie, computer win, player win, repeating
        let computer: Vec<Move> = (0..40).map(|i| Move::ALL[i % 3]).collect();
        let mut app = app(&computer);
        for _ in 0..40 {
            app.handle_key(key(KeyCode::Char('r')));
        }

        let screen = Rect::new(0, 0, 100, 40);
        app.fit_to(screen);
        let height = app.log_height;
        assert!(height > 0 && height < 40);
        let top_row = usize::from(layout(screen, true).log.y) + 1;

        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll_back, 40 - height);
        assert_eq!(log_offset(40, height, app.scroll_back), 0);
        let rows = render_rows(&app, 100, 40);
        assert!(rows[top_row].contains("It's a tie!"), "{}", rows[top_row]);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(log_offset(40, height, app.scroll_back), 1);
        let rows = render_rows(&app, 100, 40);
        assert!(
            rows[top_row].contains("Paper covers Rock. Computer wins!"),
            "{}",
            rows[top_row]
        );

        // Piling on scroll-ups stays at the top
        for _ in 0..10 {
            app.handle_key(key(KeyCode::PageUp));
        }
        assert_eq!(app.scroll_back, 40 - height);
    }

    #[test]
    fn test_taller_screen_pulls_scroll_into_range() {
        let mut app = app(&[Move::Rock; 20]);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Char('r')));
        }
        app.fit_to(Rect::new(0, 0, 100, 30));
        app.handle_key(key(KeyCode::Home));
        let short_max = app.scroll_back;
        assert!(short_max > 0);

        app.fit_to(Rect::new(0, 0, 100, 60));
        assert_eq!(app.scroll_back, 0);
    }
}
