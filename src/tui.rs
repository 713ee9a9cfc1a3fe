use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use crate::coordinate::Coordinate;
use crate::session::{Action, GameConfig, Phase, Session};

pub fn run_tui(config: GameConfig) -> io::Result<()> {
    let mut session = Session::new(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let _guard = TermGuard;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut cursor = (0usize, 0usize);
    let mut notice: Option<String> = None;
    let poll_rate = Duration::from_millis(250);

    let mut last_inner_board = Rect::default();
    let res = loop {
        terminal.draw(|f| { last_inner_board = ui(f, &session, cursor, notice.as_deref()); })?;

        if !event::poll(poll_rate)? { continue; }
        let (cols, rows) = (session.field().columns(), session.field().rows());
        let mut target: Option<(Action, (usize, usize))> = None;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Char('h') | KeyCode::Left => {
                    if cursor.0 > 0 { cursor.0 -= 1; }
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    if cursor.0 + 1 < cols { cursor.0 += 1; }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if cursor.1 > 0 { cursor.1 -= 1; }
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    if cursor.1 + 1 < rows { cursor.1 += 1; }
                }
                KeyCode::Char('f') | KeyCode::Char('m') => target = Some((Action::Flag, cursor)),
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => target = Some((Action::Clear, cursor)),
                KeyCode::Char('n') => {
                    if let Ok(s) = Session::new(config) { session = s; notice = None; }
                }
                _ => {}
            },
            Event::Mouse(m) => {
                if let MouseEventKind::Down(btn) = m.kind {
                    if let Some((cx, cy)) = pos_to_cell(m.column, m.row, last_inner_board, cols as u16, rows as u16) {
                        let cell = (cx as usize, cy as usize);
                        match btn {
                            MouseButton::Left => target = Some((Action::Clear, cell)),
                            MouseButton::Right => target = Some((Action::Flag, cell)),
                            MouseButton::Middle => {}
                        }
                    }
                }
            }
            _ => {}
        }

        if let Some((action, (x, y))) = target {
            if let Some(coord) = cell_coordinate(x, y) {
                notice = session.play(action, &coord).err().map(|e| e.to_string());
            }
        }
    };

    terminal.show_cursor()?;
    res
}

fn cell_coordinate(x: usize, y: usize) -> Option<Coordinate> {
    let column = char::from(b'A'.checked_add(u8::try_from(x).ok()?)?);
    Coordinate::new(column, y as u32 + 1).ok()
}

fn ui(f: &mut ratatui::Frame, session: &Session, cursor: (usize, usize), notice: Option<&str>) -> Rect {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.size());

    let status = match session.phase() {
        Phase::Lost => "BOOOOOOOM!!! q to quit, n to restart".to_string(),
        Phase::Won => "VITORIA!!! q to quit, n to restart".to_string(),
        _ => notice.map(str::to_string).unwrap_or_else(|| {
            "Mouse: left=clear, right=flag • Arrows/HJKL move • Enter/Space clear • f flag • n new • q quit".to_string()
        }),
    };
    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Minas"));
    f.render_widget(header, root[0]);

    let field = session.field();
    let area = centered_grid_area(root[1], field.columns() as u16, field.rows() as u16);
    let inner = inner_area(area);
    draw_board(f, session, area, cursor);

    let footer = Paragraph::new(format!("{}  Field: A01-{}", session.flag_counter(), field.corner()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, root[2]);
    inner
}

fn centered_grid_area(parent: Rect, cols: u16, rows: u16) -> Rect {
    let cell_w = 2;
    // cells plus the surrounding border
    let grid_w = cols * cell_w + 2;
    let grid_h = rows + 2;
    let x = parent.x.saturating_add((parent.width.saturating_sub(grid_w)) / 2);
    let y = parent.y.saturating_add((parent.height.saturating_sub(grid_h)) / 2);
    Rect { x, y, width: grid_w.min(parent.width), height: grid_h.min(parent.height) }
}

fn draw_board(f: &mut ratatui::Frame, session: &Session, area: Rect, cursor: (usize, usize)) {
    let field = session.field();
    let lost = session.phase() == Phase::Lost;
    let mut lines: Vec<Line> = Vec::with_capacity(field.rows());
    for y in 0..field.rows() {
        let mut spans: Vec<Span> = Vec::with_capacity(field.columns());
        for x in 0..field.columns() {
            let Some(coord) = cell_coordinate(x, y) else { continue };
            let mined = field.cell(&coord).is_some_and(|c| c.is_mined());
            let mut ch = match field.cell_glyph(&coord) {
                Ok('#') if lost && mined => '*',
                Ok(g) => g,
                Err(_) => continue,
            };

            let mut style = match ch {
                'X' | '*' => Style::default().fg(Color::Red),
                '@' => Style::default().fg(Color::Yellow),
                '#' => Style::default().fg(Color::DarkGray),
                d => number_style(d.to_digit(10).unwrap_or(0)),
            };

            if cursor == (x, y) {
                style = style.add_modifier(Modifier::REVERSED);
                if ch == ' ' { ch = '·'; }
            }

            spans.push(Span::styled(format!("{} ", ch), style));
        }
        lines.push(Line::from(spans));
    }

    let board_block = Block::default().borders(Borders::ALL).title("Campo");
    let para = Paragraph::new(lines).block(board_block);
    f.render_widget(para, area);
}

fn number_style(n: u32) -> Style {
    match n {
        0 => Style::default().fg(Color::Gray),
        1 => Style::default().fg(Color::Blue),
        2 => Style::default().fg(Color::Green),
        3 => Style::default().fg(Color::Red),
        4 => Style::default().fg(Color::Magenta),
        5 => Style::default().fg(Color::Yellow),
        6 => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::White),
    }
}

fn inner_area(area: Rect) -> Rect {
    // same shrink as Block::inner() with Borders::ALL
    Rect { x: area.x.saturating_add(1), y: area.y.saturating_add(1), width: area.width.saturating_sub(2), height: area.height.saturating_sub(2) }
}

fn pos_to_cell(mx: u16, my: u16, inner: Rect, cols: u16, rows: u16) -> Option<(u16, u16)> {
    if mx < inner.x || my < inner.y { return None; }
    let cx = (mx - inner.x) / 2;
    let cy = my - inner.y;
    if cx < cols && cy < rows { Some((cx, cy)) } else { None }
}

struct TermGuard;
impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}
