use crate::maze::SimRobot;
use crate::navigation::{Explorer, Mode, Sensor};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// One-line status: run, step, mode, junction depth and heading.
#[must_use]
pub fn hud_line(explorer: &Explorer, robot: &SimRobot) -> String {
    let mode = match explorer.mode() {
        Mode::Explore => "EXPLORE",
        Mode::Backtrack => "BACKTRACK",
    };
    let cell = explorer
        .last_decision()
        .map_or_else(|| "-".to_string(), |d| format!("{:?}", d.topology));
    let status = if robot.at_exit() { " | EXIT REACHED" } else { "" };
    format!(
        "Run: {} | Step: {} | Mode: {} | Junctions: {} | Heading: {:?} | Cell: {}{}",
        robot.run_index(),
        robot.steps(),
        mode,
        explorer.memory().len(),
        robot.heading(),
        cell,
        status
    )
}

pub fn draw_ui(f: &mut Frame, grid_lines: Vec<String>, hud_info: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(0),    // Maze
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        hud_info,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let text: Vec<Line> = grid_lines
        .into_iter()
        .map(|s| Line::from(Span::raw(s)))
        .collect();

    let field = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(field, chunks[1]);
}
