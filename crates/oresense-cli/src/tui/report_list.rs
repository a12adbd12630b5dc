use oresense_core::model::ReportStatus;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::{scroll_offset, App};

/// Render the dashboard with its report table.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Reports
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    if app.dashboard.is_empty() {
        render_empty(frame, chunks[1]);
    } else {
        render_table(frame, app, chunks[1]);
    }
    render_status(frame, app, chunks[2]);
    render_help(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "OreSense AI",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  LCA Assessment Platform", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("    {}", app.dashboard.summary())),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No Reports Made Till Now",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Start your first LCA assessment to generate comprehensive environmental impact reports.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press n to create your first report",
            Style::default().fg(Color::Cyan),
        )),
    ];
    let empty = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("LCA Reports"));
    frame.render_widget(empty, area);
}

fn status_style(status: ReportStatus) -> Style {
    match status {
        ReportStatus::Completed => Style::default().fg(Color::Green),
        ReportStatus::Draft => Style::default().fg(Color::Yellow),
    }
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Report").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Metal"),
        Cell::from("Status"),
        Cell::from("CO\u{2082} Impact"),
        Cell::from("Created"),
    ])
    .height(1);

    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    app.report_rows.set(viewport_height);
    // The terminal may have shrunk since the offset was last adjusted.
    let visible_start = scroll_offset(app.selected_report, app.report_list_offset, viewport_height);
    let visible_end = (visible_start + viewport_height).min(app.dashboard.len());

    let rows: Vec<Row> = app
        .dashboard
        .reports()
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, report)| {
            let style = if i == app.selected_report {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(report.name.clone()),
                Cell::from(report.metal_type.clone()),
                Cell::from(report.status.as_str()).style(status_style(report.status)),
                Cell::from(report.co2_impact.clone()),
                Cell::from(report.created_label(&app.date_format)),
            ])
            .style(style)
        })
        .collect();

    let title = if app.dashboard.len() > viewport_height {
        format!(
            "LCA Reports [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            app.dashboard.len()
        )
    } else {
        "LCA Reports".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Length(11),
            Constraint::Percentage(20),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("");
    let status = Paragraph::new(format!("  {}", text)).style(Style::default().fg(Color::Yellow));
    frame.render_widget(status, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("  n New LCA Assessment  \u{2191}/k Up  \u{2193}/j Down  Enter View  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
