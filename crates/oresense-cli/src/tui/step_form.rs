use oresense_core::model::{Field, FieldKind};
use oresense_core::wizard::TOTAL_STEPS;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use super::{App, FormSession};

/// Render the wizard for the open assessment.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some(form) = app.form.as_ref() else {
        let msg = Paragraph::new("No assessment in progress").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(6),    // Fields
            Constraint::Length(1), // Validation message
            Constraint::Length(3), // Navigation
        ])
        .split(area);

    render_progress(frame, form, chunks[0]);
    render_fields(frame, form, chunks[1]);
    render_error(frame, form, chunks[2]);
    render_navigation(frame, form, chunks[3]);
}

fn render_progress(frame: &mut Frame, form: &FormSession, area: Rect) {
    let wizard = &form.wizard;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New LCA Assessment "),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(wizard.progress())
        .label(format!(
            "Step {} of {}: {}",
            wizard.current_step(),
            TOTAL_STEPS,
            wizard.step().title()
        ));
    frame.render_widget(gauge, area);
}

fn value_spans(form: &FormSession, field: Field, selected: bool) -> Vec<Span<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let spec = field.spec();

    if let FieldKind::Choice(set) = spec.kind {
        let value = form.wizard.field(field);
        let text = set
            .label_for(value)
            .map(|l| Span::raw(l.to_string()))
            .unwrap_or_else(|| {
                if value.is_empty() {
                    Span::styled(set.prompt(), muted)
                } else {
                    Span::raw(value.to_string())
                }
            });
        return if selected {
            vec![Span::styled("\u{2039} ", muted), text, Span::styled(" \u{203a}", muted)]
        } else {
            vec![text]
        };
    }

    let value = form.display_value(field);
    let mut spans = Vec::new();
    if value.is_empty() && !selected {
        spans.push(Span::styled(spec.placeholder, muted));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if selected {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Cyan)));
    }
    if let Some(unit) = spec.unit {
        spans.push(Span::styled(format!(" {}", unit), muted));
    }
    spans
}

fn render_fields(frame: &mut Frame, form: &FormSession, area: Rect) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    for (i, field) in form.step_fields().into_iter().enumerate() {
        let selected = i == form.selected_field;
        let label_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if selected { "\u{25b6} " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ]));

        let mut value = vec![Span::raw("    ")];
        value.extend(value_spans(form, field, selected));
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    let fields = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(form.wizard.step().title()),
        );
    frame.render_widget(fields, area);
}

fn render_error(frame: &mut Frame, form: &FormSession, area: Rect) {
    let text = form.error.as_deref().unwrap_or("");
    let error = Paragraph::new(format!("  {}", text)).style(Style::default().fg(Color::Red));
    frame.render_widget(error, area);
}

fn render_navigation(frame: &mut Frame, form: &FormSession, area: Rect) {
    let wizard = &form.wizard;
    let previous = if wizard.is_first_step() {
        Span::styled("PgUp Previous", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("PgUp Previous")
    };
    let next = if wizard.is_final_step() {
        Span::styled(
            "Enter Complete Assessment",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if wizard.can_advance() {
        Span::raw("PgDn/Enter Next")
    } else {
        Span::styled("PgDn/Enter Next", Style::default().fg(Color::DarkGray))
    };
    let help = Style::default().fg(Color::DarkGray);

    let nav = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        previous,
        Span::raw("   "),
        next,
        Span::styled(
            "   \u{2191}/\u{2193} Field  \u{2190}/\u{2192} Choose  Esc Cancel",
            help,
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(nav, area);
}
