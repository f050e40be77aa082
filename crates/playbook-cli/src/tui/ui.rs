//! TUI rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::logo;

use super::app::{App, View};

/// Render the current view.
pub fn render(f: &mut Frame, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    match app.current_view {
        View::StageList => render_stage_list(f, app, chunks[0]),
        View::StepList => render_step_list(f, app, chunks[0]),
        View::StepDetail => render_step_detail(f, app, chunks[0]),
        View::Help => render_help(f, chunks[0]),
    }

    render_status_bar(f, app, chunks[1]);
}

fn render_stage_list(f: &mut Frame, app: &App<'_>, area: Rect) {
    let header_cells = ["Stage", "Steps", "Description"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = app.document.stages.iter().enumerate().map(|(i, stage)| {
        let style = if i == app.selected_stage {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(stage.title.clone()),
            Cell::from(format!("{}", stage.steps.len())),
            Cell::from(truncate(stage.description.as_deref().unwrap_or("-"), 60)),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Percentage(60),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.document.title)),
    );

    f.render_widget(table, area);
}

fn render_step_list(f: &mut Frame, app: &App<'_>, area: Rect) {
    let Some(stage) = app.current_stage() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    // Stage header.
    let header_text = match &stage.description {
        Some(desc) => format!(" {} | {}", stage.title, truncate(desc, 100)),
        None => format!(" {}", stage.title),
    };
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title(" Stage "));
    f.render_widget(header, chunks[0]);

    // Step table.
    let step_header_cells = ["Step", "Goal", "Tools"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let step_header = Row::new(step_header_cells).height(1);

    let step_rows = stage.steps.iter().enumerate().map(|(i, step)| {
        let style = if i == app.selected_step {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(step.title.clone()),
            Cell::from(truncate(step.goal.as_deref().unwrap_or("-"), 50)),
            Cell::from(format!("{}", step.toolbox.len())),
        ])
        .style(style)
    });

    let step_table = Table::new(
        step_rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(55),
            Constraint::Length(6),
        ],
    )
    .header(step_header)
    .block(Block::default().borders(Borders::ALL).title(" Steps "));

    f.render_widget(step_table, chunks[1]);
}

fn render_step_detail(f: &mut Frame, app: &App<'_>, area: Rect) {
    let Some(step) = app.current_step() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title / goal / why
            Constraint::Min(5),    // lists
            Constraint::Length(6), // toolbox
        ])
        .split(area);

    // Step header.
    let mut info_lines = vec![Line::from(vec![
        Span::styled("Step: ", Style::default().fg(Color::Yellow)),
        Span::raw(step.title.as_str()),
    ])];
    if let Some(goal) = &step.goal {
        info_lines.push(Line::from(vec![
            Span::styled("Goal: ", Style::default().fg(Color::Yellow)),
            Span::raw(goal.as_str()),
        ]));
    }
    if let Some(why) = &step.why {
        info_lines.push(Line::from(vec![
            Span::styled("Why:  ", Style::default().fg(Color::Yellow)),
            Span::raw(why.as_str()),
        ]));
    }
    let info =
        Paragraph::new(info_lines).block(Block::default().borders(Borders::ALL).title(" Step "));
    f.render_widget(info, chunks[0]);

    // SOP / KPIs / deliverables.
    let mut body_lines: Vec<Line> = Vec::new();
    push_list_lines(&mut body_lines, "SOP / How", &step.how);
    push_list_lines(&mut body_lines, "KPIs", &step.kpis);
    push_list_lines(&mut body_lines, "Deliverables", &step.deliverables);
    if body_lines.is_empty() {
        body_lines.push(Line::from(Span::styled(
            "No content yet. Fill this step in with `playbook edit`.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let body =
        Paragraph::new(body_lines).block(Block::default().borders(Borders::ALL).title(" Detail "));
    f.render_widget(body, chunks[1]);

    // Toolbox.
    let tool_lines: Vec<Line> = if step.toolbox.is_empty() {
        vec![Line::from(Span::styled(
            "No tools linked.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        step.toolbox
            .iter()
            .map(|tool| {
                let mut spans = vec![
                    Span::styled(tool.name.clone(), Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::raw(tool.url.clone()),
                ];
                if let Some(logo) = logo::logo_url(&tool.url) {
                    spans.push(Span::styled(
                        format!("  [{logo}]"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };
    let toolbox = Paragraph::new(tool_lines)
        .block(Block::default().borders(Borders::ALL).title(" Toolbox "));
    f.render_widget(toolbox, chunks[2]);
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Navigation",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("    j/Down    Move down"),
        Line::from("    k/Up      Move up"),
        Line::from("    Enter     Drill into selected"),
        Line::from("    Esc/q     Back / Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Editing",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("    The browser is read-only. Edit a step with:"),
        Line::from("      playbook edit <plan> --stage <title> --step <title>"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Other",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("    ?         Show this help"),
        Line::from(""),
    ];

    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(help, area);
}

fn render_status_bar(f: &mut Frame, app: &App<'_>, area: Rect) {
    let view_name = match app.current_view {
        View::StageList => "Stages",
        View::StepList => "Steps",
        View::StepDetail => "Step Detail",
        View::Help => "Help",
    };

    let bar = Line::from(vec![
        Span::styled(
            format!(" {view_name} "),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("plan: {}", app.plan_key),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  q:back  ?:help  Enter:open"),
    ]);

    f.render_widget(Paragraph::new(bar), area);
}

// -- Helpers --

fn push_list_lines(lines: &mut Vec<Line>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(Span::styled(
        format!("{heading}:"),
        Style::default().fg(Color::Yellow),
    )));
    for item in items {
        lines.push(Line::from(format!("  - {item}")));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}
