// File: src/tui/view.rs
use crate::tui::state::{AppState, InputMode, ListView};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState, view: &ListView) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit  Ctrl-C:Quit from anywhere"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  g/G:First/Last"),
        ]),
        Line::from(vec![
            Span::styled(
                " ITEMS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add  e/Enter:Edit  Space/x:Toggle Done"),
        ]),
        Line::from(vec![
            Span::styled(
                " INPUT ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Enter:Save  Esc:Leave (blank edits keep the old text)"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 3)
    } else {
        Constraint::Length(3)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), footer_height])
        .split(f.area());

    // --- Item List ---
    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            let mut text_style = if item.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            if item.completed && state.strikethrough_completed {
                text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
            }

            let mut spans = vec![
                Span::styled(
                    item.checkbox_symbol(),
                    Style::default().fg(if item.completed {
                        Color::Green
                    } else {
                        Color::Reset
                    }),
                ),
                Span::raw(" "),
            ];
            if item.editing {
                spans.push(Span::styled(
                    "(editing) ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            spans.push(Span::styled(item.text.as_str(), text_style));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_title = format!(" Items ({}) ", view.stats.total);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Blue),
        );
    f.render_stateful_widget(list, chunks[0], &mut state.list_state);

    // --- Input Line ---
    let (input_title, input_style) = match state.mode {
        InputMode::Normal => (" Press 'a' to add an item ", Style::default().fg(Color::DarkGray)),
        InputMode::Creating => (" New item ", Style::default().fg(Color::Yellow)),
        InputMode::Editing(_) => (" Edit item ", Style::default().fg(Color::Cyan)),
    };
    let input = Paragraph::new(state.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(input_title)
            .border_style(input_style),
    );
    f.render_widget(input, chunks[1]);

    if state.mode != InputMode::Normal {
        let max_col = chunks[1].width.saturating_sub(3);
        f.set_cursor_position((
            chunks[1].x + 1 + state.cursor_column().min(max_col),
            chunks[1].y + 1,
        ));
    }

    // --- Footer ---
    let stats_line = Line::from(vec![
        Span::styled(
            format!(" All: {} ", view.stats.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Done: {} ", view.stats.completed),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" Open: {} ", view.stats.incomplete),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!("  {}", state.message)),
    ]);

    // Stats stay visible while the help is open.
    let mut footer_lines = vec![stats_line];
    if state.show_full_help {
        footer_lines.extend(full_help_text);
    }
    let footer = Paragraph::new(footer_lines)
        .block(Block::default().borders(Borders::ALL).title(" ?:Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(footer, chunks[2]);
}
