use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::{AppLayout, centered_rect};
use super::picker::{Picker, PickerTarget};
use super::timestamps::format_saved_at;
use crate::converter::{ConversionState, Side};
use crate::history::HistoryStore;
use crate::summary::summary;

const EMERALD: Color = Color::Rgb(16, 185, 129);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const DARK_BG: Color = Color::Rgb(24, 24, 27);
const RED: Color = Color::Rgb(239, 68, 68);

/// Everything the renderer reads from the app
pub struct RenderState<'a> {
    pub state: &'a ConversionState,
    pub history: &'a HistoryStore,
    pub focus: Focus,
    pub left_input: &'a str,
    pub right_input: &'a str,
    pub history_selected: usize,
    pub picker: Option<&'a Picker>,
    pub prompt: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, view: &RenderState<'_>) {
    let layout = AppLayout::new(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" convertr ", Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)),
        Span::styled("unit converter", Style::default().fg(MUTED)),
    ]));
    frame.render_widget(title, layout.title_area);

    let category = view.state.category().map(|c| c.label());
    render_field(
        frame,
        layout.category_area,
        " Measurement ",
        category,
        "Choose measurement",
        view.focus == Focus::Category,
    );

    for (side, value_area, unit_area, input) in [
        (Side::Left, layout.left_value_area, layout.left_unit_area, view.left_input),
        (Side::Right, layout.right_value_area, layout.right_unit_area, view.right_input),
    ] {
        let (value_title, unit_title) = match side {
            Side::Left => (" From ", " From unit "),
            Side::Right => (" To ", " To unit "),
        };
        let input = (!input.is_empty()).then_some(input);
        render_field(frame, value_area, value_title, input, "Value", view.focus == Focus::Value(side));

        let unit = view
            .state
            .side(side)
            .unit
            .as_deref()
            .map(|abbr| view.state.unit_name(abbr).unwrap_or(abbr));
        render_field(frame, unit_area, unit_title, unit, "Unit", view.focus == Focus::Unit(side));
    }

    render_history(frame, layout.history_area, view);
    render_status_bar(frame, layout.status_area, view);

    if let Some(picker) = view.picker {
        render_picker(frame, picker);
    }
    if let Some(prompt) = view.prompt {
        render_prompt(frame, prompt);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { EMERALD } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Option<&str>,
    placeholder: &str,
    focused: bool,
) {
    let line = match content {
        Some(text) => Span::styled(text.to_string(), Style::default().fg(BRIGHT)),
        None => Span::styled(placeholder.to_string(), Style::default().fg(MUTED)),
    };
    let paragraph = Paragraph::new(line).block(field_block(title, focused));
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, view: &RenderState<'_>) {
    let focused = view.focus == Focus::History;
    let title = format!(" History ({}) ", view.history.len());
    let block = field_block(&title, focused);

    if view.history.is_empty() {
        let help = Paragraph::new(vec![
            Line::from("History is empty. Press Ctrl+S to save your conversions!"),
            Line::from("Press Ctrl+L to reset the values."),
            Line::from("To delete all conversion history, press Ctrl+D."),
        ])
        .style(Style::default().fg(MUTED))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(help, area);
        return;
    }

    let items: Vec<ListItem> = view
        .history
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if focused && idx == view.history_selected {
                Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD)
            } else if idx == 0 {
                Style::default().fg(BRIGHT)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(Line::from(vec![
                Span::raw(summary(&entry.record)),
                Span::styled(format!("  {}", format_saved_at(&entry.saved_at)), Style::default().fg(MUTED)),
            ]))
            .style(style)
        })
        .collect();

    // Scroll so the selected entry stays inside the panel
    let mut state = ListState::default().with_selected(Some(view.history_selected));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn render_picker(frame: &mut Frame, picker: &Picker) {
    let title = match picker.target() {
        PickerTarget::Category => " Measurement ".to_string(),
        PickerTarget::Unit(Side::Left) => " From unit ".to_string(),
        PickerTarget::Unit(Side::Right) => " To unit ".to_string(),
    };
    let area = centered_rect(frame.area(), 44, 16);

    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(EMERALD)),
        Span::styled(picker.query().to_string(), Style::default().fg(BRIGHT)),
    ]))];
    if picker.visible_count() == 0 {
        items.push(ListItem::new("No matches").style(Style::default().fg(MUTED)));
    }
    items.extend(picker.visible().enumerate().map(|(idx, option)| {
        let style = if idx == picker.selected() {
            Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        ListItem::new(format!("{:<6} {}", option.key, option.label)).style(style)
    }));

    let list = List::new(items)
        .block(field_block(&title, true).style(Style::default().bg(DARK_BG)));
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_prompt(frame: &mut Frame, prompt: &str) {
    let area = centered_rect(frame.area(), 50, 5);
    let text = vec![
        Line::from(Span::styled(prompt.to_string(), Style::default().fg(BRIGHT))),
        Line::from(Span::styled("Press any key to continue", Style::default().fg(MUTED))),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(field_block(" Notice ", true).border_style(Style::default().fg(RED)))
        .style(Style::default().bg(DARK_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: &RenderState<'_>) {
    let (status_text, style) = match view.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => EMERALD,
                MessageType::Error => RED,
            };
            (format!(" {} ", msg.text), Style::default().fg(fg).bg(DARK_BG))
        }
        None => {
            let keys = match (view.picker.is_some(), view.focus) {
                (true, _) => "type: filter | Enter: choose | Esc: close",
                (false, Focus::History) => "↑/↓: select | y: copy | d: delete | Ctrl+D: clear all",
                (false, Focus::Value(_)) => "type a number | Ctrl+X: swap | Ctrl+L: clear",
                (false, _) => "Enter: choose | Tab: next field",
            };
            (
                format!(" {} | Ctrl+S: save | Esc: quit ", keys),
                Style::default().fg(BRIGHT).bg(DARK_BG),
            )
        }
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
