//! Entry form widget
//!
//! One row per field: the section title (on the first field of each
//! section), the field label, then the value. The submit button and the
//! submission status line follow the fields.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use shiftlog_app::{EntryForm, FieldKind, FieldView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

const SECTION_WIDTH: usize = 32;
const LABEL_WIDTH: usize = 18;

/// Rows shown for a multi-line field; older lines scroll off the top
const TEXTAREA_ROWS: usize = 4;

const CURSOR: &str = "▏";
const DATETIME_HINT: &str = "YYYY-MM-DDTHH:MM";
const SELECT_HINT: &str = "Select";

pub struct FormView<'a> {
    form: &'a dyn EntryForm,
    title: &'a str,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a dyn EntryForm) -> Self {
        Self { form, title: "" }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn lines(&self, value_width: usize) -> Vec<Line<'a>> {
        let focus = self.form.focus();
        let mut lines = Vec::new();
        let mut last_section = "";

        for (index, field) in self.form.fields().into_iter().enumerate() {
            let focused = index == focus;
            match field.kind {
                FieldKind::Submit => {
                    lines.push(Line::default());
                    lines.push(submit_line(self.form.can_submit(), focused));
                }
                FieldKind::TextArea => {
                    let (first, rest) = textarea_rows(&field, focused, value_width);
                    lines.push(field_row(&field, field.section != last_section, focused, first));
                    for row in rest {
                        let mut spans = vec![Span::raw(" ".repeat(1 + SECTION_WIDTH + LABEL_WIDTH))];
                        spans.extend(row);
                        lines.push(Line::from(spans));
                    }
                }
                _ => {
                    let value = value_spans(&field, focused, value_width);
                    lines.push(field_row(&field, field.section != last_section, focused, value));
                }
            }
            last_section = field.section;
        }

        lines.push(Line::default());
        let status = self.form.status();
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(status.display_text(), styles::submit_status(status)),
        ]));
        lines
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(true).style(Style::default().bg(palette::CARD_BG));
        if !self.title.is_empty() {
            block = block.title(Span::styled(format!(" {} ", self.title), styles::accent_bold()));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let value_width = (inner.width as usize)
            .saturating_sub(1 + SECTION_WIDTH + LABEL_WIDTH)
            .max(8);
        Paragraph::new(self.lines(value_width)).render(inner, buf);
    }
}

fn field_row<'a>(
    field: &FieldView<'a>,
    show_section: bool,
    focused: bool,
    value: Vec<Span<'a>>,
) -> Line<'a> {
    let section = if show_section { field.section } else { "" };
    let label_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    let marker = if focused { "›" } else { " " };

    let mut spans = vec![
        Span::styled(marker, styles::accent()),
        Span::styled(format!("{:<w$}", section, w = SECTION_WIDTH), styles::text_muted()),
        Span::styled(format!("{:<w$}", field.label, w = LABEL_WIDTH), label_style),
    ];
    spans.extend(value);
    Line::from(spans)
}

/// Value spans for single-line fields
fn value_spans<'a>(field: &FieldView<'a>, focused: bool, width: usize) -> Vec<Span<'a>> {
    let value_style = if focused {
        styles::text_bright()
    } else {
        styles::text_primary()
    };

    match field.kind {
        FieldKind::Select => {
            let arrow_style = if focused && !field.options.is_empty() {
                styles::accent()
            } else {
                styles::text_muted()
            };
            let value = if field.value.is_empty() {
                Span::styled(SELECT_HINT, styles::text_muted())
            } else {
                Span::styled(field.value, value_style)
            };
            vec![
                Span::styled("‹ ", arrow_style),
                value,
                Span::styled(" ›", arrow_style),
            ]
        }
        _ => {
            let hint = match (field.placeholder, field.kind) {
                (Some(p), _) => p,
                (None, FieldKind::DateTime) => DATETIME_HINT,
                _ => "",
            };
            text_spans(field.value, hint, value_style, focused, width)
        }
    }
}

fn text_spans<'a>(
    value: &'a str,
    hint: &'a str,
    style: Style,
    focused: bool,
    width: usize,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    if value.is_empty() {
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        spans.push(Span::styled(hint, styles::text_muted()));
    } else {
        // Keep the end of the value (and the cursor) visible
        let room = if focused { width.saturating_sub(1) } else { width };
        spans.push(Span::styled(tail_to_width(value, room), style));
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
    }
    spans
}

/// First row and continuation rows for a multi-line field
fn textarea_rows<'a>(
    field: &FieldView<'a>,
    focused: bool,
    width: usize,
) -> (Vec<Span<'a>>, Vec<Vec<Span<'a>>>) {
    let style = if focused {
        styles::text_bright()
    } else {
        styles::text_primary()
    };
    let hint = field.placeholder.unwrap_or("");

    let all: Vec<&str> = field.value.split('\n').collect();
    let skip = all.len().saturating_sub(TEXTAREA_ROWS);
    let visible = &all[skip..];
    let last = visible.len() - 1;

    let mut rows: Vec<Vec<Span<'a>>> = visible
        .iter()
        .enumerate()
        .map(|(i, &line)| {
            let with_cursor = focused && i == last;
            if line.is_empty() && i == 0 && field.value.is_empty() {
                text_spans("", hint, style, with_cursor, width)
            } else if line.is_empty() {
                if with_cursor {
                    vec![Span::styled(CURSOR, styles::accent())]
                } else {
                    Vec::new()
                }
            } else {
                text_spans(line, "", style, with_cursor, width)
            }
        })
        .collect();

    let first = rows.remove(0);
    (first, rows)
}

fn submit_line(enabled: bool, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(1 + SECTION_WIDTH)),
        Span::styled("[ Submit ]", styles::submit_button(enabled, focused)),
    ])
}

/// The longest suffix of `text` that fits in `max` columns
fn tail_to_width(text: &str, max: usize) -> &str {
    if text.width() <= max {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
