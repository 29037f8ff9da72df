//! Plain-text rendering of board state for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use noticeboard::net::types::Notice;
use noticeboard::state::detail::DetailView;
use noticeboard::state::form::FieldErrors;
use noticeboard::state::list::NoticeListState;
use noticeboard::util::color::{audience_color, parse_hex_rgb, status_badge_color};
use noticeboard::util::date::{EMPTY_DATE, display_date, display_timestamp};

const ID_WIDTH: usize = 26;
const TITLE_WIDTH: usize = 30;
const TYPE_WIDTH: usize = 26;
const AUDIENCE_WIDTH: usize = 18;
const DATE_WIDTH: usize = 12;

/// Wrap already-padded text in a 24-bit foreground color.
fn paint(text: &str, hex: &str, color: bool) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) if color => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        _ => text.to_owned(),
    }
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text:<width$}");
    }
    let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Counters, table, and pagination line.
pub fn list(state: &NoticeListState, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Active Notice: {} | Draft Notice: {}",
        state.published_count, state.draft_count
    );
    if let Some(error) = &state.error {
        let _ = writeln!(out, "error: {error}");
    }
    out.push('\n');

    let rows = state.visible_rows();
    if rows.is_empty() {
        out.push_str("No notices found.\n");
    } else {
        let _ = writeln!(
            out,
            "{} {} {} {} {} STATUS",
            fit("ID", ID_WIDTH),
            fit("TITLE", TITLE_WIDTH),
            fit("NOTICE TYPE", TYPE_WIDTH),
            fit("DEPARTMENTS/INDIV.", AUDIENCE_WIDTH),
            fit("PUBLISHED ON", DATE_WIDTH),
        );
        for row in rows {
            out.push_str(&list_row(row, state.selected.contains(&row.id), color));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&pagination(state));
    out.push('\n');
    out
}

fn list_row(row: &Notice, selected: bool, color: bool) -> String {
    let audience = row.target_department_or_individual.as_deref();
    let marker = if selected { '*' } else { ' ' };
    format!(
        "{marker}{} {} {} {} {} {}",
        fit(&row.id, ID_WIDTH - 1),
        fit(&row.title, TITLE_WIDTH),
        fit(&row.notice_type, TYPE_WIDTH),
        paint(&fit(audience.unwrap_or(EMPTY_DATE), AUDIENCE_WIDTH), audience_color(audience), color),
        fit(&display_date(row.publishing_date.as_deref()), DATE_WIDTH),
        paint(row.status.as_str(), status_badge_color(row.status), color),
    )
}

/// `Page 2 of 3: 1 [2] 3`
pub fn pagination(state: &NoticeListState) -> String {
    let buttons: Vec<String> = state
        .page_numbers()
        .map(|page| {
            if page == state.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("Page {} of {}: {}", state.page, state.pages, buttons.join(" "))
}

/// Detail modal body.
pub fn detail(view: DetailView<'_>) -> String {
    match view {
        DetailView::Hidden => String::new(),
        DetailView::Loading => "Loading...\n".to_owned(),
        DetailView::Empty { error } => match error {
            Some(error) => format!("Notice unavailable: {error}\n"),
            None => "Notice unavailable\n".to_owned(),
        },
        DetailView::Loaded(notice) => notice_fields(notice),
    }
}

fn notice_fields(notice: &Notice) -> String {
    let optional = |value: Option<&str>| value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_DATE).to_owned();
    let fields = [
        ("Title", notice.title.clone()),
        ("Status", notice.status.to_string()),
        ("Notice Type", notice.notice_type.clone()),
        (
            "Departments/Individual",
            optional(notice.target_department_or_individual.as_deref()),
        ),
        ("Employee ID", optional(notice.employee_id.as_deref())),
        ("Employee Name", optional(notice.employee_name.as_deref())),
        ("Position", optional(notice.position.as_deref())),
        ("Publishing Date", display_date(notice.publishing_date.as_deref())),
        (
            "Published At",
            notice
                .published_at
                .as_deref()
                .map_or_else(|| EMPTY_DATE.to_owned(), display_timestamp),
        ),
        ("Attachment", optional(notice.attachment_link())),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        let _ = writeln!(out, "{label:<24}{value}");
    }
    let _ = writeln!(out, "\n{}", notice.description);
    out
}

pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors {
        let _ = writeln!(out, "  {}: {message}", field.as_str());
    }
    out
}
