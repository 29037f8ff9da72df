mod render;

use std::io::{self, BufRead, Write as _};

use clap::{Args, Parser, Subcommand};
use noticeboard::config::{ConfigError, DEFAULT_BASE_URL, NoticeBoardConfig, RequestTimeouts};
use noticeboard::net::types::{AudienceFilter, NoticeFilters, NoticeStatus, NoticeType, TargetAudience};
use noticeboard::state::board::{DeleteOutcome, MenuEffect, ToggleOutcome};
use noticeboard::state::detail::DetailView;
use noticeboard::state::form::{self, NoticeForm, NoticeFormState, SubmitAction, SubmitOutcome};
use noticeboard::state::list::{FetchOutcome, PageOutOfRange};
use noticeboard::state::rows::{MenuAction, MenuPosition, ToggleError};
use noticeboard::util::date::parse_iso_date;
use noticeboard::{ApiError, HttpNoticeApi, NoticeBoard};
use time::Date;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("notice service error: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Page(#[from] PageOutOfRange),
    #[error(transparent)]
    Toggle(#[from] ToggleError),
    #[error("notice {0} is not on the listed page; pass the same filters/page used to find it")]
    NotListed(String),
    #[error("form is incomplete: {0}")]
    Invalid(String),
    #[error("{0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "notice-cli", about = "HR notice board client")]
struct Cli {
    #[arg(long, env = "NOTICE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "NOTICE_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    #[arg(long, env = "NOTICE_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<u64>,

    #[arg(long, default_value_t = false, help = "Disable ANSI colors in table output")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List notices with filters and pagination.
    List {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show every field of one notice.
    Show { id: String },
    /// Create a notice; published unless --draft.
    Create {
        #[command(flatten)]
        fields: FormArgs,
        #[arg(long, default_value_t = false)]
        draft: bool,
    },
    /// Edit a notice; keeps its status unless --publish or --draft.
    Edit {
        id: String,
        #[command(flatten)]
        fields: FormArgs,
        #[arg(long, default_value_t = false, conflicts_with = "draft")]
        publish: bool,
        #[arg(long, default_value_t = false)]
        draft: bool,
    },
    /// Flip a listed notice between Published and Unpublished.
    Toggle {
        id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Delete a listed notice after confirmation.
    Delete {
        id: String,
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value = "", help = "Employee ID or name")]
    search: String,

    #[arg(long, help = "departments or individuals")]
    audience: Option<AudienceFilter>,

    #[arg(long)]
    status: Option<NoticeStatus>,

    #[arg(long, value_parser = parse_date, help = "YYYY-MM-DD")]
    published_on: Option<Date>,

    #[arg(long, default_value_t = false, help = "Only draft notices")]
    drafts: bool,
}

impl ListArgs {
    fn filters(&self) -> NoticeFilters {
        NoticeFilters {
            search: self.search.clone(),
            audience: self.audience,
            status: self.status,
            published_on: self.published_on,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct FormArgs {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    notice_type: Option<NoticeType>,

    #[arg(long)]
    target: Option<TargetAudience>,

    #[arg(long)]
    employee_id: Option<String>,

    #[arg(long)]
    employee_name: Option<String>,

    #[arg(long)]
    position: Option<String>,

    #[arg(long, value_parser = parse_date, help = "YYYY-MM-DD")]
    publishing_date: Option<Date>,

    #[arg(long)]
    attachment: Option<String>,
}

impl FormArgs {
    /// Overwrite only the fields given on the command line.
    fn apply(self, form: &mut NoticeForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if self.notice_type.is_some() {
            form.notice_type = self.notice_type;
        }
        if self.target.is_some() {
            form.target = self.target;
        }
        if let Some(employee_id) = self.employee_id {
            form.employee_id = employee_id;
        }
        if let Some(employee_name) = self.employee_name {
            form.employee_name = employee_name;
        }
        if let Some(position) = self.position {
            form.position = position;
        }
        if self.publishing_date.is_some() {
            form.publishing_date = self.publishing_date;
        }
        if self.attachment.is_some() {
            form.attachment = self.attachment;
        }
    }
}

fn parse_date(raw: &str) -> Result<Date, String> {
    parse_iso_date(raw).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = NoticeBoardConfig::new(
        &cli.base_url,
        RequestTimeouts { request_secs: cli.request_timeout_secs, connect_secs: cli.connect_timeout_secs },
    )?;
    let api = HttpNoticeApi::from_config(&config)?;
    tracing::debug!(base_url = api.base_url(), "notice client configured");
    let color = !cli.no_color;

    match cli.command {
        Command::List { list, json } => run_list(api, &list, json, color).await,
        Command::Show { id } => run_show(api, &id).await,
        Command::Create { fields, draft } => {
            let action = if draft { SubmitAction::SaveDraft } else { SubmitAction::Publish };
            run_create(&api, fields, action).await
        }
        Command::Edit { id, fields, publish, draft } => {
            let action = match (publish, draft) {
                (true, _) => SubmitAction::Publish,
                (_, true) => SubmitAction::SaveDraft,
                _ => SubmitAction::Save,
            };
            run_edit(&api, &id, fields, action).await
        }
        Command::Toggle { id, list } => run_toggle(api, &id, &list).await,
        Command::Delete { id, yes, list } => run_delete(api, &id, yes, &list).await,
    }
}

// =============================================================================
// LIST-BASED COMMANDS
// =============================================================================

fn expect_applied(outcome: FetchOutcome, board: &NoticeBoard<HttpNoticeApi>) -> Result<(), CliError> {
    match outcome {
        FetchOutcome::Applied => Ok(()),
        FetchOutcome::Failed | FetchOutcome::Stale => Err(CliError::Failed(
            board
                .list
                .error
                .clone()
                .unwrap_or_else(|| "notice list unavailable".to_owned()),
        )),
    }
}

/// Load the requested page: filters first (which resets to page 1), then
/// move to the page once the page count is known.
async fn load_board(api: HttpNoticeApi, args: &ListArgs) -> Result<NoticeBoard<HttpNoticeApi>, CliError> {
    let mut board = NoticeBoard::new(api);
    board.list.set_filters(args.filters());
    if args.drafts {
        board.list.show_drafts();
    }
    let outcome = board.refresh().await;
    expect_applied(outcome, &board)?;
    if let Some(outcome) = board.go_to_page(args.page).await? {
        expect_applied(outcome, &board)?;
    }
    Ok(board)
}

async fn run_list(api: HttpNoticeApi, args: &ListArgs, json: bool, color: bool) -> Result<(), CliError> {
    let board = load_board(api, args).await?;
    if json {
        let body = serde_json::json!({
            "data": board.list.visible_rows(),
            "pagination": {
                "page": board.list.page,
                "pages": board.list.pages,
                "publishedCount": board.list.published_count,
                "draftCount": board.list.draft_count,
            }
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render::list(&board.list, color));
    }
    Ok(())
}

async fn run_toggle(api: HttpNoticeApi, id: &str, args: &ListArgs) -> Result<(), CliError> {
    let mut board = load_board(api, args).await?;
    if board.list.row(id).is_none() {
        return Err(CliError::NotListed(id.to_owned()));
    }
    board.rows.toggle_status_popover(id);
    match board.toggle_status(id).await? {
        ToggleOutcome::Confirmed(status) => {
            println!("{id} is now {status}");
            Ok(())
        }
        ToggleOutcome::Reverted { error } => Err(CliError::Failed(format!("status not changed: {error}"))),
    }
}

async fn run_delete(api: HttpNoticeApi, id: &str, yes: bool, args: &ListArgs) -> Result<(), CliError> {
    let mut board = load_board(api, args).await?;
    let Some(title) = board.list.row(id).map(|row| row.title.clone()) else {
        return Err(CliError::NotListed(id.to_owned()));
    };

    board.rows.open_menu(id, MenuPosition::default());
    if board.choose_menu_action(MenuAction::Delete) != MenuEffect::ConfirmDelete {
        return Err(CliError::Failed("delete could not be started".to_owned()));
    }

    if !yes && !confirm(&format!("Delete notice \"{title}\"? [y/N] "))? {
        board.cancel_delete();
        println!("cancelled");
        return Ok(());
    }

    match board.confirm_delete().await {
        DeleteOutcome::Deleted { title, .. } => {
            println!("Notice \"{title}\" deleted");
            board.dismiss_delete_success();
            Ok(())
        }
        DeleteOutcome::Failed { error } => Err(CliError::Failed(format!("delete failed: {error}"))),
        DeleteOutcome::Nothing => Err(CliError::Failed("no delete was pending".to_owned())),
    }
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

// =============================================================================
// DETAIL
// =============================================================================

async fn run_show(api: HttpNoticeApi, id: &str) -> Result<(), CliError> {
    let mut board = NoticeBoard::new(api);
    board.open_detail(id).await;
    let view = board.detail.view();
    print!("{}", render::detail(view));
    if let DetailView::Empty { error } = view {
        return Err(CliError::Failed(error.unwrap_or("notice unavailable").to_owned()));
    }
    board.close_detail();
    Ok(())
}

// =============================================================================
// FORMS
// =============================================================================

async fn run_create(api: &HttpNoticeApi, fields: FormArgs, action: SubmitAction) -> Result<(), CliError> {
    let mut state = NoticeFormState::create();
    fields.apply(&mut state.form);
    eprintln!("{}", action.pending_label());
    let outcome = form::submit(&mut state, api, action).await;
    report_submit(&state, outcome, "Notice Created Successfully")
}

async fn run_edit(api: &HttpNoticeApi, id: &str, fields: FormArgs, action: SubmitAction) -> Result<(), CliError> {
    eprintln!("Loading notice {id}...");
    let mut state = form::load_for_edit(api, id).await;
    if let Some(error) = state.error.take() {
        return Err(CliError::Failed(format!("could not load notice {id}: {error}")));
    }
    fields.apply(&mut state.form);
    eprintln!("{}", action.pending_label());
    let outcome = form::submit(&mut state, api, action).await;
    report_submit(&state, outcome, "Notice Updated Successfully")
}

fn report_submit(state: &NoticeFormState, outcome: SubmitOutcome, success: &str) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Saved(notice) => {
            println!("{success}: {} ({})", notice.id, notice.status);
            Ok(())
        }
        SubmitOutcome::Invalid => {
            eprint!("{}", render::field_errors(&state.errors));
            Err(CliError::Invalid(
                state
                    .errors
                    .keys()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ))
        }
        SubmitOutcome::Busy => Err(CliError::Failed("form is not ready".to_owned())),
        SubmitOutcome::Failed(error) => Err(CliError::Failed(format!("save failed: {error}"))),
    }
}
