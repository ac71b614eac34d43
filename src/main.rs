//! Aura - terminal dashboard for browsing and organizing links to AI tools
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async chat/auth requests

mod app;
mod catalog;
mod cli;
mod constants;
mod i18n;
mod layout;
mod messages;
mod models;
mod network;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use constants::APP_NAME;
use i18n::Strings;
use messages::ui_events::{key_to_ui_event, AddToolField, InputMode, LoginField, Popup};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::{ChatRole, ModuleKind};
use network::client::ServiceConfig;
use network::NetworkActor;
use theme::{Accent, Theme};
use ui::{centered_rect, display_width, render_tabs, role_prefix};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "aura.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let config = ServiceConfig {
        backend_url: cli.backend_url,
        auth_url: cli.auth_url,
        auth_key: cli.auth_key,
    };
    let network_actor = NetworkActor::new(config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(cli.locale, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let focus = current_state
                    .blocks
                    .get(current_state.focused)
                    .map(|b| b.kind)
                    .unwrap_or(ModuleKind::Search);
                if let Some(event) = key_to_ui_event(
                    key,
                    focus,
                    current_state.input_mode,
                    current_state.grabbed.is_some(),
                    current_state.popup,
                    current_state.session_email.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let theme = Theme::from_accent(state.accent);
    let strings = i18n::strings(state.locale);
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Module blocks
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, &theme, main_chunks[0]);
    draw_modules(f, state, strings, &theme, main_chunks[1]);
    draw_status_bar(f, state, strings, &theme, main_chunks[2]);

    // Popups
    match state.popup {
        Popup::Help => draw_help_popup(f, area),
        Popup::Settings => draw_settings_popup(f, state, strings, &theme, area),
        Popup::AddTool => draw_add_tool_popup(f, state, strings, &theme, area),
        Popup::Login => draw_login_popup(f, state, strings, &theme, area),
        Popup::Chat => draw_chat_popup(f, state, strings, &theme, area),
        Popup::None => {}
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(" ✦ ", theme.accent),
        Span::styled(APP_NAME, theme.title),
    ]);
    f.render_widget(Paragraph::new(brand), chunks[0]);

    let account = state.session_email.as_deref().unwrap_or("guest");
    let right = Line::from(vec![
        Span::styled(account, Style::default().fg(Color::Gray)),
        Span::styled(" · ", theme.dim),
        Span::styled(state.locale.as_str(), theme.accent),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

/// Render the module blocks in their current user-chosen order
fn draw_modules(f: &mut Frame, state: &RenderState, strings: &Strings, theme: &Theme, area: Rect) {
    let constraints: Vec<Constraint> = state
        .blocks
        .iter()
        .map(|b| match b.kind {
            ModuleKind::Search => Constraint::Length(3),
            ModuleKind::Featured => Constraint::Length(7),
            ModuleKind::Directory => Constraint::Min(8),
            ModuleKind::Stats => Constraint::Length(5),
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, block) in state.blocks.iter().enumerate() {
        let focused = i == state.focused;
        let grabbed = state.grabbed.as_deref() == Some(block.id.as_str());
        match block.kind {
            ModuleKind::Search => {
                draw_search_block(f, state, strings, theme, chunks[i], focused, grabbed)
            }
            ModuleKind::Featured => {
                draw_featured_block(f, state, strings, theme, chunks[i], focused, grabbed)
            }
            ModuleKind::Directory => {
                draw_directory_block(f, state, strings, theme, chunks[i], focused, grabbed)
            }
            ModuleKind::Stats => {
                draw_stats_block(f, state, strings, theme, chunks[i], focused, grabbed)
            }
        }
    }
}

fn module_border(theme: &Theme, focused: bool, grabbed: bool, editing: bool) -> Style {
    if grabbed {
        theme.border_grabbed
    } else if editing {
        theme.border_edit
    } else if focused {
        theme.border_focus
    } else {
        theme.border
    }
}

fn module_title(state: &RenderState, index: usize, grabbed: bool) -> String {
    let title = state.blocks[index].title.get(state.locale);
    if grabbed {
        format!(" ⣿ {} ", title)
    } else {
        format!(" {} ", title)
    }
}

fn draw_search_block(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
    focused: bool,
    grabbed: bool,
) {
    let editing = focused && state.input_mode == InputMode::Editing;
    let index = state
        .blocks
        .iter()
        .position(|b| b.kind == ModuleKind::Search)
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(module_border(theme, focused, grabbed, editing))
        .title(module_title(state, index, grabbed));

    let content = if state.query.is_empty() && !editing {
        Line::from(Span::styled(strings.search_placeholder, theme.dim))
    } else {
        Line::from(Span::raw(state.query.as_str()))
    };

    f.render_widget(Paragraph::new(content).block(block), area);

    // Cursor, placed by display width so wide characters line up
    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let col = display_width(&state.query[..state.query_cursor]);
        let cursor_x = (area.x + col + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_featured_block(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
    focused: bool,
    grabbed: bool,
) {
    let index = state
        .blocks
        .iter()
        .position(|b| b.kind == ModuleKind::Featured)
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(module_border(theme, focused, grabbed, false))
        .title(module_title(state, index, grabbed));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let hero = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", strings.new_release), theme.accent),
            Span::styled(strings.next_gen_title, Style::default().bold()),
        ]),
        Line::from(Span::styled(
            strings.next_gen_desc,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("https://openai.com/sora", theme.dim)),
    ];
    f.render_widget(Paragraph::new(hero).wrap(Wrap { trim: true }), cards[0]);

    let compute = vec![
        Line::from(Span::styled(strings.compute_hub, Style::default().bold())),
        Line::from(Span::styled(
            strings.compute_desc,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "https://aws.amazon.com/machine-learning/",
            theme.dim,
        )),
    ];
    f.render_widget(Paragraph::new(compute).wrap(Wrap { trim: true }), cards[1]);

    let global = vec![
        Line::from(Span::styled(strings.global_api, Style::default().bold())),
        Line::from(Span::styled(
            strings.global_desc,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("https://cloud.google.com/vertex-ai", theme.dim)),
    ];
    f.render_widget(Paragraph::new(global).wrap(Wrap { trim: true }), cards[2]);
}

fn draw_directory_block(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
    focused: bool,
    grabbed: bool,
) {
    let index = state
        .blocks
        .iter()
        .position(|b| b.kind == ModuleKind::Directory)
        .unwrap_or(0);

    let title = format!(
        "{}({}/{}) ",
        module_title(state, index, grabbed),
        state.tools.len(),
        state.total_tools,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(module_border(theme, focused, grabbed, false))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    // Category tab strip; the sentinel gets its localized label
    let labels: Vec<&str> = state
        .categories
        .iter()
        .map(|c| if c == "All" { strings.all } else { c.as_str() })
        .collect();
    let selected = state
        .categories
        .iter()
        .position(|c| *c == state.category)
        .unwrap_or(0);
    f.render_widget(render_tabs(&labels, selected, theme), chunks[0]);

    if state.tools.is_empty() {
        let empty = Paragraph::new(Span::styled(strings.search_placeholder, theme.dim));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .tools
        .iter()
        .map(|tool| {
            let desc = tool.description.get(state.locale);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", tool.icon), theme.accent),
                Span::styled(tool.name.clone(), Style::default().bold()),
                Span::styled(format!("  {}", desc), Style::default().fg(Color::Gray)),
                Span::styled(format!("  {}", tool.url), theme.dim),
            ]))
        })
        .collect();

    let highlight = if focused { theme.selection } else { Style::default() };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("› ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_tool.min(state.tools.len() - 1)));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn draw_stats_block(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
    focused: bool,
    grabbed: bool,
) {
    let index = state
        .blocks
        .iter()
        .position(|b| b.kind == ModuleKind::Stats)
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(module_border(theme, focused, grabbed, false))
        .title(module_title(state, index, grabbed))
        .title_top(
            Line::from(Span::styled(format!("● {} ", strings.operational), theme.ok))
                .right_aligned(),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Static mock figures, matching the hosted dashboard
    let cells = [
        (strings.latency, "24 ms"),
        (strings.active_nodes, "1,204"),
        (strings.daily_requests, "8.4 M"),
        (strings.uptime, "99.99 %"),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (chunk, (label, value)) in columns.iter().zip(cells) {
        let cell = vec![
            Line::from(Span::styled(label, theme.dim)),
            Line::from(Span::styled(value, Style::default().bold())),
        ];
        f.render_widget(Paragraph::new(cell), *chunk);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, strings: &Strings, theme: &Theme, area: Rect) {
    if let Some(notice) = &state.notice {
        let bar = Paragraph::new(format!(" {} ", notice)).style(theme.accent);
        f.render_widget(bar, area);
        return;
    }

    let account = if state.session_email.is_some() {
        strings.logout
    } else {
        strings.login
    };
    let status = if state.grabbed.is_some() {
        String::from(" ↑/↓:move block | Enter/Esc:drop ")
    } else if state.input_mode == InputMode::Editing {
        String::from(" ESC:stop editing | arrows:move cursor ")
    } else {
        format!(
            " Tab:block | g:move | /:search | ←/→:category | a:add | s:theme | c:chat | u:{} | ?:help | q:quit ",
            account
        )
    };

    let bar = Paragraph::new(status).style(theme.dim);
    f.render_widget(bar, area);
}

// ============================================================================
// Popups
// ============================================================================

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 AURA - Keyboard Shortcuts

 DASHBOARD
   Tab / Shift+Tab    Move block focus
   ↑ / ↓              Navigate (tools inside the directory)
   ← / →              Cycle category filter
   /                  Edit search query
   g                  Grab the focused block, ↑/↓ to move, Enter to drop
   l                  Toggle language (ZH/EN)

 ACTIONS
   a                  Add a tool
   s                  Interface settings
   c                  Chat with the assistant
   u                  Log in / log out

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_settings_popup(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
) {
    let popup_area = centered_rect(50, 50, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(strings.accent_color, theme.dim)),
    ];
    for (i, accent) in Accent::ALL.iter().enumerate() {
        let marker = if *accent == state.accent { "●" } else { "○" };
        lines.push(Line::from(vec![
            Span::raw(format!("   {}  ", i + 1)),
            Span::styled(
                format!("{} {}", marker, accent.name()),
                Style::default().fg(accent.color()),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(strings.language, theme.dim)));
    lines.push(Line::from(vec![
        Span::raw("   l  "),
        Span::styled(state.locale.as_str(), theme.accent),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Esc: close ", theme.dim)));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", strings.interface))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn draw_add_tool_popup(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
) {
    let popup_area = centered_rect(60, 60, area);
    let form = &state.add_tool;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", strings.add_tool))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let fields: [(AddToolField, &str, String); 4] = [
        (AddToolField::Name, strings.name, form.name.clone()),
        (AddToolField::Url, strings.url, form.url.clone()),
        (
            AddToolField::Description,
            strings.description,
            form.description.clone(),
        ),
        (
            AddToolField::Category,
            strings.category,
            format!("◄ {} ►", form.category),
        ),
    ];

    for (chunk, (field, label, value)) in chunks.iter().zip(fields) {
        let is_focused = form.field == field;
        let border = if is_focused { theme.border_edit } else { theme.border };
        let widget = Paragraph::new(value.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", label)),
        );
        f.render_widget(widget, *chunk);

        if is_focused && field != AddToolField::Category {
            let max_x = chunk.x + chunk.width.saturating_sub(2);
            let cursor_x = (chunk.x + display_width(&value) + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, chunk.y + 1));
        }
    }

    let complete = !form.name.trim().is_empty()
        && !form.url.trim().is_empty()
        && !form.description.trim().is_empty();
    let hint = if complete {
        Span::styled(
            format!(" Enter: {} | Tab: next | Esc: cancel ", strings.add_tool),
            theme.dim,
        )
    } else {
        Span::styled(" Fill the required fields to submit ", theme.dim)
    };
    f.render_widget(Paragraph::new(Line::from(hint)), chunks[4]);
}

fn draw_login_popup(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
) {
    let popup_area = centered_rect(50, 40, area);
    let form = &state.login;

    let loading = if form.busy { " [...]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} / Sign Up{} ", strings.login, loading))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let masked = "*".repeat(form.password.chars().count());
    let fields: [(LoginField, &str, String); 2] = [
        (LoginField::Email, strings.email, form.email.clone()),
        (LoginField::Password, strings.password, masked),
    ];

    for (chunk, (field, label, value)) in chunks.iter().zip(fields) {
        let is_focused = form.field == field;
        let border = if is_focused { theme.border_edit } else { theme.border };
        let widget = Paragraph::new(value.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", label)),
        );
        f.render_widget(widget, *chunk);

        if is_focused {
            let max_x = chunk.x + chunk.width.saturating_sub(2);
            let cursor_x = (chunk.x + display_width(&value) + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, chunk.y + 1));
        }
    }

    let hint = format!(
        " Enter: {} | Ctrl+N: Sign Up | Tab: field | Esc: cancel ",
        strings.login
    );
    f.render_widget(
        Paragraph::new(Span::styled(hint, theme.dim)),
        chunks[2],
    );
}

fn draw_chat_popup(
    f: &mut Frame,
    state: &RenderState,
    strings: &Strings,
    theme: &Theme,
    area: Rect,
) {
    let popup_area = centered_rect(60, 70, area);

    f.render_widget(Clear, popup_area);
    let background = Block::default().style(Style::default().bg(Color::Black));
    f.render_widget(background, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(popup_area);

    // Transcript
    let mut lines: Vec<Line> = Vec::new();
    for entry in &state.chat_entries {
        let style = match entry.role {
            ChatRole::User => theme.user_msg,
            ChatRole::Assistant => theme.assistant_msg,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.timestamp.format("%H:%M")),
                theme.dim,
            ),
            Span::styled(
                format!("{}{}", role_prefix(entry.role), entry.content),
                style,
            ),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(strings.chat_empty, theme.dim)));
    }
    if state.chat_waiting {
        lines.push(Line::from(Span::styled("...", theme.dim)));
    }

    let transcript = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focus)
                .title(format!(" {} (↑/↓ scroll) ", strings.chat_title)),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.chat_scroll, 0));
    f.render_widget(transcript, chunks[0]);

    // Input
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_edit)
        .title(" Enter: send | Esc: close ");
    let content = if state.chat_input.is_empty() {
        Span::styled(strings.chat_placeholder, theme.dim)
    } else {
        Span::raw(state.chat_input.as_str())
    };
    f.render_widget(Paragraph::new(Line::from(content)).block(input_block), chunks[1]);

    let max_x = chunks[1].x + chunks[1].width.saturating_sub(2);
    let cursor_x = (chunks[1].x + display_width(&state.chat_input) + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));
}
