use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{backend::CrosstermBackend, Frame, Terminal, widgets::{Block, Borders, List, ListItem, Paragraph, ListState}, layout::{Layout, Constraint, Direction, Rect}, style::{Style, Modifier, Color}};

use grocy::{
    application::{grocery_service::{GroceryService, GroceryServiceImpl}, navigator::{Navigator, View}},
    config::{Config, Seed},
    domain::{collection::Collection, grocery::{GroceryList, ListId}},
    infrastructure::{clock::SystemClock, ids::UuidV4Ids, sample_data::sample_collection},
};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;
    let mut ids = UuidV4Ids;
    let clock = SystemClock;
    let collection = match config.seed {
        Seed::Sample => sample_collection(&mut ids, &clock),
        Seed::Empty => Collection::new(),
    };
    let nav = Navigator::new(GroceryServiceImpl::with_collection(collection, ids, clock));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(nav, config.recent_limit));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode { Browse, Search, Items, Title, NewItem }

struct App<S: GroceryService> {
    nav: Navigator<S>,
    recent_limit: usize,
    selected: usize,
    list_state: ListState,
    mode: Mode,
    draft: String,
    last_tick: Instant,
}

impl<S: GroceryService> App<S> {
    fn new(nav: Navigator<S>, recent_limit: usize) -> Self {
        Self { nav, recent_limit, selected: 0, list_state: ListState::default(), mode: Mode::Browse, draft: String::new(), last_tick: Instant::now() }
    }

    /// Lists shown on the home screen: search hits while a query is active, recent lists otherwise.
    fn home_entries(&self) -> Vec<&GroceryList> {
        let results = self.nav.search_results();
        if results.is_active() { results.matches().to_vec() } else { self.nav.recent_lists(self.recent_limit) }
    }

    fn row_count(&self) -> usize {
        match self.nav.current_list() {
            Some(list) => list.items.len(),
            None => self.home_entries().len(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.row_count();
        if len == 0 { self.selected = 0; self.list_state.select(None); }
        else { if self.selected >= len { self.selected = len - 1; } self.list_state.select(Some(self.selected)); }
    }

    fn open(&mut self, id: Option<ListId>) {
        let opened = match id { Some(id) => self.nav.select_list(id), None => self.nav.create_list().is_some() };
        if !opened { return; }
        self.selected = 0;
        self.draft.clear();
        // a list without a title starts in title editing
        match self.nav.current_list() {
            Some(list) if list.title.is_empty() => self.mode = Mode::Title,
            _ => self.mode = Mode::Items,
        }
    }

    fn finish_title(&mut self) {
        self.nav.save_title(&self.draft);
        self.draft.clear();
        self.mode = Mode::Items;
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Browse => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Up => { if self.selected > 0 { self.selected -= 1; } }
                KeyCode::Down => { if self.selected + 1 < self.row_count() { self.selected += 1; } }
                KeyCode::Enter => { let id = self.home_entries().get(self.selected).map(|l| l.id); if id.is_some() { self.open(id); } }
                KeyCode::Char('n') => self.open(None),
                KeyCode::Char('/') => { self.mode = Mode::Search; self.selected = 0; }
                _ => {}
            },
            Mode::Search => match code {
                KeyCode::Esc => { self.nav.search_changed(""); self.mode = Mode::Browse; self.selected = 0; }
                KeyCode::Enter => { let id = self.home_entries().get(self.selected).map(|l| l.id); if id.is_some() { self.open(id); } }
                KeyCode::Up => { if self.selected > 0 { self.selected -= 1; } }
                KeyCode::Down => { if self.selected + 1 < self.row_count() { self.selected += 1; } }
                KeyCode::Backspace => { let mut q = self.nav.search_query().to_string(); q.pop(); self.nav.search_changed(&q); self.selected = 0; }
                KeyCode::Char(c) => { let q = format!("{}{}", self.nav.search_query(), c); self.nav.search_changed(&q); self.selected = 0; }
                _ => {}
            },
            Mode::Items => {
                let current = self.nav.current_list().and_then(|l| l.items.get(self.selected)).map(|i| i.id);
                match code {
                    KeyCode::Esc => { self.nav.back(); self.mode = Mode::Browse; self.selected = 0; }
                    KeyCode::Up => { if self.selected > 0 { self.selected -= 1; } }
                    KeyCode::Down => { if self.selected + 1 < self.row_count() { self.selected += 1; } }
                    KeyCode::Enter | KeyCode::Char(' ') => { if let Some(id) = current { self.nav.toggle_item(id); } }
                    KeyCode::Char('d') => { if let Some(id) = current { self.nav.delete_item(id); if self.selected > 0 { self.selected -= 1; } } }
                    KeyCode::Char('a') => { self.mode = Mode::NewItem; self.draft.clear(); }
                    KeyCode::Char('t') => {
                        self.draft = self.nav.current_list().map(|l| l.title.clone()).unwrap_or_default();
                        self.mode = Mode::Title;
                    }
                    _ => {}
                }
            }
            Mode::Title => match code {
                // leaving the field saves, same as confirming
                KeyCode::Enter | KeyCode::Esc => self.finish_title(),
                KeyCode::Backspace => { self.draft.pop(); }
                KeyCode::Char(c) => self.draft.push(c),
                _ => {}
            },
            Mode::NewItem => match code {
                KeyCode::Esc => { self.draft.clear(); self.mode = Mode::Items; }
                KeyCode::Enter => {
                    // keep the field open for the next item, like a shopping checklist
                    if self.nav.add_item(&self.draft) { self.draft.clear(); self.selected = self.row_count().saturating_sub(1); }
                }
                KeyCode::Backspace => { self.draft.pop(); }
                KeyCode::Char(c) => self.draft.push(c),
                _ => {}
            },
        }
        self.clamp_selection();
        false
    }
}

fn run_app<S: GroceryService>(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App<S>) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    app.clamp_selection();

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        let timeout = tick_rate.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only act on key presses; ignore repeats and releases to prevent duplicate input
                if key.kind != KeyEventKind::Press { continue; }
                if app.handle_key(key.code) { break; }
            }
        }
        if app.last_tick.elapsed() >= tick_rate {
            app.last_tick = Instant::now();
        }
    }
    Ok(())
}

fn draw<S: GroceryService>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(f.size());

    let (title, help) = match app.nav.view() {
        View::Home => ("Grocy".to_string(), "Enter: open, n: new list, /: search, q: quit"),
        View::Editing(list) => (list.display_title().to_string(), "Space: toggle, a: add, d: delete, t: rename, Esc: back"),
    };
    let header = Paragraph::new(help).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(header, chunks[0]);

    if matches!(app.nav.view(), View::Editing(_)) { draw_editor(f, app, chunks[1]); } else { draw_home(f, app, chunks[1]); }

    let footer_text = match app.mode {
        Mode::Browse => format!("{} lists", app.nav.service().collection().len()),
        Mode::Search => format!("Search: {}_  |  {}", app.nav.search_query(), app.nav.search_results().headline().unwrap_or_default()),
        Mode::Items => app.nav.current_list().map(|l| l.preview().summary()).unwrap_or_default(),
        Mode::Title => format!("Title: {}_  |  (Enter or Esc to save)", app.draft),
        Mode::NewItem => format!("Add item: {}_  |  (Enter to add, Esc to close)", app.draft),
    };
    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL).title(match app.mode { Mode::Browse | Mode::Items => "info", Mode::Search => "search", Mode::Title => "title", Mode::NewItem => "new item" }));
    f.render_widget(footer, chunks[2]);
}

fn draw_home<S: GroceryService>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let entries = app.home_entries();
    let searching = app.nav.search_results().is_active();
    let rows: Vec<ListItem> = entries.iter().map(|l| ListItem::new(format!("{}  ({})", l.display_title(), l.created_at.format("%Y-%m-%d")))).collect();
    let detail = match entries.get(app.selected) {
        Some(l) => {
            let preview = l.preview();
            let mut lines: Vec<String> = preview.leading.iter().map(|t| format!("- {t}")).collect();
            if preview.remaining > 0 { lines.push(format!("... and {} more items", preview.remaining)); }
            if lines.is_empty() { lines.push("No items yet".to_string()); }
            format!("{}\n\n{}", preview.summary(), lines.join("\n"))
        }
        None if searching => "No matching lists found\nTry a different search term".to_string(),
        None => "Start your first grocery list! Press n to create one.".to_string(),
    };
    let list_title = if searching { "search results" } else { "recent lists" };

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol(">> ");
    let details = Paragraph::new(detail).block(Block::default().borders(Borders::ALL).title("preview"));
    f.render_stateful_widget(list, middle[0], &mut app.list_state);
    f.render_widget(details, middle[1]);
}

fn draw_editor<S: GroceryService>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let rows: Vec<ListItem> = app.nav.current_list().map(|l| l.items.iter().map(|i| {
        let mark = if i.completed { "[x]" } else { "[ ]" };
        let style = if i.completed { Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM) } else { Style::default() };
        ListItem::new(format!("{mark} {}", i.text)).style(style)
    }).collect()).unwrap_or_default();
    let empty = rows.is_empty();
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(if empty { "Your grocery list is empty (a: add items)" } else { "items" }))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
