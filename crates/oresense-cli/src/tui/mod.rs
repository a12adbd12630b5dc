use std::cell::Cell;
use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use oresense_core::dashboard::Dashboard;
use oresense_core::model::{Field, FieldKind};
use oresense_core::wizard::{Wizard, WizardOptions};
use oresense_core::Config;
use ratatui::prelude::*;

pub mod report_list;
pub mod step_form;

/// Report rows assumed visible before the first frame is drawn.
const DEFAULT_REPORT_ROWS: usize = 20;

/// Which view the TUI is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Wizard,
}

fn is_choice(field: Field) -> bool {
    matches!(field.kind(), FieldKind::Choice(_))
}

/// An open wizard plus the editing state around it.
#[derive(Debug)]
pub struct FormSession {
    pub wizard: Wizard,
    /// Index into the current step's fields.
    pub selected_field: usize,
    /// Uncommitted text for the selected free-form field.
    pub buffer: String,
    pub error: Option<String>,
}

impl FormSession {
    fn new(options: WizardOptions) -> Self {
        Self {
            wizard: Wizard::with_options(options),
            selected_field: 0,
            buffer: String::new(),
            error: None,
        }
    }

    pub fn step_fields(&self) -> Vec<Field> {
        self.wizard.step().fields().collect()
    }

    pub fn selected(&self) -> Option<Field> {
        self.step_fields().get(self.selected_field).copied()
    }

    /// Text to show for `field`: the edit buffer while it is being typed
    /// into, otherwise the stored value.
    pub fn display_value(&self, field: Field) -> &str {
        if Some(field) == self.selected() && !is_choice(field) {
            &self.buffer
        } else {
            self.wizard.field(field)
        }
    }

    fn load_buffer(&mut self) {
        self.buffer = self
            .selected()
            .map(|f| self.wizard.field(f).to_string())
            .unwrap_or_default();
    }

    /// Write the edit buffer into the record. False when the value is rejected.
    fn commit(&mut self) -> bool {
        let Some(field) = self.selected() else {
            return true;
        };
        if is_choice(field) || self.buffer == self.wizard.field(field) {
            return true;
        }
        match self.wizard.set_field(field, &self.buffer) {
            Ok(()) => {
                self.error = None;
                self.load_buffer();
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    fn move_selection(&mut self, forward: bool) {
        if !self.commit() {
            return;
        }
        let count = self.step_fields().len();
        if count == 0 {
            return;
        }
        self.selected_field = if forward {
            (self.selected_field + 1) % count
        } else {
            (self.selected_field + count - 1) % count
        };
        self.load_buffer();
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.selected() else {
            return;
        };
        let FieldKind::Choice(set) = field.kind() else {
            return;
        };
        let current = self.wizard.field(field);
        let next = if forward {
            set.next_value(current)
        } else {
            set.prev_value(current)
        };
        match self.wizard.set_field(field, next) {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn type_char(&mut self, c: char) {
        if self.selected().is_some_and(|f| !is_choice(f)) {
            self.buffer.push(c);
        }
    }

    fn backspace(&mut self) {
        match self.selected() {
            Some(field) if is_choice(field) => {
                if let Err(e) = self.wizard.set_field(field, "") {
                    self.error = Some(e.to_string());
                }
            }
            Some(_) => {
                self.buffer.pop();
            }
            None => {}
        }
    }

    fn change_step(&mut self, forward: bool) {
        if !self.commit() {
            return;
        }
        let before = self.wizard.step();
        if forward {
            self.wizard.advance();
        } else {
            self.wizard.retreat();
        }

        if self.wizard.step() != before {
            self.selected_field = 0;
            self.error = None;
            self.load_buffer();
        } else if forward && !self.wizard.is_final_step() {
            let missing: Vec<&str> = self
                .wizard
                .missing_fields()
                .into_iter()
                .map(Field::label)
                .collect();
            self.error = Some(format!("Fill in before continuing: {}", missing.join("; ")));
        }
    }
}

/// First visible row that keeps `selected` inside a window of `rows`.
pub(crate) fn scroll_offset(selected: usize, offset: usize, rows: usize) -> usize {
    let rows = rows.max(1);
    if selected < offset {
        selected
    } else if selected >= offset + rows {
        selected + 1 - rows
    } else {
        offset
    }
}

/// Application state for the assessment TUI.
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub dashboard: Dashboard,
    pub form: Option<FormSession>,
    pub selected_report: usize,
    pub report_list_offset: usize, // First visible report in the table
    pub report_rows: Cell<usize>,  // Table rows in the last drawn frame
    pub status: Option<String>,
    pub date_format: String,
    pub should_quit: bool,
    options: WizardOptions,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            view: View::Dashboard,
            dashboard: Dashboard::new(),
            form: None,
            selected_report: 0,
            report_list_offset: 0,
            report_rows: Cell::new(DEFAULT_REPORT_ROWS),
            status: None,
            date_format: config.date_format.clone(),
            should_quit: false,
            options: config.wizard_options(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key.code),
            View::Wizard => self.handle_wizard_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.open_wizard(),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected_report + 1 < self.dashboard.len() {
                    self.selected_report += 1;
                    self.keep_selection_visible();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected_report > 0 {
                    self.selected_report -= 1;
                    self.keep_selection_visible();
                }
            }
            KeyCode::Enter => self.view_selected_report(),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.view = View::Dashboard;
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.close_wizard(false),
            KeyCode::Char('n') if ctrl => form.change_step(true),
            KeyCode::Char('p') if ctrl => form.change_step(false),
            KeyCode::PageDown => form.change_step(true),
            KeyCode::PageUp => form.change_step(false),
            KeyCode::Enter => {
                if !form.wizard.is_final_step() {
                    form.change_step(true);
                } else if form.commit() {
                    self.close_wizard(true);
                }
            }
            KeyCode::Down | KeyCode::Tab => form.move_selection(true),
            KeyCode::Up | KeyCode::BackTab => form.move_selection(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !ctrl => form.type_char(c),
            _ => {}
        }
    }

    fn keep_selection_visible(&mut self) {
        self.report_list_offset =
            scroll_offset(self.selected_report, self.report_list_offset, self.report_rows.get());
    }

    fn open_wizard(&mut self) {
        info!("new assessment started");
        self.form = Some(FormSession::new(self.options));
        self.status = None;
        self.view = View::Wizard;
    }

    fn close_wizard(&mut self, complete: bool) {
        if let Some(form) = self.form.take() {
            if complete {
                form.wizard.finish(&mut self.dashboard);
                self.selected_report = self.dashboard.len().saturating_sub(1);
                self.keep_selection_visible();
                self.status = self
                    .dashboard
                    .reports()
                    .last()
                    .map(|r| format!("Generated {}", r.name));
            } else {
                form.wizard.abandon(&mut self.dashboard);
                self.status = Some("Assessment cancelled".to_string());
            }
        }
        self.view = View::Dashboard;
    }

    fn view_selected_report(&mut self) {
        let Some(id) = self
            .dashboard
            .reports()
            .get(self.selected_report)
            .map(|r| r.id)
        else {
            return;
        };
        if let Some(report) = self.dashboard.view(id) {
            self.status = Some(format!("Viewing report: {}", report.name));
        }
    }
}

/// Run the assessment TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(config: &Config) -> Result<()> {
    let app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| match app.view {
            View::Dashboard => report_list::render(frame, &app),
            View::Wizard => step_form::render(frame, &app),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            info!("exiting with {}", app.dashboard.summary());
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oresense_core::model::Step;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn form(app: &App) -> &FormSession {
        app.form.as_ref().unwrap()
    }

    fn new_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_initial_state() {
        let app = new_app();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.dashboard.is_empty());
        assert!(app.form.is_none());
    }

    #[test]
    fn test_n_opens_wizard_on_step_one() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.view, View::Wizard);
        assert_eq!(form(&app).wizard.current_step(), 1);
        assert_eq!(form(&app).selected(), Some(Field::MetalType));
    }

    #[test]
    fn test_choice_cycles_with_arrows() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        assert_eq!(form(&app).wizard.field(Field::MetalType), "copper");
        app.handle_key(press(KeyCode::Left));
        assert_eq!(form(&app).wizard.field(Field::MetalType), "aluminum");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(form(&app).wizard.field(Field::MetalType), "");
    }

    #[test]
    fn test_typing_commits_on_move() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "Chilw");
        app.handle_key(press(KeyCode::Backspace));
        type_text(&mut app, "e");
        assert_eq!(form(&app).display_value(Field::MiningLocation), "Chile");
        assert_eq!(form(&app).wizard.field(Field::MiningLocation), "");

        app.handle_key(press(KeyCode::Down));
        assert_eq!(form(&app).wizard.field(Field::MiningLocation), "Chile");
        assert_eq!(form(&app).selected(), Some(Field::OreGrade));
    }

    #[test]
    fn test_rejected_value_keeps_selection() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "150");
        app.handle_key(press(KeyCode::Down));

        let session = form(&app);
        assert_eq!(session.selected(), Some(Field::OreGrade));
        assert!(session.error.is_some());
        assert_eq!(session.wizard.field(Field::OreGrade), "");

        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(form(&app).wizard.field(Field::OreGrade), "1");
        assert!(form(&app).error.is_none());
    }

    #[test]
    fn test_selection_wraps_within_step() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(form(&app).selected(), Some(Field::FunctionalUnit));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(form(&app).selected(), Some(Field::MetalType));
    }

    #[test]
    fn test_step_navigation_keys() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::PageUp));
        assert_eq!(form(&app).wizard.current_step(), 1);
        app.handle_key(ctrl('n'));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(form(&app).wizard.step(), Step::ProcessingEnergy);
        app.handle_key(ctrl('p'));
        assert_eq!(form(&app).wizard.step(), Step::MiningExtraction);
        assert_eq!(form(&app).selected_field, 0);
    }

    #[test]
    fn test_complete_adds_report() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        for _ in 0..6 {
            app.handle_key(press(KeyCode::PageDown));
        }
        type_text(&mut app, "12.45");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.view, View::Dashboard);
        assert!(app.form.is_none());
        assert_eq!(app.dashboard.len(), 1);
        let report = &app.dashboard.reports()[0];
        assert_eq!(report.name, "copper LCA Report");
        assert_eq!(report.co2_impact, "12.45 kg CO\u{2082}-eq");
        assert_eq!(app.status.as_deref(), Some("Generated copper LCA Report"));
    }

    #[test]
    fn test_esc_cancels_without_report() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.view, View::Dashboard);
        assert!(app.dashboard.is_empty());
        assert_eq!(app.status.as_deref(), Some("Assessment cancelled"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_incomplete_step_blocks_when_required() {
        let config = Config {
            require_complete_steps: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::PageDown));

        let session = form(&app);
        assert_eq!(session.wizard.current_step(), 1);
        assert!(session
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Metal Type")));
    }

    #[test]
    fn test_view_report_sets_status() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        for _ in 0..6 {
            app.handle_key(press(KeyCode::PageDown));
        }
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.status.as_deref(), Some("Viewing report: Metal LCA Report"));
    }

    #[test]
    fn test_dashboard_selection_bounds() {
        let mut app = new_app();
        for _ in 0..2 {
            app.handle_key(press(KeyCode::Char('n')));
            for _ in 0..6 {
                app.handle_key(press(KeyCode::PageDown));
            }
            app.handle_key(press(KeyCode::Enter));
        }
        assert_eq!(app.selected_report, 1);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_report, 1);
        app.handle_key(press(KeyCode::Char('k')));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_report, 0);
    }

    #[test]
    fn test_q_quits_from_dashboard_only() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_offset_window() {
        assert_eq!(scroll_offset(0, 0, 3), 0);
        assert_eq!(scroll_offset(2, 0, 3), 0);
        assert_eq!(scroll_offset(3, 0, 3), 1);
        assert_eq!(scroll_offset(1, 4, 3), 1);
        assert_eq!(scroll_offset(5, 0, 0), 5);
    }

    #[test]
    fn test_scroll_follows_drawn_table_height() {
        use ratatui::backend::TestBackend;

        let mut app = new_app();
        for _ in 0..5 {
            app.handle_key(press(KeyCode::Char('n')));
            for _ in 0..6 {
                app.handle_key(press(KeyCode::PageDown));
            }
            app.handle_key(press(KeyCode::Enter));
        }
        assert_eq!(app.selected_report, 4);

        // 12 rows leave a 5-row table area: two borders and a header.
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|frame| report_list::render(frame, &app))
            .unwrap();
        assert_eq!(app.report_rows.get(), 2);

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_report, 3);
        assert_eq!(app.report_list_offset, 2);

        for _ in 0..3 {
            app.handle_key(press(KeyCode::Up));
        }
        assert_eq!(app.report_list_offset, 0);

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_report, 2);
        assert_eq!(app.report_list_offset, 1);
    }
}
