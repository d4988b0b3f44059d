use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::controller::Controller;
use crate::io::storage::{FileStore, KeyValueStore};
use crate::model::{AppConfig, Draft, Screen, Task};
use crate::nav::MemoryHistory;

use super::field::TextField;
use super::input;
use super::render;
use super::theme::Theme;

/// The controller as the terminal front end drives it
pub type TuiController = Controller<Box<dyn KeyValueStore>, MemoryHistory>;

/// Interaction mode on the Home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box
    Search,
}

/// Focusable parts of the note editor, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteField {
    #[default]
    Title,
    Description,
    DueDate,
    Tags,
}

impl NoteField {
    pub fn next(self) -> Self {
        match self {
            NoteField::Title => NoteField::Description,
            NoteField::Description => NoteField::DueDate,
            NoteField::DueDate => NoteField::Tags,
            NoteField::Tags => NoteField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            NoteField::Title => NoteField::Tags,
            NoteField::Description => NoteField::Title,
            NoteField::DueDate => NoteField::Description,
            NoteField::Tags => NoteField::DueDate,
        }
    }
}

/// Editable copy of the draft shown by the note editor
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub title: TextField,
    pub description: TextField,
    pub due_date: TextField,
    /// Highlighted tag chip
    pub tag_id: Option<String>,
    pub focus: NoteField,
}

impl NoteForm {
    pub fn from_draft(draft: &Draft) -> Self {
        NoteForm {
            title: TextField::new(draft.title.clone()),
            description: TextField::new(draft.description.clone()),
            due_date: TextField::new(draft.due_date.clone().unwrap_or_default()),
            tag_id: draft.tag_id.clone(),
            focus: NoteField::Title,
        }
    }

    pub fn to_draft(&self) -> Draft {
        let due = self.due_date.value().trim();
        Draft {
            title: self.title.value().to_string(),
            description: self.description.value().to_string(),
            tag_id: self.tag_id.clone(),
            due_date: (!due.is_empty()).then(|| due.to_string()),
        }
    }

    /// The text field with focus, if focus is not on the tag chips
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            NoteField::Title => Some(&mut self.title),
            NoteField::Description => Some(&mut self.description),
            NoteField::DueDate => Some(&mut self.due_date),
            NoteField::Tags => None,
        }
    }

    /// Whether saving would be accepted as far as the title goes
    pub fn can_save(&self) -> bool {
        !self.title.value().trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagField {
    #[default]
    Label,
    Color,
}

/// New-tag form state
#[derive(Debug, Clone, Default)]
pub struct TagForm {
    pub label: TextField,
    /// Index into the color palette (the first color is preselected)
    pub color_index: usize,
    pub focus: TagField,
}

impl TagForm {
    pub fn can_save(&self) -> bool {
        !self.label.value().trim().is_empty()
    }
}

/// A destructive action waiting on a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete a task from the Home list
    DeleteTask { task_id: String },
    /// Delete the task open in the note editor
    DeleteNote,
    DeleteTag { tag_id: String },
    Logout,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub prompt: String,
    pub action: ConfirmAction,
}

/// Main application state
pub struct App {
    pub ctl: TuiController,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub should_quit: bool,
    /// Screen whose view state was last set up
    pub shown_screen: Screen,
    pub mode: Mode,
    pub login_input: TextField,
    /// Inline message under the email field
    pub login_error: Option<String>,
    pub search: TextField,
    pub home_cursor: usize,
    /// First visible row of the Home list
    pub home_scroll: usize,
    pub note: NoteForm,
    pub tag_form: TagForm,
    pub confirm: Option<ConfirmState>,
    /// Dismissable message overlay
    pub notice: Option<String>,
}

impl App {
    pub fn new(store: Box<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let delay = Duration::from_millis(config.ui.welcome_delay_ms);
        let ctl = Controller::load(store, MemoryHistory::new(), delay);
        let mut app = App {
            shown_screen: ctl.screen(),
            ctl,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            mode: Mode::Navigate,
            login_input: TextField::default(),
            login_error: None,
            search: TextField::default(),
            home_cursor: 0,
            home_scroll: 0,
            note: NoteForm::default(),
            tag_form: TagForm::default(),
            confirm: None,
            notice: None,
        };
        app.enter_screen(app.shown_screen);
        app
    }

    /// Apply pending history events, then reset view state if the screen
    /// changed
    pub fn settle(&mut self) {
        self.ctl.process_history();
        self.sync_screen();
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        self.ctl.tick(now);
        self.settle();
    }

    pub fn sync_screen(&mut self) {
        let screen = self.ctl.screen();
        if screen != self.shown_screen {
            debug!(from = self.shown_screen.name(), to = screen.name(), "screen changed");
            self.enter_screen(screen);
        }
    }

    fn enter_screen(&mut self, screen: Screen) {
        self.shown_screen = screen;
        self.confirm = None;
        match screen {
            Screen::Login => {
                self.login_input.clear();
                self.login_error = None;
                self.search.clear();
                self.mode = Mode::Navigate;
                self.home_cursor = 0;
                self.home_scroll = 0;
            }
            Screen::Welcome => {}
            Screen::Home => {
                self.mode = Mode::Navigate;
                self.clamp_home_cursor();
            }
            Screen::EditNote => self.note = NoteForm::from_draft(self.ctl.draft()),
            Screen::EditTag => self.tag_form = TagForm::default(),
        }
    }

    /// Home list for the current search box
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.ctl.visible_tasks(self.search.value())
    }

    /// Id of the task under the Home cursor
    pub fn cursor_task_id(&self) -> Option<String> {
        self.visible_tasks()
            .get(self.home_cursor)
            .map(|t| t.id.clone())
    }

    pub fn clamp_home_cursor(&mut self) {
        let count = self.visible_tasks().len();
        self.home_cursor = if count == 0 {
            0
        } else {
            self.home_cursor.min(count - 1)
        };
    }

    pub fn ask(&mut self, prompt: impl Into<String>, action: ConfirmAction) {
        self.confirm = Some(ConfirmState {
            prompt: prompt.into(),
            action,
        });
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }
}

/// Run the TUI application
pub fn run(data_dir: &Path, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(data_dir)?;
    info!(data_dir = %data_dir.display(), "starting");
    let mut app = App::new(Box::new(store), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so the welcome timer fires close to its deadline
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
