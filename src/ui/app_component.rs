//! Root component: routes keys, turns actions into board calls and renders
//! the single-page layout.

use crate::board::{parse_due_date, BoardError, FilterSelector, Task, TaskBoard, TaskId};
use crate::calendar::CalendarLinkBuilder;
use crate::config::Config;
use crate::constants::{INFO_CALENDAR_LINK, INFO_CALENDAR_OPENED, SUCCESS_TASK_ADDED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{DialogComponent, DraftFormComponent, FilterBar, Header, StatusBar, TaskListComponent};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

pub struct AppComponent {
    board: TaskBoard,
    calendar: CalendarLinkBuilder,
    open_in_browser: bool,
    icons: IconService,
    logger: Logger,
    focus: Focus,
    should_quit: bool,
    /// Row to select once the view has been rebuilt
    pending_selection: Option<TaskId>,

    // Components
    draft_form: DraftFormComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,
}

impl AppComponent {
    pub fn new(board: TaskBoard, config: &Config, logger: Logger) -> Self {
        let mut task_list = TaskListComponent::new();
        task_list.display_config = config.display.clone();

        let mut app = Self {
            board,
            calendar: CalendarLinkBuilder::new(config.calendar.base_url.clone()),
            open_in_browser: config.calendar.open_in_browser,
            icons: IconService::new(config.ui.icon_theme),
            logger,
            focus: Focus::TaskList,
            should_quit: false,
            pending_selection: None,
            draft_form: DraftFormComponent::new(),
            task_list,
            dialog: DialogComponent::new(),
        };
        app.sync_component_data();
        app
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Handle one terminal event to completion, including any storage writes
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.update(action);

        // Handle app-level actions
        self.handle_app_action(action).await;

        // Update component data after any changes
        self.sync_component_data();
        Ok(())
    }

    /// Route a key to whichever component owns input right now
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }

        match self.focus {
            Focus::DraftForm => self.draft_form.handle_key_events(key),
            Focus::TaskList if self.task_list.is_capturing_input() => self.task_list.handle_key_events(key),
            Focus::TaskList => {
                let task_list_action = self.task_list.handle_key_events(key);
                if matches!(task_list_action, Action::None) {
                    self.handle_global_key(key)
                } else {
                    task_list_action
                }
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('a') | KeyCode::Char('i') => Action::Focus(Focus::DraftForm),
            KeyCode::Char('f') => Action::CycleDoneFilter,
            KeyCode::Char('p') => Action::CyclePriorityFilter,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('I') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Apply an action to the board. Returns `Action::Quit` when the app
    /// should stop, `Action::None` otherwise.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Focus(focus) => {
                if focus == Focus::TaskList {
                    // Leaving the form dismisses its validation message
                    self.board.clear_error();
                }
                self.focus = focus;
                Action::None
            }
            Action::SetDraftText(text) => {
                self.board.set_draft_text(text);
                Action::None
            }
            Action::SetDraftPriority(priority) => {
                self.board.set_draft_priority(priority);
                Action::None
            }
            Action::SetDraftDueDate(due_date) => {
                self.board.set_draft_due_date(due_date);
                Action::None
            }
            Action::AddTask => {
                match self.board.add_task().await {
                    Ok(id) => {
                        self.logger.log(format!("{}: {}", SUCCESS_TASK_ADDED, id));
                        self.pending_selection = Some(id);
                    }
                    Err(e) => self.logger.log(format!("Add task rejected: {}", e)),
                }
                Action::None
            }
            Action::ToggleDone(id) => {
                match self.board.toggle_done(id).await {
                    Ok(done) => self
                        .logger
                        .log(format!("Task {} marked {}", id, if done { "done" } else { "undone" })),
                    Err(e) => self.report_board_error(e),
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.board.delete_task(id).await {
                    Ok(task) => self.logger.log(format!("{}: '{}'", SUCCESS_TASK_DELETED, task.text)),
                    Err(e) => self.report_board_error(e),
                }
                Action::None
            }
            Action::StartEditing(id) => {
                if let Err(e) = self.board.start_editing(id).await {
                    self.report_board_error(e);
                }
                Action::None
            }
            Action::CancelEditing(id) => {
                if let Err(e) = self.board.cancel_editing(id).await {
                    self.report_board_error(e);
                }
                Action::None
            }
            Action::SaveEdit {
                id,
                text,
                priority,
                due_date,
            } => {
                let result = match parse_due_date(&due_date) {
                    Ok(due_date) => self.board.save_edited_task(id, &text, priority, due_date).await,
                    Err(e) => Err(e.into()),
                };
                match result {
                    Ok(()) => self.logger.log(format!("{}: {}", SUCCESS_TASK_UPDATED, id)),
                    Err(e) => self.report_board_error(e),
                }
                Action::None
            }
            Action::AddToCalendar(id) => {
                self.add_to_calendar(id);
                Action::None
            }
            Action::CycleDoneFilter => {
                let next = self.board.filters().next_done();
                self.board.set_filter(FilterSelector::Done(next));
                self.logger
                    .log(format!("Status filter: {}", self.board.filters().done_label()));
                Action::None
            }
            Action::CyclePriorityFilter => {
                let next = self.board.filters().next_priority();
                self.board.set_filter(FilterSelector::Priority(next));
                self.logger
                    .log(format!("Priority filter: {}", self.board.filters().priority_label()));
                Action::None
            }
            Action::ToggleTheme => {
                let dark_mode = self.board.toggle_theme().await;
                self.logger
                    .log(format!("Theme: {}", if dark_mode { "dark" } else { "light" }));
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icon theme: {:?}", self.icons.theme()));
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn add_to_calendar(&mut self, id: TaskId) {
        let url = match self.board.task(id).map(|task| self.calendar.build(task)) {
            None => return self.report_board_error(BoardError::TaskNotFound(id)),
            Some(Err(e)) => return self.show_error(e.to_string()),
            Some(Ok(url)) => url,
        };

        if !self.open_in_browser {
            self.logger.log(format!("{}: {}", INFO_CALENDAR_LINK, url));
            self.show_dialog(DialogType::Info(format!("{}:\n{}", INFO_CALENDAR_LINK, url)));
            return;
        }

        match self.calendar.open(&url) {
            Ok(()) => self.logger.log(format!("{}: {}", INFO_CALENDAR_OPENED, url)),
            Err(e) => self.show_error(format!("{}\n\n{}", e, url)),
        }
    }

    fn report_board_error(&mut self, error: BoardError) {
        log::warn!("Board operation failed: {}", error);
        self.show_error(error.to_string());
    }

    fn show_error(&mut self, message: String) {
        self.logger.log(format!("Error: {}", message));
        self.show_dialog(DialogType::Error(message));
    }

    fn show_dialog(&mut self, dialog_type: DialogType) {
        self.dialog.update(Action::ShowDialog(dialog_type));
    }

    /// Push board state, icons and palette into the child components
    pub fn sync_component_data(&mut self) {
        let palette = Palette::for_mode(self.board.dark_mode());

        self.draft_form.update_draft(self.board.draft());
        self.draft_form.icons = self.icons.clone();
        self.draft_form.palette = palette;

        let visible: Vec<Task> = self.board.visible_tasks().into_iter().cloned().collect();
        self.task_list.update_tasks(visible, self.board.tasks());
        if let Some(id) = self.pending_selection.take() {
            self.task_list.select_task(id);
        }
        self.task_list.icons = self.icons.clone();
        self.task_list.palette = palette;

        self.dialog.icons = self.icons.clone();
        self.dialog.palette = palette;
        if matches!(self.dialog.dialog_type, Some(DialogType::Logs)) {
            self.dialog.update_logs(self.logger.get_logs());
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Prefer handle_event, which also applies the action
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.draft_form.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = Palette::for_mode(self.board.dark_mode());
        f.render_widget(Block::default().style(Style::default().bg(palette.background)), rect);

        let layout = LayoutManager::main_layout(rect, LayoutManager::header_height(self.board.error().is_some()));

        Header::render(
            f,
            layout.header,
            self.board.dark_mode(),
            self.board.error(),
            &self.icons,
            &palette,
        );
        self.draft_form.render(f, layout.draft_form);
        FilterBar::render(
            f,
            layout.filter_bar,
            self.board.filters(),
            self.task_list.tasks.len(),
            self.board.tasks().len(),
            &self.icons,
            &palette,
        );
        self.task_list.render(f, layout.task_list);
        StatusBar::render(
            f,
            layout.status_bar,
            self.focus,
            self.task_list.is_capturing_input(),
            &palette,
        );

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
