use crate::config::DisplayConfig;
use crate::constants::{ERROR_LOGIN_FAILED, HEADER_WELCOME_SIGNED_OUT, THEME_LABEL_DARK, THEME_LABEL_LIGHT};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::session::SessionHolder;
use crate::state::{AppState, Notice, Update};
use crate::tasks::{validate_new_task, TaskStoreClient};
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::components::{CompletedListComponent, DialogComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    completed_list: CompletedListComponent,
    dialog: DialogComponent,

    // Application state, replaced on every update
    state: AppState,

    // Services
    session: SessionHolder,
    task_store: TaskStoreClient,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(session: SessionHolder, task_store: TaskStoreClient, logger: Logger, display: &DisplayConfig) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(display.icon_theme);

        let mut task_list = TaskListComponent::new();
        task_list.icons = icons.clone();
        task_list.date_format = display.date_format.clone();

        let mut completed_list = CompletedListComponent::new();
        completed_list.icons = icons.clone();
        completed_list.date_format = display.date_format.clone();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            task_list,
            completed_list,
            dialog,
            state: AppState::default(),
            session,
            task_store,
            task_manager,
            background_action_rx,
            logger,
            icons,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a dialog is currently shown
    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Adopt the persisted session and theme, then fetch tasks if signed in
    pub async fn restore(&mut self) {
        let restored = self.session.restore_session().await;
        self.apply(Update::Restored(restored));
        self.spawn_fetch();
    }

    /// Sign in with an identity credential.
    ///
    /// On success the tasks for the new session are fetched; a bad credential
    /// leaves the current state and shows an error.
    pub async fn login(&mut self, credential: &str) {
        match self.session.complete_login(credential).await {
            Ok(session) => {
                self.apply(Update::SignedIn(session));
                self.spawn_fetch();
            }
            Err(e) => {
                self.apply(Update::Notify(Notice::Error(format!("{}: {}", ERROR_LOGIN_FAILED, e))));
            }
        }
    }

    /// Reduce an update into the state and refresh the components
    fn apply(&mut self, update: Update) {
        self.state = self.state.reduce(update);
        self.sync_component_data();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = Palette::for_mode(self.state.dark_mode);
        self.task_list.palette = palette;
        self.task_list.update_data(self.state.snapshot.active.clone());
        self.completed_list.palette = palette;
        self.completed_list.update_data(self.state.snapshot.completed.clone());
    }

    fn spawn_fetch(&mut self) {
        let Some(owner) = self.state.owner().map(str::to_string) else {
            return;
        };
        let task_store = self.task_store.clone();
        self.task_manager.spawn_operation("Loading tasks".to_string(), async move {
            let snapshot = task_store.fetch_tasks(&owner).await?;
            Some(Update::SnapshotLoaded { owner, snapshot })
        });
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('l') if !self.state.is_signed_in() => Action::ShowDialog(DialogType::Login),
            KeyCode::Char('L') if self.state.is_signed_in() => Action::Logout,
            KeyCode::Char('r') if self.state.is_signed_in() => Action::Refresh,
            _ => Action::None,
        }
    }

    /// Perform app-level actions; everything touching the network is spawned
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::Apply(update) => {
                self.apply(update);
                Action::None
            }
            Action::Login(credential) => {
                self.login(&credential).await;
                Action::None
            }
            Action::Logout => {
                self.session.logout().await;
                self.apply(Update::SignedOut);
                Action::None
            }
            Action::ToggleTheme => {
                let dark_mode = self.session.toggle_theme(self.state.dark_mode).await;
                self.apply(Update::ThemeSet(dark_mode));
                Action::None
            }
            Action::Refresh => {
                self.spawn_fetch();
                Action::None
            }
            Action::AddTask { title, deadline } => {
                if let Err(rejection) = validate_new_task(&title, deadline, datetime::today()) {
                    self.logger.log(format!("AppComponent: Keeping rejected draft: {}", rejection));
                    self.dialog.restore_task_draft(&title, deadline, &rejection);
                    self.apply(Update::Notify(Notice::Error(rejection.to_string())));
                    return Action::None;
                }
                self.spawn_task_operation(format!("Adding '{}'", title.trim()), move |store, owner| async move {
                    store.add_task(&owner, &title, deadline).await
                });
                Action::None
            }
            Action::UpdateDeadline { task_id, deadline } => {
                self.spawn_task_operation("Updating due date".to_string(), move |store, owner| async move {
                    store.update_deadline(&owner, &task_id, deadline).await
                });
                Action::None
            }
            Action::DeleteTask(task_id) => {
                self.spawn_task_operation("Deleting task".to_string(), move |store, owner| async move {
                    store.delete_task(&owner, &task_id).await
                });
                Action::None
            }
            Action::MoveTask { task_id, direction } => {
                self.spawn_task_operation("Moving task".to_string(), move |store, owner| async move {
                    store.move_task(&owner, &task_id, direction).await
                });
                Action::None
            }
            Action::CompleteTask(task_id) => {
                self.spawn_task_operation("Completing task".to_string(), move |store, owner| async move {
                    store.complete_task(&owner, &task_id).await
                });
                Action::None
            }
            other => other,
        }
    }

    /// Spawn a task store call for the signed-in owner and reduce its outcome
    fn spawn_task_operation<F, Fut>(&mut self, description: String, operation: F)
    where
        F: FnOnce(TaskStoreClient, String) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = crate::tasks::Outcome> + Send + 'static,
    {
        let Some(owner) = self.state.owner().map(str::to_string) else {
            self.logger
                .error(format!("Ignoring '{}' while signed out", description));
            return;
        };
        self.logger.log(format!("AppComponent: {}", description));

        let task_store = self.task_store.clone();
        self.task_manager.spawn_operation(description, async move {
            let outcome = operation(task_store, owner.clone()).await;
            Update::from_outcome(&owner, outcome)
        });
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        for (task_id, description) in self.task_manager.cleanup_finished_tasks() {
            self.logger
                .log(format!("Background: Finished #{} {}", task_id, description));
        }

        actions
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.is_busy()
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Paste(text) => {
                self.dialog.handle_paste(&text);
                Action::None
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action).await;
        Ok(())
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C quits from anywhere, before any component reads it as 'c'
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }

        // An open notice swallows the next key
        if self.state.notice.is_some() {
            return Action::Apply(Update::DismissNotice);
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.state.is_signed_in() {
            let task_list_action = self.task_list.handle_key_events(key);
            if !matches!(task_list_action, Action::None) {
                return task_list_action;
            }
        }

        self.handle_global_key(key)
    }

    fn render_header(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        // The caption names the theme a press switches to
        let theme_label = if self.state.dark_mode {
            THEME_LABEL_LIGHT
        } else {
            THEME_LABEL_DARK
        };

        let greeting = match &self.state.session {
            Some(session) => format!("{} Welcome, {}!", self.icons.user(), session.display_name),
            None => HEADER_WELCOME_SIGNED_OUT.to_string(),
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                greeting,
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default()),
            Span::styled(format!("[t] {}", theme_label), Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(palette.base())
                .border_style(Style::default().fg(palette.accent)),
        );

        f.render_widget(header, area);
    }

    fn render_signed_out(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Sign in to see your tasks.",
                Style::default().fg(palette.foreground),
            )),
            Line::from(Span::styled(
                "Press 'l' and paste a Google ID token.",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));

        f.render_widget(body, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = Palette::for_mode(self.state.dark_mode);
        f.render_widget(Block::default().style(palette.base()), rect);

        let areas = LayoutManager::main_layout(rect);
        self.render_header(f, areas.header, &palette);

        if self.state.is_signed_in() {
            self.task_list.render(f, areas.active);
            self.completed_list.render(f, areas.completed);
        } else {
            let body = Rect {
                height: areas.active.height + areas.completed.height,
                ..areas.active
            };
            self.render_signed_out(f, body, &palette);
        }

        let busy = self.task_manager.oldest_running().map(|(description, _)| description);
        StatusBar::render(f, areas.status, self.state.is_signed_in(), busy, &palette);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }

        if let Some(notice) = &self.state.notice {
            system_dialogs::render_notice_dialog(f, rect, &self.icons, notice);
        }
    }
}
