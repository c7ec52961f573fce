use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    components::{
        AppearancePanel, Component, ConfirmDialog, DebugOverlay, PreferencesPanel, SidebarNav,
        StatusBarView,
    },
    config::Config,
    mode::Mode,
    model::sidebar::Panel,
    persistence::{self, StoredPreferences},
    tui,
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub mode: Mode,
    pub panel: Panel,
    pub last_tick_key_events: Vec<KeyEvent>,
    latest: StoredPreferences,
}

fn show_action(panel: Panel) -> Action {
    match panel {
        Panel::Preferences => Action::ShowPreferences,
        Panel::Appearance => Action::ShowAppearance,
    }
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let stored = persistence::load().unwrap_or_else(|e| {
            log::warn!("Failed to load preferences, using defaults: {e:?}");
            StoredPreferences::default()
        });

        let sidebar = SidebarNav::new(stored.scheme);
        let preferences = PreferencesPanel::new(stored.autologout, stored.scheme);
        let appearance = AppearancePanel::new(stored.scheme);
        let status_bar = StatusBarView::new(stored.scheme);
        let debug_overlay = DebugOverlay::new(stored.autologout, stored.scheme);
        let confirm = ConfirmDialog::new(stored.scheme);

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            // The dialog comes last so it draws above everything else.
            components: vec![
                Box::new(sidebar),
                Box::new(preferences),
                Box::new(appearance),
                Box::new(status_bar),
                Box::new(debug_overlay),
                Box::new(confirm),
            ],
            should_quit: false,
            should_suspend: false,
            mode: Mode::Preferences,
            panel: Panel::Preferences,
            last_tick_key_events: Vec::new(),
            latest: stored,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = tui.size()?;
        let initial_area = Rect::new(0, 0, size.width, size.height);
        for component in self.components.iter_mut() {
            component.init(initial_area)?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        action_tx.send(Action::Key(key))?;

                        if let Some(keymap) = self.config.keybindings.get(&self.mode) {
                            if let Some(action) = keymap.get(&vec![key]) {
                                log::info!("Got action: {action:?}");
                                action_tx.send(action.clone())?;
                            } else {
                                // If the key was not handled as a single key action,
                                // then consider it for multi-key combinations.
                                self.last_tick_key_events.push(key);

                                if let Some(action) = keymap.get(&self.last_tick_key_events) {
                                    log::info!("Got action: {action:?}");
                                    action_tx.send(action.clone())?;
                                }
                            }
                        };
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Tick => {
                        self.last_tick_key_events.drain(..);
                    }
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(_, _) => {
                        // The terminal autoresizes on draw; a redraw is all
                        // that is needed here.
                        tui.draw(|f| {
                            for component in self.components.iter_mut() {
                                let r = component.draw(f, f.area());
                                if let Err(e) = r {
                                    let _ = action_tx
                                        .send(Action::Error(format!("Failed to draw: {e:?}")));
                                }
                            }
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            for component in self.components.iter_mut() {
                                let r = component.draw(f, f.area());
                                if let Err(e) = r {
                                    let _ = action_tx
                                        .send(Action::Error(format!("Failed to draw: {e:?}")));
                                }
                            }
                        })?;
                    }
                    Action::NextPanel => action_tx.send(show_action(self.panel.next()))?,
                    Action::PrevPanel => action_tx.send(show_action(self.panel.prev()))?,
                    Action::ShowPreferences => {
                        self.panel = Panel::Preferences;
                        self.mode = Mode::Preferences;
                    }
                    Action::ShowAppearance => {
                        self.panel = Panel::Appearance;
                        self.mode = Mode::Appearance;
                    }
                    Action::ConfirmReset => self.mode = Mode::Confirm,
                    Action::Confirm | Action::Cancel => {
                        self.mode = match self.panel {
                            Panel::Preferences => Mode::Preferences,
                            Panel::Appearance => Mode::Appearance,
                        };
                    }
                    Action::AutoLogoutChanged(preference) => {
                        self.latest.autologout = *preference;
                    }
                    Action::SchemeChanged(scheme) => {
                        self.latest.scheme = *scheme;
                    }
                    Action::SavePreferences => match persistence::save(&self.latest) {
                        Ok(()) => action_tx.send(Action::SystemMessage(format!(
                            "Preferences saved to {}",
                            persistence::preferences_path().display()
                        )))?,
                        Err(e) => {
                            log::error!("Failed to save preferences: {e:?}");
                            action_tx
                                .send(Action::ErrorMessage(format!("could not save: {e}")))?;
                        }
                    },
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?
                    };
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}
