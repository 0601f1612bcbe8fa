//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::form::{DowntimeForm, EntryForm, FormId, PackingForm, ProductionForm, Zone};
use crate::splash::SplashState;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The three entry tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Production,
    Packing,
    Downtime,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Production, Tab::Packing, Tab::Downtime];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Production => "Production",
            Tab::Packing => "Packing",
            Tab::Downtime => "Downtimes",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Production => 0,
            Tab::Packing => 1,
            Tab::Downtime => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The form mounted under the active tab
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Production(ProductionForm),
    Packing(PackingForm),
    Downtime(DowntimeForm),
}

impl ActiveForm {
    /// Build a fresh, empty form for `tab`
    pub fn new(tab: Tab, id: FormId) -> Self {
        match tab {
            Tab::Production => ActiveForm::Production(ProductionForm::new(id)),
            Tab::Packing => ActiveForm::Packing(PackingForm::new(id)),
            Tab::Downtime => ActiveForm::Downtime(DowntimeForm::new(id)),
        }
    }

    pub fn entry(&self) -> &dyn EntryForm {
        match self {
            ActiveForm::Production(f) => f,
            ActiveForm::Packing(f) => f,
            ActiveForm::Downtime(f) => f,
        }
    }

    pub fn entry_mut(&mut self) -> &mut dyn EntryForm {
        match self {
            ActiveForm::Production(f) => f,
            ActiveForm::Packing(f) => f,
            ActiveForm::Downtime(f) => f,
        }
    }

    pub fn id(&self) -> FormId {
        self.entry().id()
    }

    pub fn as_production_mut(&mut self) -> Option<&mut ProductionForm> {
        match self {
            ActiveForm::Production(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_downtime_mut(&mut self) -> Option<&mut DowntimeForm> {
        match self {
            ActiveForm::Downtime(f) => Some(f),
            _ => None,
        }
    }
}

/// Complete application state (the Model)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub active_tab: Tab,

    /// Form for `active_tab`; rebuilt on every tab switch
    pub form: ActiveForm,

    pub splash: SplashState,

    /// Resolved backend base URL, shown in the footer
    pub backend_url: String,

    /// Timezone for date-time fields
    pub zone: Zone,

    next_form_id: u64,
}

impl AppState {
    pub fn new(settings: &Settings, backend_url: impl Into<String>) -> Self {
        let splash = if settings.ui.show_splash {
            SplashState::visible()
        } else {
            SplashState::Dismissed
        };

        Self {
            phase: AppPhase::Running,
            active_tab: Tab::default(),
            form: ActiveForm::new(Tab::default(), FormId(1)),
            splash,
            backend_url: backend_url.into(),
            zone: Zone::Local,
            next_form_id: 2,
        }
    }

    /// Switch tabs. Selecting the current tab keeps its form; any other tab
    /// gets a fresh form and the outgoing form's state is discarded.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab {
            return false;
        }
        let id = FormId(self.next_form_id);
        self.next_form_id += 1;
        self.active_tab = tab;
        self.form = ActiveForm::new(tab, id);
        true
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
