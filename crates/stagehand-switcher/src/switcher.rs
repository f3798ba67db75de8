//! The scene switcher: catalog + lists + host, behind one surface

use crate::settings::SwitcherSettings;
use stagehand_catalog::{
    load_favorites, load_recents, save_favorites, save_recents, FavoritesSet, RecentsList,
    SceneCatalog, SceneRecord,
};
use stagehand_core::{scene_name, Result};
use stagehand_host::{
    AssetIndex, BuildEntry, BuildList, DirtyPrompt, HostEvent, OpenMode, PrefStore, SaveChoice,
    SceneHost,
};

/// Orchestrates scene switching against an abstract host editor.
///
/// All operations run synchronously on the host's context. Destructive
/// switches away from a dirty scene always pass through the three-way
/// prompt unless `auto_save_on_switch` is enabled.
pub struct SceneSwitcher {
    settings: SwitcherSettings,
    catalog: SceneCatalog,
    favorites: FavoritesSet,
    recents: RecentsList,
    assets: Box<dyn AssetIndex>,
    build: Box<dyn BuildList>,
    host: Box<dyn SceneHost>,
    prompt: Box<dyn DirtyPrompt>,
    prefs: Box<dyn PrefStore>,
}

impl SceneSwitcher {
    pub fn new(
        settings: SwitcherSettings,
        assets: Box<dyn AssetIndex>,
        build: Box<dyn BuildList>,
        host: Box<dyn SceneHost>,
        prompt: Box<dyn DirtyPrompt>,
        prefs: Box<dyn PrefStore>,
    ) -> Self {
        Self {
            catalog: SceneCatalog::with_min_refresh_interval(settings.min_refresh_interval()),
            favorites: FavoritesSet::new(),
            recents: RecentsList::with_max(settings.max_recent_scenes),
            settings,
            assets,
            build,
            host,
            prompt,
            prefs,
        }
    }

    /// Initial refresh plus favorites/recents load from the pref store
    pub fn startup(&mut self) -> Result<()> {
        self.favorites = load_favorites(&*self.prefs, &*self.assets);
        self.recents = load_recents(&*self.prefs, &*self.assets, self.settings.max_recent_scenes);
        self.catalog.refresh(&*self.assets, &*self.build)
    }

    /// Switch to a scene, replacing the current one.
    ///
    /// Returns whether the switch happened; `false` means the user
    /// canceled at the dirty prompt. A completed switch is recorded in the
    /// recents list and persisted.
    pub fn open_scene(&mut self, path: &str) -> Result<bool> {
        if !self.confirm_switch()? {
            return Ok(false);
        }

        self.host.open(path, OpenMode::Replace)?;
        self.record_visit(path)?;
        Ok(true)
    }

    /// Open a scene alongside the current one.
    ///
    /// Nothing is unloaded, so there is no dirty prompt and no recents
    /// entry.
    pub fn open_additive(&mut self, path: &str) -> Result<()> {
        self.host.open(path, OpenMode::Additive)
    }

    /// Quick-load the scene at a build index.
    ///
    /// An out-of-range index or a disabled entry aborts with a warning
    /// rather than an error.
    pub fn open_build_index(&mut self, index: usize) -> Result<bool> {
        let entries = self.build.entries()?;

        let Some(entry) = entries.get(index) else {
            log::warn!("No scene at build index {index}");
            return Ok(false);
        };
        if !entry.enabled {
            log::warn!("Scene at build index {index} is disabled in the build list");
            return Ok(false);
        }

        let path = entry.path.clone();
        self.open_scene(&path)
    }

    /// Re-open the active scene from disk.
    pub fn reload_current(&mut self) -> Result<bool> {
        let Some(path) = self.host.active_path().filter(|p| !p.is_empty()) else {
            log::warn!("Cannot reload an untitled scene");
            return Ok(false);
        };

        if !self.confirm_switch()? {
            return Ok(false);
        }
        self.host.open(&path, OpenMode::Replace)?;
        Ok(true)
    }

    /// Save all open scenes in the host
    pub fn save_all(&mut self) -> Result<()> {
        self.host.save_open_scenes()
    }

    /// Flip a scene's favorite state and persist. Returns the new state.
    pub fn toggle_favorite(&mut self, path: &str) -> Result<bool> {
        let now_favorite = self.favorites.toggle(path);
        save_favorites(&mut *self.prefs, &self.favorites)?;
        Ok(now_favorite)
    }

    /// Append a scene to the build list (enabled). No-op if present.
    pub fn add_to_build(&mut self, path: &str) -> Result<()> {
        let mut entries = self.build.entries()?;
        if entries.iter().any(|e| e.path == path) {
            return Ok(());
        }

        entries.push(BuildEntry::new(path));
        self.build.set_entries(entries)?;
        self.catalog.rebuild_membership(&*self.build)
    }

    /// Remove a scene from the build list. No-op if absent.
    pub fn remove_from_build(&mut self, path: &str) -> Result<()> {
        let mut entries = self.build.entries()?;
        let before = entries.len();
        entries.retain(|e| e.path != path);

        if entries.len() != before {
            self.build.set_entries(entries)?;
            self.catalog.rebuild_membership(&*self.build)?;
        }
        Ok(())
    }

    /// React to a host lifecycle event
    pub fn handle_event(&mut self, event: &HostEvent) -> Result<()> {
        match event {
            HostEvent::Tick => {
                self.catalog.refresh_if_stale(&*self.assets, &*self.build)?;
            }
            HostEvent::FocusGained => {
                self.catalog.refresh(&*self.assets, &*self.build)?;
            }
            HostEvent::BuildListChanged => {
                self.catalog.rebuild_membership(&*self.build)?;
            }
            HostEvent::SceneOpened { path } => {
                self.record_visit(path)?;
            }
        }
        Ok(())
    }

    /// Force a full rescan, ignoring the rate limit
    pub fn refresh(&mut self) -> Result<()> {
        self.catalog.refresh(&*self.assets, &*self.build)
    }

    /// Current build entries, in order, with their enabled flags
    pub fn build_entries(&self) -> Result<Vec<BuildEntry>> {
        self.build.entries()
    }

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn recents(&self) -> &RecentsList {
        &self.recents
    }

    pub fn settings(&self) -> &SwitcherSettings {
        &self.settings
    }

    pub fn is_favorite(&self, path: &str) -> bool {
        self.favorites.contains(path)
    }

    /// Active scene as a catalog-style label, for status displays
    pub fn active_scene(&self) -> Option<&SceneRecord> {
        self.host
            .active_path()
            .and_then(|path| self.catalog.get(&path))
    }

    /// Gate for destructive switches: prompt (or auto-save) when dirty.
    /// Returns whether the switch may proceed.
    fn confirm_switch(&mut self) -> Result<bool> {
        if !self.host.is_dirty() {
            return Ok(true);
        }

        if self.settings.auto_save_on_switch {
            self.host.save_open_scenes()?;
            return Ok(true);
        }

        let name = self
            .host
            .active_path()
            .map(|p| scene_name(&p))
            .unwrap_or_else(|| "Untitled".to_string());

        match self.prompt.ask(&name) {
            SaveChoice::Save => {
                self.host.save_open_scenes()?;
                Ok(true)
            }
            SaveChoice::DontSave => Ok(true),
            SaveChoice::Cancel => Ok(false),
        }
    }

    fn record_visit(&mut self, path: &str) -> Result<()> {
        self.recents.push(path);
        save_recents(&mut *self.prefs, &self.recents)
    }
}
