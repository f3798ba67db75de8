//! Scene catalog: the rebuilt-on-refresh snapshot of project scenes

use crate::types::SceneRecord;
use stagehand_core::Result;
use stagehand_host::{AssetIndex, BuildList};
use std::time::{Duration, Instant};

/// Default minimum interval between full rescans
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Catalog of the scenes in a project and their build-list membership.
///
/// The catalog is a snapshot: `refresh` rebuilds it wholesale from the
/// host's asset index, and every query is a read over the current
/// snapshot. High-frequency refresh triggers go through
/// `refresh_if_stale`, which rate-limits the rescan.
#[derive(Debug)]
pub struct SceneCatalog {
    scenes: Vec<SceneRecord>,
    min_refresh_interval: Duration,
    last_refresh: Option<Instant>,
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCatalog {
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            min_refresh_interval: DEFAULT_REFRESH_INTERVAL,
            last_refresh: None,
        }
    }

    pub fn with_min_refresh_interval(interval: Duration) -> Self {
        Self {
            min_refresh_interval: interval,
            ..Self::new()
        }
    }

    /// Rebuild the scene list from the asset index.
    ///
    /// Records are sorted by name (path as tiebreaker) and membership is
    /// recomputed from the ordered build entries. An empty project is a
    /// valid, empty catalog.
    pub fn refresh(&mut self, index: &dyn AssetIndex, build: &dyn BuildList) -> Result<()> {
        let entries = build.entries()?;

        self.scenes = index
            .find_scenes()?
            .iter()
            .map(|path| {
                let mut record = SceneRecord::new(path);
                record.update_membership(&entries);
                record
            })
            .collect();

        self.scenes
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        self.last_refresh = Some(Instant::now());
        Ok(())
    }

    /// Refresh only if the minimum interval has elapsed since the last
    /// rescan. Returns whether a rescan ran. The first call always scans.
    pub fn refresh_if_stale(
        &mut self,
        index: &dyn AssetIndex,
        build: &dyn BuildList,
    ) -> Result<bool> {
        let stale = match self.last_refresh {
            Some(at) => at.elapsed() >= self.min_refresh_interval,
            None => true,
        };

        if stale {
            self.refresh(index, build)?;
        }
        Ok(stale)
    }

    /// Recompute build membership in place, without rescanning assets
    pub fn rebuild_membership(&mut self, build: &dyn BuildList) -> Result<()> {
        let entries = build.entries()?;
        for record in &mut self.scenes {
            record.update_membership(&entries);
        }
        Ok(())
    }

    /// All scenes, ordered by name
    pub fn all_scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }

    /// Build-list scenes, ordered by build index
    pub fn build_scenes(&self) -> Vec<&SceneRecord> {
        let mut scenes: Vec<&SceneRecord> =
            self.scenes.iter().filter(|s| s.in_build).collect();
        scenes.sort_by_key(|s| s.build_index);
        scenes
    }

    /// Look a scene up by its path key
    pub fn get(&self, path: &str) -> Option<&SceneRecord> {
        self.scenes.iter().find(|s| s.path == path)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
