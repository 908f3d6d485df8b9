//! Game session management.
//!
//! `Session` owns the game state, the save slots, the presenter and the
//! store. Every user event (a click, an import, a theme toggle) is one method
//! call; after each page the state is written back under the state key so a
//! reload can resume where the player left off.

use chrono::{Local, Utc};
use tracing::{debug, info, warn};
use troubadour_saves::{
    ExportFile, KeyValueStore, SaveEntry, SaveError, SaveSet, Snapshot, load_json, store_json,
};
use troubadour_story::{Presenter, RenderSink, region};
use troubadour_text::IdAllocator;

use crate::color::{COLOR_MODE_ATTRIBUTE, ColorMode};
use crate::config::TroubadourConfig;
use crate::error::{TroubadourError, TroubadourResult};
use crate::game::{Game, Page};
use crate::interface::{Action, Actions, render_interface, render_saves_table};
use crate::state::GameState;

/// How a launch left the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// No stored game was found; the start page has run.
    Fresh,
    /// A stored game exists. Call [`Session::resume`] or [`Session::restart`].
    Resumable,
}

/// A running game bound to a presentation layer and a store.
pub struct Session<G, S, K> {
    config: TroubadourConfig,
    initial: G,
    state: Option<GameState<G>>,
    saves: SaveSet,
    color_mode: ColorMode,
    out: Presenter<S>,
    store: K,
    actions: Actions,
}

impl<G, S, K> Session<G, S, K>
where
    G: Game,
    S: RenderSink,
    K: KeyValueStore,
{
    /// Create a session. Nothing is read or shown until [`launch`](Self::launch).
    pub fn new(initial: G, sink: S, store: K, config: TroubadourConfig) -> Self {
        let out = Presenter::with_allocator(sink, IdAllocator::starting_at(config.first_id));
        Self {
            config,
            initial,
            state: None,
            saves: SaveSet::new(),
            color_mode: ColorMode::default(),
            out,
            store,
            actions: Actions::default(),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &TroubadourConfig {
        &self.config
    }

    /// The state of the running game, if one is loaded.
    pub fn state(&self) -> Option<&GameState<G>> {
        self.state.as_ref()
    }

    /// The save slots.
    pub fn saves(&self) -> &SaveSet {
        &self.saves
    }

    /// The current color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Clickable elements and their actions.
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    /// The presenter.
    pub fn presenter(&self) -> &Presenter<S> {
        &self.out
    }

    /// The presentation layer.
    pub fn sink(&self) -> &S {
        self.out.sink()
    }

    /// The store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Load saves and preferences, then start a new game or report that one
    /// can be resumed.
    pub fn launch(&mut self) -> TroubadourResult<Launch> {
        self.saves = match load_json(&self.store, &self.config.saves_key) {
            Ok(Some(saves)) => saves,
            Ok(None) => SaveSet::new(),
            Err(err) => {
                warn!(error = %err, "stored saves unreadable, starting with none");
                SaveSet::new()
            }
        };
        self.persist_saves()?;

        self.color_mode = match load_json(&self.store, &self.config.color_mode_key) {
            Ok(Some(mode)) => mode,
            Ok(None) => ColorMode::default(),
            Err(err) => {
                warn!(error = %err, "stored color mode unreadable, using light");
                ColorMode::default()
            }
        };
        self.apply_color_mode();

        let resumable = match load_json::<GameState<G>, _>(&self.store, &self.config.state_key) {
            Ok(state) => state.is_some(),
            Err(err) => {
                warn!(error = %err, "stored game state unreadable, starting fresh");
                false
            }
        };

        info!(
            saves = self.saves.len(),
            color_mode = %self.color_mode,
            resumable,
            "session launched"
        );

        if resumable {
            return Ok(Launch::Resumable);
        }
        self.state = Some(GameState::new(self.initial.clone()));
        let start = self.config.start_method.clone();
        self.run_page(&start, None)?;
        Ok(Launch::Fresh)
    }

    /// Rebuild the story, panels and interface from the stored state.
    pub fn resume(&mut self) -> TroubadourResult<()> {
        let state: GameState<G> =
            load_json(&self.store, &self.config.state_key)?.ok_or(TroubadourError::NoState)?;
        self.resume_from(state)
    }

    fn resume_from(&mut self, state: GameState<G>) -> TroubadourResult<()> {
        state.story.replay(&mut self.out)?;
        state.panels.render(&mut self.out)?;
        render_interface(&state.interface, &mut self.out, &mut self.actions)?;
        info!(commands = state.story.len(), "session resumed");
        self.state = Some(state);
        Ok(())
    }

    /// Throw away the running game and start over from the initial one.
    pub fn restart(&mut self) -> TroubadourResult<()> {
        self.out.clear(region::STORY);
        self.state = Some(GameState::new(self.initial.clone()));
        let start = self.config.start_method.clone();
        self.run_page(&start, None)?;
        info!("session restarted");
        Ok(())
    }

    /// Run a page of the game directly.
    pub fn call(&mut self, method: &str, value: Option<&str>) -> TroubadourResult<()> {
        self.run_page(method, value)
    }

    /// Handle a click on a registered element.
    ///
    /// `value` is the current text of the associated field for text inputs.
    pub fn click(&mut self, element_id: &str, value: Option<&str>) -> TroubadourResult<()> {
        let action = self
            .actions
            .get(element_id)
            .cloned()
            .ok_or_else(|| TroubadourError::UnknownElement(element_id.to_string()))?;
        debug!(element_id, ?action, "click");

        match action {
            Action::Call { method } => self.run_page(&method, None),
            Action::Submit {
                method,
                input_id,
                default_value,
            } => {
                let value = value.filter(|v| !v.is_empty()).unwrap_or(default_value.as_str());
                debug!(input_id = %input_id, value, "text input submitted");
                self.run_page(&method, Some(value))
            }
            Action::LoadSave(id) => self.load_save(id),
            Action::DeleteSave(id) => self.delete_save(id).map(|_| ()),
        }
    }

    /// Save the stored game under `name` and return the new slot id.
    pub fn save(&mut self, name: &str) -> TroubadourResult<u32> {
        let snapshot: Snapshot =
            load_json(&self.store, &self.config.state_key)?.ok_or(TroubadourError::NoState)?;
        let id = self.saves.add(name, snapshot, Utc::now())?;
        self.persist_saves()?;
        info!(id, name, "game saved");
        Ok(id)
    }

    /// Delete a save slot.
    pub fn delete_save(&mut self, id: u32) -> TroubadourResult<Option<SaveEntry>> {
        let removed = self.saves.delete(id);
        self.persist_saves()?;
        info!(id, found = removed.is_some(), "save deleted");
        Ok(removed)
    }

    /// Make a save slot the current game and resume it.
    ///
    /// A snapshot that does not decode as this game's state leaves the
    /// running game and the stored state untouched.
    pub fn load_save(&mut self, id: u32) -> TroubadourResult<()> {
        let entry = self.saves.get(id).ok_or(SaveError::UnknownSave(id))?;
        let state: GameState<G> = entry.snapshot.restore()?;
        let snapshot = entry.snapshot.clone();
        info!(id, name = %entry.name, "loading save");
        self.resume_from(state)?;
        store_json(&mut self.store, &self.config.state_key, &snapshot)?;
        Ok(())
    }

    /// Merge saves from an exported file and return how many were added.
    ///
    /// A blob that does not decode leaves the local saves untouched.
    pub fn import_saves(&mut self, blob: &str) -> TroubadourResult<usize> {
        let incoming = SaveSet::import(blob)?;
        let offered = incoming.len();
        let added = self.saves.merge(incoming)?;
        self.persist_saves()?;
        info!(offered, added, "saves imported");
        Ok(added)
    }

    /// Serialize the saves for download, named after today's date.
    pub fn export_saves(&self) -> TroubadourResult<ExportFile> {
        Ok(self
            .saves
            .export(&self.config.export_stem, Local::now().date_naive())?)
    }

    /// Switch between light and dark mode and remember the choice.
    pub fn toggle_color_mode(&mut self) -> TroubadourResult<ColorMode> {
        self.color_mode = self.color_mode.toggled();
        self.apply_color_mode();
        store_json(
            &mut self.store,
            &self.config.color_mode_key,
            &self.color_mode,
        )?;
        debug!(color_mode = %self.color_mode, "color mode toggled");
        Ok(self.color_mode)
    }

    /// Give back the presentation layer and the store.
    pub fn into_parts(self) -> (S, K) {
        (self.out.into_sink(), self.store)
    }

    fn run_page(&mut self, method: &str, value: Option<&str>) -> TroubadourResult<()> {
        let state = self.state.as_mut().ok_or(TroubadourError::NoState)?;
        debug!(method, ?value, "running page");

        let GameState {
            game,
            story,
            panels,
            interface,
        } = &mut *state;
        let mut page = Page::new(story, panels, &mut self.out);
        *interface = game.call(method, value, &mut page)?;

        panels.render(&mut self.out)?;
        render_interface(interface, &mut self.out, &mut self.actions)?;
        store_json(&mut self.store, &self.config.state_key, &*state)?;
        Ok(())
    }

    fn persist_saves(&mut self) -> TroubadourResult<()> {
        store_json(&mut self.store, &self.config.saves_key, &self.saves)?;
        render_saves_table(&self.saves.rows(), &mut self.out, &mut self.actions);
        Ok(())
    }

    fn apply_color_mode(&mut self) {
        self.out.set_attribute(
            region::STORY_CONTAINER,
            COLOR_MODE_ATTRIBUTE,
            self.color_mode.as_str(),
        );
    }
}
