//! Per-buffer syntax checking.
//!
//! [`SyntaxChecker`] is the context object that owns everything the plugin needs across
//! editor events: settings, the compiler front-end, and one [`CompiledUnitView`] per buffer.
//! Hosts call into it from their event callbacks (load, save, modify, cursor move); scheduling
//! and debouncing of those calls stay on the host side.

use crate::diagnostics::DiagnosticRanges;
use crate::front_end::{CompiledUnit, CompilerFrontEnd};
use crate::host::{BufferId, EditorView, RegionKind, STATUS_KEY};
use crate::line_index::LineIndex;
use crate::mapper::compute_ranges;
use crate::settings::Settings;
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced by [`SyntaxChecker`].
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("compiler front-end failed on {path}: {source}")]
    /// The front-end could not parse the buffer.
    FrontEnd {
        /// File that was being parsed.
        path: String,
        /// The front-end's error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CheckerError {
    fn front_end(path: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::FrontEnd {
            path: path.to_string(),
            source: Box::new(source),
        }
    }
}

/// A compiled unit together with the ranges mapped from its diagnostics.
#[derive(Debug)]
pub struct CompiledUnitView<U> {
    unit: U,
    ranges: DiagnosticRanges,
}

impl<U: CompiledUnit> CompiledUnitView<U> {
    /// Wrap a freshly parsed unit and map its diagnostics against `text`.
    pub fn new(unit: U, text: &str) -> Self {
        let mut view = Self {
            unit,
            ranges: DiagnosticRanges::default(),
        };
        view.recompute(text);
        view
    }

    /// Re-map the unit's diagnostics, replacing the previous ranges entirely.
    pub fn recompute(&mut self, text: &str) {
        let line_index = LineIndex::from_text(text);
        self.ranges = compute_ranges(self.unit.root(), self.unit.diagnostics(), &line_index);
    }

    /// The compiled unit.
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The mapped ranges.
    pub fn ranges(&self) -> &DiagnosticRanges {
        &self.ranges
    }

    /// Message of the last diagnostic on a 0-based line.
    pub fn error_for_line(&self, line: usize) -> Option<&str> {
        self.ranges.message_for_line(line)
    }
}

/// Owns the front-end and the per-buffer compiled units.
pub struct SyntaxChecker<F: CompilerFrontEnd> {
    front_end: F,
    settings: Settings,
    units: HashMap<BufferId, CompiledUnitView<F::Unit>>,
}

impl<F: CompilerFrontEnd> SyntaxChecker<F> {
    /// Create a checker with no tracked buffers.
    pub fn new(front_end: F, settings: Settings) -> Self {
        Self {
            front_end,
            settings,
            units: HashMap::new(),
        }
    }

    /// The active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. Already tracked buffers stay tracked.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Mutable access to the front-end (e.g. to change compile arguments).
    pub fn front_end_mut(&mut self) -> &mut F {
        &mut self.front_end
    }

    /// The view for a tracked buffer.
    pub fn unit_view(&self, buffer: BufferId) -> Option<&CompiledUnitView<F::Unit>> {
        self.units.get(&buffer)
    }

    /// Returns `true` if the buffer has a compiled unit.
    pub fn is_tracked(&self, buffer: BufferId) -> bool {
        self.units.contains_key(&buffer)
    }

    /// Number of tracked buffers.
    pub fn tracked_count(&self) -> usize {
        self.units.len()
    }

    /// Parse a buffer for the first time and publish its diagnostics.
    ///
    /// Returns `Ok(false)` without doing anything if the buffer is already tracked, has no
    /// file name, or its extension is not in [`Settings::file_extensions`].
    pub fn create_unit<V: EditorView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<bool, CheckerError> {
        let buffer = view.buffer_id();
        if self.units.contains_key(&buffer) {
            return Ok(false);
        }
        let Some(path) = view.file_name().map(str::to_string) else {
            return Ok(false);
        };
        if !self.settings.accepts(&path) {
            log::trace!("{buffer}: {path} is not in the extension allowlist");
            return Ok(false);
        }

        let text = view.text();
        let unit = self
            .front_end
            .parse(&path, &text)
            .map_err(|e| CheckerError::front_end(&path, e))?;
        let unit_view = CompiledUnitView::new(unit, &text);
        log::debug!(
            "{buffer}: parsed {path} ({} error range(s), {} warning range(s))",
            unit_view.ranges.error_ranges.len(),
            unit_view.ranges.warning_ranges.len()
        );
        self.units.insert(buffer, unit_view);

        self.show_diagnostics(view);
        Ok(true)
    }

    /// Re-parse a tracked buffer against its current text and publish the new diagnostics.
    ///
    /// Returns `Ok(false)` if the buffer is not tracked.
    pub fn reparse_unit<V: EditorView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<bool, CheckerError> {
        let buffer = view.buffer_id();
        let Some(unit_view) = self.units.get_mut(&buffer) else {
            return Ok(false);
        };

        let text = view.text();
        if let Err(e) = self.front_end.reparse(&mut unit_view.unit, &text) {
            let path = view.file_name().unwrap_or("<unnamed>").to_string();
            log::warn!("{buffer}: reparse of {path} failed: {e}");
            return Err(CheckerError::front_end(&path, e));
        }
        unit_view.recompute(&text);
        log::debug!(
            "{buffer}: reparsed ({} error range(s), {} warning range(s))",
            unit_view.ranges.error_ranges.len(),
            unit_view.ranges.warning_ranges.len()
        );

        self.show_diagnostics(view);
        Ok(true)
    }

    /// Bring a buffer's diagnostics up to date: parse it if it is new, re-parse it otherwise.
    ///
    /// This is the entry point a host's (debounced) "syntax check" command should call.
    pub fn syntax_check<V: EditorView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<bool, CheckerError> {
        if self.units.contains_key(&view.buffer_id()) {
            self.reparse_unit(view)
        } else {
            self.create_unit(view)
        }
    }

    /// Publish a tracked buffer's error and warning regions, then refresh its status.
    pub fn show_diagnostics<V: EditorView + ?Sized>(&self, view: &mut V) {
        let Some(unit_view) = self.units.get(&view.buffer_id()) else {
            return;
        };

        for (kind, ranges) in [
            (RegionKind::Error, &unit_view.ranges.error_ranges),
            (RegionKind::Warning, &unit_view.ranges.warning_ranges),
        ] {
            view.erase_regions(kind.region_key());
            if !ranges.is_empty() {
                view.add_regions(kind.region_key(), ranges, kind);
            }
        }

        let line = view.cursor_line();
        self.show_status(view, line);
    }

    /// Show the message of the diagnostic on `line` (0-based), or clear the status if none.
    pub fn show_status<V: EditorView + ?Sized>(&self, view: &mut V, line: usize) {
        let Some(unit_view) = self.units.get(&view.buffer_id()) else {
            return;
        };

        match unit_view.error_for_line(line) {
            Some(message) => view.set_status(STATUS_KEY, message),
            None => view.erase_status(STATUS_KEY),
        }
    }

    /// Message of the last diagnostic on a 0-based line of a tracked buffer.
    pub fn error_for_line(&self, buffer: BufferId, line: usize) -> Option<&str> {
        self.units.get(&buffer)?.error_for_line(line)
    }

    /// Forget a buffer (e.g. when its view is closed). Returns `true` if it was tracked.
    pub fn close(&mut self, buffer: BufferId) -> bool {
        let removed = self.units.remove(&buffer).is_some();
        if removed {
            log::debug!("{buffer}: closed");
        }
        removed
    }
}
