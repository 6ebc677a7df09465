//! Typed settings store
//!
//! [`Settings`] wraps an injected backend with typed reads, a built-in
//! scalar fallback table, fixed-key convenience accessors, and whole-block
//! collection round-trips for glyph sets and mark colors.
//!
//! Array blocks use the layout `prefix/size` for the record count and
//! `prefix/<index>/<field>` for record fields, with 1-based indices. Reads
//! are capped by the stored size (clamped to 1024 records), so shrinking a
//! block on rewrite leaves stale record keys behind without making them
//! visible.

use tiny_skia::Color;

use crate::settings::backend::{SettingsBackend, SettingsValue};
use crate::settings::defaults;
use crate::settings::SettingsError;

const GLYPH_SETS_PREFIX: &str = "glyphSets";
const MARK_COLORS_PREFIX: &str = "misc/markColors";

// Cap on stored array sizes; a hand-edited file can hold any integer.
const MAX_ARRAY_ENTRIES: usize = 1024;

/// Named, ordered list of glyph names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub name: String,
    pub glyphs: Vec<String>,
}

/// Named mark color.
///
/// Persisted in UFO color form: the four channels as normalized floats
/// joined by commas, e.g. `"1,0,0,1"`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkColor {
    pub name: String,
    pub color: Color,
}

/// Settings store over an explicitly injected backend.
///
/// Reads consult the backend first and fall back to the built-in scalar
/// table; keys absent from both read as their type's zero value. Writes go
/// straight to the backend without validation.
#[derive(Debug)]
pub struct Settings<B: SettingsBackend> {
    backend: B,
}

impl<B: SettingsBackend> Settings<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrows the backend, e.g. to sync a durable one.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ---------------------
    // Generic get/set + fallback
    // ---------------------

    /// Returns the stored value for `key`, else its scalar fallback, else
    /// `None`.
    pub fn value(&self, key: &str) -> Option<SettingsValue> {
        self.backend.get(key).or_else(|| defaults::fallback(key))
    }

    /// Stores `value` under `key` unconditionally.
    pub fn set_value(&mut self, key: &str, value: SettingsValue) {
        self.backend.set(key.to_string(), value);
    }

    /// Boolean read; a missing or wrong-kind value falls back to the scalar
    /// table and then to `false`.
    pub fn bool_value(&self, key: &str) -> bool {
        if let Some(SettingsValue::Bool(flag)) = self.backend.get(key) {
            return flag;
        }
        if let Some(SettingsValue::Bool(flag)) = defaults::fallback(key) {
            return flag;
        }
        false
    }

    /// String read; falls back to the scalar table and then to `""`.
    pub fn string_value(&self, key: &str) -> String {
        if let Some(SettingsValue::Text(text)) = self.backend.get(key) {
            return text;
        }
        if let Some(SettingsValue::Text(text)) = defaults::fallback(key) {
            return text;
        }
        String::new()
    }

    /// String-list read; falls back to the scalar table and then to empty.
    pub fn string_list_value(&self, key: &str) -> Vec<String> {
        if let Some(SettingsValue::List(items)) = self.backend.get(key) {
            return items;
        }
        if let Some(SettingsValue::List(items)) = defaults::fallback(key) {
            return items;
        }
        Vec::new()
    }

    // -----------
    // Convenience
    // -----------

    /// Name of the glyph set applied to new fonts.
    pub fn default_glyph_set(&self) -> String {
        self.string_value("settings/defaultGlyphSet")
    }

    /// Sets the default glyph set name; `None` stores the empty string.
    pub fn set_default_glyph_set(&mut self, name: Option<&str>) {
        let name = name.unwrap_or_default().to_string();
        self.set_value("settings/defaultGlyphSet", SettingsValue::Text(name));
    }

    /// Path of the user's glyph list file, empty when unset.
    pub fn glyph_list_path(&self) -> String {
        self.string_value("settings/glyphListPath")
    }

    /// Sets the glyph list path; `None` stores the empty string, which
    /// clears the path without deleting the key.
    pub fn set_glyph_list_path(&mut self, path: Option<&str>) {
        let path = path.unwrap_or_default().to_string();
        self.set_value("settings/glyphListPath", SettingsValue::Text(path));
    }

    /// Deletes the glyph list path key outright.
    pub fn remove_glyph_list_path(&mut self) {
        self.backend.remove("settings/glyphListPath");
    }

    /// Sample texts for the metrics window combo box.
    pub fn metrics_combo_box_items(&self) -> Vec<String> {
        self.string_list_value("metricsWindow/comboBoxItems")
    }

    pub fn set_metrics_combo_box_items(&mut self, items: Vec<String>) {
        self.set_value("metricsWindow/comboBoxItems", SettingsValue::List(items));
    }

    /// Whether the most recent file reopens on launch.
    pub fn load_recent_file(&self) -> bool {
        self.bool_value("misc/loadRecentFile")
    }

    pub fn set_load_recent_file(&mut self, load: bool) {
        self.set_value("misc/loadRecentFile", SettingsValue::Bool(load));
    }

    /// Recently opened file paths, most recent first.
    pub fn recent_files(&self) -> Vec<String> {
        self.string_list_value("core/recentFiles")
    }

    pub fn set_recent_files(&mut self, files: Vec<String>) {
        self.set_value("core/recentFiles", SettingsValue::List(files));
    }

    // ----------
    // Containers
    // ----------

    /// Reads all stored glyph sets, in stored order.
    ///
    /// When no block is stored (or its size is zero) the built-in Latin set
    /// is returned instead. A record whose name repeats an earlier one keeps
    /// the earlier position and takes the later glyph list.
    pub fn read_glyph_sets(&self) -> Vec<GlyphSet> {
        let size = self.array_size(GLYPH_SETS_PREFIX);
        if size == 0 {
            tracing::debug!("no stored glyph sets, seeding {}", defaults::LATIN_DEFAULT_NAME);
            return vec![defaults::latin_default_glyph_set()];
        }

        let mut sets: Vec<GlyphSet> = Vec::with_capacity(size);
        for index in 1..=size {
            let name = self.string_value(&entry_key(GLYPH_SETS_PREFIX, index, "name"));
            let glyphs = self.string_list_value(&entry_key(GLYPH_SETS_PREFIX, index, "glyphNames"));
            match sets.iter_mut().find(|set| set.name == name) {
                Some(existing) => existing.glyphs = glyphs,
                None => sets.push(GlyphSet { name, glyphs }),
            }
        }
        sets
    }

    /// Writes the glyph set block wholesale, in slice order.
    ///
    /// The built-in Latin set is never re-added; callers that want to keep
    /// it pass it along like any other set.
    pub fn write_glyph_sets(&mut self, sets: &[GlyphSet]) {
        self.write_array_size(GLYPH_SETS_PREFIX, sets.len());
        for (position, set) in sets.iter().enumerate() {
            let index = position + 1;
            self.backend.set(
                entry_key(GLYPH_SETS_PREFIX, index, "name"),
                SettingsValue::Text(set.name.clone()),
            );
            self.backend.set(
                entry_key(GLYPH_SETS_PREFIX, index, "glyphNames"),
                SettingsValue::List(set.glyphs.clone()),
            );
        }
    }

    /// Reads all stored mark colors, in stored order.
    ///
    /// When no block is stored the seeded Red, Yellow, Green triple is
    /// returned. Duplicate names follow the same first-position,
    /// last-value rule as glyph sets. A record whose color string does not
    /// parse fails the whole read.
    pub fn read_mark_colors(&self) -> Result<Vec<MarkColor>, SettingsError> {
        let size = self.array_size(MARK_COLORS_PREFIX);
        if size == 0 {
            tracing::debug!("no stored mark colors, seeding defaults");
            return Ok(defaults::default_mark_colors());
        }

        let mut colors: Vec<MarkColor> = Vec::with_capacity(size);
        for index in 1..=size {
            let name = self.string_value(&entry_key(MARK_COLORS_PREFIX, index, "name"));
            let value = self.string_value(&entry_key(MARK_COLORS_PREFIX, index, "color"));
            let color = parse_color(&value)?;
            match colors.iter_mut().find(|mark| mark.name == name) {
                Some(existing) => existing.color = color,
                None => colors.push(MarkColor { name, color }),
            }
        }
        Ok(colors)
    }

    /// Writes the mark color block wholesale, in slice order, with colors in
    /// UFO form.
    pub fn write_mark_colors(&mut self, colors: &[MarkColor]) {
        self.write_array_size(MARK_COLORS_PREFIX, colors.len());
        for (position, mark) in colors.iter().enumerate() {
            let index = position + 1;
            self.backend.set(
                entry_key(MARK_COLORS_PREFIX, index, "name"),
                SettingsValue::Text(mark.name.clone()),
            );
            self.backend.set(
                entry_key(MARK_COLORS_PREFIX, index, "color"),
                SettingsValue::Text(format_color(mark.color)),
            );
        }
    }

    fn array_size(&self, prefix: &str) -> usize {
        match self.backend.get(&format!("{prefix}/size")) {
            Some(SettingsValue::Int(size)) if size > 0 => {
                size.min(MAX_ARRAY_ENTRIES as i64) as usize
            }
            _ => 0,
        }
    }

    fn write_array_size(&mut self, prefix: &str, size: usize) {
        self.backend
            .set(format!("{prefix}/size"), SettingsValue::Int(size as i64));
    }
}

fn entry_key(prefix: &str, index: usize, field: &str) -> String {
    format!("{prefix}/{index}/{field}")
}

/// Parses a UFO color string into a color.
///
/// Expects exactly four comma-separated channels in `0..=1`; surrounding
/// whitespace per channel is tolerated.
fn parse_color(value: &str) -> Result<Color, SettingsError> {
    let invalid = || SettingsError::InvalidColor {
        value: value.to_string(),
    };

    let mut channels = [0.0f32; 4];
    let mut parts = value.split(',');
    for channel in &mut channels {
        *channel = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .ok_or_else(invalid)?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    let [r, g, b, a] = channels;
    Color::from_rgba(r, g, b, a).ok_or_else(invalid)
}

/// Formats a color in UFO form, channels in shortest float notation.
fn format_color(color: Color) -> String {
    format!(
        "{},{},{},{}",
        color.red(),
        color.green(),
        color.blue(),
        color.alpha()
    )
}
