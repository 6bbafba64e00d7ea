//! Dropdown replacement: a popup list narrowed by fuzzy matching.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

use crate::catalog::Category;
use crate::converter::Side;
use crate::models::UnitDescriptor;

/// Longest filter query accepted
const MAX_QUERY_LEN: usize = 64;

/// What a confirmed selection is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Category,
    Unit(Side),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    /// Value handed back on selection (category name or unit abbreviation)
    pub key: String,
    pub label: String,
    search_text: String,
}

impl PickerOption {
    fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        let label = label.into();
        let search_text = format!("{} {}", key, label);
        Self { key, label, search_text }
    }
}

pub struct Picker {
    target: PickerTarget,
    options: Vec<PickerOption>,
    query: String,
    /// Indices into `options`, best match first
    matches: Vec<usize>,
    selected: usize,
    matcher: Matcher,
}

impl Picker {
    fn new(target: PickerTarget, options: Vec<PickerOption>) -> Self {
        let matches = (0..options.len()).collect();
        Self {
            target,
            options,
            query: String::new(),
            matches,
            selected: 0,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    pub fn categories() -> Self {
        let options =
            Category::ALL.iter().map(|c| PickerOption::new(c.as_str(), c.label())).collect();
        Self::new(PickerTarget::Category, options)
    }

    pub fn units(side: Side, units: &[UnitDescriptor]) -> Self {
        let options = units
            .iter()
            .map(|u| PickerOption::new(u.abbreviation.clone(), u.display_name.clone()))
            .collect();
        Self::new(PickerTarget::Unit(side), options)
    }

    pub fn target(&self) -> PickerTarget {
        self.target
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Options still matching the query, best first
    pub fn visible(&self) -> impl Iterator<Item = &PickerOption> {
        self.matches.iter().map(|&i| &self.options[i])
    }

    pub fn visible_count(&self) -> usize {
        self.matches.len()
    }

    /// Option under the cursor
    pub fn current(&self) -> Option<&PickerOption> {
        self.matches.get(self.selected).map(|&i| &self.options[i])
    }

    /// Move the cursor to the option with `key`, if visible
    pub fn select_key(&mut self, key: &str) {
        if let Some(pos) = self.matches.iter().position(|&i| self.options[i].key == key) {
            self.selected = pos;
        }
    }

    pub fn push(&mut self, c: char) {
        if self.query.len() < MAX_QUERY_LEN {
            self.query.push(c);
            self.refilter();
        }
    }

    pub fn pop(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.matches.is_empty() {
            self.selected = 0;
            return;
        }
        let new_idx = (self.selected as isize + delta).max(0) as usize;
        self.selected = new_idx.min(self.matches.len() - 1);
    }

    fn refilter(&mut self) {
        self.selected = 0;

        if self.query.trim().is_empty() {
            self.matches = (0..self.options.len()).collect();
            return;
        }

        let pattern = Pattern::parse(&self.query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();
        let mut scored: Vec<(usize, u32)> = self
            .options
            .iter()
            .enumerate()
            .filter_map(|(i, option)| {
                let haystack = Utf32Str::new(&option.search_text, &mut buf);
                pattern.score(haystack, &mut self.matcher).map(|score| (i, score))
            })
            .collect();

        // Highest score first; ties keep catalog order
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        self.matches = scored.into_iter().map(|(i, _)| i).collect();
    }
}
