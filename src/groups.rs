//! Visual groups and their presentation styles
//!
//! A group is a presentation-only classification: it drives the color and
//! icon the rendering collaborator applies to a node. The style table is
//! injectable; the defaults are the palette the renderer ships with.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisError};

/// Visual classification of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualGroup {
    /// Plain object type
    Type,
    /// Input object type
    InputType,
    /// Field of the query root
    Query,
    /// Field of the mutation root
    Mutation,
    /// Materialized field node (only with `show_fields`)
    Field,
    /// Interface type (only with `show_interfaces`)
    Interface,
}

impl VisualGroup {
    /// All groups, in node-emission order.
    pub const ALL: [VisualGroup; 6] = [
        VisualGroup::Type,
        VisualGroup::InputType,
        VisualGroup::Query,
        VisualGroup::Mutation,
        VisualGroup::Field,
        VisualGroup::Interface,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisualGroup::Type => "Type",
            VisualGroup::InputType => "InputType",
            VisualGroup::Query => "Query",
            VisualGroup::Mutation => "Mutation",
            VisualGroup::Field => "Field",
            VisualGroup::Interface => "Interface",
        }
    }
}

impl fmt::Display for VisualGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display style for one group (cosmetic, owned by presentation config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStyle {
    /// Icon glyph code point (FontAwesome)
    pub icon: String,
    /// Hex color
    pub color: String,
}

impl GroupStyle {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// Injectable mapping from group to display style
///
/// The builder fails fast with [`VisError::UnstyledGroup`] when it emits a
/// node whose group has no entry here; it never silently defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    styles: HashMap<VisualGroup, GroupStyle>,
}

impl Default for GroupTable {
    fn default() -> Self {
        let mut styles = HashMap::with_capacity(VisualGroup::ALL.len());
        styles.insert(VisualGroup::Type, GroupStyle::new("\u{f069}", "#b2d1ff"));
        styles.insert(VisualGroup::InputType, GroupStyle::new("\u{f069}", "#0061f2"));
        styles.insert(VisualGroup::Query, GroupStyle::new("\u{f069}", "#47d36f"));
        styles.insert(VisualGroup::Mutation, GroupStyle::new("\u{f069}", "#c947e0"));
        styles.insert(VisualGroup::Field, GroupStyle::new("\u{f5d2}", "#d8e248"));
        styles.insert(VisualGroup::Interface, GroupStyle::new("\u{f1c0}", "#fcba2a"));
        Self { styles }
    }
}

impl GroupTable {
    /// An empty table (useful for building a fully custom palette).
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Insert or replace the style for a group.
    pub fn set(&mut self, group: VisualGroup, style: GroupStyle) {
        self.styles.insert(group, style);
    }

    pub fn get(&self, group: VisualGroup) -> Option<&GroupStyle> {
        self.styles.get(&group)
    }

    /// Look up a style, failing fast when the group is unconfigured.
    pub fn require(&self, group: VisualGroup) -> Result<&GroupStyle> {
        self.styles
            .get(&group)
            .ok_or(VisError::UnstyledGroup(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_groups() {
        let table = GroupTable::default();
        for group in VisualGroup::ALL {
            assert!(table.get(group).is_some(), "missing style for {group}");
        }
    }

    #[test]
    fn test_default_palette() {
        let table = GroupTable::default();
        assert_eq!(table.get(VisualGroup::Type).unwrap().color, "#b2d1ff");
        assert_eq!(table.get(VisualGroup::Field).unwrap().icon, "\u{f5d2}");
    }

    #[test]
    fn test_require_fails_on_missing_group() {
        let mut table = GroupTable::empty();
        table.set(VisualGroup::Type, GroupStyle::new("\u{f069}", "#ffffff"));
        assert!(table.require(VisualGroup::Type).is_ok());
        assert!(matches!(
            table.require(VisualGroup::Query),
            Err(VisError::UnstyledGroup(VisualGroup::Query))
        ));
    }
}
