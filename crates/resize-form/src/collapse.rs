//! Collapse controller
//!
//! Decides which fields are laid out in the grid and whether the
//! expand/collapse toggle is worth showing.

use crate::layout::Layout;
use crate::options::Labels;

/// User-toggled collapsed flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: bool,
}

impl CollapseState {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Restore a flag carried over from a previous render
    pub fn set(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn toggle_state(&self) -> ToggleState {
        if self.collapsed {
            ToggleState::Collapsed
        } else {
            ToggleState::Expanded
        }
    }
}

impl Default for CollapseState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Where a field ends up for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPlacement {
    /// Laid out in a grid cell of `span` units
    Cell { span: u32 },
    /// Registered with the engine but not laid out
    Hidden,
}

impl FieldPlacement {
    pub fn is_hidden(&self) -> bool {
        matches!(self, FieldPlacement::Hidden)
    }
}

/// Whether the field at `index` is kept out of the grid
pub fn is_field_hidden(index: usize, hidden: bool, collapsed: bool, visible_field_count: u32) -> bool {
    hidden || (collapsed && index >= visible_field_count as usize)
}

pub fn place_field(
    index: usize,
    hidden: bool,
    grid_span_units: Option<u32>,
    collapsed: bool,
    layout: &Layout,
) -> FieldPlacement {
    if is_field_hidden(index, hidden, collapsed, layout.visible_field_count) {
        FieldPlacement::Hidden
    } else {
        FieldPlacement::Cell { span: layout.field_span(grid_span_units) }
    }
}

/// The toggle only appears when some field could be collapsed away
pub fn shows_toggle(field_count: usize, visible_field_count: u32) -> bool {
    field_count > visible_field_count as usize
}

/// The two states the toggle control can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Collapsed,
    Expanded,
}

impl ToggleState {
    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            ToggleState::Collapsed => &labels.expand,
            ToggleState::Expanded => &labels.collapse,
        }
    }

    /// CSS rotation of the chevron icon
    pub fn icon_rotation(&self) -> &'static str {
        match self {
            ToggleState::Collapsed => "0turn",
            ToggleState::Expanded => "0.5turn",
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        match self {
            ToggleState::Collapsed => "false",
            ToggleState::Expanded => "true",
        }
    }
}
