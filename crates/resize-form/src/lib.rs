//! # Resize Form
//!
//! A search/filter form whose fields are laid out on a 24-unit grid. The
//! number of fields per row follows the container width through a
//! breakpoint table; when more fields are configured than fit in the
//! visible slots, the surplus is hidden behind an expand/collapse toggle.
//!
//! Field widgets come from [`FieldRenderer`] implementations, values and
//! validation live behind the [`FormEngine`] trait ([`FormStore`] is the
//! in-memory default) and the whole thing renders to [`maud::Markup`].
//!
//! ```ignore
//! use resize_form::{ContentBox, FieldConfig, FormOptions, Input, ResizeForm, Rule};
//!
//! let fields = vec![
//!     FieldConfig::new("key1", Input)
//!         .label("表单1")
//!         .rule(Rule::required().with_message("必填"))
//!         .prop("placeholder", "请输入key1"),
//!     FieldConfig::new("key2", Input).label("表单2"),
//!     FieldConfig::new("key3", Input).label("表单3"),
//! ];
//!
//! let mut form = ResizeForm::new(fields, FormOptions::default(), |values| {
//!     println!("{values:?}");
//! })?;
//!
//! form.on_resize(ContentBox::new(1024.0, 80.0));
//! let markup = form.render();
//! ```

pub mod breakpoint;
pub mod collapse;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod grid;
pub mod layout;
pub mod options;
pub mod render;
pub mod renderer;
pub mod store;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use collapse::{CollapseState, FieldPlacement, ToggleState};
pub use engine::{FieldErrors, FieldRegistration, FormEngine, Values};
pub use error::FormError;
pub use field::{FieldConfig, FieldItem, Props};
pub use form::{ResizeForm, SubmitOutcome};
pub use grid::GRID_UNITS;
pub use layout::{ContentBox, Layout};
pub use options::{FormOptions, LabelWidth, Labels};
pub use renderer::{FieldContext, FieldRenderer, Input, NumberInput, Select};
pub use store::FormStore;

pub use resize_form_validation::Rule;

// Re-export Maud so renderers can be written without a direct dependency
pub use maud::{html, Markup, PreEscaped};
