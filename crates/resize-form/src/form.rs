//! The responsive form component

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::collapse::{self, CollapseState, FieldPlacement};
use crate::engine::{FieldErrors, FormEngine, Values};
use crate::error::FormError;
use crate::field::FieldConfig;
use crate::layout::{ContentBox, Layout};
use crate::options::FormOptions;
use crate::render;
use crate::renderer::FieldRenderer;
use crate::store::FormStore;

/// Callback receiving validated values
pub type SubmitHandler = Box<dyn FnMut(Values) + Send>;

/// Callback invoked after the fields were reset
pub type ResetHandler = Box<dyn FnMut() + Send>;

/// Result of [`ResizeForm::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed and `on_submit` was called
    Submitted,
    /// Validation failed; `on_submit` was not called
    Rejected(FieldErrors),
}

/// A form whose fields reflow with the container width and collapse
/// behind a toggle when they outnumber the visible slots.
pub struct ResizeForm<R, E = FormStore> {
    pub(crate) fields: Vec<FieldConfig<R>>,
    pub(crate) options: FormOptions,
    pub(crate) engine: E,
    pub(crate) collapse: CollapseState,
    pub(crate) width: f64,
    on_submit: SubmitHandler,
    on_reset: Option<ResetHandler>,
}

impl<R: FieldRenderer> ResizeForm<R, FormStore> {
    /// Build a form backed by the in-memory [`FormStore`]
    pub fn new<F>(fields: Vec<FieldConfig<R>>, options: FormOptions, on_submit: F) -> Result<Self, FormError>
    where
        F: FnMut(Values) + Send + 'static,
    {
        Self::with_engine(fields, options, FormStore::new(), on_submit)
    }
}

impl<R: FieldRenderer, E: FormEngine> ResizeForm<R, E> {
    /// Build a form on top of a caller-supplied engine.
    ///
    /// Every field is registered with the engine, so duplicate names are
    /// reported here. Names used by the form's own hidden inputs are refused.
    pub fn with_engine<F>(
        fields: Vec<FieldConfig<R>>,
        options: FormOptions,
        mut engine: E,
        on_submit: F,
    ) -> Result<Self, FormError>
    where
        F: FnMut(Values) + Send + 'static,
    {
        options.validate()?;
        for field in &fields {
            if render::is_reserved_input(&field.name) {
                return Err(FormError::ReservedField(field.name.clone()));
            }
            engine.register(field.registration())?;
        }

        Ok(Self {
            collapse: CollapseState::new(options.default_collapse),
            width: options.initial_width,
            fields,
            options,
            engine,
            on_submit: Box::new(on_submit),
            on_reset: None,
        })
    }

    pub fn on_reset<F>(mut self, on_reset: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_reset = Some(Box::new(on_reset));
        self
    }

    /// Apply a resize notification; only the width is used.
    ///
    /// Returns whether the width changed.
    pub fn on_resize(&mut self, size: ContentBox) -> bool {
        if !size.width.is_finite() || size.width < 0.0 || size.width == self.width {
            return false;
        }
        let before = self.layout();
        self.width = size.width;
        let after = self.layout();
        if before.grid_units_per_field != after.grid_units_per_field {
            debug!(
                width = size.width,
                grid_units_per_field = after.grid_units_per_field,
                visible_field_count = after.visible_field_count,
                "form layout changed"
            );
        }
        true
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn layout(&self) -> Layout {
        Layout::compute(self.width, &self.options)
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn fields(&self) -> &[FieldConfig<R>] {
        &self.fields
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapse.is_collapsed()
    }

    /// Flip the collapsed flag; returns the new value
    pub fn toggle_collapse(&mut self) -> bool {
        let collapsed = self.collapse.toggle();
        debug!(collapsed, "form collapse toggled");
        collapsed
    }

    /// Restore the collapsed flag, e.g. from a posted `_collapsed` input
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapse.set(collapsed);
    }

    pub fn shows_collapse_toggle(&self) -> bool {
        collapse::shows_toggle(self.fields.len(), self.layout().visible_field_count)
    }

    /// Placement of every field, in configuration order
    pub fn placements(&self) -> Vec<FieldPlacement> {
        let layout = self.layout();
        let collapsed = self.is_collapsed();
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                collapse::place_field(index, field.hidden, field.grid_span_units, collapsed, &layout)
            })
            .collect()
    }

    /// Names of the fields laid out in the grid
    pub fn visible_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .zip(self.placements())
            .filter(|(_, placement)| !placement.is_hidden())
            .map(|(field, _)| field.name.as_str())
            .collect()
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.engine.value(name)
    }

    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        self.engine.set_value(name, value)
    }

    /// Set a field from posted text, parsed by the field's renderer
    pub fn set_raw_value(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let field = self
            .fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = field.renderer.parse(raw);
        self.engine.set_value(name, value)
    }

    /// Validate through the engine and hand the values to `on_submit`.
    ///
    /// A rejection is logged and reported in the outcome; it never
    /// reaches `on_submit`.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.engine.validate_fields().await {
            Ok(values) => {
                info!(fields = values.len(), "form submitted");
                (self.on_submit)(values);
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                warn!(?errors, "form validation failed");
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Clear every field, then notify `on_reset`
    pub fn reset(&mut self) {
        self.engine.reset_fields();
        debug!("form reset");
        if let Some(on_reset) = self.on_reset.as_mut() {
            on_reset();
        }
    }
}
