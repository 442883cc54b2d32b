//! Markup for a [`ResizeForm`]
//!
//! The form posts back to itself: the submit, reset and toggle controls are
//! all submit buttons named `_action`, and the last observed width and the
//! collapsed flag travel in the hidden `_width` and `_collapsed` inputs.
//! Hidden fields keep their controls in the form (so their values
//! round-trip) but sit outside the grid.

use maud::{html, Markup};

use crate::collapse::FieldPlacement;
use crate::engine::FormEngine;
use crate::field::FieldConfig;
use crate::form::ResizeForm;
use crate::grid::column_class;
use crate::renderer::{FieldContext, FieldRenderer};

/// Name of the hidden input carrying the observed container width
pub const WIDTH_INPUT: &str = "_width";

/// Name of the buttons selecting submit / reset / toggle
pub const ACTION_INPUT: &str = "_action";

/// Name of the hidden input carrying the collapsed flag
pub const COLLAPSED_INPUT: &str = "_collapsed";

const RESERVED_INPUTS: [&str; 3] = [WIDTH_INPUT, ACTION_INPUT, COLLAPSED_INPUT];

/// Whether `name` belongs to one of the form's own inputs rather than a field
pub fn is_reserved_input(name: &str) -> bool {
    RESERVED_INPUTS.contains(&name)
}

impl<R: FieldRenderer, E: FormEngine> ResizeForm<R, E> {
    pub fn render(&self) -> Markup {
        let layout = self.layout();
        let toggle = self.collapse.toggle_state();
        let labels = &self.options.labels;

        html! {
            form.rf-form
                method="post"
                action=[(!self.options.action.is_empty()).then_some(self.options.action.as_str())]
                novalidate
                data-width=(self.width)
                data-collapsed=(self.is_collapsed()) {
                input type="hidden" name=(WIDTH_INPUT) value=(self.width);
                input type="hidden" name=(COLLAPSED_INPUT) value=(self.is_collapsed());
                div.rf-row {
                    @for (field, placement) in self.fields.iter().zip(self.placements()) {
                        @match placement {
                            FieldPlacement::Hidden => {
                                (self.render_item(field, true))
                            }
                            FieldPlacement::Cell { span } => {
                                div class=(column_class(span)) data-span=(span) {
                                    (self.render_item(field, false))
                                }
                            }
                        }
                    }
                    div class={ (column_class(layout.grid_units_per_field)) " rf-actions" } style="text-align: right" {
                        div.rf-form-item {
                            div.rf-space {
                                button.rf-btn.rf-btn-primary type="submit" name=(ACTION_INPUT) value="submit" {
                                    (labels.submit)
                                }
                                button.rf-btn type="submit" name=(ACTION_INPUT) value="reset" {
                                    (labels.reset)
                                }
                                @if self.shows_collapse_toggle() {
                                    button.rf-collapse-toggle
                                        type="submit"
                                        name=(ACTION_INPUT)
                                        value="toggle"
                                        aria-expanded=(toggle.aria_expanded()) {
                                        (toggle.label(labels))
                                        span.rf-icon-down
                                            aria-hidden="true"
                                            style={ "margin-left: 0.5em; transition: 0.3s all; transform: rotate(" (toggle.icon_rotation()) ")" } {
                                            "\u{2304}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn render_item(&self, field: &FieldConfig<R>, hidden: bool) -> Markup {
        let errors = self.engine.errors(&field.name);
        let ctx = FieldContext {
            name: &field.name,
            value: self.engine.value(&field.name),
            props: &field.renderer_props,
            required: field.is_required(),
            invalid: !errors.is_empty(),
        };
        let extra = (!field.item.extra.is_empty())
            .then(|| serde_json::to_string(&field.item.extra).ok())
            .flatten();

        html! {
            div.rf-form-item.rf-has-error[!errors.is_empty()]
                hidden[hidden]
                data-field=(field.name)
                data-item=[extra] {
                @if let Some(label) = &field.item.label {
                    label.rf-label.rf-label-required[ctx.required]
                        for=(field.name)
                        style=(self.options.label_width.flex_style()) {
                        (label)
                    }
                }
                div.rf-control {
                    (field.renderer.render(&ctx))
                    @for message in errors {
                        div.rf-explain role="alert" { (message) }
                    }
                }
            }
        }
    }
}
