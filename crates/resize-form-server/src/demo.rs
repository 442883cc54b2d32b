// File: src/demo.rs
// Purpose: The search form served by the demo

use resize_form::{FieldConfig, FormError, FormOptions, Input, ResizeForm, Rule, Values};

pub type DemoForm = ResizeForm<Input>;

/// Three text inputs; only the first is required.
pub fn fields() -> Vec<FieldConfig<Input>> {
    (1..=3)
        .map(|i| {
            let field = FieldConfig::new(format!("key{i}"), Input)
                .label(format!("表单{i}"))
                .prop("allowClear", true)
                .prop("placeholder", format!("请输入key{i}"));
            if i == 1 {
                field.rule(Rule::required().with_message("必填"))
            } else {
                field
            }
        })
        .collect()
}

pub fn build<F>(options: FormOptions, on_submit: F) -> Result<DemoForm, FormError>
where
    F: FnMut(Values) + Send + 'static,
{
    Ok(ResizeForm::new(fields(), options, on_submit)?
        .on_reset(|| tracing::info!("search form reset")))
}
