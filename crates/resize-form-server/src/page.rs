//! Page shell around the form: grid stylesheet and the width reporter
//! script that posts container resizes back to the server.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use resize_form::GRID_UNITS;

/// Id of the element whose width drives the layout
pub const HOST_ID: &str = "resize-form-host";

/// Header the width reporter sets to get only the form back
pub const FRAGMENT_HEADER: &str = "x-resize-form";

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; }
.rf-row { display: flex; flex-wrap: wrap; }
.rf-col { box-sizing: border-box; padding: 0 8px; }
.rf-form-item { display: flex; align-items: flex-start; margin-bottom: 16px; }
.rf-form-item[hidden] { display: none; }
.rf-label { padding-right: 8px; line-height: 32px; white-space: nowrap; }
.rf-label-required::before { content: "*"; color: #ff4d4f; margin-right: 4px; }
.rf-control { flex: 1 1 0; min-width: 0; }
.rf-input, .rf-select { width: 100%; box-sizing: border-box; height: 32px; }
.rf-has-error .rf-input { border-color: #ff4d4f; }
.rf-explain { color: #ff4d4f; font-size: 12px; }
.rf-actions .rf-form-item { justify-content: flex-end; }
.rf-space { display: inline-flex; gap: 8px; align-items: center; }
.rf-collapse-toggle { background: none; border: none; color: #1677ff; cursor: pointer; }
.rf-icon-down { display: inline-block; }
"#;

const WIDTH_REPORTER: &str = r#"
(function () {
  var host = document.getElementById("resize-form-host");
  var last = null;
  new ResizeObserver(function (entries) {
    var width = Math.round(entries[0].contentRect.width);
    if (width === last) { return; }
    last = width;
    var form = host.querySelector("form");
    var body = new URLSearchParams(new FormData(form));
    body.set("_width", width);
    body.set("_action", "resize");
    fetch(form.getAttribute("action") || window.location.pathname, {
      method: "POST",
      headers: { "x-resize-form": "fragment" },
      body: body
    })
      .then(function (res) { return res.text(); })
      .then(function (html) { host.innerHTML = html; });
  }).observe(host);
})();
"#;

/// `.rf-col-N` widths for every span of the grid
fn grid_css() -> String {
    (1..=GRID_UNITS)
        .map(|span| {
            let percent = f64::from(span) * 100.0 / f64::from(GRID_UNITS);
            format!(".rf-col-{span} {{ flex: 0 0 {percent:.4}%; max-width: {percent:.4}%; }}\n")
        })
        .collect()
}

pub fn layout(title: &str, form: Markup, notice: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(BASE_CSS)) (PreEscaped(grid_css())) }
            }
            body {
                h1 { (title) }
                @if let Some(notice) = notice {
                    p.notice role="status" { (notice) }
                }
                div id=(HOST_ID) { (form) }
                script { (PreEscaped(WIDTH_REPORTER)) }
            }
        }
    }
}
