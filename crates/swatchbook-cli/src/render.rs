//! Template rendering for terminal panels.

use console::{pad_str, Alignment, Style};
use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Serialize;
use swatchbook::search::match_range;
use swatchbook::util::{parse_hex_color, rgb_to_ansi256, truncate_to_width};

use crate::output::OutputMode;
use crate::theme::Theme;

/// Width assumed when stdout is not a terminal.
pub const DEFAULT_WIDTH: usize = 100;

/// Panels lay out fixed columns and need at least this many.
pub const MIN_WIDTH: usize = 60;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// A renderer with pre-registered panel templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if any theme alias is dangling or cyclic.
    pub fn new(theme: Theme, mode: OutputMode, width: usize) -> Result<Self, Error> {
        theme
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_global("width", width.max(MIN_WIDTH));
        register_filters(&mut env, theme, mode.should_use_color());
        Ok(Self { env })
    }

    /// Registers a named template. Syntax errors are reported here.
    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    let styles = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });

    // Two-column colour block for hex values; empty for anything else or
    // when colour is off.
    env.add_filter("swatch", move |value: Value| -> String {
        match value.as_str().and_then(parse_hex_color) {
            Some(color) if use_color => {
                let style = Style::new().color256(rgb_to_ansi256(color.rgb()));
                format!("{} ", style.apply_to("██").force_styling(true))
            }
            _ => String::new(),
        }
    });

    env.add_filter("fit", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });

    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_str(&value.to_string(), width, Alignment::Left, None).into_owned()
    });

    let marks = theme;
    env.add_filter("highlight", move |value: Value, query: String| -> String {
        let text = value.to_string();
        match match_range(&text, &query) {
            Some((start, end)) if use_color => format!(
                "{}{}{}",
                &text[..start],
                marks.apply("mark", &text[start..end], true),
                &text[end..]
            ),
            _ => text,
        }
    });

    env.add_filter("fixed", |value: f64, digits: usize| -> String {
        format!("{:.*}", digits, value)
    });

    env.add_test("alias", |value: Value| -> bool {
        value.as_str().is_some_and(swatchbook::alias::is_alias)
    });
}
