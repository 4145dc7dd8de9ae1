//! Named terminal styles for templates.
//!
//! Templates never carry ANSI codes. They name a style instead, `{{ url | style("url") }}`, and
//! the renderer resolves the name against a [`Theme`]. A name the theme does not know is
//! flagged with [`MISSING_STYLE_INDICATOR`], coloured or not, so a typo in a template shows up
//! in its output.

use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Renders `text` in the style called `name`; plain text when `use_color` is off.
    pub fn paint(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{MISSING_STYLE_INDICATOR} {text}"),
        }
    }

    /// Installs this theme as the `style` filter of `env`.
    pub(crate) fn register(&self, env: &mut Environment<'static>, use_color: bool) {
        let theme = self.clone();
        env.add_filter("style", move |value: Value, name: String| {
            theme.paint(&name, &value.to_string(), use_color)
        });
    }
}

/// Styles used by the bundled templates.
pub static SORTINGHAT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("header", Style::new().bold())
        .add("label", Style::new().dim())
        .add("value", Style::new())
        .add("url", Style::new().cyan())
        .add("enabled", Style::new().green())
        .add("disabled", Style::new().yellow())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_add_wins() {
        let theme = Theme::new()
            .add("x", Style::new().red().force_styling(true))
            .add("x", Style::new().green().force_styling(true));
        assert!(theme.paint("x", "hi", true).contains("\x1b[32m"));
    }

    #[test]
    fn test_paint_with_color() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let out = theme.paint("bold", "hello", true);
        assert!(out.contains("hello"));
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn test_paint_without_color() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        assert_eq!(theme.paint("bold", "hello", false), "hello");
    }

    #[test]
    fn test_unknown_style_is_flagged_either_way() {
        let theme = Theme::new();
        assert_eq!(theme.paint("nope", "hello", true), "(!?) hello");
        assert_eq!(theme.paint("nope", "hello", false), "(!?) hello");
    }

    #[test]
    fn test_bundled_theme_covers_info_template() {
        for name in ["header", "label", "value", "url", "enabled", "disabled"] {
            assert!(SORTINGHAT_THEME.get(name).is_some(), "missing style {name}");
        }
    }

    #[test]
    fn test_style_filter_in_template() {
        let mut env = Environment::new();
        Theme::new()
            .add("ok", Style::new().green())
            .register(&mut env, false);
        let out = env
            .render_str(
                r#"{{ "done" | style("ok") }} {{ 3 | style("typo") }}"#,
                minijinja::context! {},
            )
            .unwrap();
        assert_eq!(out, "done (!?) 3");
    }
}
