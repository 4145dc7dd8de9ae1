//! # Template Rendering
//!
//! All user-facing output goes through minijinja templates stored as standalone files in
//! [`TEMPLATES_DIR`]. Keeping them out of the code makes them easier to edit and diff.
//!
//! The environment is configured the way Jinja users expect from a CLI:
//!
//! - `trim_blocks` and `lstrip_blocks` are on, so a line holding only a `{% if %}` or
//!   `{% for %}` tag leaves no blank line behind.
//! - Undefined variables are an error. A template that references a binding the caller did not
//!   supply fails instead of printing an empty string.
//! - The trailing newline of the template file is dropped. [`Display::render_to`] decides whether
//!   to add one.
//!
//! Rendering happens fully in memory before anything is written, so a failing template never
//! leaves partial output on stdout.
//!
//! Names are resolved inside the templates directory only; `..` segments, empty names and names
//! ending in `/` do not resolve and report [`SortingHatError::TemplateNotFound`].
//!
//! ## Template Location
//!
//! [`TEMPLATES_DIR`] is the absolute path of `src/sortinghat/templates` in the source tree the
//! crate was built from, baked in at compile time. Templates are not embedded in the binary: a
//! `sortinghat` binary copied to another machine, or kept after its source checkout is removed,
//! reports [`SortingHatError::TemplateNotFound`] for every command that renders. Renderers over
//! another directory are built with [`Display::new`] or [`Display::with_color`].

pub mod theme;

use crate::error::{Result, SortingHatError};
use console::Term;
use minijinja::{path_loader, Environment, UndefinedBehavior};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use theme::{Theme, SORTINGHAT_THEME};

/// Directory holding the bundled templates.
pub const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/sortinghat/templates");

pub struct Display {
    env: Environment<'static>,
}

impl Display {
    /// Renderer over the bundled templates, with colour detected from stdout.
    pub fn bundled() -> Self {
        Self::new(TEMPLATES_DIR)
    }

    /// Renderer over `templates_dir`, with colour detected from stdout.
    pub fn new<P: AsRef<Path>>(templates_dir: P) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(templates_dir, &SORTINGHAT_THEME, use_color)
    }

    /// Renderer with an explicit theme and colour setting.
    pub fn with_color<P: AsRef<Path>>(templates_dir: P, theme: &Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir.as_ref().to_path_buf()));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(false);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        theme.register(&mut env, use_color);
        Self { env }
    }

    /// Renders `template` with `bindings` into a string.
    pub fn render<S: Serialize>(&self, template: &str, bindings: S) -> Result<String> {
        tracing::trace!(template, "rendering");
        // These would resolve to a directory, not a template file.
        if template.is_empty() || template.ends_with('/') {
            return Err(SortingHatError::TemplateNotFound(template.to_string()));
        }
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| SortingHatError::from_template(template, e))?;
        tmpl.render(bindings)
            .map_err(|e| SortingHatError::from_template(template, e))
    }

    /// Renders `template` and writes it to `out`, followed by a newline when `nl` is set.
    ///
    /// Nothing is written if rendering fails.
    pub fn render_to<W: Write, S: Serialize>(
        &self,
        out: &mut W,
        template: &str,
        nl: bool,
        bindings: S,
    ) -> Result<()> {
        let mut text = self.render(template, bindings)?;
        if nl {
            text.push('\n');
        }
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Renders `template` to standard output.
    pub fn display<S: Serialize>(&self, template: &str, nl: bool, bindings: S) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(&mut handle, template, nl, bindings)
    }
}

/// Renders one of the bundled templates to standard output.
///
/// With `nl` set a newline follows the rendered text; without it the next output continues on
/// the same line.
pub fn display<S: Serialize>(template: &str, nl: bool, bindings: S) -> Result<()> {
    Display::bundled().display(template, nl, bindings)
}
