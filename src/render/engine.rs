//! MiniJinja setup shared by every template in a run.

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior, Value};

/// Build the environment templates are rendered in.
///
/// Undefined variables are errors; `is defined` still works for values that
/// are meant to be optional. A single trailing newline of the template is
/// dropped, as Jinja does.
fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    // Serialize a value (usually a props subtree) as a YAML block.
    env.add_filter("to_yaml", |value: Value| -> Result<String, Error> {
        serde_yaml::to_string(&value)
            .map(|s| s.trim_end_matches('\n').to_string())
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
    });

    env
}

/// Render `source` with `ctx`. `name` identifies the template in error messages.
pub fn render_template(name: &str, source: &str, ctx: &Value) -> Result<String, Error> {
    let mut env = environment();
    env.add_template(name, source)?;
    env.get_template(name)?.render(ctx)
}
