//! Template rendering. Templates are embedded at compile time and registered
//! once; `render` takes a template name and a context, per the view layer
//! contract. Tera escapes interpolated values itself.

use once_cell::sync::OnceCell;
use tera::{Context, Tera};

static TEMPLATES: OnceCell<Tera> = OnceCell::new();

const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("author_list.html", include_str!("../templates/author_list.html")),
    ("author_detail.html", include_str!("../templates/author_detail.html")),
    ("author_form.html", include_str!("../templates/author_form.html")),
    ("author_delete.html", include_str!("../templates/author_delete.html")),
    ("book_list.html", include_str!("../templates/book_list.html")),
    ("book_detail.html", include_str!("../templates/book_detail.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Register the embedded templates. Idempotent; call once at startup.
pub fn init() -> Result<(), tera::Error> {
    if TEMPLATES.get().is_some() {
        return Ok(());
    }
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATE_SOURCES.to_vec())?;
    let _ = TEMPLATES.set(tera);
    Ok(())
}

/// Fresh context carrying the page title every layout expects.
pub fn context(title: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx
}

/// Render a registered template to HTML.
pub fn render(name: &str, ctx: &Context) -> Result<String, tera::Error> {
    let tera = TEMPLATES
        .get()
        .ok_or_else(|| tera::Error::msg("templates not initialized"))?;
    tera.render(name, ctx)
}
