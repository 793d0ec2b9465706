use axum::response::Html;
use tera::{Context, Tera};

/// Page templates, compiled into the binary
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("homepage.html", include_str!("../templates/homepage.html")),
            ("course.html", include_str!("../templates/course.html")),
            ("add.html", include_str!("../templates/add.html")),
            ("update.html", include_str!("../templates/update.html")),
            ("order.html", include_str!("../templates/order.html")),
            ("register.html", include_str!("../templates/register.html")),
            ("login.html", include_str!("../templates/login.html")),
        ])?;

        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, context).map(Html)
    }
}
