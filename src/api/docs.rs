use utoipa_rapidoc::RapiDoc;

const INDEX: &str = include_str!("static/index.html");

pub fn render() -> String { RapiDoc::new("/docs.json").custom_html(INDEX).to_html() }
