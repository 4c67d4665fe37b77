//! Embedded knowledge base and output templates.
//!
//! The statutory grounds and the static parts of the `.docx` package are
//! baked into the binary, so a draft never depends on files next to the
//! executable.

/// Macro to embed knowledge-base files at compile time as text.
///
/// Generates:
/// - Public constants for each embedded document
/// - `get_embedded_doc(path)` function for lookup
/// - `list_docs()` function for discovery
macro_rules! embedded_docs {
    ($($path:expr => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../knowledge/", $path));
        )*

        pub fn get_embedded_doc(path: &str) -> Option<&'static str> {
            let key = path.strip_prefix("knowledge/").unwrap_or(path);
            match key {
                $( $path => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_docs() -> Vec<String> {
            vec![ $( $path.to_string(), )* ]
        }
    };
}

embedded_docs! {
    "grounds.toml" => EMBEDDED_GROUNDS,
}

// Static OOXML parts; only word/document.xml is generated per draft.
const TEMPLATE_CONTENT_TYPES: &str = include_str!("../../templates/docx/content_types.xml");
const TEMPLATE_PACKAGE_RELS: &str = include_str!("../../templates/docx/package.rels");
const TEMPLATE_DOCUMENT_RELS: &str = include_str!("../../templates/docx/document.xml.rels");
const TEMPLATE_STYLES: &str = include_str!("../../templates/docx/styles.xml");

pub fn get_template(name: &str) -> Option<&'static str> {
    match name {
        "content_types.xml" => Some(TEMPLATE_CONTENT_TYPES),
        "package.rels" => Some(TEMPLATE_PACKAGE_RELS),
        "document.xml.rels" => Some(TEMPLATE_DOCUMENT_RELS),
        "styles.xml" => Some(TEMPLATE_STYLES),
        _ => None,
    }
}
