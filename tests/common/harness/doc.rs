//! Builder for test documents.

/// Builder for markdown documents with links.
///
/// Renders a title, one list item per link, and an optional free-form body.
#[derive(Debug, Default)]
pub struct TestDoc {
    title: Option<String>,
    links: Vec<(String, String)>,
    body: String,
}

#[allow(dead_code)]
impl TestDoc {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level-one heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds an inline link.
    pub fn link(mut self, text: impl Into<String>, destination: impl Into<String>) -> Self {
        self.links.push((text.into(), destination.into()));
        self
    }

    /// Adds an inline link whose text is the destination itself.
    pub fn link_to(self, destination: impl Into<String>) -> Self {
        let destination = destination.into();
        self.link(destination.clone(), destination)
    }

    /// Sets free-form markdown appended after the links.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Renders the document as markdown.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("# {title}\n\n"));
        }
        for (text, destination) in &self.links {
            out.push_str(&format!("- [{text}]({destination})\n"));
        }
        if !self.body.is_empty() {
            if !self.links.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.body);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_renders_links_as_list() {
        let doc = TestDoc::new()
            .title("Guide")
            .link("Setup", "setup.md")
            .link_to("../README.md");

        assert_eq!(
            doc.render(),
            "# Guide\n\n- [Setup](setup.md)\n- [../README.md](../README.md)\n"
        );
    }

    #[test]
    fn test_doc_empty_renders_nothing() {
        assert_eq!(TestDoc::new().render(), "");
    }
}
