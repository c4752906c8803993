//! Page headline state.
//!
//! Tracks the title and description of the current page and derives the
//! document title shown by the host.

/// Title/description pair of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headline {
    app_name: String,
    title: String,
    description: Option<String>,
}

impl Headline {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            title: String::new(),
            description: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Changing the title always clears the description.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.description = None;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// `"<title> | <app name>"`, or the app name alone without a title.
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            self.app_name.clone()
        } else {
            format!("{} | {}", self.title, self.app_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title_without_title() {
        let headline = Headline::new("Gatehouse");
        assert_eq!(headline.document_title(), "Gatehouse");
    }

    #[test]
    fn test_document_title_with_title() {
        let mut headline = Headline::new("Gatehouse");
        headline.set_title("Users");
        assert_eq!(headline.document_title(), "Users | Gatehouse");

        headline.set_title("");
        assert_eq!(headline.document_title(), "Gatehouse");
    }

    #[test]
    fn test_set_title_resets_description() {
        let mut headline = Headline::new("Gatehouse");
        headline.set_title("Users");
        headline.set_description("All registered accounts");
        assert_eq!(headline.description(), Some("All registered accounts"));

        headline.set_title("Settings");
        assert_eq!(headline.description(), None);
    }
}
