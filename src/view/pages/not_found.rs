/// Shown for paths no page is registered for.
pub struct NotFoundPage {
    path: String,
}

impl NotFoundPage {
    pub fn mount(path: String) -> Self {
        Self { path }
    }

    pub fn render(&self) -> String {
        format!(
            "# Page not found\n\nNothing lives at `{}`.\n\n[Return to listings](/)\n",
            self.path
        )
    }
}
