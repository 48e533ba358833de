#[derive(Clone, Default)]
pub struct Head {
    pub title: String,
    pub description: Option<String>,
}

impl Head {
    pub fn new() -> Head {
        Head::default()
    }

    pub fn title(mut self, title: &str) -> Head {
        self.title = title.to_owned();
        self
    }

    pub fn description(mut self, description: &str) -> Head {
        self.description = Some(description.to_owned());
        self
    }
}
