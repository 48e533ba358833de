//! The resources the panel displays. The server is stateless, so these are
//! constructed from route parameters rather than fetched from anywhere.

#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new(name: &str) -> Project {
        Project {
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileApp {
    pub project: String,
    pub name: String,
}

impl MobileApp {
    pub fn new(project: &str, name: &str) -> MobileApp {
        MobileApp {
            project: project.to_owned(),
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileService {
    pub project: String,
    pub name: String,
}

impl MobileService {
    pub fn new(project: &str, name: &str) -> MobileService {
        MobileService {
            project: project.to_owned(),
            name: name.to_owned(),
        }
    }
}
