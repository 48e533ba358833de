use rocket::http::{Cookie, CookieJar};
use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DismissedAlert {
    pub id: String,
    pub time_dismissed: Option<chrono::DateTime<chrono::Utc>>,
}

pub struct Dismissals {}

impl Dismissals {
    pub fn update(new: &Vec<DismissedAlert>, cookies: &CookieJar<'_>) {
        let serialized = serde_json::to_string(new).unwrap_or_else(|_| "[]".to_string());

        let mut cookie = Cookie::new("session", format!(r#"{{"alerts": {}}}"#, serialized));
        cookie.set_max_age(::time::Duration::weeks(4));
        cookies.add_private(cookie);
    }

    pub fn get(cookies: &CookieJar<'_>) -> Vec<DismissedAlert> {
        let session = match cookies.get_private("session") {
            Some(session) => session,
            None => return vec![],
        };

        serde_json::from_str::<serde_json::Value>(session.value())
            .ok()
            .and_then(|value| {
                value["alerts"].as_array().map(|items| {
                    items
                        .iter()
                        .filter_map(|item| serde_json::from_value(item.clone()).ok())
                        .collect()
                })
            })
            .unwrap_or_default()
    }
}
