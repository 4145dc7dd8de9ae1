//! Template data for command output.
//!
//! Handlers turn library values into these flat, serializable structs; the templates only pick
//! fields and styles. Secrets never make it into a binding set.

use serde::Serialize;
use sortinghat::{Result, SortingHatClient};

pub const INFO_TEMPLATE: &str = "info.tmpl";

#[derive(Serialize, Debug, PartialEq)]
pub struct InfoData {
    pub url: String,
    pub host: String,
    pub port: u16,
    pub path: Option<String>,
    pub user: Option<String>,
    pub ssl: bool,
}

impl InfoData {
    pub fn from_client(client: &SortingHatClient) -> Result<Self> {
        Ok(Self {
            url: client.url()?.to_string(),
            host: client.host().to_string(),
            port: client.port(),
            path: client.path().map(str::to_string),
            user: client.user().map(str::to_string),
            ssl: client.uses_ssl(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortinghat::display::theme::SORTINGHAT_THEME;
    use sortinghat::display::TEMPLATES_DIR;
    use sortinghat::{ClientConfig, Display};

    fn client(path: Option<&str>, user: Option<&str>, ssl: bool) -> SortingHatClient {
        SortingHatClient::new(ClientConfig {
            host: "example.org".into(),
            port: 9999,
            path: path.map(str::to_string),
            user: user.map(str::to_string),
            password: Some("secret".into()),
            ssl,
        })
    }

    fn render(data: &InfoData) -> String {
        Display::with_color(TEMPLATES_DIR, &SORTINGHAT_THEME, false)
            .render(INFO_TEMPLATE, data)
            .unwrap()
    }

    #[test]
    fn test_info_data_from_client() {
        let data = InfoData::from_client(&client(Some("api/"), Some("jsmith"), true)).unwrap();
        assert_eq!(
            data,
            InfoData {
                url: "https://example.org:9999/api/".into(),
                host: "example.org".into(),
                port: 9999,
                path: Some("api/".into()),
                user: Some("jsmith".into()),
                ssl: true,
            }
        );
    }

    #[test]
    fn test_info_template_minimal() {
        let data = InfoData::from_client(&client(None, None, true)).unwrap();
        assert_eq!(
            render(&data),
            "SortingHat server\n  url:   https://example.org:9999/\n  host:  example.org\n  port:  9999\n  ssl:   enabled"
        );
    }

    #[test]
    fn test_info_template_full() {
        let data = InfoData::from_client(&client(Some("api"), Some("jsmith"), false)).unwrap();
        let out = render(&data);
        assert_eq!(
            out,
            "SortingHat server\n  url:   http://example.org:9999/api\n  host:  example.org\n  port:  9999\n  path:  api\n  user:  jsmith\n  ssl:   disabled"
        );
        assert!(!out.contains("secret"));
    }
}
