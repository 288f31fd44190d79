use std::fmt;

/// Contact services an author can link to.
///
/// Declaration order is the order the theme lists them in.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Email,
    Facebook,
    Telegram,
    Twitter,
    Github,
    Rss,
    Vkontakte,
    Linkedin,
    Instagram,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
}

impl Platform {
    pub const ALL: [Platform; 15] = [
        Platform::Email,
        Platform::Facebook,
        Platform::Telegram,
        Platform::Twitter,
        Platform::Github,
        Platform::Rss,
        Platform::Vkontakte,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Line,
        Platform::Gitlab,
        Platform::Weibo,
        Platform::Codepen,
        Platform::Youtube,
        Platform::Soundcloud,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::Facebook => "facebook",
            Platform::Telegram => "telegram",
            Platform::Twitter => "twitter",
            Platform::Github => "github",
            Platform::Rss => "rss",
            Platform::Vkontakte => "vkontakte",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Line => "line",
            Platform::Gitlab => "gitlab",
            Platform::Weibo => "weibo",
            Platform::Codepen => "codepen",
            Platform::Youtube => "youtube",
            Platform::Soundcloud => "soundcloud",
        }
    }

    /// Link to `handle`'s profile on this platform.
    ///
    /// `rss` handles are already URLs and are returned as-is.
    pub fn href(self, handle: &str) -> String {
        match self {
            Platform::Email => format!("mailto:{handle}"),
            Platform::Facebook => format!("https://www.facebook.com/{handle}"),
            Platform::Telegram => format!("tg://resolve?domain={handle}"),
            Platform::Twitter => format!("https://www.twitter.com/{handle}"),
            Platform::Github => format!("https://github.com/{handle}"),
            Platform::Rss => handle.to_owned(),
            Platform::Vkontakte => format!("https://vk.com/{handle}"),
            Platform::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
            Platform::Instagram => format!("https://www.instagram.com/{handle}"),
            Platform::Line => format!("line://ti/p/{handle}"),
            Platform::Gitlab => format!("https://www.gitlab.com/{handle}"),
            Platform::Weibo => format!("https://www.weibo.com/{handle}"),
            Platform::Codepen => format!("https://www.codepen.io/{handle}"),
            Platform::Youtube => format!("https://www.youtube.com/channel/{handle}"),
            Platform::Soundcloud => format!("https://soundcloud.com/{handle}"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile handle per [`Platform`]; an empty handle is left out of the UI.
///
/// Every platform key must be present when deserializing, and no others are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Contacts {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
}

impl Contacts {
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Email => &self.email,
            Platform::Facebook => &self.facebook,
            Platform::Telegram => &self.telegram,
            Platform::Twitter => &self.twitter,
            Platform::Github => &self.github,
            Platform::Rss => &self.rss,
            Platform::Vkontakte => &self.vkontakte,
            Platform::Linkedin => &self.linkedin,
            Platform::Instagram => &self.instagram,
            Platform::Line => &self.line,
            Platform::Gitlab => &self.gitlab,
            Platform::Weibo => &self.weibo,
            Platform::Codepen => &self.codepen,
            Platform::Youtube => &self.youtube,
            Platform::Soundcloud => &self.soundcloud,
        }
    }

    pub fn set(&mut self, platform: Platform, handle: impl Into<String>) {
        let slot = match platform {
            Platform::Email => &mut self.email,
            Platform::Facebook => &mut self.facebook,
            Platform::Telegram => &mut self.telegram,
            Platform::Twitter => &mut self.twitter,
            Platform::Github => &mut self.github,
            Platform::Rss => &mut self.rss,
            Platform::Vkontakte => &mut self.vkontakte,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Instagram => &mut self.instagram,
            Platform::Line => &mut self.line,
            Platform::Gitlab => &mut self.gitlab,
            Platform::Weibo => &mut self.weibo,
            Platform::Codepen => &mut self.codepen,
            Platform::Youtube => &mut self.youtube,
            Platform::Soundcloud => &mut self.soundcloud,
        };
        *slot = handle.into();
    }

    /// All platforms, set or not, in [`Platform::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Platforms with a non-empty handle.
    pub fn present(&self) -> impl Iterator<Item = Contact<'_>> + '_ {
        self.iter()
            .filter(|(_, handle)| !handle.is_empty())
            .map(|(platform, handle)| Contact { platform, handle })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contact<'s> {
    pub platform: Platform,
    pub handle: &'s str,
}

impl Contact<'_> {
    pub fn href(&self) -> String {
        self.platform.href(self.handle)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL_EMPTY: &str = r#"
email: ""
facebook: ""
telegram: ""
twitter: ""
github: ""
rss: ""
vkontakte: ""
linkedin: ""
instagram: ""
line: ""
gitlab: ""
weibo: ""
codepen: ""
youtube: ""
soundcloud: ""
"#;

    #[test]
    fn platform_names_match_keys() {
        let value = serde_json::to_value(Contacts::default()).unwrap();
        let mut actual: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        actual.sort();
        let mut expected: Vec<_> = Platform::ALL.iter().map(|p| p.as_str().to_owned()).collect();
        expected.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn platform_serde_name() {
        let actual = serde_json::to_string(&Platform::Soundcloud).unwrap();
        assert_eq!(actual, r#""soundcloud""#);
        let actual: Platform = serde_json::from_str(r#""vkontakte""#).unwrap();
        assert_eq!(actual, Platform::Vkontakte);
    }

    #[test]
    fn contacts_all_keys_ok() {
        let actual: Contacts = serde_yaml::from_str(ALL_EMPTY).unwrap();
        assert_eq!(actual, Contacts::default());
    }

    #[test]
    fn contacts_unknown_key() {
        let yaml = format!("{ALL_EMPTY}mastodon: \"\"\n");
        let actual = serde_yaml::from_str::<Contacts>(&yaml);
        assert!(actual.is_err());
    }

    #[test]
    fn contacts_missing_key() {
        let yaml = ALL_EMPTY.replace("weibo: \"\"\n", "");
        let actual = serde_yaml::from_str::<Contacts>(&yaml);
        assert!(actual.is_err());
    }

    #[test]
    fn get_and_set() {
        let mut contacts = Contacts::default();
        for platform in Platform::ALL {
            contacts.set(platform, platform.as_str());
        }
        for (platform, handle) in contacts.iter() {
            assert_eq!(handle, platform.as_str());
        }
    }

    #[test]
    fn present_skips_empty() {
        let mut contacts = Contacts::default();
        contacts.set(Platform::Twitter, "_arun_ghosh");
        contacts.set(Platform::Email, "arunghosh@gmail.com");
        contacts.set(Platform::Github, "arunghosh");
        let actual: Vec<_> = contacts.present().map(|c| c.platform).collect();
        assert_eq!(
            actual,
            vec![Platform::Email, Platform::Twitter, Platform::Github]
        );
    }

    #[test]
    fn href_per_platform() {
        assert_eq!(Platform::Email.href("a@b.c"), "mailto:a@b.c");
        assert_eq!(Platform::Github.href("arunghosh"), "https://github.com/arunghosh");
        assert_eq!(
            Platform::Telegram.href("lumen"),
            "tg://resolve?domain=lumen"
        );
        assert_eq!(
            Platform::Youtube.href("UC123"),
            "https://www.youtube.com/channel/UC123"
        );
        assert_eq!(Platform::Rss.href("/rss.xml"), "/rss.xml");
    }

    #[test]
    fn contact_href() {
        let contact = Contact {
            platform: Platform::Twitter,
            handle: "_arun_ghosh",
        };
        assert_eq!(contact.href(), "https://www.twitter.com/_arun_ghosh");
    }
}
