use super::*;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Author {
    pub name: String,
    /// Site path of the avatar, e.g. `/photo.jpg`.
    pub photo: String,
    pub bio: String,
    pub contacts: Contacts,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo: Default::default(),
            bio: Default::default(),
            contacts: Default::default(),
        }
    }

    /// `(platform, href)` for every contact the author filled in.
    pub fn contact_links(&self) -> impl Iterator<Item = (Platform, String)> + '_ {
        self.contacts.present().map(|c| (c.platform, c.href()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contact_links_only_present() {
        let mut author = Author::new("Arun Ghosh");
        author.contacts.set(Platform::Github, "arunghosh");
        let actual: Vec<_> = author.contact_links().collect();
        assert_eq!(
            actual,
            vec![(Platform::Github, "https://github.com/arunghosh".to_owned())]
        );
    }

    #[test]
    fn author_requires_contacts() {
        let yaml = "name: Arun Ghosh\nphoto: /photo.jpg\nbio: ''\n";
        let actual = serde_yaml::from_str::<Author>(yaml);
        assert!(actual.is_err());
    }
}
