use std::fmt;
use std::num::NonZeroU32;
use std::path;

use super::*;

/// Project file names, in lookup order.
pub const SETTINGS_FILE_NAMES: [&str; 3] = ["_lumen.yml", "_lumen.yaml", "_lumen.json"];

const DEFAULT_PER_PAGE: NonZeroU32 = NonZeroU32::new(4).unwrap();

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is YAML.
    pub fn from_path(path: &path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Everything the theme needs to know about the site.
///
/// Every key is required and unknown keys are rejected. An empty string stands for "unset".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct SiteSettings {
    /// Absolute base URL of the deployed site.
    pub url: String,
    /// Prefix for sites deployed under a sub-path.
    pub path_prefix: String,
    pub title: String,
    pub subtitle: String,
    pub copyright: String,
    pub disqus_shortname: String,
    pub posts_per_page: NonZeroU32,
    pub google_analytics_id: String,
    pub use_katex: bool,
    pub menu: Vec<MenuItem>,
    pub author: Author,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let mut author = Author::new("Arun Ghosh");
        author.photo = "/photo.jpg".to_owned();
        author.bio = "Writes code out of passion and for living.".to_owned();
        author.contacts.set(Platform::Email, "arunghosh@gmail.com");
        author.contacts.set(Platform::Twitter, "_arun_ghosh");
        author.contacts.set(Platform::Github, "arunghosh");

        Self {
            url: "https://lumen.netlify.com".to_owned(),
            path_prefix: "/".to_owned(),
            title: "Blog by Arun Ghosh".to_owned(),
            subtitle: "Writes code out of passion and for living.".to_owned(),
            copyright: Default::default(),
            disqus_shortname: Default::default(),
            posts_per_page: DEFAULT_PER_PAGE,
            google_analytics_id: "UA-73379983-2".to_owned(),
            use_katex: false,
            // A "Contact me" entry (`/pages/contacts`) is available but not listed.
            menu: vec![
                MenuItem::new("Articles", "/"),
                MenuItem::new("About me", "/pages/about"),
            ],
            author,
        }
    }
}

impl SiteSettings {
    pub fn parse(content: &str, format: Format) -> Result<SiteSettings> {
        match format {
            Format::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse settings").with_source(e)),
            Format::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse settings").with_source(e)),
        }
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteSettings> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteSettings> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read settings")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        Self::parse(&content, Format::from_path(&path))
            .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteSettings> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteSettings> {
        match find_settings_file(cwd) {
            Some(p) => {
                log::debug!("Using settings file `{}`", p.display());
                Self::from_file(p)
            }
            None => {
                log::warn!("No _lumen.yml file found in current directory, using default settings.");
                Ok(Default::default())
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Status::new("Failed to serialize settings").with_source(e))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Status::new("Failed to serialize settings").with_source(e))
    }

    pub fn disqus_shortname(&self) -> Option<&str> {
        non_empty(&self.disqus_shortname)
    }

    pub fn google_analytics_id(&self) -> Option<&str> {
        non_empty(&self.google_analytics_id)
    }

    /// `path` as served under `path_prefix`, always starting with `/`.
    pub fn prefixed_path(&self, path: &str) -> String {
        let prefix = self.path_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("/{path}")
        } else if path.is_empty() {
            format!("/{prefix}/")
        } else {
            format!("/{prefix}/{path}")
        }
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.prefixed_path(path))
    }

    /// Index pages the site needs for `total_posts` posts.
    pub fn page_count(&self, total_posts: usize) -> usize {
        page_count(total_posts, self.posts_per_page)
    }
}

impl fmt::Display for SiteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = self.to_yaml().map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fn find_settings_file(dir: path::PathBuf) -> Option<path::PathBuf> {
    let mut dir = dir;
    loop {
        for name in SETTINGS_FILE_NAMES {
            let file_path = dir.join(name);
            if file_path.exists() {
                return Some(file_path);
            }
        }
        let hit_bottom = !dir.pop();
        if hit_bottom {
            return None;
        }
    }
}
