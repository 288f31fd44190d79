/// A navigation entry; a site's menu is rendered in the order entries are listed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn menu_item_requires_path() {
        let actual = serde_yaml::from_str::<MenuItem>("label: Articles");
        assert!(actual.is_err());
    }

    #[test]
    fn menu_order_is_kept() {
        let yaml = "- label: About me\n  path: /pages/about\n- label: Articles\n  path: /\n";
        let actual: Vec<MenuItem> = serde_yaml::from_str(yaml).unwrap();
        let expected = vec![
            MenuItem::new("About me", "/pages/about"),
            MenuItem::new("Articles", "/"),
        ];
        assert_eq!(actual, expected);

        let mut reversed = expected.clone();
        reversed.reverse();
        assert_ne!(actual, reversed);
    }
}
