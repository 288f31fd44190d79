//! Site settings for the Lumen blog theme.
//!
//! A [`SiteSettings`] is loaded once, from `_lumen.yml` (or JSON), and then only read.

mod author;
mod contacts;
mod menu;
mod pagination;
mod settings;

pub use self::author::*;
pub use self::contacts::*;
pub use self::menu::*;
pub use self::pagination::*;
pub use self::settings::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
