//! Portrait naming: local thumbnail paths and generated avatar fallbacks.

use anyhow::{Context, Result};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use url::Url;

use shared::domain::{Athlete, Country};

pub const DEFAULT_THUMBNAILS_DIR: &str = "thumbnails";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";
pub const DEFAULT_AVATAR_SIZE: u32 = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaOptions {
    pub thumbnails_dir: String,
    pub avatar_base_url: String,
    pub avatar_size: u32,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            thumbnails_dir: DEFAULT_THUMBNAILS_DIR.into(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.into(),
            avatar_size: DEFAULT_AVATAR_SIZE,
        }
    }
}

/// Image sources for one person: the local thumbnail, and the avatar to use
/// when the thumbnail fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    pub person: String,
    pub thumbnail: String,
    pub fallback: Url,
}

/// ASCII file stem for a person's name: `"Danny O'Shea"` -> `danny_oshea`.
pub fn thumbnail_stem(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut stem = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.nfd().filter(|ch| !is_combining_mark(*ch)) {
        if ch == '\'' {
            continue;
        }
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        match ch {
            '-' | '_' => stem.push('_'),
            'a'..='z' | '0'..='9' => stem.push(ch),
            _ => {}
        }
    }

    stem
}

pub fn thumbnail_path(thumbnails_dir: &str, name: &str) -> String {
    let dir = thumbnails_dir.trim_end_matches('/');
    let stem = thumbnail_stem(name);
    if dir.is_empty() {
        format!("{stem}.jpg")
    } else {
        format!("{dir}/{stem}.jpg")
    }
}

pub fn avatar_url(base_url: &str, name: &str, background: &str, size: u32) -> Result<Url> {
    let size = size.to_string();
    Url::parse_with_params(
        base_url,
        &[
            ("name", name),
            ("size", size.as_str()),
            ("background", background),
            ("color", "fff"),
            ("bold", "true"),
            ("format", "svg"),
        ],
    )
    .with_context(|| format!("invalid avatar base url '{base_url}'"))
}

/// One portrait per competitor, so duos get two.
pub fn portraits(
    athlete: &Athlete,
    country: &Country,
    options: &MediaOptions,
) -> Result<Vec<Portrait>> {
    athlete
        .competitors
        .people()
        .into_iter()
        .map(|person| {
            Ok(Portrait {
                person: person.full_name.clone(),
                thumbnail: thumbnail_path(&options.thumbnails_dir, &person.full_name),
                fallback: avatar_url(
                    &options.avatar_base_url,
                    &person.full_name,
                    &country.avatar_color,
                    options.avatar_size,
                )?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_apostrophes() {
        assert_eq!(thumbnail_stem("Danny O'Shea"), "danny_oshea");
        assert_eq!(thumbnail_stem("François Pitot"), "francois_pitot");
        assert_eq!(thumbnail_stem("Niccolò Macii"), "niccolo_macii");
    }

    #[test]
    fn hyphens_and_space_runs_become_underscores() {
        assert_eq!(
            thumbnail_stem("Deanna  Stellato-Dudek"),
            "deanna_stellato_dudek"
        );
        assert_eq!(thumbnail_stem("Marie-Jade Lauriault"), "marie_jade_lauriault");
    }

    #[test]
    fn drops_characters_outside_the_stem_alphabet() {
        assert_eq!(thumbnail_stem("J. R. Smith!"), "j_r_smith");
    }

    #[test]
    fn thumbnail_path_joins_dir_once() {
        assert_eq!(
            thumbnail_path("thumbnails/", "Alysa Liu"),
            "thumbnails/alysa_liu.jpg"
        );
        assert_eq!(thumbnail_path("", "Alysa Liu"), "alysa_liu.jpg");
    }

    #[test]
    fn avatar_url_carries_color_and_size() {
        let url = avatar_url(DEFAULT_AVATAR_BASE_URL, "Alysa Liu", "3C3B6E", 64).expect("url");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("name".to_string(), "Alysa Liu".to_string())));
        assert!(pairs.contains(&("background".to_string(), "3C3B6E".to_string())));
        assert!(pairs.contains(&("size".to_string(), "64".to_string())));
        assert!(pairs.contains(&("format".to_string(), "svg".to_string())));
    }

    #[test]
    fn rejects_relative_avatar_base() {
        assert!(avatar_url("not a url", "Alysa Liu", "3C3B6E", 64).is_err());
    }
}
