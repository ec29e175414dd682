//! Configuration loading for `oxbox.toml`.
//!
//! Two tables are recognised:
//!
//! * `[theme]` picks a named palette (`opencode`, `plain`) and optionally
//!   overrides its `background`, `primary` and `border` colors.
//! * `[container]` describes the outer box: padding, border sides and glyph
//!   style, max width and alignment.
//!
//! Loading never fails because of file contents. A missing file yields the
//! defaults; a file that does not parse is reported under the `config` target
//! and the defaults are used instead. Color and theme names are validated
//! lazily in [`Config::palette`] with the same fallback policy, while
//! [`Config::try_palette`] surfaces the typed [`ConfigError`] for callers that
//! want to reject bad input. Unknown keys are ignored.

use anyhow::Result;
use core_layout::ContainerOption;
use core_layout::options::{
    with_align, with_border, with_border_style, with_max_width, with_padding,
};
use core_style::{Border, Position};
use core_theme::{ColorError, Palette, parse_color};
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const FILE_NAME: &str = "oxbox.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid theme.{field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaddingConfig {
    #[serde(default)]
    pub top: u16,
    #[serde(default)]
    pub right: u16,
    #[serde(default)]
    pub bottom: u16,
    #[serde(default)]
    pub left: u16,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BorderSides {
    #[default]
    None,
    All,
    TopBottom,
    LeftRight,
}

impl BorderSides {
    /// `(top, right, bottom, left)`.
    pub const fn flags(self) -> (bool, bool, bool, bool) {
        match self {
            Self::None => (false, false, false, false),
            Self::All => (true, true, true, true),
            Self::TopBottom => (true, false, true, false),
            Self::LeftRight => (false, true, false, true),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Normal,
    Rounded,
    Thick,
    Double,
    Hidden,
}

impl BorderStyle {
    pub const fn glyphs(self) -> Border {
        match self {
            Self::Normal => Border::normal(),
            Self::Rounded => Border::rounded(),
            Self::Thick => Border::thick(),
            Self::Double => Border::double(),
            Self::Hidden => Border::hidden(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for Position {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Position::Left,
            Align::Center => Position::Center,
            Align::Right => Position::Right,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ContainerSection {
    #[serde(default)]
    pub padding: PaddingConfig,
    #[serde(default)]
    pub border: BorderSides,
    #[serde(default)]
    pub border_style: BorderStyle,
    /// 0 disables the cap.
    #[serde(default)]
    pub max_width: u16,
    #[serde(default)]
    pub align: Align,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub container: ContainerSection,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file contents when it parsed
    pub path: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: `./oxbox.toml` first, then the platform config
/// directory (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxbox").join(FILE_NAME);
    }
    local
}

pub fn parse(path: PathBuf, content: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str::<ConfigFile>(content).map_err(|source| ConfigError::Parse { path, source })
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(target: "config", path = %path.display(), "config_missing");
            return Ok(Config::default());
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_unreadable");
            return Ok(Config::default());
        }
    };
    match parse(path.clone(), &content) {
        Ok(file) => {
            debug!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Resolve `[theme]`, rejecting unknown names and malformed colors.
    pub fn try_palette(&self) -> Result<Palette, ConfigError> {
        let theme = &self.file.theme;
        let mut palette = match theme.name.as_deref() {
            Some(name) => {
                Palette::by_name(name).ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))?
            }
            None => Palette::default(),
        };
        let overrides = [
            ("background", &theme.background, &mut palette.background),
            ("primary", &theme.primary, &mut palette.primary),
            ("border", &theme.border, &mut palette.border),
        ];
        for (field, raw, slot) in overrides {
            if let Some(raw) = raw {
                *slot = parse_color(raw).map_err(|source| ConfigError::Color { field, source })?;
            }
        }
        Ok(palette)
    }

    /// Like [`Config::try_palette`], but logs the problem and uses the
    /// default palette instead of failing.
    pub fn palette(&self) -> Palette {
        self.try_palette().unwrap_or_else(|e| {
            warn!(target: "config", error = %e, "theme_fallback");
            Palette::default()
        })
    }

    /// The `[container]` table as construction options, in application order.
    pub fn container_options(&self) -> Vec<ContainerOption> {
        let section = &self.file.container;
        let PaddingConfig {
            top,
            right,
            bottom,
            left,
        } = section.padding;
        let (bt, br, bb, bl) = section.border.flags();
        vec![
            with_padding(top, right, bottom, left),
            with_border(bt, br, bb, bl),
            with_border_style(section.border_style.glyphs()),
            with_max_width(section.max_width),
            with_align(section.align.into()),
        ]
    }
}
