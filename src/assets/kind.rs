//! Script and style asset kinds

use std::fmt;

/// The two kinds of asset the pipeline bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Style];

    /// Directory name used under both the source and output roots
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Script => "scripts",
            AssetKind::Style => "styles",
        }
    }

    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Style => "css",
        }
    }

    /// Render a single reference tag for a public path
    ///
    /// `group` is only used by styles, as the link title.
    pub fn tag(self, public_path: &str, group: &str) -> String {
        match self {
            AssetKind::Style => format!(
                "<link rel='stylesheet' href='/{public_path}' type='text/css' media='all' title='{group}' charset='utf-8'>\n"
            ),
            AssetKind::Script => format!(
                "<script src='/{public_path}' type='text/javascript' charset='utf-8'></script>\n"
            ),
        }
    }

    /// Parse a kind from its directory name or a singular alias
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "scripts" | "script" | "js" => Some(AssetKind::Script),
            "styles" | "style" | "css" => Some(AssetKind::Style),
            _ => None,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
