use serde::{Deserialize, Serialize};

/// How graph files are discovered and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Every keyword must appear in the file name.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Capture group 1 is the entity label.
    #[serde(default = "default_label_pattern")]
    pub label_pattern: String,
    #[serde(default)]
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
            keywords: default_keywords(),
            label_pattern: default_label_pattern(),
            recursive: false,
        }
    }
}

fn default_suffixes() -> Vec<String> {
    vec![".ssv".into(), ".csv".into()]
}
fn default_keywords() -> Vec<String> {
    vec!["sub-".into(), "ds_adj".into()]
}
fn default_label_pattern() -> String {
    "sub-([0-9]*)_".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_true")]
    pub pass_to_ranks: bool,
    #[serde(default = "default_true")]
    pub drop_singletons: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            pass_to_ranks: true,
            drop_singletons: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Digits after the decimal point in the feature file.
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            delimiter: default_delimiter(),
            manifest: true,
        }
    }
}

const fn default_true() -> bool { true }
const fn default_precision() -> usize { 6 }
fn default_delimiter() -> String { ",".to_string() }

/// On-disk layout of `graphdiscrim.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphDiscrimToml {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: InputConfig,
    pub stats: StatsConfig,
    pub output: OutputConfig,
}
