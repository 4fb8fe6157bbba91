//! Human-readable byte counts.

use markupui_core::{Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html};

/// Configuration for [`FileSize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileSizeConfig {
    /// Size in bytes.
    pub bytes: u64,
}

impl Block for FileSizeConfig {
    const NAME: &'static str = "file-size";
}

impl Build for FileSizeConfig {
    #[allow(clippy::cast_precision_loss)]
    fn build(&self, env: &Environment) -> Node {
        let exact = format!(
            "{} {}",
            env.format_number(self.bytes as f64, 0),
            env.translate(if self.bytes == 1 { "byte" } else { "bytes" })
        );
        html::span()
            .class(Self::NAME)
            .attr("title", exact)
            .text(env.format_bytes(self.bytes))
            .into()
    }
}

configurable!(
    /// A byte count such as `1.5 MiB`, with the exact count as its title.
    FileSize,
    FileSizeConfig
);

impl FileSize {
    /// Shows `bytes`.
    pub fn new(env: &Environment, bytes: u64) -> Self {
        Self::from_config(env, FileSizeConfig { bytes })
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::{Config, Render};

    use super::*;

    #[test]
    fn binary_units_by_default() {
        let env = Environment::new();
        assert_eq!(
            FileSize::new(&env, 1_572_864).render(),
            r#"<span class="file-size" title="1,572,864 bytes">1.5 MiB</span>"#
        );
    }

    #[test]
    fn decimal_units_from_config() {
        let env = Environment::builder()
            .config(Config {
                binary_units: false,
                ..Config::default()
            })
            .build();
        assert!(FileSize::new(&env, 1_500_000).render().ends_with(">1.5 MB</span>"));
    }

    #[test]
    fn small_counts() {
        let env = Environment::new();
        assert_eq!(
            FileSize::new(&env, 1).render(),
            r#"<span class="file-size" title="1 byte">1 B</span>"#
        );
    }
}
