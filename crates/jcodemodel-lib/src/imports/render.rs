//! Rendering of import statements.

use super::{Config, ImportSet};
use crate::model::CodeModel;

impl ImportSet {
    /// Render `import` statements, one per line.
    ///
    /// `java`/`javax` imports form the first block; a blank line separates
    /// them from the rest. An empty listing renders as an empty string.
    pub fn render(&self, model: &CodeModel, config: &Config) -> String {
        let c = config.colors;
        let mut out = String::new();
        let mut in_java_group = None;

        for id in self.sorted(model, config) {
            let name = model.full_name(id);
            let is_java = name.starts_with("java");
            if in_java_group == Some(true) && !is_java {
                out.push('\n');
            }
            in_java_group = Some(is_java);

            out.push_str(&format!(
                "{}import{} {}{}{}{};{}\n",
                c.keyword, c.reset, c.class, name, c.reset, c.label, c.reset
            ));
        }

        out
    }
}
