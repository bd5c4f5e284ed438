//! Template registry: reads the configured XML template files, names each
//! template element by its `t-name` attribute, and serves them as one set.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use common::{DuplicateTemplate, TemplateSet};
use scraper::{Html, Selector};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Attribute carrying the template name.
pub const NAME_TEMPLATE_DIRECTIVE: &str = "t-name";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Duplicate(#[from] DuplicateTemplate),
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: TemplateSet,
    checksum: String,
}

impl TemplateRegistry {
    /// Loads every file of the manifest. Fails on the first unreadable file
    /// or duplicate template name.
    pub fn load(files: &[PathBuf]) -> Result<Self, TemplateError> {
        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            sources.push(read_template_file(path)?);
        }
        Self::from_sources(sources.iter().map(String::as_str))
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, TemplateError> {
        let mut templates = TemplateSet::new();
        let mut hasher = Sha256::new();
        let mut anonymous = 0usize;
        for source in sources {
            hasher.update(source.as_bytes());
            collect_templates(source, &mut templates, &mut anonymous)?;
        }
        let checksum = format!("{:x}", hasher.finalize());
        Ok(Self {
            templates,
            checksum,
        })
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Hex digest over the raw file contents, in manifest order.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

// kept separate so the registry itself stays testable on in-memory sources
fn read_template_file(path: &Path) -> Result<String, TemplateError> {
    fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn collect_templates(
    source: &str,
    out: &mut TemplateSet,
    anonymous: &mut usize,
) -> Result<(), TemplateError> {
    let fragment = Html::parse_fragment(source);
    let selector = Selector::parse("templates > *").expect("static selector");

    for element in fragment.select(&selector) {
        let name = match element.value().attr(NAME_TEMPLATE_DIRECTIVE) {
            Some(name) => name.to_owned(),
            None => {
                let name = format!("anonymous_template_{anonymous}");
                *anonymous += 1;
                name
            }
        };
        out.insert(name, element.html())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{TemplateError, TemplateRegistry};

    const APP_XML: &str = r#"<templates>
        <t t-name="App"><div class="o-app">storefront</div></t>
    </templates>"#;

    const HEADER_XML: &str = r#"<templates>
        <t t-name="Header"><nav>header</nav></t>
    </templates>"#;

    #[test]
    fn names_come_from_the_directive() {
        let registry = TemplateRegistry::from_sources([APP_XML, HEADER_XML]).unwrap();
        let names: Vec<_> = registry.templates().names().collect();
        assert_eq!(names, vec!["App", "Header"]);

        let app = registry.templates().get("App").unwrap();
        assert!(app.contains(r#"t-name="App""#));
        assert!(app.contains("storefront"));
    }

    #[test]
    fn unnamed_templates_get_deterministic_names() {
        let source = "<templates><t><p>a</p></t><t><p>b</p></t></templates>";
        let registry = TemplateRegistry::from_sources([source]).unwrap();
        let names: Vec<_> = registry.templates().names().collect();
        assert_eq!(names, vec!["anonymous_template_0", "anonymous_template_1"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let duplicated = r#"<templates><t t-name="App"/></templates>"#;
        let err = TemplateRegistry::from_sources([APP_XML, duplicated]).unwrap_err();
        assert!(matches!(err, TemplateError::Duplicate(name) if name.0 == "App"));
    }

    #[test]
    fn checksum_tracks_file_contents() {
        let a = TemplateRegistry::from_sources([APP_XML]).unwrap();
        let same = TemplateRegistry::from_sources([APP_XML]).unwrap();
        let other = TemplateRegistry::from_sources([HEADER_XML]).unwrap();
        assert_eq!(a.checksum(), same.checksum());
        assert_ne!(a.checksum(), other.checksum());
    }

    #[test]
    fn comments_and_text_are_skipped() {
        let source = "<templates><!-- note -->stray text<t t-name=\"Only\"/></templates>";
        let registry = TemplateRegistry::from_sources([source]).unwrap();
        assert_eq!(registry.templates().len(), 1);
        assert!(registry.templates().get("Only").is_some());
    }
}
