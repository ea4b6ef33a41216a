//! HTML template registry backed by `minijinja`.

use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Engine(#[from] minijinja::Error),
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Loads every regular file directly inside `dir`, keyed by file name.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let io_error = |source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut sources = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let source = std::fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                path: path.clone(),
                source,
            })?;
            sources.push((name.to_owned(), source));
        }
        sources.sort_by(|a, b| a.0.cmp(&b.0));

        let templates = Self::from_sources(sources)?;
        tracing::debug!(dir = %dir.display(), names = ?templates.names(), "templates loaded");
        Ok(templates)
    }

    pub fn from_sources<I, N, S>(sources: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = Environment::new();
        // `.tmpl` files get no escaping by default; every template here is HTML.
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        for (name, source) in sources {
            env.add_template_owned(name.into(), source.into())?;
        }
        Ok(Self { env })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: C) -> Result<String, TemplateError> {
        Ok(self.env.get_template(name)?.render(context)?)
    }

    pub fn names(&self) -> Vec<String> {
        self.env
            .templates()
            .map(|(name, _)| name.to_owned())
            .collect()
    }
}
