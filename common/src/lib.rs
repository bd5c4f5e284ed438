use std::collections::BTreeMap;

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path the frontend bootstrap fetches the template set from.
pub const LOADQWEB_PATH: &str = "/loadqweb";

/// Shared application state handed to the mount call and threaded through
/// the component tree as context.
///
/// Reserved for services and session data, carries no fields yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("template {0:?} is defined more than once")]
pub struct DuplicateTemplate(pub String);

/// Named markup definitions consumed by the rendering side.
///
/// The bootstrap treats the set as opaque, components may look their own
/// template up by name. Serializes as a plain JSON object of
/// `name -> markup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, From, Into)]
#[serde(transparent)]
pub struct TemplateSet(BTreeMap<String, String>);

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under a unique name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        markup: impl Into<String>,
    ) -> Result<(), DuplicateTemplate> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(DuplicateTemplate(name));
        }
        self.0.insert(name, markup.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Response envelope used by the backend endpoints.
///
/// `{"result": ...}` on success, `{"error": "..."}` on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RpcResponse<T> {
    #[serde(rename = "error")]
    Error(String),
    #[serde(rename = "result")]
    Result(T),
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            RpcResponse::Result(value) => Ok(value),
            RpcResponse::Error(message) => Err(message),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{RpcResponse, TemplateSet};

    #[test]
    fn template_set_rejects_duplicates() {
        let mut set = TemplateSet::new();
        set.insert("App", "<div/>").unwrap();
        let err = set.insert("App", "<span/>").unwrap_err();
        assert_eq!(err.0, "App");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("App"), Some("<div/>"));
    }

    #[test]
    fn template_set_wire_shape() {
        let mut set = TemplateSet::new();
        set.insert("tmpl", "<xml/>").unwrap();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"{"tmpl":"<xml/>"}"#
        );
    }

    #[test]
    fn envelope_wire_shapes() {
        let ok = RpcResponse::Result(5u32);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"result":5}"#);

        let err = RpcResponse::<u32>::Error("boom".into());
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"error":"boom"}"#);

        let decoded: RpcResponse<u32> = serde_json::from_str(r#"{"result":5}"#).unwrap();
        assert_eq!(decoded.into_result(), Ok(5));
    }

    #[test]
    fn loadqweb_response_decodes() {
        let decoded: RpcResponse<TemplateSet> =
            serde_json::from_str(r#"{"result":{"tmpl":"<xml/>"}}"#).unwrap();
        let templates = decoded.into_result().unwrap();
        assert_eq!(templates.get("tmpl"), Some("<xml/>"));
        assert_eq!(templates.names().collect::<Vec<_>>(), vec!["tmpl"]);
    }
}
