//! Raw manifest types for `global.json` and `project.json`.
//!
//! These types mirror the JSON directly. `resolve` turns a `ProjectManifest`
//! into a `Project` with an absolute root and a settled name.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Root structure of the solution manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionManifest {
  /// Search-root folder names relative to the solution root, in declaration order.
  /// `None` when the key is absent.
  #[serde(default)]
  pub projects: Option<Vec<String>>,
}

/// Root structure of a project manifest. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
  /// Overrides the directory-derived project name.
  #[serde(default)]
  pub name: Option<String>,

  /// Logical name -> source path, relative to the project root.
  #[serde(default, deserialize_with = "deserialize_named_resources")]
  pub named_resource: Vec<OverrideRequest>,

  /// Extra include globs, relative to the project root.
  #[serde(default)]
  pub resources: Vec<String>,

  /// Exclude globs. `None` means the layout defaults apply.
  #[serde(default)]
  pub exclude: Option<Vec<String>>,
}

/// A request to compile `source` under `logical_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRequest {
  pub logical_name: String,
  /// As written in the manifest; may contain `..` segments.
  pub source: String,
}

impl OverrideRequest {
  pub fn new(
    logical_name: impl Into<String>,
    source: impl Into<String>,
  ) -> Self {
    Self {
      logical_name: logical_name.into(),
      source: source.into(),
    }
  }
}

/// Visits the `namedResource` object entry by entry.
///
/// Going through a map type would reorder entries or drop repeated keys;
/// both must survive so the resource merge can report duplicates.
fn deserialize_named_resources<'de, D>(deserializer: D) -> Result<Vec<OverrideRequest>, D::Error>
where
  D: Deserializer<'de>,
{
  struct NamedResourceVisitor;

  impl<'de> Visitor<'de> for NamedResourceVisitor {
    type Value = Vec<OverrideRequest>;

    fn expecting(
      &self,
      f: &mut fmt::Formatter,
    ) -> fmt::Result {
      f.write_str("an object mapping logical resource names to paths")
    }

    fn visit_map<A>(
      self,
      mut map: A,
    ) -> Result<Self::Value, A::Error>
    where
      A: MapAccess<'de>,
    {
      let mut requests = Vec::with_capacity(map.size_hint().unwrap_or(0));

      while let Some((logical_name, source)) = map.next_entry::<String, String>()? {
        requests.push(OverrideRequest { logical_name, source });
      }

      Ok(requests)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
      E: serde::de::Error,
    {
      Ok(Vec::new())
    }
  }

  deserializer.deserialize_any(NamedResourceVisitor)
}

/// Parse manifest text, treating blank content as `{}`.
pub(crate) fn parse_manifest<T>(content: &str) -> Result<T, serde_json::Error>
where
  T: for<'de> Deserialize<'de> + Default,
{
  if content.trim().is_empty() {
    return Ok(T::default());
  }

  serde_json::from_str(content)
}
