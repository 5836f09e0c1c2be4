use crate::dependency_graph::domain::TreeNode;
use crate::shared::error::DepsError;
use serde::Deserialize;

/// TreeDecoder service for parsing `pipenv graph --json-tree` output
///
/// The report is a JSON array of package objects, each with a nested
/// `dependencies` array of the same shape. Ordering is preserved at every
/// level and repeated subtrees are kept verbatim.
///
/// Nesting depth is not limited: each package level costs two JSON levels
/// (the object and its `dependencies` array), so serde_json's default limit
/// is disabled and the stack grows on demand through `serde_stacker`.
pub struct TreeDecoder;

impl TreeDecoder {
    /// Decodes a raw report into its forest of top-level nodes
    ///
    /// # Errors
    /// Returns [`DepsError::Decode`] carrying the raw input and the
    /// underlying parse failure when the text does not match the schema.
    /// No partial forest is returned.
    pub fn decode(raw: &str) -> Result<Vec<TreeNode>, DepsError> {
        Self::decode_unbounded(raw).map_err(|source| DepsError::Decode {
            raw: raw.to_string(),
            source,
        })
    }

    fn decode_unbounded(raw: &str) -> Result<Vec<TreeNode>, serde_json::Error> {
        let mut json = serde_json::Deserializer::from_str(raw);
        json.disable_recursion_limit();

        let forest = Vec::<TreeNode>::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(forest)
    }
}
