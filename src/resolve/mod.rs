//! Destination image derivation.
//!
//! A source image is stripped of the registry path of the repository it was
//! pulled from, then re-rooted under the registry path of the selected
//! destination repository.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::RepushError;
use crate::model::Config;

/// Prefix marking a selector as a literal destination image.
pub const LITERAL_PREFIX: char = '!';

/// Full destination for a run: derivation, global mappings, then tag override.
pub fn plan(
    image: &str,
    selector: &str,
    config: &Config,
    tag: Option<&str>,
) -> Result<String, RepushError> {
    let derived = derive_destination(image, selector, config)?;
    let mapped = apply_mapping(&derived, &config.destination_mappings);
    if mapped != derived {
        debug!(from = %derived, to = %mapped, "applied global destination mapping");
    }
    Ok(match tag {
        Some(t) => override_tag(&mapped, t),
        None => mapped,
    })
}

pub fn derive_destination(
    image: &str,
    selector: &str,
    config: &Config,
) -> Result<String, RepushError> {
    // Literal destinations skip source matching as well, so any image can be
    // pushed to them.
    if let Some(literal) = selector.strip_prefix(LITERAL_PREFIX) {
        if literal.is_empty() {
            return Err(RepushError::DestinationRepositoryNotFound {
                selector: selector.to_string(),
            });
        }
        debug!(destination = literal, "using literal destination");
        return Ok(literal.to_string());
    }

    let path = strip_source_registry(image, config)?;

    let repo = config.find_by_selector(selector).ok_or_else(|| {
        RepushError::DestinationRepositoryNotFound {
            selector: selector.to_string(),
        }
    })?;
    debug!(repository = %repo.name, path, "matched destination repository");

    let joined = format!("{}/{}", repo.registry_path(), path);
    Ok(apply_mapping(&joined, &repo.destination_mappings))
}

/// Image path with the source repository's registry path removed. Images
/// without any `/` are taken as already registry-less.
fn strip_source_registry<'a>(image: &'a str, config: &Config) -> Result<&'a str, RepushError> {
    if !image.contains('/') {
        return Ok(image);
    }

    config
        .repositories
        .iter()
        .find_map(|repo| {
            let prefix = format!("{}/", repo.registry_path());
            image.strip_prefix(prefix.as_str()).inspect(|_| {
                debug!(repository = %repo.name, "matched source repository");
            })
        })
        .ok_or_else(|| RepushError::SourceRepositoryNotFound {
            image: image.to_string(),
        })
}

/// Replace the first occurrence of the first mapping key found in `path`.
/// At most one substitution is made.
pub fn apply_mapping(path: &str, mapping: &BTreeMap<String, String>) -> String {
    mapping
        .iter()
        .find(|(from, _)| path.contains(from.as_str()))
        .map(|(from, to)| path.replacen(from.as_str(), to, 1))
        .unwrap_or_else(|| path.to_string())
}

/// Replace the image tag, or append one when there is none. A `:` followed
/// by a `/` belongs to a registry port, not a tag.
pub fn override_tag(image: &str, tag: &str) -> String {
    match image.rfind(':') {
        Some(i) if !image[i..].contains('/') => format!("{}:{tag}", &image[..i]),
        _ => format!("{image}:{tag}"),
    }
}
