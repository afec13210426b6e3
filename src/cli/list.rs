//! List command.
//!
//! Lists both key namespaces. Files that fail to load are reported as
//! warnings on stderr and left out of the listing.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::types::Namespace;
use crate::error::Result;

/// List keys.
pub fn execute(dir: Option<&Path>, json: bool) -> Result<()> {
    let store = resolve::store(dir)?;

    if json {
        let private: Vec<_> = store
            .private_keys()
            .map(|(name, key)| serde_json::json!({ "name": name, "bits": key.bits() }))
            .collect();
        let public: Vec<_> = store
            .public_keys()
            .map(|(name, key)| serde_json::json!({ "name": name, "bits": key.bits() }))
            .collect();

        let result = serde_json::json!({
            "private": private,
            "public": public,
            "count": private.len() + public.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if store.is_empty() {
        output::dimmed("no keys");
        output::hint("create one with: keybox new <name>");
        return Ok(());
    }

    section(
        Namespace::Private,
        store.len(Namespace::Private),
        store.private_keys().map(|(name, key)| (name, key.bits())),
    );
    section(
        Namespace::Public,
        store.len(Namespace::Public),
        store.public_keys().map(|(name, key)| (name, key.bits())),
    );

    Ok(())
}

fn section<'a>(namespace: Namespace, len: usize, keys: impl Iterator<Item = (&'a str, usize)>) {
    output::blank();
    output::header(&format!("{} {} keys", output::count(len), namespace));
    output::rule();
    if len == 0 {
        output::dimmed("  none");
    }
    for (name, bits) in keys {
        output::kv(name, format!("{} bits", bits));
    }
}
