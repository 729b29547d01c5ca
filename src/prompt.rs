//! System prompt composition
//!
//! Builds the fixed instruction for the inference call: the assistant
//! persona, the per-provider connection status in encounter order, and the
//! static routing guidance for which provider covers which domain.

use crate::mcp::aggregator::ConnectOutcome;

/// Compose the system instruction from the per-provider connect log
///
/// Deterministic: the same outcome sequence always yields byte-identical
/// output.
pub fn compose_system_prompt(outcomes: &[ConnectOutcome]) -> String {
    let modules = outcomes
        .iter()
        .map(|outcome| {
            let tag = if outcome.succeeded { "✅" } else { "❌" };
            format!("{} {}", tag, outcome.provider_id)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a Senior Cloudflare Architect.\n\
         Connected Modules: {modules}.\n\
         - Use 'docs' for documentation lookups.\n\
         - Use 'radar' for traffic, bot and IPv6 statistics.\n\
         - Use 'bindings' to list user resources."
    )
}
