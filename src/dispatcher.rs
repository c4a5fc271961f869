/// Sends the selected problem to the completion backend.
use anyhow::Result;

use crate::backend::CompletionBackend;
use crate::catalog::ProblemEntry;

/// Shell prompt format the answers should assume.
pub const PS1: &str = r"[\u@\h] \W \$";

/// Fixed instruction, followed by the raw problem text.
pub fn system_prompt(content: &str) -> String {
    format!("以下の問題を解決します。\n\nPS1は`{PS1}`が設定されています。\n\n\n問題: {content}\n")
}

/// Exactly one request per call; the reply comes back trimmed.
pub async fn dispatch(backend: &dyn CompletionBackend, entry: &ProblemEntry) -> Result<String> {
    tracing::info!("sending {} ({} bytes)", entry.filename, entry.content.len());
    let reply = backend.complete(&system_prompt(&entry.content), "").await?;
    tracing::info!("answer received ({} bytes)", reply.len());
    Ok(reply.trim().to_string())
}
