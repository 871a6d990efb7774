//! Token counting for skeleton statistics

use tiktoken_rs::cl100k_base;

use crate::error::{Result, SummarizeError};

/// cl100k token count of `text`
pub fn count_tokens(text: &str) -> Result<usize> {
    let bpe = cl100k_base()
        .map_err(|e| SummarizeError::internal(format!("tokenizer unavailable: {e}")))?;
    Ok(bpe.encode_with_special_tokens(text).len())
}
