// Natural-language query pipeline.
// All model calls go through llm_client; all reads go through db::ContractStore.

pub mod dates;
pub mod handlers;
pub mod helper;
pub mod intent;
pub mod parse;
pub mod prompts;
pub mod sanitize;
pub mod summary;
