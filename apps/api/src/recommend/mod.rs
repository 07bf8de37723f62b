// Recommendation Synthesis & Parsing Pipeline.
// Implements: signal aggregation, prompt construction, completion call,
// reply parsing. All completion calls go through `completion` — no direct
// provider calls here. The reply format lives in `format`, shared by the
// prompt builder and the parser.

pub mod format;
pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod signals;
