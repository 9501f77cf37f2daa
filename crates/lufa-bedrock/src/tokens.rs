//! Token accounting for Converse calls.

use lufa_core::models::usage::{ModelPricing, TokenCount, TokenUsage};

const fn per_million(input: f64, output: f64) -> ModelPricing {
    ModelPricing {
        input_per_million: input,
        output_per_million: output,
    }
}

/// USD per million tokens by model family, matched as a substring of the
/// model or inference-profile id. More specific families come first.
const PRICING: &[(&str, ModelPricing)] = &[
    ("claude-opus-4-5", per_million(5.0, 25.0)),
    ("claude-opus-4", per_million(15.0, 75.0)),
    ("claude-sonnet-4", per_million(3.0, 15.0)),
    ("claude-3-7-sonnet", per_million(3.0, 15.0)),
    ("claude-haiku-4-5", per_million(1.0, 5.0)),
    ("claude-3-5-haiku", per_million(0.80, 4.0)),
];

/// Token counts from a Converse response; negative counts read as zero.
pub fn extract_token_count(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: u64::try_from(usage.input_tokens).unwrap_or(0),
        output: u64::try_from(usage.output_tokens).unwrap_or(0),
    }
}

pub fn pricing_for(model_id: &str) -> Option<ModelPricing> {
    PRICING
        .iter()
        .find(|(family, _)| model_id.contains(family))
        .map(|(_, pricing)| *pricing)
}

/// Token usage with an estimated cost; the cost is zero for models missing
/// from the pricing table.
pub fn usage_for(model_id: &str, tokens: TokenCount) -> TokenUsage {
    match pricing_for(model_id) {
        Some(pricing) => pricing.usage(tokens),
        None => TokenUsage {
            tokens,
            cost_usd: 0.0,
        },
    }
}
