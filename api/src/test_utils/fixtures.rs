//! Test fixtures
//!
//! Raw Jupiter payloads with realistic quirks.

use serde_json::{json, Value};

pub const JUP_MINT: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN";
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

/// Cooking-tokens items: two tokens carrying five usable records, plus
/// an item without a mint that must be ignored
pub fn cooking_payload() -> Value {
    json!([
        {
            "mint": JUP_MINT,
            "name": "Jupiter",
            "symbol": "JUP",
            "decimals": 6,
            "icon": "https://static.jup.ag/jup/icon.png",
            "organicScore": 98.5,
            "contents": [
                {
                    "contentId": "tw-1",
                    "contentType": "tweet",
                    "content": "JUP staking rewards are live",
                    "submittedBy": { "username": "jupuary" },
                    "url": "https://x.com/jupuary/status/1",
                    "postedAt": "2025-05-30T09:00:00Z",
                    "updatedAt": "2025-05-30T09:05:00Z"
                },
                { "contentId": "tw-2", "content": "   " }
            ],
            "tokenSummary": {
                "summaryShort": "Solana's main swap aggregator.",
                "summaryFull": "Jupiter routes most swap volume on Solana.",
                "citations": ["https://station.jup.ag"],
                "updatedAt": "2025-05-29T00:00:00Z"
            }
        },
        {
            "mint": BONK_MINT,
            "symbol": "Bonk",
            "decimals": 5,
            "logoURI": "https://arweave.net/bonk.png",
            "contents": [
                { "text": "Burn proposal passed", "submittedBy": "bonkdev", "type": "text" },
                { "id": 77, "content": "Community call at 5pm UTC" }
            ],
            "newsSummary": { "summaryShort": "BONK listed on a new perp venue." }
        },
        {
            "name": "Mystery token",
            "contents": [{ "content": "no mint, never shown" }]
        }
    ])
}

/// Content-by-mints response wrapped under `data`
pub fn content_payload() -> Value {
    json!({
        "data": [
            {
                "mint": "MintA",
                "contents": [
                    { "contentId": "a-1", "content": "first" },
                    { "contentId": "a-2", "text": "second", "submittedBy": { "username": "anon" } }
                ]
            },
            {
                "mint": "MintB",
                "newsSummary": { "summaryFull": "MintB news" }
            }
        ]
    })
}

/// Search response using Jupiter's `id`/`icon`/`holderCount` naming
pub fn search_payload() -> Value {
    json!([
        {
            "id": JUP_MINT,
            "name": "Jupiter",
            "symbol": "JUP",
            "decimals": 6,
            "icon": "https://static.jup.ag/jup/icon.png",
            "tags": ["verified"],
            "organicScore": 98.5,
            "marketCap": 1_500_000_000.0,
            "holderCount": 812_345
        },
        {
            "mint": "MintOther111",
            "name": "Other",
            "symbol": "OTH",
            "holders": 12
        },
        { "name": "missing mint" }
    ])
}
