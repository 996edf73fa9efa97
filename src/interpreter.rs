//! Turns a raw transcript into a structured cart command.
//!
//! Matching is deliberately plain substring containment on a case-folded
//! transcript. The upstream speech service returns short, clean phrases, so
//! tokenized or fuzzy matching buys nothing here and would change which
//! items match. Callers that want different behavior must change this
//! contract explicitly, not the implementation.

use voicecart_types::MenuItem;

/// The interpreted intent of one transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The transcript asked to place the order. Checkout keywords take
    /// precedence over item names: a transcript containing both is purely a
    /// checkout.
    Checkout,
    /// Menu items whose names appeared in the transcript, in menu order.
    /// Never empty.
    AddItems(Vec<MenuItem>),
    /// Neither a checkout keyword nor any menu item name was found.
    NoMatch,
}

const CHECKOUT_KEYWORDS: [&str; 2] = ["checkout", "place order"];

/// Interprets `transcript` against `menu`.
///
/// The checkout-keyword check runs first and short-circuits item matching
/// entirely. Item matching includes every menu item whose case-folded name
/// is a substring of the case-folded transcript, preserving menu order.
pub fn interpret(transcript: &str, menu: &[MenuItem]) -> Command {
    let command = transcript.to_lowercase();

    if CHECKOUT_KEYWORDS.iter().any(|kw| command.contains(kw)) {
        return Command::Checkout;
    }

    let matches: Vec<MenuItem> = menu
        .iter()
        .filter(|item| command.contains(&item.name.to_lowercase()))
        .cloned()
        .collect();

    if matches.is_empty() {
        Command::NoMatch
    } else {
        Command::AddItems(matches)
    }
}
