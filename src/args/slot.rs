//! `minecraft:item_slot`.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::base::RangeString;
use crate::parser::{ParseResult, Reporter};
use crate::syntax::TokenType;

use super::Example;
use super::unquoted::UnquotedHook;

static KNOWN_SLOTS: LazyLock<FxHashSet<String>> = LazyLock::new(|| {
    let numbered = [
        ("container", 53),
        ("hotbar", 8),
        ("inventory", 26),
        ("enderchest", 26),
        ("villager", 7),
        ("horse", 14),
    ];
    let named = [
        "weapon",
        "weapon.mainhand",
        "weapon.offhand",
        "armor.head",
        "armor.chest",
        "armor.legs",
        "armor.feet",
        "horse.saddle",
        "horse.armor",
        "horse.chest",
    ];
    numbered
        .into_iter()
        .flat_map(|(group, last)| (0..=last).map(move |i| format!("{group}.{i}")))
        .chain(named.into_iter().map(String::from))
        .collect()
});

#[derive(Debug, Default)]
pub struct SlotHook;

impl UnquotedHook for SlotHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        let text = value.as_str();
        if !KNOWN_SLOTS.contains(text) && text.parse::<u32>().is_err() {
            res.err(value.range(), &format!("SlotArgument: unknown slot '{text}'"));
        }
        res.token(value.range(), TokenType::Slot);
    }

    fn examples(&self) -> Vec<Example> {
        ["weapon.mainhand", "container.0", "hotbar.8", "armor.head"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}
