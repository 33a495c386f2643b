//! Mergeable statistics.
//!
//! A stat is either a counter (merging adds) or a record (merging keeps the
//! larger value together with who set it and with which rank). On a tie the
//! record already held wins, so the first holder keeps the title.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Rank};

/// What a stat measures. The kind fixes whether it counts or compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    GamesPlayed,
    Wins,
    CardsPlayed,
    CardsDrawn,
    SpecialsPlayed,
    TurnsSkipped,
    Reversals,
    StacksResolved,
    Declarations,
    Reports,
    FalseReports,
    LongestStack,
    LargestHand,
}

impl StatKind {
    /// Counters add on merge; everything else keeps the maximum.
    #[must_use]
    pub const fn is_counter(self) -> bool {
        !matches!(self, StatKind::LongestStack | StatKind::LargestHand)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::GamesPlayed => "Games played",
            StatKind::Wins => "Wins",
            StatKind::CardsPlayed => "Cards played",
            StatKind::CardsDrawn => "Cards drawn",
            StatKind::SpecialsPlayed => "Special cards played",
            StatKind::TurnsSkipped => "Turns skipped",
            StatKind::Reversals => "Direction changes",
            StatKind::StacksResolved => "Stacks resolved",
            StatKind::Declarations => "Last cards declared",
            StatKind::Reports => "Successful reports",
            StatKind::FalseReports => "False reports",
            StatKind::LongestStack => "Longest stack",
            StatKind::LargestHand => "Largest hand",
        }
    }
}

/// A single statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Count {
        kind: StatKind,
        count: u64,
    },
    Record {
        kind: StatKind,
        value: u64,
        player: Option<PlayerId>,
        rank: Option<Rank>,
    },
}

impl Stat {
    /// A counter stat.
    #[must_use]
    pub fn count(kind: StatKind, count: u64) -> Self {
        assert!(kind.is_counter(), "{kind:?} is not a counter");
        Stat::Count { kind, count }
    }

    /// A record stat with its holder and, for stacks, the rank involved.
    #[must_use]
    pub fn record(kind: StatKind, value: u64, player: Option<PlayerId>, rank: Option<Rank>) -> Self {
        assert!(!kind.is_counter(), "{kind:?} is a counter");
        Stat::Record { kind, value, player, rank }
    }

    #[must_use]
    pub fn kind(&self) -> StatKind {
        match *self {
            Stat::Count { kind, .. } | Stat::Record { kind, .. } => kind,
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        match *self {
            Stat::Count { count, .. } => count,
            Stat::Record { value, .. } => value,
        }
    }

    /// Holder of a record stat.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            Stat::Count { .. } => None,
            Stat::Record { player, .. } => player,
        }
    }

    /// Merge `other` into this stat.
    ///
    /// Panics if the kinds differ.
    pub fn combine(&mut self, other: &Stat) {
        assert_eq!(self.kind(), other.kind(), "cannot combine different stat kinds");

        match (self, other) {
            (Stat::Count { count, .. }, Stat::Count { count: more, .. }) => *count += more,
            (Stat::Record { value, player, rank, .. }, Stat::Record { value: challenger, player: p, rank: r, .. }) => {
                if *challenger > *value {
                    *value = *challenger;
                    *player = *p;
                    *rank = *r;
                }
            }
            _ => unreachable!("a stat's kind fixes its shape"),
        }
    }

    /// Human-readable line, resolving player names through `name`.
    pub fn describe(&self, name: impl Fn(PlayerId) -> String) -> String {
        match *self {
            Stat::Count { kind, count } => format!("{}: {}", kind.label(), count),
            Stat::Record { kind, value, player, rank } => {
                let mut line = format!("{}: {}", kind.label(), value);
                if let Some(rank) = rank {
                    line.push_str(&format!(" ({rank})"));
                }
                if let Some(player) = player {
                    line.push_str(&format!(" by {}", name(player)));
                }
                line
            }
        }
    }
}

/// A set of stats keyed by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBook {
    entries: FxHashMap<StatKind, Stat>,
}

impl StatBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a stat into the entry of the same kind.
    pub fn add(&mut self, stat: Stat) {
        self.entries
            .entry(stat.kind())
            .and_modify(|existing| existing.combine(&stat))
            .or_insert(stat);
    }

    /// Shorthand for adding to a counter.
    pub fn bump(&mut self, kind: StatKind, count: u64) {
        self.add(Stat::count(kind, count));
    }

    #[must_use]
    pub fn get(&self, kind: StatKind) -> Option<&Stat> {
        self.entries.get(&kind)
    }

    /// Value of a stat, 0 if never recorded.
    #[must_use]
    pub fn value(&self, kind: StatKind) -> u64 {
        self.get(kind).map_or(0, Stat::value)
    }

    /// Merge every entry of `other` into this book.
    pub fn combine(&mut self, other: &StatBook) {
        for stat in other.entries.values() {
            self.add(*stat);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by kind.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Stat> {
        let mut stats: Vec<_> = self.entries.values().collect();
        stats.sort_by_key(|stat| stat.kind());
        stats
    }

    /// One line per stat, ordered by kind.
    pub fn summary(&self, name: impl Fn(PlayerId) -> String) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|stat| stat.describe(&name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_sum() {
        let mut stat = Stat::count(StatKind::CardsDrawn, 3);
        stat.combine(&Stat::count(StatKind::CardsDrawn, 4));
        assert_eq!(stat.value(), 7);
    }

    #[test]
    fn test_records_keep_maximum() {
        let mut stat = Stat::record(StatKind::LongestStack, 2, Some(PlayerId(0)), Some(Rank::Seven));
        stat.combine(&Stat::record(StatKind::LongestStack, 4, Some(PlayerId(1)), Some(Rank::Joker)));
        stat.combine(&Stat::record(StatKind::LongestStack, 3, Some(PlayerId(2)), Some(Rank::Nine)));

        assert_eq!(
            stat,
            Stat::record(StatKind::LongestStack, 4, Some(PlayerId(1)), Some(Rank::Joker))
        );
    }

    #[test]
    fn test_record_tie_keeps_first_holder() {
        let mut stat = Stat::record(StatKind::LargestHand, 9, Some(PlayerId(0)), None);
        stat.combine(&Stat::record(StatKind::LargestHand, 9, Some(PlayerId(1)), None));
        assert_eq!(stat.player(), Some(PlayerId(0)));
    }

    #[test]
    #[should_panic(expected = "cannot combine different stat kinds")]
    fn test_combine_mismatched_kinds() {
        let mut stat = Stat::count(StatKind::CardsDrawn, 1);
        stat.combine(&Stat::count(StatKind::CardsPlayed, 1));
    }

    #[test]
    #[should_panic(expected = "is not a counter")]
    fn test_record_kind_as_counter() {
        let _ = Stat::count(StatKind::LongestStack, 1);
    }

    #[test]
    fn test_book_combine() {
        let mut a = StatBook::new();
        a.bump(StatKind::CardsPlayed, 5);
        a.add(Stat::record(StatKind::LongestStack, 2, Some(PlayerId(0)), Some(Rank::Seven)));

        let mut b = StatBook::new();
        b.bump(StatKind::CardsPlayed, 2);
        b.bump(StatKind::Reports, 1);
        b.add(Stat::record(StatKind::LongestStack, 3, Some(PlayerId(1)), Some(Rank::Nine)));

        a.combine(&b);

        assert_eq!(a.value(StatKind::CardsPlayed), 7);
        assert_eq!(a.value(StatKind::Reports), 1);
        assert_eq!(a.value(StatKind::LongestStack), 3);
        assert_eq!(a.value(StatKind::Wins), 0);
    }

    #[test]
    fn test_summary_lines() {
        let mut book = StatBook::new();
        book.add(Stat::record(StatKind::LongestStack, 3, Some(PlayerId(1)), Some(Rank::Seven)));
        book.bump(StatKind::CardsPlayed, 12);

        let lines = book.summary(|p| format!("P{}", p.0));

        assert_eq!(lines, vec!["Cards played: 12".to_string(), "Longest stack: 3 (Seven) by P1".to_string()]);
    }

    #[test]
    fn test_book_serialization() {
        let mut book = StatBook::new();
        book.bump(StatKind::Wins, 1);
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: StatBook = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
