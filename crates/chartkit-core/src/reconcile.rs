// File: crates/chartkit-core/src/reconcile.rs
// Summary: Match a rebuilt bar list against the previous one so transitions start from old geometry.
// Notes:
// - Positional matching looks at the same array index and accepts it only when the ids agree.
//   Inserting or removing slots mid-list therefore re-targets neighbouring bars.
// - Keyed matching looks the id up anywhere in the previous list.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::bar::{Bar, BarId};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Index `i` of the new list against index `i` of the old one.
    #[default]
    Positional,
    /// By `BarId`, independent of position.
    Keyed,
}

/// One rebuilt bar and the previous bar it continues from, if any.
#[derive(Clone, Copy, Debug)]
pub struct Matched<'a> {
    pub current: &'a Bar,
    pub previous: Option<&'a Bar>,
}

impl Matched<'_> {
    /// Start geometry: the previous bar's final frame, or a collapsed frame so new bars grow in.
    pub fn from_rect(&self) -> Rect {
        self.previous.map_or_else(|| self.current.collapsed_rect(), |p| p.rect)
    }

    pub fn to_rect(&self) -> Rect {
        self.current.rect
    }
}

#[derive(Clone, Debug, Default)]
pub struct Reconciliation<'a> {
    pub matches: Vec<Matched<'a>>,
    /// Previous bars with no counterpart in the new list.
    pub removed: Vec<BarId>,
}

impl Reconciliation<'_> {
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.previous.is_some()).count()
    }
}

pub fn reconcile<'a>(previous: &'a [Bar], current: &'a [Bar], policy: MatchPolicy) -> Reconciliation<'a> {
    let matches: Vec<Matched<'a>> = match policy {
        MatchPolicy::Positional => current
            .iter()
            .enumerate()
            .map(|(i, bar)| Matched { current: bar, previous: previous.get(i).filter(|p| p.id == bar.id) })
            .collect(),
        MatchPolicy::Keyed => {
            let by_id: HashMap<BarId, &Bar> = previous.iter().map(|b| (b.id, b)).collect();
            current
                .iter()
                .map(|bar| Matched { current: bar, previous: by_id.get(&bar.id).copied() })
                .collect()
        }
    };

    let kept: HashSet<BarId> = matches.iter().filter_map(|m| m.previous.map(|p| p.id)).collect();
    let removed = previous.iter().map(|b| b.id).filter(|id| !kept.contains(id)).collect();
    Reconciliation { matches, removed }
}

/// Every bar with no previous counterpart; used for an initial build.
pub fn fresh(current: &[Bar]) -> Reconciliation<'_> {
    reconcile(&[], current, MatchPolicy::Positional)
}
