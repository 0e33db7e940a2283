//! Subject/predicate pairing over a pool of parsed headlines.

use headmix_protocol::ParsedHeadline;

/// Pool indices of one subject source and one predicate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub subject: usize,
    pub predicate: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairPlan {
    pub pairs: Vec<Pairing>,
    /// Positions where the predicate slot was swapped with a neighbour.
    pub repairs: usize,
    /// Positions dropped because the repair still paired a headline with itself.
    pub self_pairs: usize,
}

fn same_origin(pool: &[ParsedHeadline], a: usize, b: usize) -> bool {
    a == b || pool[a].original_text() == pool[b].original_text()
}

/// Walks subjects in pool order against `order` (a permutation of pool
/// indices used for predicates) for `min(count, pool.len())` positions.
///
/// A position whose two sources share an origin gets one repair: its
/// predicate slot is swapped with the next one, or the previous one at the
/// last position. Positions still self-paired after that are dropped.
/// Entries of `order` outside the pool are ignored.
pub fn plan_pairs(pool: &[ParsedHeadline], order: &[usize], count: usize) -> PairPlan {
    let mut plan = PairPlan::default();
    if pool.len() < 2 {
        return plan;
    }

    let mut order: Vec<usize> = order.iter().copied().filter(|&i| i < pool.len()).collect();
    if order.len() < 2 {
        return plan;
    }
    let steps = count.min(pool.len()).min(order.len());

    for subject in 0..steps {
        if same_origin(pool, subject, order[subject]) {
            let neighbour = if subject + 1 < order.len() { subject + 1 } else { subject - 1 };
            order.swap(subject, neighbour);
            plan.repairs += 1;
        }
        let predicate = order[subject];
        if same_origin(pool, subject, predicate) {
            plan.self_pairs += 1;
            continue;
        }
        plan.pairs.push(Pairing { subject, predicate });
    }
    plan
}
