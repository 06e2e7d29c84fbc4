/// Balancing strategies for weighted union.
///
/// A policy decides which of two roots survives a merge and how the weight
/// array changes. `ByHeight` and `ByDepth` track a structural bound that is
/// only consulted at merge time: when the two roots differ, the loser is
/// attached under the winner and *neither* weight is rewritten, so non-root
/// entries (and even the winner's bound) go stale. This mirrors the classic
/// height-weighted formulation and is intentional, not an accounting bug.
/// `BySize` keeps root weights as exact component sizes at all times.
pub trait Balance {
    /// Short variant name used in diagnostic dumps.
    const NAME: &'static str;

    /// Attach one root beneath the other. `root_p` and `root_q` are distinct
    /// roots; on return exactly one of them is a child of the other.
    fn link(parent: &mut [usize], weight: &mut [usize], root_p: usize, root_q: usize);
}

/// Union by subtree height, ties broken toward `root_p`.
pub struct ByHeight;

/// Union by subtree depth. Same merge rule as [`ByHeight`]; the variants
/// differ only in which structural bound the weight array is read as.
pub struct ByDepth;

/// Union by subtree size, additively accumulated on every merge.
pub struct BySize;

impl Balance for ByHeight {
    const NAME: &'static str = "height";

    fn link(parent: &mut [usize], weight: &mut [usize], root_p: usize, root_q: usize) {
        link_by_bound(parent, weight, root_p, root_q);
    }
}

impl Balance for ByDepth {
    const NAME: &'static str = "depth";

    fn link(parent: &mut [usize], weight: &mut [usize], root_p: usize, root_q: usize) {
        link_by_bound(parent, weight, root_p, root_q);
    }
}

impl Balance for BySize {
    const NAME: &'static str = "size";

    fn link(parent: &mut [usize], weight: &mut [usize], root_p: usize, root_q: usize) {
        if weight[root_p] < weight[root_q] {
            parent[root_p] = root_q;
            weight[root_q] += weight[root_p];
        } else {
            parent[root_q] = root_p;
            weight[root_p] += weight[root_q];
        }
    }
}

/// Shared merge rule for the height and depth bounds: smaller under larger
/// with no weight update; equal bounds attach `root_q` under `root_p` and
/// grow the surviving bound by one.
fn link_by_bound(parent: &mut [usize], weight: &mut [usize], root_p: usize, root_q: usize) {
    if weight[root_p] < weight[root_q] {
        parent[root_p] = root_q;
    } else if weight[root_p] == weight[root_q] {
        parent[root_q] = root_p;
        weight[root_p] += 1;
    } else {
        parent[root_q] = root_p;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_link_unequal_leaves_weights_stale() {
        let mut parent = vec![0, 1];
        let mut weight = vec![3, 1];
        ByHeight::link(&mut parent, &mut weight, 0, 1);
        assert_eq!(parent, vec![0, 0]);
        // Neither the winner's nor the loser's bound moves.
        assert_eq!(weight, vec![3, 1]);
    }

    #[test]
    fn bound_link_equal_grows_winner() {
        let mut parent = vec![0, 1];
        let mut weight = vec![1, 1];
        ByDepth::link(&mut parent, &mut weight, 0, 1);
        assert_eq!(parent, vec![0, 0]);
        assert_eq!(weight, vec![2, 1]);
    }

    #[test]
    fn bound_link_smaller_goes_under_larger() {
        let mut parent = vec![0, 1];
        let mut weight = vec![1, 2];
        ByHeight::link(&mut parent, &mut weight, 0, 1);
        assert_eq!(parent, vec![1, 1]);
        assert_eq!(weight, vec![1, 2]);
    }

    #[test]
    fn size_link_accumulates() {
        let mut parent = vec![0, 1];
        let mut weight = vec![2, 5];
        BySize::link(&mut parent, &mut weight, 0, 1);
        assert_eq!(parent, vec![1, 1]);
        assert_eq!(weight[1], 7);
    }

    #[test]
    fn size_link_tie_attaches_q_under_p() {
        let mut parent = vec![0, 1];
        let mut weight = vec![4, 4];
        BySize::link(&mut parent, &mut weight, 0, 1);
        assert_eq!(parent, vec![0, 0]);
        assert_eq!(weight[0], 8);
    }
}
