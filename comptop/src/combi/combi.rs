use itertools::Itertools;

/// All `r`-subsets of `0..n`, as increasing index vectors in lexicographic order.
/// 
/// e.g. `combi(4, 2)`: [0,1], [0,2], [0,3], [1,2], [1,3], [2,3].
pub fn combi(n: usize, r: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..n).combinations(r)
}

/// Number of `r`-subsets of an `n`-set.
pub fn binom(n: usize, r: usize) -> usize { 
    if r > n { 
        return 0
    }
    let r = r.min(n - r);
    (0..r).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
