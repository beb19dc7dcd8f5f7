/// Cycles all the vertex positions forward by `n`, the loop starts at vertex `n`.
pub fn cycle_start_forward(input: &[(f64, f64, f64)], n: usize) -> Vec<(f64, f64, f64)> {
    assert!(n < input.len(), "cycling by the loop length is unnecessary");
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

/// Call `visit` with every start position of `input` (including the original one).
pub fn for_each_start_position<F>(input: &[(f64, f64, f64)], mut visit: F)
where
    F: FnMut(Vec<(f64, f64, f64)>, usize),
{
    for n in 0..input.len() {
        visit(cycle_start_forward(input, n), n);
    }
}
