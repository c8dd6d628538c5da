/// Suffix substitutions in application order. Replacement text carries no suffix letters, so
/// each letter of the input is rewritten exactly once.
pub const SUFFIX_SUBSTITUTIONS: [(char, &str); 6] = [
    ('k', "*1000"),
    ('M', "*1000000"),
    ('m', "*0.001"),
    ('u', "*0.000001"),
    ('n', "*0.000000001"),
    ('p', "*0.000000000001"),
];

/// Rewrites engineering suffixes into a multiplicative expression, e.g. `"4.7k"` -> `"4.7*1000"`.
///
/// Every occurrence of a suffix letter is replaced, not only a trailing one, and nothing is
/// evaluated. Characters outside the suffix set pass through untouched, rejecting them is up to
/// the solver.
pub fn expand_value_expression(raw: &str) -> String {
    SUFFIX_SUBSTITUTIONS
        .iter()
        .fold(raw.to_string(), |expr, (suffix, factor)| {
            expr.replace(*suffix, factor)
        })
}
