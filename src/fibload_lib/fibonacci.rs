/// Compute the n'th term of the Fibonacci sequence, starting at `Fib(1) = 1`.
///
/// This is the plain double recursion, with no cache of any kind, so
/// computing `Fib(n)` costs `O(Fib(n))` calls. That cost is the whole point:
/// it gives profilers and tracers something to look at.
///
/// Any `n <= 2` yields 1, the caller is expected to reject `n < 1` itself.
/// Overflow of the term for very large `n` is not guarded.
pub fn compute_term(n: i64) -> u64 {
    if n <= 2 {
        return 1;
    }

    compute_term(n - 1) + compute_term(n - 2)
}

/// Render the terms from `Fib(1)` up to `Fib(n)`, one per line.
///
/// Every line reads `Fib(<i>)\t= <term>`, lines are separated by a single
/// `\n` and there is no trailing newline. Each term is recomputed from
/// scratch. For `n < 1` the report is empty.
pub fn compute_sequence_report(n: i64) -> String {
    let mut report = String::new();

    for i in 1..=n {
        let term = compute_term(i);

        if !report.is_empty() {
            report.push('\n');
        }

        report.push_str(&format!("Fib({i})\t= {term}"));
    }

    report
}

#[cfg(test)]
#[path = "tests/fibonacci.rs"]
mod tests;
