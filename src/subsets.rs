//! Three enumerations of all subsets of a sequence.
//!
//! Each algorithm returns all `2^n` subsets of the input, including the empty subset
//! and the full sequence, with every subset preserving the input's relative element
//! order. The three results are equal as sets of subsets; their emission orders are
//! implementation artifacts.
//!
//! Output size is `2^n` by design. The caller bounds `n`.

#[cfg(test)]
mod test;

/// Depth-first include/exclude decision tree over indices `0..n`, using the native
/// call stack. At each index the include branch is explored first, so the full
/// sequence is emitted first and the empty subset last.
pub fn subsets_recursive<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let mut output = Vec::with_capacity(1 << input.len());
    let mut current = Vec::new();
    collect_from(input, &mut current, 0, &mut output);
    output
}

fn collect_from<T: Clone>(
    input: &[T],
    current: &mut Vec<T>,
    idx: usize,
    output: &mut Vec<Vec<T>>,
) {
    if idx == input.len() {
        output.push(current.clone());
        return;
    }

    current.push(input[idx].clone());
    collect_from(input, current, idx + 1, output);
    current.pop();
    collect_from(input, current, idx + 1, output);
}

/// The same decision tree as [`subsets_recursive()`], simulated without native
/// recursion: an explicit LIFO stack of `(index, partial_selection)` entries. An
/// entry popped at the terminal index emits its selection as a completed subset.
pub fn subsets_stack<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let mut output = Vec::with_capacity(1 << input.len());

    let mut stack: Vec<(usize, Vec<T>)> = vec![(0, vec![])];
    while let Some((idx, mut current)) = stack.pop() {
        if idx == input.len() {
            output.push(current);
            continue;
        }

        /* Exclude-entry below, include-entry on top. */
        stack.push((idx + 1, current.clone()));
        current.push(input[idx].clone());
        stack.push((idx + 1, current));
    }

    output
}

/// Iterative doubling: start from the lone empty subset; for each element, extend a
/// copy of every subset accumulated so far by that element. At each step the subsets
/// without the newest element form a contiguous block before their extended
/// counterparts.
pub fn subsets_doubling<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let mut output = Vec::with_capacity(1 << input.len());
    output.push(vec![]);

    for elem in input {
        for i in 0..output.len() {
            let mut extended = output[i].clone();
            extended.push(elem.clone());
            output.push(extended);
        }
    }

    output
}
