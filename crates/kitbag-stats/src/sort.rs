/// Sort `values` in ascending order using insertion sort.
///
/// Returns a new vector; the caller's slice is only borrowed, so it is left
/// untouched. Elements are shifted only past strictly greater neighbours,
/// which keeps equal values in their original relative order.
///
/// O(n²) in the worst case and O(n) for already-sorted input. Intended for
/// the short sequences typed in at the prompt.
pub fn insertion_sort(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();

    for i in 1..sorted.len() {
        let key = sorted[i];
        let mut j = i;

        // Shift greater elements one slot to the right
        while j > 0 && sorted[j - 1] > key {
            sorted[j] = sorted[j - 1];
            j -= 1;
        }

        sorted[j] = key;
    }

    sorted
}
