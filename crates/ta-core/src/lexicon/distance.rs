/// Levenshtein edit distance over chars; insertion, deletion and
/// substitution each cost 1.
///
/// Rolling two-row form of the `(n+1) x (m+1)` table: `prev[j]` holds
/// `table[i-1][j]` while `cur` fills `table[i]`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut cur = vec![0; a.len() + 1];

    for (i, &bc) in b.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &ac) in a.iter().enumerate() {
            cur[j + 1] = if ac == bc {
                prev[j]
            } else {
                1 + prev[j].min(cur[j]).min(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[a.len()]
}
