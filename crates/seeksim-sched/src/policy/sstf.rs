use seeksim_core::types::Cylinder;

/// Shortest seek time first.
///
/// Greedy walk over an immutable snapshot of the queue with a visited mask:
/// at each step the closest unvisited request wins, ties going to the lower
/// cylinder. O(n²) in the queue length.
pub fn sstf(requests: &[Cylinder], head: Cylinder) -> Vec<Cylinder> {
    let mut visited = vec![false; requests.len()];
    let mut seq = Vec::with_capacity(requests.len() + 1);
    seq.push(head);

    let mut cur = head;
    for _ in 0..requests.len() {
        let next = requests
            .iter()
            .enumerate()
            .filter(|(i, _)| !visited[*i])
            .min_by_key(|&(_, &r)| (r.abs_diff(cur), r))
            .map(|(i, _)| i);

        let Some(i) = next else { break };
        visited[i] = true;
        cur = requests[i];
        seq.push(cur);
    }
    seq
}
