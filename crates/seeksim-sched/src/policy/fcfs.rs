use seeksim_core::types::Cylinder;

/// First come, first served: the queue as submitted.
pub fn fcfs(requests: &[Cylinder], head: Cylinder) -> Vec<Cylinder> {
    let mut seq = Vec::with_capacity(requests.len() + 1);
    seq.push(head);
    seq.extend_from_slice(requests);
    seq
}
